//! Text cleanup for music metadata using ordered regex rules.
//!
//! # Table of contents
//! * [Description](#description)
//! * [Rule tables](#rule-tables)
//! * [Tag trait](#tag-trait)
//! * [Implementing Tag trait](#implementing-tag-trait)
//! * [Punctuation](#punctuation)
//! * [Copyright notices](#copyright-notices)
//! * [CLI tool](#cli-tool)
//! * [Feature flags](#feature-flags)
//!
//! # Description
//!
//! Provides ordered substitution rules and two tools built on top of them: a guesser that turns
//! ASCII punctuation in titles into proper Unicode punctuation, and a parser extracting rights
//! holders from copyright notices.
//!
//! # Rule tables
//!
//! [`Rule`] is a pair of [`pattern::Pattern`] (regex or exact substring) and [`Replacement`]. Rules are
//! applied one after another, each one replaces all of its non-overlapping matches in the output
//! of the previous one. [`transform`] runs a slice of rules, [`RuleTable`] owns them.
//!
//! [`RuleTable::extend`] merges two tables: rules with a pattern already present replace the
//! replacement in place, others are appended. This is how locale specific punctuation is layered on top of the
//! default rules.
//!
//! With `deserialize` feature tables can be read from any serde format:
//!
//! ```ron
//! [
//!     (Regex(r"(\d+)-(\d+)"), {"Literal": "$1–$2"}),
//!     (Literal("..."), {"Literal": "…"}),
//!     (Regex(r"\s*\(bonus\)"), {"Delete": ()}),
//! ]
//! ```
//!
//! See `demos` folder for more.
//!
//! # Tag trait
//!
//! [`Tag`] produces replacement for a single match. Default tags are:
//!
//! * [`tag_impls::Literal`] puts given string, expanding `$1`, `${1}` and `${name}` group
//!   references
//! * [`tag_impls::Delete`] removes match
//!
//! Rules can also call a plain function with the match instead of a tag, see [`Rule::callback`].
//! Such rules are not deserializable.
//!
//! # Implementing Tag trait
//!
//! `Upper` uppercases match:
//!
//! ```rust
//! use std::borrow::Cow;
//!
//! use mbtext::{Match, RuleTable, Tag};
//!
//! // Deserialize is only required with `deserialize` crate feature
//! #[derive(Clone, Debug, serde::Deserialize)]
//! pub struct Upper;
//!
//! // `typetag` is only required with `deserialize` crate feature
//! #[typetag::deserialize]
//! impl Tag for Upper {
//!     fn generate<'tag, 'inp: 'tag>(&'tag self, m: &Match<'inp>) -> Cow<'tag, str> {
//!         m.get_match().to_uppercase().into()
//!     }
//! }
//!
//! let table = ron::from_str::<RuleTable>(r#"[(Regex(r"\bdj\b"), {"Upper": ()})]"#)
//!     .expect("table did not parse");
//!
//! assert_eq!(table.apply("dj Shadow"), "DJ Shadow");
//! ```
//!
//! # Punctuation
//!
//! [`guess_unicode_punctuation`] replaces quotes, apostrophes, primes, ellipses, hyphens and
//! dashes. Quotes follow the conventions of given language (English, French, German, Japanese),
//! see [`Locale`]. [`guess_unicode_punctuation_preserving_markup`] does the same for wiki-style
//! text without touching links, URLs and bold/italic markup.
//!
//! # Copyright notices
//!
//! [`parse_copyright_notice`] finds `©`/`℗` statements along with licensing and distribution
//! statements and returns one [`CopyrightItem`] per name.
//!
//! # CLI tool
//!
//! You can run CLI tool by enabling `cli` feature: `cargo run --features=cli -- --help`.
//!
//! `echo "Rock 'n' Roll - 1965-1972" | cargo run --features=cli -- punctuation` prints
//! `Rock ’n’ Roll – 1965–1972`.
//!
//! # Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `deserialize` | enables deserialization for [`Tag`] trait and [`RuleTable`] | yes
//! `serde` | enables serialization for [`CopyrightItem`] | yes, through `deserialize`
//! `cli` | required to run CLI tool | no

mod copyright;
mod locale;
mod markup;
mod r#match;
mod punctuation;
mod rule;
mod table;
mod tag;

#[cfg(feature = "deserialize")]
mod deserialize;

pub mod pattern;
pub mod tag_impls;

pub use copyright::{parse_copyright_notice, CopyrightItem, Year};
pub use locale::{Locale, UnknownLocale};
pub use markup::guess_unicode_punctuation_preserving_markup;
pub use punctuation::{guess_unicode_punctuation, punctuation_rules_for_language};
pub use r#match::Match;
pub use rule::{transform, Callback, ReplaceFn, Replacement, Rule};
pub use table::RuleTable;
pub use tag::Tag;

//! Extracts rights holders from free-form copyright notices.
//!
//! Parsing is best effort. Notices are too irregular for a complete grammar, so fragments which
//! match nothing are skipped while the rest of the text is still scanned.

use std::sync::OnceLock;

use crate::{
    pattern::Pattern,
    rule::Rule,
    table::RuleTable,
    tag_impls::{Delete, Literal},
    Match,
};

/// Year(s) a copyright applies to
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Year {
    Single(String),
    /// Several years explicitly given for the same owner, in order of appearance
    Multiple(Vec<String>),
}

impl Year {
    fn from_list(mut years: Vec<String>) -> Option<Self> {
        match years.len() {
            0 => None,
            1 => years.pop().map(Year::Single),
            _ => Some(Year::Multiple(years)),
        }
    }
}

/// Rights statement or licensing relationship found in a notice
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CopyrightItem {
    /// Rights holder or licensed party
    pub name: String,
    /// Normalized markers: `©`, `℗`, `licensed from`, `licensed to`, `distributed by`,
    /// `marketed by`, `manufactured by`
    pub types: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub year: Option<Year>,
}

// candidate names, suffixes keep their trailing period: "Foo Inc.", "Bar Co. KG", "Baz A.E."
const NAMES: &str = r"(?P<names>.+?(?:,?\s(?:LLC|LLP|(?:Inc|Ltd|Co)\.(?:\sKG)?|(?:\p{Lu}\.){2,}))?)";
// end of string, comma, semicolon, next notice, end of sentence or "under license". A period
// after a company suffix or initialism belongs to the name
const NAMES_END: &str = r"(?=,|;|\s*[©℗]|(?<!\bInc)(?<!\bLtd)(?<!\bCo)(?<!\p{Lu}\.\p{Lu})\.(?:\s|$)|(?<=\.)\s|\sunder\s|$)";

fn pattern(source: &str) -> Pattern {
    Pattern::regex(source).unwrap_or_else(|err| panic!("built-in copyright pattern: {err}"))
}

fn rule(pattern: &str, template: &str) -> Rule {
    Rule::template(pattern, template)
        .unwrap_or_else(|err| panic!("built-in copyright rule: {err}"))
}

fn normalization_rules() -> &'static RuleTable {
    static RULES: OnceLock<RuleTable> = OnceLock::new();

    RULES.get_or_init(|| {
        RuleTable::new(vec![
            rule(r"(?i)\(C\)", "©"),
            rule(r"(?i)\(P\)", "℗"),
            // guillemets some stores put around the whole notice
            rule(r"«(.+?)»", "$1"),
            // region specific copyrights collapse into two names
            rule(r"for (.+?) and (.+?) for the world outside \1", "/ $2"),
            // ℗ under license from ... is not a phonographic copyright
            Rule::new(pattern(r"(?i)℗\s*(?=under\s)"), Delete::new_boxed()),
        ])
    })
}

fn copyright_pattern() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();

    PATTERN.get_or_init(|| {
        pattern(&format!(
            r"(?im)(?P<types>[©℗](?:\s*[&+]?\s*[©℗])?)(?:[^;©℗\d]+;)?\s*(?P<years>[0-9]{{4}}(?:\s*[,&/+]\s*[0-9]{{4}})*)?(?:[^,.©℗]*\sby|\sfor|\sthis\scompilation)?\s+{NAMES}{NAMES_END}"
        ))
    })
}

fn legal_info_pattern() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();

    PATTERN.get_or_init(|| {
        pattern(&format!(
            r"(?im)(?P<types>licen[sc]ed?\s(?:to|from)|(?:distributed|marketed|manufactured)(?:\s+(?:and|&)\s+(?:distributed|marketed|manufactured))?\s+by)\s+{NAMES}{NAMES_END}"
        ))
    })
}

fn name_separator() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();

    // "A/S" is a company form, not two names
    PATTERN.get_or_init(|| pattern(r"/(?=\s|[\p{L}\d]{2})"))
}

fn year_separator() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();

    PATTERN.get_or_init(|| pattern(r"\s*[,&/+]\s*"))
}

fn type_separator() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();

    PATTERN.get_or_init(|| pattern(r"(?i)\s+(?:and|&)\s+"))
}

fn boilerplate() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();

    // "A Virgin EMI Records Release" credits the label of the release itself
    PATTERN.get_or_init(|| pattern(r"(?i)^an?\s.+\srelease$"))
}

fn type_rules() -> &'static RuleTable {
    static RULES: OnceLock<RuleTable> = OnceLock::new();

    RULES.get_or_init(|| {
        RuleTable::new(vec![
            Rule::new(pattern(r"licen[sc]ed?"), Literal::new_boxed("licensed")),
            rule(r"(distributed|marketed|manufactured)(?:\s+by)?", "$1 by"),
        ])
    })
}

fn clean_type(raw: &str) -> String {
    type_rules()
        .apply(raw.trim().to_lowercase().as_str())
        .into_owned()
}

fn split_names<'a>(m: &Match<'a>) -> Vec<&'a str> {
    name_separator()
        .split(m.name("names").unwrap_or_default())
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn copyright_items(text: &str, items: &mut Vec<CopyrightItem>) {
    for m in copyright_pattern().matches(text) {
        let mut types: Vec<String> = Vec::new();
        for symbol in m.name("types").unwrap_or_default().chars() {
            if matches!(symbol, '©' | '℗') {
                let symbol = clean_type(&symbol.to_string());
                if !types.contains(&symbol) {
                    types.push(symbol);
                }
            }
        }

        let years = m.name("years").map_or_else(Vec::new, |years| {
            year_separator()
                .split(years)
                .into_iter()
                .map(str::to_owned)
                .collect()
        });
        let year = Year::from_list(years);

        for name in split_names(&m) {
            if boilerplate().is_match(name) {
                log::debug!("ignoring release boilerplate {name:?}");
                continue;
            }

            items.push(CopyrightItem {
                name: name.to_owned(),
                types: types.clone(),
                year: year.clone(),
            });
        }
    }
}

fn legal_info_items(text: &str, items: &mut Vec<CopyrightItem>) {
    for m in legal_info_pattern().matches(text) {
        let types: Vec<String> = type_separator()
            .split(m.name("types").unwrap_or_default())
            .into_iter()
            .map(clean_type)
            .collect();

        for name in split_names(&m) {
            for legal_type in &types {
                items.push(CopyrightItem {
                    name: name.to_owned(),
                    types: vec![legal_type.clone()],
                    year: None,
                });
            }
        }
    }
}

/// Finds copyright and licensing statements in text
///
/// Copyright items come first, then licensing and distribution items, each group in order of
/// appearance. Every name gets its own item. Duplicates are kept, text without notices gives an
/// empty list
///
/// ```
/// use mbtext::{parse_copyright_notice, CopyrightItem, Year};
///
/// assert_eq!(
///     parse_copyright_notice("(P) 2012 Shady Records"),
///     [CopyrightItem {
///         name: "Shady Records".to_owned(),
///         types: vec!["℗".to_owned()],
///         year: Some(Year::Single("2012".to_owned())),
///     }]
/// );
/// ```
pub fn parse_copyright_notice(text: &str) -> Vec<CopyrightItem> {
    let text = normalization_rules().apply(text);

    let mut items = Vec::new();

    copyright_items(&text, &mut items);
    legal_info_items(&text, &mut items);

    items
}

//! Keeps wiki markup intact while guessing punctuation.
//!
//! Link targets (`[url]`, `[url|label]`, `[entity:id|label]`) and bare `scheme://` URLs are Base64
//! encoded between marker characters, bold (`'''`) and italic (`''`) delimiters are swapped for
//! placeholder characters. Punctuation rules never match any of these, everything is restored
//! afterwards.

use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    punctuation::rules_for_locale,
    rule::Rule,
    table::RuleTable,
    Match,
};

const BOLD: &str = "\u{E000}";
const ITALIC: &str = "\u{E001}";
const ENCODED_START: &str = "\u{E002}";
const ENCODED_END: &str = "\u{E003}";

fn rule(pattern: &str, name: &'static str, function: fn(&Match<'_>) -> String) -> Rule {
    Rule::callback(pattern, name, function)
        .unwrap_or_else(|err| panic!("built-in markup rule: {err}"))
}

fn literal(text: &str, replacement: &str) -> Rule {
    Rule::literal(text, replacement).unwrap_or_else(|err| panic!("built-in markup rule: {err}"))
}

fn encode(text: &str) -> String {
    format!("{ENCODED_START}{}{ENCODED_END}", STANDARD.encode(text))
}

fn encode_link_target(m: &Match<'_>) -> String {
    format!(
        "[{}{}]",
        encode(m.group(1).unwrap_or_default()),
        m.group(2).unwrap_or_default()
    )
}

fn encode_url(m: &Match<'_>) -> String {
    format!(
        "{}{}",
        m.group(1).unwrap_or_default(),
        encode(m.group(2).unwrap_or_default())
    )
}

fn decode(m: &Match<'_>) -> String {
    let encoded = m.group(1).unwrap_or_default();

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|err| err.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|err| err.to_string()));

    match decoded {
        Ok(decoded) => decoded,
        Err(err) => {
            log::warn!("could not restore encoded markup {encoded:?}: {err}");
            m.get_match().to_owned()
        }
    }
}

fn escape_rules() -> &'static RuleTable {
    static RULES: OnceLock<RuleTable> = OnceLock::new();

    RULES.get_or_init(|| {
        RuleTable::new(vec![
            // only targets that look like links, plain bracketed text stays subject to punctuation
            rule(
                r"\[([^\[\]|\s]*[:/][^\[\]|\s]*)(\|[^\[\]]*)?\]",
                "encode link target",
                encode_link_target,
            ),
            rule(
                r"(?i)([a-z][a-z0-9+.\-]*://)([^\s\[\]|]+)",
                "encode url",
                encode_url,
            ),
            literal("'''", BOLD),
            literal("''", ITALIC),
        ])
    })
}

fn restore_rules() -> &'static RuleTable {
    static RULES: OnceLock<RuleTable> = OnceLock::new();

    RULES.get_or_init(|| {
        RuleTable::new(vec![
            literal(ITALIC, "''"),
            literal(BOLD, "'''"),
            rule(
                &format!("{ENCODED_START}([A-Za-z0-9+/=]*){ENCODED_END}"),
                "decode",
                decode,
            ),
        ])
    })
}

/// Makes links, URLs and bold/italic delimiters inert for punctuation rules
pub fn escape_markup(text: &str) -> String {
    escape_rules().apply(text).into_owned()
}

/// Reverses [`escape_markup`]
pub fn restore_markup(text: &str) -> String {
    restore_rules().apply(text).into_owned()
}

/// Same as [`guess_unicode_punctuation`](crate::guess_unicode_punctuation) but leaves link
/// targets, URLs and bold/italic markup untouched
///
/// Input must not contain characters from the U+E000..=U+E003 private use range
pub fn guess_unicode_punctuation_preserving_markup(text: &str, locale: Option<&str>) -> String {
    let escaped = escape_markup(text);

    restore_markup(&rules_for_locale(locale).apply(&escaped))
}

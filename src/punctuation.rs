//! Guesses Unicode punctuation from its ASCII approximations.
//!
//! An ASCII `'` may be an apostrophe, a single quote or a prime, `-` may be a hyphen, a dash or a
//! date separator. Rules look at the surroundings to decide and run in a fixed order: quotes before
//! apostrophes, dates and ranges before the remaining hyphens.

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::{locale::Locale, rule::Rule, table::RuleTable, Match};

/// Double quoted text enclosed by anything but letters and digits
pub(crate) const DOUBLE_QUOTED: &str = r#"(?<![\p{L}\d])"(.+?)"(?![\p{L}\d])"#;
/// Single quoted text enclosed by anything but letters and digits
pub(crate) const SINGLE_QUOTED: &str = r"(?<![\p{L}\d])'(.+?)'(?![\p{L}\d])";

const BASE_RULES: &[(&str, &str)] = &[
    // quoted text
    (DOUBLE_QUOTED, "“$1”"),
    // 'n' as in "Rock 'n' Roll" is not a quotation
    (r"(?i)(?<![\p{L}\d])'(n)'(?![\p{L}\d])", "’$1’"),
    (SINGLE_QUOTED, "‘$1’"),
    // primes: 12″, 3′42″ but not 70’s
    (r#"(\d+)""#, "$1″"),
    (r"(\d+)'(\d+)", "$1′$2"),
    // everything else is an apostrophe
    ("'", "’"),
    // exactly three dots
    (r"(?<!\.)\.{3}(?!\.)", "…"),
    (" - ", " – "),
];

// ISO 8601 calendar dates which are not part of a longer group of digits
const ISO_DATE: &str = r"(?<!\d)(?<!\d-)[0-9]{4}-[0-9]{2}(?:-[0-9]{2})?(?!\w|-\d)";

const TRAILING_RULES: &[(&str, &str)] = &[
    // en dash for ranges where it means "to", 1965–1972
    (r"(\d+)-(\d+)", "$1–$2"),
    (r"(?<=\S)-(?=\S)", "‐"),
];

/// Replacements for the quotation rules and rules appended after the base ones
struct Conventions {
    quotes: Option<(&'static str, &'static str)>,
    extra: &'static [(&'static str, &'static str)],
}

fn conventions(locale: Locale) -> Conventions {
    match locale {
        Locale::English => Conventions {
            quotes: None,
            extra: &[],
        },
        Locale::French => Conventions {
            quotes: Some(("« $1 »", "‹ $1 ›")),
            extra: &[],
        },
        Locale::German => Conventions {
            quotes: Some(("„$1“", "‚$1‘")),
            // abbreviated compound words: Ein- und Ausgang
            extra: &[(r"([\p{L}\d]+)-([\s,])|(\s)-([\p{L}\d]+)", "$1$3‐$2$4")],
        },
        Locale::Japanese => Conventions {
            quotes: Some(("「$1」", "『$1』")),
            // hyphens used as brackets around subtitles
            extra: &[(r"(?<![\p{L}\d])-(.+?)-(?![\p{L}\d])", "–$1–")],
        },
    }
}

fn template_rule(pattern: &str, template: &str) -> Rule {
    Rule::template(pattern, template)
        .unwrap_or_else(|err| panic!("built-in punctuation rule: {err}"))
}

fn callback_rule(pattern: &str, name: &'static str, function: fn(&Match<'_>) -> String) -> Rule {
    Rule::callback(pattern, name, function)
        .unwrap_or_else(|err| panic!("built-in punctuation rule: {err}"))
}

fn is_valid_date(date: &str) -> bool {
    let mut parts = date.split('-');

    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return false;
    };
    let day = parts.next().unwrap_or("01");

    match (year.parse(), month.parse(), day.parse()) {
        (Ok(year), Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day).is_some(),
        _ => false,
    }
}

fn hyphenate_date(m: &Match<'_>) -> String {
    let potential_date = m.get_match();

    // 1989-90 has the shape of a date but is a range
    if is_valid_date(potential_date) {
        potential_date.replace('-', "‐")
    } else {
        potential_date.to_owned()
    }
}

fn figure_dashes(m: &Match<'_>) -> String {
    m.get_match().replace('-', "‒")
}

fn build_base_rules() -> RuleTable {
    let mut rules: Vec<Rule> = BASE_RULES
        .iter()
        .map(|(pattern, template)| template_rule(pattern, template))
        .collect();

    rules.push(callback_rule(ISO_DATE, "hyphenate date", hyphenate_date));
    // three or more groups of digits, two groups may be a range
    rules.push(callback_rule(
        r"\d+(?:-\d+){2,}",
        "figure dashes",
        figure_dashes,
    ));
    rules.extend(
        TRAILING_RULES
            .iter()
            .map(|(pattern, template)| template_rule(pattern, template)),
    );

    RuleTable::new(rules)
}

fn build_rules(locale: Option<Locale>) -> RuleTable {
    let base = shared_rules(None);

    let Some(locale) = locale else {
        return base.clone();
    };

    let conventions = conventions(locale);

    let mut overrides = Vec::new();
    if let Some((double, single)) = conventions.quotes {
        overrides.push(template_rule(DOUBLE_QUOTED, double));
        overrides.push(template_rule(SINGLE_QUOTED, single));
    }
    overrides.extend(
        conventions
            .extra
            .iter()
            .map(|(pattern, template)| template_rule(pattern, template)),
    );

    base.extend(RuleTable::new(overrides))
}

/// Compiled tables, built once per locale and never modified afterwards
fn shared_rules(locale: Option<Locale>) -> &'static RuleTable {
    static BASE: OnceLock<RuleTable> = OnceLock::new();
    static ENGLISH: OnceLock<RuleTable> = OnceLock::new();
    static FRENCH: OnceLock<RuleTable> = OnceLock::new();
    static GERMAN: OnceLock<RuleTable> = OnceLock::new();
    static JAPANESE: OnceLock<RuleTable> = OnceLock::new();

    let cell = match locale {
        None => return BASE.get_or_init(build_base_rules),
        Some(Locale::English) => &ENGLISH,
        Some(Locale::French) => &FRENCH,
        Some(Locale::German) => &GERMAN,
        Some(Locale::Japanese) => &JAPANESE,
    };

    cell.get_or_init(|| build_rules(locale))
}

pub(crate) fn rules_for_locale(locale: Option<&str>) -> &'static RuleTable {
    shared_rules(Locale::resolve(locale))
}

/// Returns a copy of the punctuation rules for given locale. Unknown or missing locale gives the
/// default (English) rules
///
/// Returned table is owned by the caller, modifying it does not affect other calls
pub fn punctuation_rules_for_language(locale: Option<&str>) -> RuleTable {
    rules_for_locale(locale).clone()
}

/// Replaces ASCII quotes, apostrophes, ellipses, hyphens and dashes with matching Unicode
/// punctuation
///
/// Idempotent: rules only match ASCII characters and never produce them
///
/// ```
/// use mbtext::guess_unicode_punctuation;
///
/// assert_eq!(guess_unicode_punctuation("Rock 'n' Roll", None), "Rock ’n’ Roll");
/// assert_eq!(guess_unicode_punctuation("\"Live\" 1965-1972", Some("de")), "„Live“ 1965–1972");
/// ```
pub fn guess_unicode_punctuation(text: &str, locale: Option<&str>) -> String {
    rules_for_locale(locale).apply(text).into_owned()
}

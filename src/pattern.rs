use std::{error::Error, fmt, sync::Arc};

use fancy_regex::Regex;

use crate::Match;

/// Left half of a substitution rule
///
/// Both kinds compile to a regex, a literal is escaped first so it matches as an exact substring.
/// Cloning is cheap, compiled regex is shared
#[derive(Clone)]
pub struct Pattern {
    source: String,
    kind: PatternKind,
    regex: Arc<Regex>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Regex,
    Literal,
}

// skips compiled program in debug output
#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match self.kind {
            PatternKind::Regex => "Regex",
            PatternKind::Literal => "Literal",
        })
        .field(&self.source)
        .finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.source == other.source
    }
}

impl Pattern {
    /// Compiles regex. Flags are given inline: `(?i)`, `(?m)`, `(?s)`. Unicode classes are always
    /// enabled, lookaround and backreferences are supported
    pub fn regex(source: &str) -> Result<Self, CreationError> {
        let regex = Regex::new(source).map_err(|err| CreationError::BadRegex {
            pattern: source.to_owned(),
            source: err,
        })?;

        Ok(Self {
            source: source.to_owned(),
            kind: PatternKind::Regex,
            regex: Arc::new(regex),
        })
    }

    /// Matches exact substring
    pub fn literal(text: &str) -> Result<Self, CreationError> {
        if text.is_empty() {
            return Err(CreationError::EmptyLiteral);
        }

        let escaped = fancy_regex::escape(text);
        let regex = Regex::new(&escaped).map_err(|err| CreationError::BadRegex {
            pattern: text.to_owned(),
            source: err,
        })?;

        Ok(Self {
            source: text.to_owned(),
            kind: PatternKind::Literal,
            regex: Arc::new(regex),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Tests whether pattern matches anywhere in text. Runtime failures count as no match
    pub fn is_match(&self, text: &str) -> bool {
        match self.regex.is_match(text) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("pattern {:?} failed on {text:?}: {err}", self.source);
                false
            }
        }
    }

    /// Visits every non-overlapping match from left to right
    ///
    /// Stops at the first runtime failure (backtracking limit) and returns it
    pub fn for_each_match<'a, F>(&self, text: &'a str, mut f: F) -> Result<(), fancy_regex::Error>
    where
        F: FnMut(Match<'a>),
    {
        for captures in self.regex.captures_iter(text) {
            f(Match::new(captures?, text));
        }

        Ok(())
    }

    /// Collects every non-overlapping match, empty on runtime failure
    pub fn matches<'a>(&self, text: &'a str) -> Vec<Match<'a>> {
        let mut found = Vec::new();

        if let Err(err) = self.for_each_match(text, |m| found.push(m)) {
            log::warn!("pattern {:?} failed on {text:?}: {err}", self.source);
            found.clear();
        }

        found
    }

    /// Splits text around matches, like [`str::split`]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut last = 0;

        for m in self.matches(text) {
            let range = m.get_range();
            // empty match at the very start would produce a leading empty part
            if range.is_empty() && range.start == 0 {
                continue;
            }

            parts.push(&text[last..range.start]);
            last = range.end;
        }

        parts.push(&text[last..]);

        parts
    }
}

#[derive(Debug)]
pub enum CreationError {
    BadRegex {
        pattern: String,
        source: fancy_regex::Error,
    },
    EmptyLiteral,
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::BadRegex { pattern, source } => {
                write!(f, "invalid pattern {pattern:?}: {source}")
            }
            CreationError::EmptyLiteral => write!(f, "literal pattern must not be empty"),
        }
    }
}

impl Error for CreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CreationError::BadRegex { source, .. } => Some(source),
            CreationError::EmptyLiteral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_is_escaped() {
        let pattern = Pattern::literal("(C)").unwrap();

        assert!(pattern.is_match("© is (C)"));
        assert!(!pattern.is_match("C"));
        assert_eq!(pattern.kind(), PatternKind::Literal);
    }

    #[test]
    fn empty_literal_rejected() {
        assert!(matches!(
            Pattern::literal(""),
            Err(CreationError::EmptyLiteral)
        ));
    }

    #[test]
    fn bad_regex_reports_pattern() {
        let err = Pattern::regex("(unclosed").unwrap_err();

        assert!(err.to_string().contains("(unclosed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn lookaround_supported() {
        let pattern = Pattern::regex(r"(?<![\p{L}\d])'(.+?)'(?![\p{L}\d])").unwrap();

        assert!(pattern.is_match("'quoted'"));
        assert!(pattern.is_match("«'цитата'»"));
        assert!(!pattern.is_match("rock'n'roll"));
    }

    #[test]
    fn matches_are_in_order() {
        let pattern = Pattern::regex(r"\d{4}").unwrap();
        let found: Vec<_> = pattern
            .matches("℗ 2012, © 2014")
            .iter()
            .map(|m| m.get_match())
            .collect();

        assert_eq!(found, ["2012", "2014"]);
    }

    #[test]
    fn split() {
        let pattern = Pattern::regex(r"\s*[,&/+]\s*").unwrap();

        assert_eq!(
            pattern.split("2014, 2017 & 2018/2019"),
            ["2014", "2017", "2018", "2019"]
        );
        assert_eq!(pattern.split("2014"), ["2014"]);
    }

    #[test]
    fn equality_ignores_compiled_program() {
        assert_eq!(Pattern::regex("a+").unwrap(), Pattern::regex("a+").unwrap());
        assert_ne!(Pattern::regex("a+").unwrap(), Pattern::literal("a+").unwrap());
    }
}

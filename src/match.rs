use std::ops::Range;

use fancy_regex::{Captures, Expander};

/// Holds [`fancy_regex::Captures`] and full input
#[derive(Debug)]
pub struct Match<'a> {
    pub(crate) captures: Captures<'a>,
    pub(crate) input: &'a str,
}

impl<'a> Match<'a> {
    pub fn new(captures: Captures<'a>, input: &'a str) -> Self {
        Self { captures, input }
    }

    /// Returns full match range (regex group 0)
    #[inline]
    pub fn get_range(&self) -> Range<usize> {
        // group 0 is present for every Captures produced by a successful search
        self.captures.get(0).map_or(0..0, |m| m.start()..m.end())
    }

    /// Returns full match (regex group 0)
    #[inline]
    pub fn get_match(&self) -> &'a str {
        &self.input[self.get_range()]
    }

    /// Returns capture group by index. Groups which did not participate in the match are `None`
    #[inline]
    pub fn group(&self, i: usize) -> Option<&'a str> {
        self.captures.get(i).map(|m| m.as_str())
    }

    /// Returns named capture group, `None` if it does not exist or did not participate
    #[inline]
    pub fn name(&self, name: &str) -> Option<&'a str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    pub fn get_captures(&self) -> &Captures<'a> {
        &self.captures
    }

    pub fn get_input(&self) -> &'a str {
        self.input
    }

    /// Uses regex interpolation syntax to use current match in template.
    ///
    /// `$1`, `${1}` and `${name}` refer to groups, `$$` is a literal dollar sign. Groups that did
    /// not participate expand to an empty string
    #[must_use]
    pub fn interpolate(&self, template: &str) -> String {
        let mut dst = String::new();

        Expander::default().append_expansion(&mut dst, template, &self.captures);

        dst
    }
}

#[cfg(test)]
mod tests {
    use fancy_regex::Regex;

    use super::Match;

    fn first_match<'a>(re: &Regex, input: &'a str) -> Match<'a> {
        let caps = re.captures(input).unwrap().unwrap();

        Match::new(caps, input)
    }

    #[test]
    fn groups() {
        let re = Regex::new(r"(\d+)-(\d+)?(x)?").unwrap();
        let m = first_match(&re, "year 1965-1972");

        assert_eq!(m.get_match(), "1965-1972");
        assert_eq!(m.get_range(), 5..14);
        assert_eq!(m.group(1), Some("1965"));
        assert_eq!(m.group(2), Some("1972"));
        assert_eq!(m.group(3), None);
        assert_eq!(m.group(42), None);
    }

    #[test]
    fn named_groups() {
        let re = Regex::new(r"(?P<first>\w+) (?P<second>\w+)").unwrap();
        let m = first_match(&re, "swap us");

        assert_eq!(m.name("first"), Some("swap"));
        assert_eq!(m.name("third"), None);
        assert_eq!(m.interpolate("${second} ${first}"), "us swap");
    }

    #[test]
    fn interpolation_of_missing_group_is_empty() {
        let re = Regex::new(r"(\w+)-(\s)|(\s)-(\w+)").unwrap();
        let m = first_match(&re, "Ein- und");

        assert_eq!(m.interpolate("$1$3‐$2$4"), "Ein‐ ");
    }

    #[test]
    fn interpolation_escapes_dollar() {
        let re = Regex::new(r"\d+").unwrap();
        let m = first_match(&re, "costs 5");

        assert_eq!(m.interpolate("$$$0"), "$5");
    }
}

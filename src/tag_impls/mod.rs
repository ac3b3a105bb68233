mod literal;

pub use literal::Literal;

use std::borrow::Cow;

use crate::{tag::Tag, Match};

/// Deletes match
///
/// This is a shortcut for [`Literal`] with `""`
#[derive(Clone, Debug)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub struct Delete;

impl Delete {
    #![allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }

    pub fn new_boxed() -> Box<Self> {
        Box::new(Self::new())
    }
}

#[cfg_attr(feature = "deserialize", typetag::deserialize)]
impl Tag for Delete {
    fn generate<'tag, 'inp: 'tag>(&'tag self, _: &Match<'inp>) -> Cow<'tag, str> {
        Cow::Borrowed("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Match;

    use std::borrow::Cow;

    use fancy_regex::Regex;

    fn make_match(pattern: &str) -> Match {
        let re = Regex::new(".+").unwrap();
        let caps = re.captures(pattern).unwrap().unwrap();

        Match::new(caps, pattern)
    }

    fn apply<'a>(tag: &dyn Tag, self_matching_pattern: &'a str) -> Cow<'a, str> {
        tag.generate(&make_match(self_matching_pattern))
            .to_string()
            .into()
    }

    #[test]
    fn delete() {
        let tag = Delete::new();

        assert_eq!(apply(&tag, "bar"), "");
        assert_eq!(apply(&tag, "foo"), "");
    }

    #[test]
    fn literal() {
        let tag = Literal::new_boxed("bar");

        assert_eq!(apply(tag.as_ref(), "foo"), "bar");
        assert_eq!(apply(tag.as_ref(), "bar"), "bar");
    }

    #[test]
    fn literal_templates() {
        let tag = Literal::new_boxed("“$0”");

        assert_eq!(apply(tag.as_ref(), "foo"), "“foo”");
    }

    #[test]
    fn literal_keeps_case() {
        let tag = Literal::new_boxed("bar");

        assert_eq!(apply(tag.as_ref(), "FOO"), "bar");
    }

    #[test]
    fn escaped_dollars() {
        let re = Regex::new(r"(\d+)").unwrap();
        let caps = re.captures("5").unwrap().unwrap();
        let m = Match::new(caps, "5");

        assert_eq!(Literal::new_boxed("$$$1").generate(&m), "$5");
        assert_eq!(Literal::new_boxed("$$").generate(&m), "$");
        assert_eq!(Literal::new_boxed("$$1").generate(&m), "$1");
        assert_eq!(Literal::new_boxed("US$ 5").generate(&m), "US$ 5");
    }

    #[test]
    fn expansion() {
        let swap_words_tag = Literal::new_boxed("$2 $1");

        let two_words_regex = Regex::new(r"(\w+) (\w+)").unwrap();
        let caps = two_words_regex.captures("swap us").unwrap().unwrap();

        assert_eq!(swap_words_tag.generate(&Match::new(caps, "swap us")), "us swap");

        // nonexistent goup results in empty string
        let delete_word_tag = Literal::new_boxed("$nonexistent $2");
        let caps = two_words_regex.captures("DELETE US").unwrap().unwrap();

        assert_eq!(delete_word_tag.generate(&Match::new(caps, "DELETE US")), " US");
    }
}

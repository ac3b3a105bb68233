use std::{borrow::Cow, sync::OnceLock};

use regex_automata::meta::Regex;

use crate::{Match, Tag};

static TEMPLATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Static string
///
/// Acts as regex template when it contains group references (`$1`, `${1}`, `${name}`) or escaped
/// dollar signs (`$$`). Other bodies are returned as is
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize), serde(from = "String"))]
pub struct Literal {
    pub(crate) body: String,
    pub(crate) has_template: bool,
}

impl Literal {
    pub fn new(body: String) -> Self {
        Self {
            // every `$` that interpolation would rewrite, a lone `$` stays as is
            has_template: TEMPLATE_REGEX
                .get_or_init(|| Regex::new(r"\$[$0-9A-Za-z_{]").unwrap())
                .is_match(&body),
            body,
        }
    }

    // reference to simplify tests
    pub fn new_boxed(s: &str) -> Box<Self> {
        Box::new(Self::new(s.to_string()))
    }
}

impl From<String> for Literal {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

#[cfg_attr(feature = "deserialize", typetag::deserialize)]
impl Tag for Literal {
    fn generate<'tag, 'inp: 'tag>(&'tag self, m: &Match<'inp>) -> Cow<'tag, str> {
        if self.has_template {
            m.interpolate(&self.body).into()
        } else {
            Cow::Borrowed(&self.body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_template() {
        assert!(!Literal::new_boxed("hello").has_template);
        assert!(Literal::new_boxed("$hello").has_template);
        assert!(Literal::new_boxed("“$1”").has_template);
        assert!(Literal::new_boxed("hello $$1 world").has_template);
        assert!(Literal::new_boxed("hello $$$1 world").has_template);
        assert!(Literal::new_boxed("hello ${foo} world").has_template);
        assert!(Literal::new_boxed("costs $$").has_template);
        assert!(!Literal::new_boxed("costs 5$").has_template);
        assert!(!Literal::new_boxed("$ 5").has_template);
        assert!(!Literal::new_boxed("…").has_template);
    }
}

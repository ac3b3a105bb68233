use std::borrow::Cow;

use crate::rule::{transform, Rule};

/// Ordered list of rules applied from top to bottom
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Merges own rules with other. Tags for existing patterns are replaced in place while new
    /// ones are placed at the end of resulting table
    #[must_use]
    pub fn extend(&self, other: RuleTable) -> Self {
        let mut existing_rules = self.rules.clone();
        let mut appended_rules = Vec::new();

        'outer: for new_rule in other.rules {
            for existing_rule in &mut existing_rules {
                if existing_rule.pattern == new_rule.pattern {
                    existing_rule.replacement = new_rule.replacement;
                    continue 'outer;
                }
            }

            appended_rules.push(new_rule);
        }

        existing_rules.extend(appended_rules);

        Self::new(existing_rules)
    }

    /// Runs all rules against text
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        transform(text, &self.rules)
    }
}

impl From<Vec<Rule>> for RuleTable {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl IntoIterator for RuleTable {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

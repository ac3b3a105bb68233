use crate::{
    pattern::{CreationError, Pattern},
    rule::Rule,
    table::RuleTable,
    tag::Tag,
};

use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
enum PatternDef {
    Regex(String),
    Literal(String),
}

impl TryFrom<PatternDef> for Pattern {
    type Error = CreationError;

    fn try_from(def: PatternDef) -> Result<Self, Self::Error> {
        match def {
            PatternDef::Regex(source) => Self::regex(&source),
            PatternDef::Literal(text) => Self::literal(&text),
        }
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Pattern, D::Error>
    where
        D: Deserializer<'de>,
    {
        let def: PatternDef = Deserialize::deserialize(deserializer)?;

        Self::try_from(def).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D>(deserializer: D) -> Result<Rule, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (pattern, tag): (Pattern, Box<dyn Tag>) = Deserialize::deserialize(deserializer)?;

        Ok(Self::new(pattern, tag))
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D>(deserializer: D) -> Result<RuleTable, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rules: Vec<Rule> = Deserialize::deserialize(deserializer)?;

        Ok(Self::new(rules))
    }
}

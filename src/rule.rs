use std::{borrow::Cow, fmt};

use crate::{
    pattern::{CreationError, Pattern},
    tag::Tag,
    tag_impls::Literal,
    Match,
};

/// Signature of replacement functions. Receives the match and returns replacement text
pub type ReplaceFn = fn(&Match<'_>) -> String;

/// Computes replacement with a plain function
///
/// Function receives full match and all captured groups through [`Match`]. Not deserializable,
/// two callbacks are equal when their names are
#[derive(Clone)]
pub struct Callback {
    name: &'static str,
    function: ReplaceFn,
}

impl Callback {
    pub fn new(name: &'static str, function: ReplaceFn) -> Self {
        Self { name, function }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, m: &Match<'_>) -> String {
        (self.function)(m)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback").field(&self.name).finish()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Right half of a rule
#[derive(Clone, Debug)]
pub enum Replacement {
    Tag(Box<dyn Tag>),
    Function(Callback),
}

impl PartialEq for Replacement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Replacement::Tag(a), Replacement::Tag(b)) => **a == **b,
            (Replacement::Function(a), Replacement::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl Replacement {
    pub fn generate<'r, 'inp: 'r>(&'r self, m: &Match<'inp>) -> Cow<'r, str> {
        match self {
            Replacement::Tag(tag) => tag.generate(m),
            Replacement::Function(callback) => Cow::Owned(callback.call(m)),
        }
    }
}

/// Maps pattern to replacement
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub(crate) pattern: Pattern,
    pub(crate) replacement: Replacement,
}

impl Rule {
    pub fn new(pattern: Pattern, tag: Box<dyn Tag>) -> Self {
        Self {
            pattern,
            replacement: Replacement::Tag(tag),
        }
    }

    /// Regex rule with template replacement
    pub fn template(pattern: &str, template: &str) -> Result<Self, CreationError> {
        Ok(Self::new(Pattern::regex(pattern)?, Literal::new_boxed(template)))
    }

    /// Regex rule with function replacement
    pub fn callback(
        pattern: &str,
        name: &'static str,
        function: ReplaceFn,
    ) -> Result<Self, CreationError> {
        Ok(Self {
            pattern: Pattern::regex(pattern)?,
            replacement: Replacement::Function(Callback::new(name, function)),
        })
    }

    /// Exact substring rule with literal replacement
    pub fn literal(text: &str, replacement: &str) -> Result<Self, CreationError> {
        Ok(Self::new(
            Pattern::literal(text)?,
            Literal::new_boxed(replacement),
        ))
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    /// Produces string with all non-overlapping matches replaced by replacement output
    ///
    /// Runtime regex failure leaves text untouched
    #[must_use]
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let input = text.as_ref();

        let mut output = String::new();
        let mut last_replacement = 0;
        let mut replaced_any = false;

        let result = self.pattern.for_each_match(input, |m| {
            let range = m.get_range();
            let repl = self.replacement.generate(&m);

            output.push_str(&input[last_replacement..range.start]);
            output.push_str(&repl);

            last_replacement = range.end;
            replaced_any = true;
        });

        if let Err(err) = result {
            log::warn!(
                "skipping rule {:?} for {input:?}: {err}",
                self.pattern.source()
            );
            return text;
        }

        if !replaced_any {
            return text;
        }

        log::trace!("rule {:?} matched {input:?}", self.pattern.source());

        output.push_str(&input[last_replacement..]);

        Cow::Owned(output)
    }
}

/// Applies rules one after another. Each rule replaces all of its matches in the output of
/// previous rule
pub fn transform<'a>(text: &'a str, rules: &[Rule]) -> Cow<'a, str> {
    rules
        .iter()
        .fold(Cow::Borrowed(text), |text, rule| rule.apply(text))
}

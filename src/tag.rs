use std::{borrow::Cow, fmt::Debug};

use dyn_clone::{clone_trait_object, DynClone};

use crate::Match;

/// Receives match and provides replacement
///
/// Implementations must be pure: the same match always produces the same replacement. Returning
/// the matched text unchanged makes the rule a no-op for that match
#[cfg_attr(feature = "deserialize", typetag::deserialize)]
pub trait Tag: DynClone + Debug + Send + Sync {
    /// Select suitable replacement
    fn generate<'tag, 'inp: 'tag>(&'tag self, m: &Match<'inp>) -> Cow<'tag, str>;
}

clone_trait_object!(Tag);

impl PartialEq for dyn Tag {
    fn eq(&self, other: &Self) -> bool {
        // tags do not expose their internals, debug output is the closest thing to structural
        // equality
        format!("{self:?}") == format!("{other:?}")
    }
}

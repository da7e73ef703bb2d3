use crate::model::candidate::ReactionCandidate;
use crate::model::structure::Structure;
use thiserror::Error;

/// Failure classes a rule applier can report.
///
/// The two variants have very different consequences: a resource failure
/// aborts the whole run, while a transformation failure only skips the
/// input combination that triggered it.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The underlying rule database (or one of its family entries) is
    /// missing or malformed. Fatal; not retried.
    #[error("missing or malformed rule resource: {0}")]
    Resource(String),

    /// Applying the family to one input combination failed, e.g. a
    /// template lookup or rate estimation error. Recovered locally by
    /// skipping the combination.
    #[error("rule application failed: {0}")]
    Transformation(String),
}

/// The external rule-application capability.
///
/// Given an ordered tuple of input structures and a family name, returns
/// zero or more reaction candidates. Implementations must be deterministic
/// for identical inputs over a stable rule database; an empty list means
/// no applicable transformation and is not an error.
pub trait RuleApplier {
    type Structure: Structure;

    fn generate(
        &self,
        inputs: &[Self::Structure],
        family: &str,
    ) -> Result<Vec<ReactionCandidate<Self::Structure>>, RuleError>;
}

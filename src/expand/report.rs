use crate::model::label::GenerationLabel;
use crate::model::pool::SpeciesPool;
use crate::model::structure::Structure;

/// Diagnostics for one executed stage.
///
/// Partial failures degrade coverage, never correctness, so they are
/// counted here rather than surfaced as errors. `inserted == 0` is a
/// valid terminal state for a stage, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Rule family the stage applied.
    pub family: String,
    /// Label the stage populated.
    pub output: GenerationLabel,
    /// Rule-applier invocations made (one per input structure or pair).
    pub invocations: usize,
    /// Reaction candidates returned across all invocations.
    pub candidates: usize,
    /// Products newly inserted under the output label.
    pub inserted: usize,
    /// Products already present under the output label.
    pub duplicates: usize,
    /// Products dropped by the excluded-formula filter.
    pub filtered: usize,
    /// Input combinations skipped after a transformation failure.
    pub failures: usize,
}

impl StageReport {
    pub(crate) fn new(family: &str, output: GenerationLabel) -> Self {
        Self {
            family: family.to_string(),
            output,
            invocations: 0,
            candidates: 0,
            inserted: 0,
            duplicates: 0,
            filtered: 0,
            failures: 0,
        }
    }
}

/// The outcome of a full expansion run: the grown pool and one report per
/// configured stage, in execution order.
#[derive(Debug, Clone)]
pub struct Expansion<S: Structure> {
    pub pool: SpeciesPool<S>,
    pub reports: Vec<StageReport>,
}

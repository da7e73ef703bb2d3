//! Error types for pathway expansion.
//!
//! Only two failure classes cross the engine boundary: configuration
//! problems caught before any stage runs, and rule-database resource
//! failures, which are fatal at the point of first use. Per-pair rule
//! application failures never surface here; they are absorbed by the
//! stage loop, logged, and counted in the stage report.

use crate::model::label::GenerationLabel;
use thiserror::Error;

/// Errors that can abort a pathway expansion run.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse the pathway configuration TOML.
    #[error("failed to parse pathway configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configured stage list is structurally invalid.
    ///
    /// Occurs when a stage declares zero or more than two input slots,
    /// an empty slot, or an empty family or output label.
    #[error("invalid pathway configuration: {0}")]
    InvalidConfig(String),

    /// A required rule-database resource is missing or malformed.
    ///
    /// Raised when the rule applier reports a
    /// [`RuleError::Resource`](super::applier::RuleError::Resource); the
    /// run stops at the stage that first touched the broken resource.
    #[error("rule database resource failure in family '{family}' while producing '{output}': {detail}")]
    Resource {
        /// The rule family whose resources failed.
        family: String,
        /// The output label of the stage that was running.
        output: GenerationLabel,
        /// Description of the problem, as reported by the rule applier.
        detail: String,
    },
}

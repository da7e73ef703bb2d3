//! A pure Rust engine for generation-by-generation expansion of
//! low-temperature fuel oxidation reaction networks. Starting from a seeded
//! species pool, it applies configured reaction-family transformation
//! stages to already-discovered species and accumulates the deduplicated
//! products under named generation labels (R, ROO, QOOH, O2QOOH, ...).
//!
//! # Features
//!
//! - **Species pool** — Per-generation, structurally-deduplicated species
//!   sets with idempotent insertion and non-mutating cross-label union
//! - **Declarative stages** — Pathway topologies expressed as an ordered
//!   TOML stage list (input labels, rule family, product selection and
//!   filtering), with the canonical four-stage low-temperature network
//!   built in
//! - **Narrow capability seams** — The rule database, structure registry,
//!   and ML predictors stay external behind small traits, so the engine
//!   runs against stubs in tests
//! - **Thermochemistry facade** — Heat capacity, enthalpy, and entropy
//!   point predictions combined with structure-derived Cp limits
//!
//! # Quick Start
//!
//! The main entry point is the [`expand`] function, which takes a seeded
//! [`SpeciesPool`], an [`ExpandConfig`], and a [`RuleApplier`] and returns
//! the grown pool plus per-stage reports:
//!
//! ```
//! use lowt_pathways::{
//!     expand, ExpandConfig, ReactionCandidate, RuleApplier, RuleError, SpeciesPool, Structure,
//! };
//!
//! // A registry-backed structure stands behind this in production; here a
//! // canonical key carries the identity.
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Species {
//!     key: String,
//!     formula: String,
//! }
//!
//! impl Structure for Species {
//!     fn formula(&self) -> String {
//!         self.formula.clone()
//!     }
//! }
//!
//! // Butane + H has two distinct abstraction sites, each leaving H2 behind.
//! struct Abstraction;
//!
//! impl RuleApplier for Abstraction {
//!     type Structure = Species;
//!
//!     fn generate(
//!         &self,
//!         inputs: &[Species],
//!         family: &str,
//!     ) -> Result<Vec<ReactionCandidate<Species>>, RuleError> {
//!         let has_fuel = inputs.iter().any(|s| s.key == "CCCC");
//!         let has_h = inputs.iter().any(|s| s.key == "[H]");
//!         if family != "H_Abstraction" || !has_fuel || !has_h {
//!             return Ok(Vec::new());
//!         }
//!         Ok(["CCC[CH2]", "CC[CH]C"]
//!             .iter()
//!             .map(|site| {
//!                 ReactionCandidate::new(vec![
//!                     Species { key: site.to_string(), formula: "C4H9".into() },
//!                     Species { key: "[H][H]".into(), formula: "H2".into() },
//!                 ])
//!             })
//!             .collect())
//!     }
//! }
//!
//! let config = ExpandConfig::from_toml(
//!     r#"
//!     [[stages]]
//!     inputs = [["fuel", "H"], ["fuel", "H"]]
//!     family = "H_Abstraction"
//!     output = "R"
//!     select = "all"
//!     exclude_formula = "H2"
//! "#,
//! )?;
//!
//! let mut pool = SpeciesPool::new();
//! pool.insert("fuel", Species { key: "CCCC".into(), formula: "C4H10".into() });
//! pool.insert("H", Species { key: "[H]".into(), formula: "H".into() });
//!
//! let result = expand(pool, &config, &Abstraction)?;
//!
//! // Both radical sites discovered, the H2 byproduct filtered out.
//! assert_eq!(result.pool.len(&"R".into()), 2);
//! assert!(result.pool.get(&"R".into()).iter().all(|s| s.formula() == "C4H9"));
//! # Ok::<(), lowt_pathways::ExpandError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`thermo`] — Thermochemistry estimation over loaded point predictors
//!
//! # Data Types
//!
//! ## Engine State
//!
//! - [`SpeciesPool`] — Deduplicated per-label species sets
//! - [`GenerationLabel`] — Tag naming one discovery generation
//! - [`ReactionCandidate`] — Ordered product list from one rule application
//! - [`Expansion`] / [`StageReport`] — Run outcome and per-stage diagnostics
//!
//! ## Configuration
//!
//! - [`ExpandConfig`] — Ordered stage list for one pathway topology
//! - [`StageConfig`] — Input slots, rule family, output label, product policy
//! - [`ProductSelection`] — First-product vs all-products selection
//!
//! ## Capability Seams
//!
//! - [`Structure`] — Registry-supplied structural identity and formula
//! - [`RuleApplier`] — External rule-application capability
//! - [`thermo::PointPredictor`] / [`thermo::PredictorLoader`] — ML predictors

mod expand;
mod model;

pub mod thermo;

pub use model::candidate::ReactionCandidate;
pub use model::label::GenerationLabel;
pub use model::pool::SpeciesPool;
pub use model::structure::Structure;

pub use expand::{
    default_config, expand, load_config, run_stage, ExpandConfig, Expansion, ProductSelection,
    RuleApplier, RuleError, StageConfig, StageReport,
};

pub use expand::Error as ExpandError;

//! Machine-learned thermochemistry estimation.
//!
//! Wraps three independently loaded point predictors (formation enthalpy,
//! entropy, heat-capacity curve) behind one [`ThermoEstimator`], and
//! augments their predictions with the two analytic heat-capacity limits
//! the structure itself provides. Model loading and the predictors
//! themselves are external capabilities, consumed through
//! [`PredictorLoader`] and [`PointPredictor`].

mod data;
mod error;
mod estimator;

pub use data::{ThermoData, TEMP_GRID, T_MAX, T_MIN};
pub use error::Error;
pub use estimator::{HeatCapacityBounds, PointPredictor, PredictorLoader, ThermoEstimator};

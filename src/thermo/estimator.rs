use super::data::{ThermoData, TEMP_GRID, T_MAX, T_MIN};
use super::error::Error;
use crate::model::structure::Structure;
use std::path::Path;

/// One trained point predictor mapping a structure to a property vector.
///
/// Scalar predictors (enthalpy, entropy) return a single-element vector;
/// the heat-capacity predictor returns one value per [`TEMP_GRID`]
/// temperature. Predictors are stateless once loaded and must tolerate
/// concurrent calls with different structures, hence the `Send + Sync`
/// bound.
pub trait PointPredictor<S: Structure>: Send + Sync {
    fn predict(&self, structure: &S) -> Result<Vec<f64>, Error>;
}

/// Loads a ready point predictor from a named resource path.
///
/// Loading is the only I/O boundary of this module.
pub trait PredictorLoader<S: Structure> {
    type Predictor: PointPredictor<S>;

    fn load(&self, path: &Path) -> Result<Self::Predictor, Error>;
}

/// Structure-derived analytic heat-capacity limits.
///
/// Supplied by the structure registry alongside identity and formula;
/// computed from connectivity, never predicted.
pub trait HeatCapacityBounds {
    /// Zero-temperature heat-capacity limit, J/(mol·K).
    fn cp0(&self) -> f64;
    /// Infinite-temperature heat-capacity limit, J/(mol·K).
    fn cp_inf(&self) -> f64;
}

/// Thermochemistry estimator wrapping three independent point predictors.
#[derive(Debug)]
pub struct ThermoEstimator<P> {
    hf298: P,
    s298: P,
    cp: P,
}

impl<P> ThermoEstimator<P> {
    /// Builds an estimator from already-loaded predictors.
    pub fn new(hf298: P, s298: P, cp: P) -> Self {
        Self { hf298, s298, cp }
    }

    /// Loads all three predictors from their resource paths.
    ///
    /// Any load failure is fatal; no estimator is constructed without its
    /// parameters.
    pub fn load<S, L>(
        loader: &L,
        hf298_path: &Path,
        s298_path: &Path,
        cp_path: &Path,
    ) -> Result<Self, Error>
    where
        S: Structure,
        L: PredictorLoader<S, Predictor = P>,
        P: PointPredictor<S>,
    {
        Ok(Self {
            hf298: loader.load(hf298_path)?,
            s298: loader.load(s298_path)?,
            cp: loader.load(cp_path)?,
        })
    }

    /// Estimates thermodynamic parameters for `structure`.
    ///
    /// Predictions outside the predictors' trained validity range are not
    /// validated here; sanity-checking the outputs is the caller's
    /// responsibility.
    pub fn estimate<S>(&self, structure: &S) -> Result<ThermoData, Error>
    where
        S: Structure + HeatCapacityBounds,
        P: PointPredictor<S>,
    {
        let cp_values = self.cp.predict(structure)?;
        let cp = <[f64; 7]>::try_from(cp_values.as_slice()).map_err(|_| Error::OutputShape {
            expected: TEMP_GRID.len(),
            got: cp_values.len(),
        })?;

        let h298 = scalar(&self.hf298, structure)?;
        let s298 = scalar(&self.s298, structure)?;

        Ok(ThermoData {
            cp,
            h298,
            s298,
            cp0: structure.cp0(),
            cp_inf: structure.cp_inf(),
            t_min: T_MIN,
            t_max: T_MAX,
            comment: "ML Estimation.".to_string(),
        })
    }
}

fn scalar<S, P>(predictor: &P, structure: &S) -> Result<f64, Error>
where
    S: Structure,
    P: PointPredictor<S>,
{
    let values = predictor.predict(structure)?;
    match values.as_slice() {
        [value] => Ok(*value),
        other => Err(Error::OutputShape {
            expected: 1,
            got: other.len(),
        }),
    }
}

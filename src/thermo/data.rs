/// Temperatures (K) at which heat capacities are predicted.
pub const TEMP_GRID: [f64; 7] = [300.0, 400.0, 500.0, 600.0, 800.0, 1000.0, 1500.0];

/// Lower bound (K) of the estimate's validity range.
pub const T_MIN: f64 = 300.0;

/// Upper bound (K) of the estimate's validity range.
pub const T_MAX: f64 = 2000.0;

/// Thermodynamic parameters estimated for one structure.
///
/// Units follow the predictors: heat capacities and entropy in
/// cal/(mol·K), enthalpy in kcal/mol, and the two analytic heat-capacity
/// limits in J/(mol·K). The limits come from the structure itself, not
/// from a predictor, so they hold even when the point predictions are
/// outside their trained validity range.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoData {
    /// Heat capacity at each [`TEMP_GRID`] temperature, cal/(mol·K).
    pub cp: [f64; 7],
    /// Standard enthalpy of formation at 298 K, kcal/mol.
    pub h298: f64,
    /// Standard entropy at 298 K, cal/(mol·K).
    pub s298: f64,
    /// Zero-temperature heat-capacity limit, J/(mol·K).
    pub cp0: f64,
    /// Infinite-temperature heat-capacity limit, J/(mol·K).
    pub cp_inf: f64,
    /// Lower validity bound, K.
    pub t_min: f64,
    /// Upper validity bound, K.
    pub t_max: f64,
    /// Provenance note attached to the estimate.
    pub comment: String,
}

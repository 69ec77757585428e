//! Thermophysical properties of water and aqueous electrolyte solutions.
//!
//! Every property is backed by one or more literature correlations
//! ("sources") registered per property and solute in a [`FormulaRegistry`].
//! A [`PropertyEvaluator`] resolves the source, converts inputs into its
//! native units, flags inputs outside its validity range, and evaluates it.
//! Scalar inputs give scalar outputs and array inputs give arrays of the
//! same length.
//!
//! Two layers are provided:
//!
//! - [`PropertyEvaluator`] methods return [`Evaluated`], which carries the
//!   values along with structured [`RangeWarning`](brine_core::RangeWarning)s.
//! - Free functions use a default evaluator built once per process, log each
//!   range warning with [`tracing::warn!`], and return only the values.
//!
//! ```
//! use brine_props::{SolutionQuery, evaluate_solution_property};
//!
//! let aw = evaluate_solution_property(
//!     &SolutionQuery::new("water activity").solute("NaCl").concentration("m", 6),
//! )?;
//! assert!((aw.as_scalar().unwrap() - 0.76).abs() < 5e-3);
//! # Ok::<(), brine_props::PropertyError>(())
//! ```

mod error;
mod evaluate;
mod extend;
mod formula;
mod formulas;
mod invert;
mod property;
mod registry;
mod solute;

pub mod constants;
pub mod convert;
pub mod units;

use std::sync::LazyLock;

use brine_core::Values;
use tracing::warn;

pub use convert::{MolarityOptions, UnitConverter};
pub use error::{PropertyError, RegistryError};
pub use evaluate::{EngineConfig, Evaluated, PropertyEvaluator, SolutionQuery};
pub use formula::{Correlation, FormulaDescriptor, NativeDomain, Outcome, Registration};
pub use invert::{ConcentrationInversion, Humidity};
pub use property::Property;
pub use registry::FormulaRegistry;
pub use solute::{Ion, Solute};
pub use units::{ConcentrationUnit, Temperature, TemperatureUnit};

static ENGINE: LazyLock<Result<PropertyEvaluator, PropertyError>> =
    LazyLock::new(PropertyEvaluator::standard);

/// The evaluator behind the free functions: built-in correlations and
/// default settings, constructed on first use.
///
/// # Errors
///
/// Returns the construction error if the built-in registry is inconsistent.
pub fn default_engine() -> Result<&'static PropertyEvaluator, PropertyError> {
    ENGINE.as_ref().map_err(Clone::clone)
}

/// Evaluates a pure-water property, e.g. `"vapor pressure"`.
///
/// # Errors
///
/// Fails on unknown property, unit, or source names.
pub fn evaluate_water_property(
    property: &str,
    temperature: impl Into<Values>,
    temperature_unit: &str,
    source: Option<&str>,
) -> Result<Values, PropertyError> {
    let property: Property = property.parse()?;
    let temperature = Temperature::parse(temperature, temperature_unit)?;
    let engine = default_engine()?;
    engine
        .water(property, &temperature, source)
        .map(report)
}

/// Evaluates a solution property.
///
/// # Errors
///
/// See [`PropertyEvaluator::solution`].
pub fn evaluate_solution_property(query: &SolutionQuery) -> Result<Values, PropertyError> {
    default_engine()?.solution(query).map(report)
}

/// Converts concentrations between unit tags (`x`, `w`, `m`, `r`, `c`).
///
/// Matching tags return the input unchanged, whatever the solute.
///
/// # Errors
///
/// Fails on unknown tags or solutes, or if a molarity conversion fails.
pub fn convert_concentration(
    values: impl Into<Values>,
    from: &str,
    to: &str,
    solute: &str,
    temperature: impl Into<Values>,
    temperature_unit: &str,
) -> Result<Values, PropertyError> {
    let temperature = Temperature::parse(temperature, temperature_unit)?;
    default_engine()?
        .convert(&values.into(), from, to, solute, &temperature)
        .map(report)
}

/// Concentrations at which a solution property takes the target values.
///
/// # Errors
///
/// See [`PropertyEvaluator::concentration_from`].
pub fn invert_to_concentration(request: &ConcentrationInversion) -> Result<Values, PropertyError> {
    default_engine()?.concentration_from(request).map(report)
}

/// Dew point temperatures in `temperature_unit`, using the default vapor
/// pressure correlation.
///
/// # Errors
///
/// See [`PropertyEvaluator::dewpoint`].
pub fn invert_to_dewpoint(
    humidity: &Humidity,
    temperature_unit: &str,
) -> Result<Values, PropertyError> {
    default_engine()?
        .dewpoint(humidity, temperature_unit, None)
        .map(report)
}

/// Osmotic pressure (Pa) of the solution described by `query`.
///
/// # Errors
///
/// See [`PropertyEvaluator::osmotic_pressure`].
pub fn osmotic_pressure(query: &SolutionQuery) -> Result<Values, PropertyError> {
    default_engine()?.osmotic_pressure(query).map(report)
}

/// Molal osmotic coefficient of the solution described by `query`.
///
/// # Errors
///
/// See [`PropertyEvaluator::osmotic_coefficient`].
pub fn osmotic_coefficient(query: &SolutionQuery) -> Result<Values, PropertyError> {
    default_engine()?.osmotic_coefficient(query).map(report)
}

/// Saturation concentration of `solute`, in `unit`, with the default source.
///
/// # Errors
///
/// See [`PropertyEvaluator::solubility`].
pub fn solubility(
    solute: &str,
    temperature: impl Into<Values>,
    temperature_unit: &str,
    unit: &str,
) -> Result<Values, PropertyError> {
    let temperature = Temperature::parse(temperature, temperature_unit)?;
    default_engine()?
        .solubility(solute, &temperature, None, unit)
        .map(report)
}

/// Water activity at saturation of `solute`, with the default sources.
///
/// # Errors
///
/// See [`PropertyEvaluator::aw_saturated`].
pub fn aw_saturated(
    solute: &str,
    temperature: impl Into<Values>,
    temperature_unit: &str,
) -> Result<Values, PropertyError> {
    let temperature = Temperature::parse(temperature, temperature_unit)?;
    default_engine()?
        .aw_saturated(solute, &temperature, None, None)
        .map(report)
}

/// Logs every range warning and keeps the values.
fn report(evaluated: Evaluated) -> Values {
    for warning in &evaluated.warnings {
        warn!(
            parameter = %warning.parameter,
            unit = %warning.unit,
            source = %warning.source,
            solute = warning.solute.as_deref().unwrap_or("water"),
            min = warning.range.min,
            max = warning.range.max,
            "{warning}"
        );
    }
    evaluated.value
}

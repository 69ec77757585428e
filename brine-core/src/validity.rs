//! Validity ranges and the non-fatal range checker.
//!
//! Every literature correlation is only endorsed over a bounded temperature
//! and concentration domain. Leaving that domain is not an error: the
//! correlation is still evaluated, but the caller is told which parameter
//! left which range for which source. [`check`] produces that record.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Values;

/// Errors returned when constructing a [`ValidityRange`] at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum RangeError {
    #[error("range bound is not finite: {value}")]
    NotFinite { value: f64 },
    #[error("range is reversed: min {min} > max {max}")]
    Reversed { min: f64, max: f64 },
}

/// A closed interval `[min, max]` in a correlation's native unit.
///
/// Degenerate single-point ranges (`min == max`) are common: many activity
/// correlations are only published at 25 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidityRange {
    pub min: f64,
    pub max: f64,
}

impl ValidityRange {
    /// Creates a range from trusted literal bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a range after checking its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or `min > max`.
    pub fn try_new(min: f64, max: f64) -> Result<Self, RangeError> {
        for value in [min, max] {
            if !value.is_finite() {
                return Err(RangeError::NotFinite { value });
            }
        }
        if min > max {
            return Err(RangeError::Reversed { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the bounds as `[min, max]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl fmt::Display for ValidityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The kind of input a validity range applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parameter {
    Temperature,
    Concentration,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Temperature => f.write_str("Temperature"),
            Parameter::Concentration => f.write_str("Concentration"),
        }
    }
}

/// A record of input values falling outside a correlation's validity range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeWarning {
    /// Which input left its range.
    pub parameter: Parameter,
    /// Native unit label of the range (e.g. `K`, `w`).
    pub unit: String,
    /// The declared validity range.
    pub range: ValidityRange,
    /// Name of the correlation.
    pub source: String,
    /// Solute the correlation belongs to, if any.
    pub solute: Option<String>,
    /// Smallest and largest observed values, in the native unit.
    pub observed: [f64; 2],
}

impl RangeWarning {
    /// Attaches the solute name to the record.
    #[must_use]
    pub fn with_solute(mut self, solute: impl Into<String>) -> Self {
        self.solute = Some(solute.into());
        self
    }
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} outside of validity range ({} in {}) for {}",
            self.parameter, self.unit, self.range, self.source
        )?;
        if let Some(solute) = &self.solute {
            write!(f, " [{solute}]")?;
        }
        Ok(())
    }
}

/// Checks values against a validity range.
///
/// Never fails. Returns a [`RangeWarning`] if any element lies outside
/// `range`, and `None` otherwise. NaN elements are not flagged.
#[must_use]
pub fn check(
    values: &Values,
    range: ValidityRange,
    parameter: Parameter,
    unit: &str,
    source: &str,
) -> Option<RangeWarning> {
    let outside = values
        .iter()
        .any(|value| value < range.min || value > range.max);

    if !outside {
        return None;
    }

    let observed = [
        values.min().unwrap_or(f64::NAN),
        values.max().unwrap_or(f64::NAN),
    ];

    Some(RangeWarning {
        parameter,
        unit: unit.to_owned(),
        range,
        source: source.to_owned(),
        solute: None,
        observed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const KELL: ValidityRange = ValidityRange::new(0.0, 150.0);

    #[test]
    fn in_range_scalar_is_silent() {
        let warning = check(&Values::from(25.0), KELL, Parameter::Temperature, "C", "Kell");
        assert!(warning.is_none());
    }

    #[test]
    fn bounds_are_inclusive() {
        let values = Values::from([0.0, 150.0]);
        assert!(check(&values, KELL, Parameter::Temperature, "C", "Kell").is_none());
    }

    #[test]
    fn single_excursion_in_array_is_flagged() {
        let values = Values::from([10.0, 20.0, 160.0, 30.0]);
        let warning = check(&values, KELL, Parameter::Temperature, "C", "Kell")
            .expect("160 °C is outside the Kell range");

        assert_eq!(warning.parameter, Parameter::Temperature);
        assert_eq!(warning.source, "Kell");
        assert_relative_eq!(warning.observed[0], 10.0);
        assert_relative_eq!(warning.observed[1], 160.0);
    }

    #[test]
    fn degenerate_range_flags_any_other_value() {
        let at_25 = ValidityRange::new(25.0, 25.0);
        assert!(check(&Values::from(25.0), at_25, Parameter::Temperature, "C", "Tang").is_none());
        assert!(check(&Values::from(26.0), at_25, Parameter::Temperature, "C", "Tang").is_some());
    }

    #[test]
    fn message_names_parameter_unit_range_and_source() {
        let range = ValidityRange::new(0.0, 0.26);
        let warning = check(&Values::from(0.3), range, Parameter::Concentration, "w", "Simion")
            .unwrap()
            .with_solute("NaCl");

        assert_eq!(
            warning.to_string(),
            "Concentration outside of validity range (w in [0, 0.26]) for Simion [NaCl]"
        );
    }

    #[test]
    fn try_new_rejects_bad_bounds() {
        assert!(matches!(
            ValidityRange::try_new(1.0, 0.0),
            Err(RangeError::Reversed { .. })
        ));
        assert!(matches!(
            ValidityRange::try_new(f64::NAN, 1.0),
            Err(RangeError::NotFinite { .. })
        ));
        assert!(ValidityRange::try_new(273.15, 373.15).is_ok());
    }
}

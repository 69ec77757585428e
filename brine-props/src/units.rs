//! Temperature and concentration units.

use std::{fmt, str::FromStr};

use brine_core::Values;
use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PropertyError;

/// Temperature scales accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Kelvin];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Converts a single temperature from this unit into `to`.
    #[must_use]
    pub fn convert(self, value: f64, to: TemperatureUnit) -> f64 {
        if self == to {
            return value;
        }
        let temperature = match self {
            TemperatureUnit::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            TemperatureUnit::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
        };
        match to {
            TemperatureUnit::Celsius => temperature.get::<degree_celsius>(),
            TemperatureUnit::Kelvin => temperature.get::<kelvin>(),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TemperatureUnit {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::ALL
            .into_iter()
            .find(|unit| unit.tag() == s)
            .ok_or_else(|| PropertyError::UnknownUnit {
                unit: s.to_owned(),
                valid: TemperatureUnit::ALL.iter().map(|u| u.tag()).collect(),
            })
    }
}

/// Concentration units.
///
/// `x`, `w`, `m` and `r` are related in closed form through the solute's
/// molar mass. Molarity `c` also needs the solution density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConcentrationUnit {
    /// Moles of solute per total moles (`x`).
    MoleFraction,
    /// Mass of solute per mass of solution (`w`).
    MassFraction,
    /// Moles of solute per kilogram of water (`m`, mol/kg).
    Molality,
    /// Mass of solute per mass of water (`r`).
    MassRatio,
    /// Moles of solute per cubic meter of solution (`c`, mol/m³).
    Molarity,
}

impl ConcentrationUnit {
    pub const ALL: [ConcentrationUnit; 5] = [
        ConcentrationUnit::MoleFraction,
        ConcentrationUnit::MassFraction,
        ConcentrationUnit::Molality,
        ConcentrationUnit::MassRatio,
        ConcentrationUnit::Molarity,
    ];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ConcentrationUnit::MoleFraction => "x",
            ConcentrationUnit::MassFraction => "w",
            ConcentrationUnit::Molality => "m",
            ConcentrationUnit::MassRatio => "r",
            ConcentrationUnit::Molarity => "c",
        }
    }

    /// Returns `true` for units convertible without a density.
    #[must_use]
    pub fn is_basic(self) -> bool {
        self != ConcentrationUnit::Molarity
    }
}

impl fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ConcentrationUnit {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConcentrationUnit::ALL
            .into_iter()
            .find(|unit| unit.tag() == s)
            .ok_or_else(|| PropertyError::UnknownUnit {
                unit: s.to_owned(),
                valid: ConcentrationUnit::ALL.iter().map(|u| u.tag()).collect(),
            })
    }
}

/// Temperature values tagged with their unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    pub values: Values,
    pub unit: TemperatureUnit,
}

impl Temperature {
    #[must_use]
    pub fn new(values: impl Into<Values>, unit: TemperatureUnit) -> Self {
        Self {
            values: values.into(),
            unit,
        }
    }

    #[must_use]
    pub fn celsius(values: impl Into<Values>) -> Self {
        Self::new(values, TemperatureUnit::Celsius)
    }

    #[must_use]
    pub fn kelvin(values: impl Into<Values>) -> Self {
        Self::new(values, TemperatureUnit::Kelvin)
    }

    /// Parses the unit tag and wraps the values.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownUnit`] for tags other than `C` and `K`.
    pub fn parse(values: impl Into<Values>, unit: &str) -> Result<Self, PropertyError> {
        Ok(Self::new(values, unit.parse()?))
    }

    /// Returns the values expressed in `unit`.
    #[must_use]
    pub fn to(&self, unit: TemperatureUnit) -> Values {
        if unit == self.unit {
            return self.values.clone();
        }
        self.values.map(|value| self.unit.convert(value, unit))
    }
}

impl Default for Temperature {
    /// 25 °C.
    fn default() -> Self {
        Self::celsius(25.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn celsius_kelvin_offset() {
        assert_relative_eq!(
            TemperatureUnit::Celsius.convert(25.0, TemperatureUnit::Kelvin),
            298.15,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            TemperatureUnit::Kelvin.convert(273.15, TemperatureUnit::Celsius),
            0.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn temperature_keeps_shape() {
        let t = Temperature::celsius([0.0, 100.0]);
        let kelvin_vals = t.to(TemperatureUnit::Kelvin).to_vec();
        assert_relative_eq!(kelvin_vals[0], 273.15, epsilon = 1e-10);
        assert_relative_eq!(kelvin_vals[1], 373.15, epsilon = 1e-10);

        assert!(Temperature::celsius(25).to(TemperatureUnit::Kelvin).is_scalar());
    }

    #[test]
    fn unknown_tags_list_valid_units() {
        let err = "F".parse::<TemperatureUnit>().unwrap_err();
        assert_eq!(
            err,
            PropertyError::UnknownUnit {
                unit: "F".into(),
                valid: vec!["C", "K"],
            }
        );

        let err = "ppm".parse::<ConcentrationUnit>().unwrap_err();
        assert_eq!(err.to_string(), "unknown unit `ppm`; valid units are x, w, m, r, c");
    }

    #[test]
    fn concentration_tags_round_trip() {
        for unit in ConcentrationUnit::ALL {
            assert_eq!(unit.tag().parse::<ConcentrationUnit>(), Ok(unit));
        }
        assert!(!ConcentrationUnit::Molarity.is_basic());
        assert!(ConcentrationUnit::MassRatio.is_basic());
    }
}

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PropertyError;

/// Physical properties the engine can evaluate.
///
/// Some names apply to both pure water and solutions (`density`,
/// `surface tension`). For water, `density` is the atmospheric-pressure
/// density and `density sat` the density along the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Property {
    /// Saturation vapor pressure (Pa).
    VaporPressure,
    /// Surface tension (N/m).
    SurfaceTension,
    /// Density (kg/m³).
    Density,
    /// Density of saturated liquid water (kg/m³).
    DensitySat,
    /// Dynamic viscosity (Pa·s).
    Viscosity,
    /// Diffusivity of water vapor in air (m²/s).
    DiffusivityInAir,
    /// Water activity (dimensionless).
    WaterActivity,
    /// Mean molal activity coefficient of the solute (dimensionless).
    ActivityCoefficient,
    /// Refractive index (dimensionless).
    RefractiveIndex,
    /// Electrical conductivity (S/m).
    ElectricalConductivity,
    /// Saturation concentration of the solute.
    Solubility,
}

impl Property {
    pub const ALL: [Property; 11] = [
        Property::VaporPressure,
        Property::SurfaceTension,
        Property::Density,
        Property::DensitySat,
        Property::Viscosity,
        Property::DiffusivityInAir,
        Property::WaterActivity,
        Property::ActivityCoefficient,
        Property::RefractiveIndex,
        Property::ElectricalConductivity,
        Property::Solubility,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Property::VaporPressure => "vapor pressure",
            Property::SurfaceTension => "surface tension",
            Property::Density => "density",
            Property::DensitySat => "density sat",
            Property::Viscosity => "viscosity",
            Property::DiffusivityInAir => "diffusivity in air",
            Property::WaterActivity => "water activity",
            Property::ActivityCoefficient => "activity coefficient",
            Property::RefractiveIndex => "refractive index",
            Property::ElectricalConductivity => "electrical conductivity",
            Property::Solubility => "solubility",
        }
    }

    /// Returns `true` if the property depends on temperature only for a
    /// solution (a saturation curve rather than a concentration function).
    #[must_use]
    pub fn is_saturated(self) -> bool {
        self == Property::Solubility
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|property| property.name() == s)
            .ok_or_else(|| PropertyError::UnknownProperty {
                property: s.to_owned(),
                valid: Property::ALL.iter().map(|p| p.name()).collect(),
            })
    }
}

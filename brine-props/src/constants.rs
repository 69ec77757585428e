//! Physical constants shared by the correlations.

/// Molar mass of water (kg/mol).
pub const WATER_MOLAR_MASS: f64 = 18.015268e-3;

/// Critical temperature of water (K).
pub const CRITICAL_TEMPERATURE: f64 = 647.096;

/// Critical pressure of water (Pa).
pub const CRITICAL_PRESSURE: f64 = 22.064e6;

/// Critical density of water (kg/m³).
pub const CRITICAL_DENSITY: f64 = 322.0;

/// Standard atmospheric pressure (Pa).
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Molar gas constant (J/(mol·K)).
pub const GAS_CONSTANT: f64 = 8.314_459_848;

/// Offset between the Celsius and Kelvin scales.
pub(crate) const CELSIUS_OFFSET: f64 = 273.15;

//! Saturation concentrations, as functions of temperature only.

use std::convert::Infallible;

use brine_core::{Extrapolate, FnModel, Model, Table};
use brine_solve::Inverter;

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Property, PropertyError, Registration,
    Solute, TemperatureUnit,
};

use super::pitzer;

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::solution(
        Property::Solubility,
        Solute::NaCl,
        FormulaDescriptor::saturated(
            "CRC Handbook",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 100.0),
            ConcentrationUnit::MassFraction,
            crc_nacl,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::Solubility,
        Solute::NaCl,
        FormulaDescriptor::saturated(
            "Pitzer",
            NativeDomain::new(TemperatureUnit::Kelvin, 298.15, 298.15),
            ConcentrationUnit::Molality,
            pitzer_nacl,
        ),
    ),
    Registration::solution(
        Property::Solubility,
        Solute::NaCl,
        FormulaDescriptor::saturated(
            "Sparrow",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 450.0),
            ConcentrationUnit::MassFraction,
            sparrow_nacl,
        ),
    ),
    Registration::solution(
        Property::Solubility,
        Solute::KCl,
        FormulaDescriptor::saturated(
            "CRC Handbook",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 100.0),
            ConcentrationUnit::MassFraction,
            crc_kcl,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::Solubility,
        Solute::LiCl,
        FormulaDescriptor::saturated(
            "CRC Handbook",
            NativeDomain::new(TemperatureUnit::Celsius, 10.0, 40.0),
            ConcentrationUnit::MassFraction,
            crc_licl,
        )
        .as_default()
        .with_note("tabulated from 10 to 40 °C only"),
    ),
];

/// Temperatures (°C) of the CRC Handbook aqueous solubility tables.
const CRC_CELSIUS: [f64; 12] = [
    0.0, 10.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Saturated mass percent of NaCl at [`CRC_CELSIUS`].
const CRC_NACL: [f64; 12] = [
    26.28, 26.32, 26.41, 26.45, 26.52, 26.67, 26.84, 27.03, 27.25, 27.50, 27.78, 28.05,
];

/// Saturated mass percent of KCl at [`CRC_CELSIUS`].
const CRC_KCL: [f64; 12] = [
    21.74, 23.61, 25.39, 26.22, 27.04, 28.59, 30.04, 31.40, 32.66, 33.86, 34.98, 36.05,
];

/// Temperatures (°C) and saturated mass percent of LiCl.
const CRC_LICL_CELSIUS: [f64; 5] = [10.0, 20.0, 25.0, 30.0, 40.0];
const CRC_LICL: [f64; 5] = [45.0, 45.29, 45.80, 46.25, 47.30];

/// Saturated mass fraction interpolated from a mass-percent table, `t` in °C.
///
/// Temperatures beyond the table continue its end segments.
fn crc_table(celsius: &[f64], percent: &[f64], t: f64) -> Result<f64, PropertyError> {
    let table = Table::new(celsius, percent, Extrapolate::Enable)
        .map_err(|err| PropertyError::Calculation(err.to_string()))?;
    let percent = table
        .call(&t)
        .map_err(|err| PropertyError::Calculation(err.to_string()))?;
    Ok(percent / 100.0)
}

fn crc_nacl(t: f64) -> Result<f64, PropertyError> {
    crc_table(&CRC_CELSIUS, &CRC_NACL, t)
}

fn crc_kcl(t: f64) -> Result<f64, PropertyError> {
    crc_table(&CRC_CELSIUS, &CRC_KCL, t)
}

fn crc_licl(t: f64) -> Result<f64, PropertyError> {
    crc_table(&CRC_LICL_CELSIUS, &CRC_LICL, t)
}

/// `ln K_sp` of halite at 25 °C.
const LN_KSP_NACL: f64 = 3.6466;

/// Molality search interval for the saturation condition.
const MOLALITY_BOUNDS: [f64; 2] = [0.0, 8.0];

/// Saturation molality where the solute activity `(γ± m)²` reaches `K_sp`.
fn pitzer_nacl(_t: f64) -> Result<f64, PropertyError> {
    let solute_activity = FnModel::new(|m: &f64| {
        Ok::<_, Infallible>((pitzer::NACL.activity_coefficient(*m) * m).powi(2))
    });

    let inversion = Inverter::default().invert(
        &solute_activity,
        LN_KSP_NACL.exp(),
        MOLALITY_BOUNDS,
    )?;
    Ok(inversion.x)
}

/// Sparrow (2003) mass-fraction fit, `t` in °C.
#[allow(clippy::unnecessary_wraps)]
fn sparrow_nacl(t: f64) -> Result<f64, PropertyError> {
    Ok(0.2628 + 62.75e-6 * t + 1.084e-6 * t.powi(2))
}

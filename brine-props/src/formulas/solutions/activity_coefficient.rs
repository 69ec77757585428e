//! Mean molal activity coefficients of the solute (dimensionless).

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Outcome, Property, Registration, Solute,
    TemperatureUnit,
};

use super::{debye_huckel, pitzer};

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::solution(
        Property::ActivityCoefficient,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Tang",
            NativeDomain::new(TemperatureUnit::Celsius, 25.0, 25.0),
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 14.0),
            tang_nacl,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::ActivityCoefficient,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Pitzer",
            NativeDomain::new(TemperatureUnit::Kelvin, 298.15, 298.15),
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 6.0),
            pitzer_nacl,
        ),
    ),
    Registration::solution(
        Property::ActivityCoefficient,
        Solute::KCl,
        FormulaDescriptor::solution(
            "Tang",
            NativeDomain::new(TemperatureUnit::Celsius, 25.0, 25.0),
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 13.0),
            tang_kcl,
        )
        .as_default()
        .with_note("concentration range not confirmed against the source data"),
    ),
    Registration::solution(
        Property::ActivityCoefficient,
        Solute::KCl,
        FormulaDescriptor::solution(
            "Pitzer",
            NativeDomain::new(TemperatureUnit::Kelvin, 298.15, 298.15),
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 4.8),
            pitzer_kcl,
        ),
    ),
    Registration::solution(
        Property::ActivityCoefficient,
        Solute::Na2SO4,
        FormulaDescriptor::solution(
            "Pitzer",
            NativeDomain::new(TemperatureUnit::Kelvin, 298.15, 298.15),
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 4.0),
            pitzer_na2so4,
        )
        .as_default(),
    ),
];

fn tang_nacl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(debye_huckel::NACL.activity_coefficient(m))
}

fn tang_kcl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(debye_huckel::KCL.activity_coefficient(m))
}

fn pitzer_nacl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::NACL.activity_coefficient(m))
}

fn pitzer_kcl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::KCL.activity_coefficient(m))
}

fn pitzer_na2so4(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::NA2SO4.activity_coefficient(m))
}

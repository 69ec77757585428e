//! Solution surface tensions (N/m), each paired with the IAPWS value for
//! pure water at the same temperature.

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Outcome, Property, Registration, Solute,
    TemperatureUnit,
    constants::{CELSIUS_OFFSET, CRITICAL_TEMPERATURE},
    formulas::water::surface_tension::iapws,
};

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::solution(
        Property::SurfaceTension,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Dutcher",
            NativeDomain::new(TemperatureUnit::Kelvin, 263.13, 473.15),
            NativeDomain::new(ConcentrationUnit::MoleFraction, 0.0, 0.145),
            dutcher_nacl,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::SurfaceTension,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Steiger",
            NativeDomain::new(TemperatureUnit::Celsius, -10.0, 50.0),
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 7.0),
            steiger_nacl,
        )
        .with_reference()
        .with_note("concentration range approximate, up to saturation"),
    ),
    Registration::solution(
        Property::SurfaceTension,
        Solute::LiCl,
        FormulaDescriptor::solution(
            "Conde",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 100.0),
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.45),
            conde_licl,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::SurfaceTension,
        Solute::CaCl2,
        FormulaDescriptor::solution(
            "Dutcher",
            NativeDomain::new(TemperatureUnit::Kelvin, 243.15, 373.15),
            NativeDomain::new(ConcentrationUnit::MoleFraction, 0.0, 0.117),
            dutcher_cacl2,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::SurfaceTension,
        Solute::CaCl2,
        FormulaDescriptor::solution(
            "Conde",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 100.0),
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.45),
            conde_cacl2,
        )
        .with_reference(),
    ),
];

/// Dutcher et al. (2010) mixing rule between water and molten salt.
///
/// The salt's surface tension is linear in temperature (`c₁ + c₂ T`) and the
/// two interaction terms `F = a + b T` come from the paper's fitted tables.
/// All intermediate tensions are in mN/m.
struct Dutcher {
    c1: f64,
    c2: f64,
    a_ws: f64,
    b_ws: f64,
    a_sw: f64,
    b_sw: f64,
}

impl Dutcher {
    /// `x` salt mole fraction, `t` in K.
    fn outcome(&self, x: f64, t: f64) -> Outcome {
        let reference = iapws(t);
        let x_water = 1.0 - x;
        let water = reference * 1e3;
        let salt = self.c1 + self.c2 * t;
        let f_ws = self.a_ws + self.b_ws * t;
        let f_sw = self.a_sw + self.b_sw * t;

        let mixed =
            (x_water * (water + f_ws * x).ln() + x * (salt + f_sw * x_water).ln()).exp();

        Outcome::WithReference {
            reference,
            value: mixed * 1e-3,
        }
    }
}

fn dutcher_nacl(x: f64, t: f64) -> Outcome {
    Dutcher {
        c1: 191.16,
        c2: -0.0747,
        a_ws: 232.54,
        b_ws: -0.245,
        a_sw: -142.42,
        b_sw: 0.0,
    }
    .outcome(x, t)
}

fn dutcher_cacl2(x: f64, t: f64) -> Outcome {
    Dutcher {
        c1: 195.67,
        c2: -0.045_41,
        a_ws: -19.766,
        b_ws: 0.575,
        a_sw: 0.0,
        b_sw: 0.0,
    }
    .outcome(x, t)
}

/// Steiger: linear increment on pure water, `m` molality and `t` in °C.
fn steiger_nacl(m: f64, t: f64) -> Outcome {
    let reference = iapws(t + CELSIUS_OFFSET);
    Outcome::WithReference {
        reference,
        value: reference + 0.001_66 * m,
    }
}

/// Conde (2004): `σ = σ_w (1 + s₁w + s₂wτ + s₃wτ² + s₄w² + s₅w³)` with
/// `τ = T / Tc`. `t` in °C.
fn conde(w: f64, t: f64, s: [f64; 5]) -> Outcome {
    let t = t + CELSIUS_OFFSET;
    let reference = iapws(t);
    let tau = t / CRITICAL_TEMPERATURE;
    let ratio = 1.0
        + s[0] * w
        + s[1] * w * tau
        + s[2] * w * tau.powi(2)
        + s[3] * w.powi(2)
        + s[4] * w.powi(3);

    Outcome::WithReference {
        reference,
        value: reference * ratio,
    }
}

fn conde_licl(w: f64, t: f64) -> Outcome {
    conde(w, t, [2.757_115, -12.011_299, 14.751_818, 2.443_204, -3.147_739])
}

fn conde_cacl2(w: f64, t: f64) -> Outcome {
    conde(w, t, [2.330_67, -10.787_79, 13.566_11, 1.950_17, -1.779_90])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dutcher_sodium_chloride() {
        assert_relative_eq!(dutcher_nacl(0.09, 298.15).value(), 0.08042, max_relative = 1e-3);
        assert_relative_eq!(dutcher_nacl(0.1, 294.15).value(), 0.08206, max_relative = 1e-3);
    }

    #[test]
    fn dutcher_reduces_to_water() {
        let outcome = dutcher_nacl(0.0, 298.15);
        assert_relative_eq!(outcome.value(), outcome.reference().unwrap(), max_relative = 1e-12);
    }

    #[test]
    fn dutcher_calcium_chloride() {
        // 6.6666 mol/kg at 20 °C.
        let x = 6.6666 * 18.015_268e-3 / (1.0 + 6.6666 * 18.015_268e-3);
        assert_relative_eq!(dutcher_cacl2(x, 293.15).value(), 0.09582, max_relative = 1e-3);
    }

    #[test]
    fn conde_values() {
        assert_relative_eq!(conde_licl(0.1, 25.0).value(), 0.07606, max_relative = 1e-3);
        assert_relative_eq!(conde_cacl2(0.1, 25.0).value(), 0.07498, max_relative = 1e-3);
    }

    #[test]
    fn steiger_is_linear_in_molality() {
        let outcome = steiger_nacl(3.0, 25.0);
        assert_relative_eq!(outcome.value() - outcome.reference().unwrap(), 0.00498, max_relative = 1e-9);
        assert_relative_eq!(outcome.value(), 0.07695, max_relative = 1e-3);
    }
}

//! Solution densities (kg/m³).
//!
//! Every density correlation also yields the pure-water density at the same
//! temperature, so all of them support relative output.

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Outcome, Property, Registration, Solute,
    TemperatureUnit,
    constants::{CELSIUS_OFFSET, CRITICAL_TEMPERATURE},
    formulas::water::{density::kell, density::wagner_saturated, vapor_pressure::wagner},
};

const AL_GHAFRI_T: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Kelvin, 298.15, 473.15);
const CONDE_T: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Kelvin, 273.15, 373.15);

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::solution(
        Property::Density,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Simion",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 100.0),
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.26),
            simion,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::Density,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Tang",
            NativeDomain::new(TemperatureUnit::Celsius, 25.0, 25.0),
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.5),
            tang_nacl,
        )
        .with_reference(),
    ),
    Registration::solution(
        Property::Density,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Al Ghafri",
            AL_GHAFRI_T,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 6.0),
            al_ghafri_nacl,
        )
        .with_reference(),
    ),
    Registration::solution(
        Property::Density,
        Solute::KCl,
        FormulaDescriptor::solution(
            "Al Ghafri",
            AL_GHAFRI_T,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 4.5),
            al_ghafri_kcl,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::Density,
        Solute::LiCl,
        FormulaDescriptor::solution(
            "Conde",
            CONDE_T,
            NativeDomain::new(ConcentrationUnit::MassRatio, 0.0, 1.273),
            conde_licl,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::Density,
        Solute::CaCl2,
        FormulaDescriptor::solution(
            "Conde",
            CONDE_T,
            NativeDomain::new(ConcentrationUnit::MassRatio, 0.0, 1.5),
            conde_cacl2,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::Density,
        Solute::CaCl2,
        FormulaDescriptor::solution(
            "Al Ghafri",
            AL_GHAFRI_T,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 6.0),
            al_ghafri_cacl2,
        )
        .with_reference(),
    ),
    Registration::solution(
        Property::Density,
        Solute::MgCl2,
        FormulaDescriptor::solution(
            "Al Ghafri",
            AL_GHAFRI_T,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 5.0),
            al_ghafri_mgcl2,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::Density,
        Solute::KI,
        FormulaDescriptor::solution(
            "Al Ghafri",
            AL_GHAFRI_T,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 1.05),
            al_ghafri_ki,
        )
        .with_reference()
        .as_default(),
    ),
    Registration::solution(
        Property::Density,
        Solute::Na2SO4,
        FormulaDescriptor::solution(
            "Tang",
            NativeDomain::new(TemperatureUnit::Celsius, 25.0, 25.0),
            NativeDomain::new(ConcentrationUnit::MassFraction, 0.0, 0.68),
            tang_na2so4,
        )
        .with_reference()
        .as_default(),
    ),
];

/// Simion et al. (2015). `w` mass fraction, `t` in °C.
fn simion(w: f64, t: f64) -> Outcome {
    let w = 100.0 * w;
    let t = t + CELSIUS_OFFSET;

    let reference = 750.2834 + 1.90165 * t - 0.003604 * t.powi(2);
    let value = reference
        + 26.7822 * w
        - 0.26389 * w.powi(2)
        + (-0.11734 * w + 0.00175 * w.powi(2)) * t
        + (0.000_170_1 * w - 0.000_002_61 * w.powi(2)) * t.powi(2);

    Outcome::WithReference { reference, value }
}

/// Tang (1996), 25 °C only. `w` mass fraction.
/// Tang and Munkelwitz (1991) polynomial in mass percent, valid at 25 °C only.
fn tang(w: f64, coeffs: [f64; 4]) -> Outcome {
    const REFERENCE: f64 = 997.1;

    let w = 100.0 * w;
    let value = REFERENCE
        + coeffs
            .iter()
            .zip(1..)
            .map(|(c, power)| c * w.powi(power))
            .sum::<f64>();

    Outcome::WithReference {
        reference: REFERENCE,
        value,
    }
}

fn tang_nacl(w: f64, _t: f64) -> Outcome {
    tang(w, [7.41, -3.741e-2, 2.252e-3, -2.06e-5])
}

fn tang_na2so4(w: f64, _t: f64) -> Outcome {
    tang(w, [8.871, 3.195e-2, 2.28e-4, 0.0])
}

/// Coefficient tables of the Al Ghafri et al. (2012) Tammann-Tait form.
struct AlGhafri {
    /// Rows `α₁..α₃` of table 10, each `[αᵢ₀, αᵢ₁, .., αᵢ₄]`.
    alpha: [[f64; 5]; 3],
    /// Rows `β₀, β₁`.
    beta: [[f64; 4]; 2],
    gamma: [f64; 3],
}

impl AlGhafri {
    const PRESSURE: f64 = 1e5;
    const BETA_0: [f64; 4] = [-1622.4, 9383.8, -14893.8, 7309.10];

    /// Density at molality `m` and temperature `t` (K), at 1 bar.
    fn density(&self, m: f64, t: f64) -> f64 {
        let tr = t / CRITICAL_TEMPERATURE;
        let p_ref = wagner(t);

        let mut rho_ref = wagner_saturated(t);
        for (i, row) in (1..=3_i32).zip(&self.alpha) {
            let m_term = m.powf(f64::from(i + 1) / 2.0);
            rho_ref += row[0] * m_term;
            for (j, a) in (1..=4_i32).zip(&row[1..]) {
                rho_ref += a * m_term * tr.powf(f64::from(j + 1) / 2.0);
            }
        }

        let mut b = 0.0;
        for (i, row) in (0..).zip(&self.beta) {
            for (j, coeff) in (0..).zip(row) {
                b += coeff * m.powi(i) * tr.powi(j);
            }
        }
        b *= 1e6;

        let c = self.gamma[0] + self.gamma[1] * m + self.gamma[2] * m.powf(1.5);

        rho_ref / (1.0 - c * ((b + Self::PRESSURE) / (b + p_ref)).ln())
    }

    /// Solution density with the same fit evaluated at zero molality.
    fn outcome(&self, m: f64, t: f64) -> Outcome {
        Outcome::WithReference {
            reference: self.density(0.0, t),
            value: self.density(m, t),
        }
    }
}

const NACL: AlGhafri = AlGhafri {
    alpha: [
        [2863.158, -46844.356, 120_760.118, -116_867.722, 40285.426],
        [-2000.028, 34013.518, -88557.123, 86351.784, -29910.216],
        [413.046, -7125.857, 18640.780, -18244.074, 6335.275],
    ],
    beta: [AlGhafri::BETA_0, [241.57, -980.97, 1482.31, -750.98]],
    gamma: [0.11725, -0.00134, 0.00056],
};

const KCL: AlGhafri = AlGhafri {
    alpha: [
        [2332.802, -39637.418, 104_801.288, -104_266.828, 37030.556],
        [-1287.572, 23543.994, -63846.097, 65023.561, -23586.370],
        [206.032, -4003.757, 11128.162, -11595.475, 4295.498],
    ],
    beta: [AlGhafri::BETA_0, [211.49, -888.16, 1400.09, -732.79]],
    gamma: [0.11725, -0.00170, 0.00083],
};

const CACL2: AlGhafri = AlGhafri {
    alpha: [
        [2546.760, -39884.946, 102_056.957, -98403.334, 33976.048],
        [-1362.157, 22785.572, -59216.108, 57894.824, -20222.898],
        [217.778, -3770.645, 9908.135, -9793.484, 3455.587],
    ],
    beta: [AlGhafri::BETA_0, [307.24, -1259.10, 2034.03, -1084.94]],
    gamma: [0.11725, -0.00493, 0.00231],
};

const MGCL2: AlGhafri = AlGhafri {
    alpha: [
        [2385.823, -38428.112, 99526.269, -97041.399, 33841.139],
        [-1254.938, 21606.295, -56988.274, 56465.943, -19934.064],
        [192.534, -3480.374, 9345.908, -9408.904, 3364.018],
    ],
    beta: [AlGhafri::BETA_0, [358.00, -1597.10, 2609.47, -1383.91]],
    gamma: [0.11725, -0.00789, 0.00142],
};

const KI: AlGhafri = AlGhafri {
    alpha: [
        [8657.149, -94956.477, 167_497.772, -74952.063, -8734.207],
        [-14420.621, 137_360.624, -184_940.639, -11953.289, 79847.960],
        [7340.083, -66939.345, 81446.737, 23983.386, -49031.473],
    ],
    beta: [AlGhafri::BETA_0, [241.84, -1030.61, 1548.15, -754.36]],
    gamma: [0.11725, -0.01026, 0.00842],
};

fn al_ghafri_nacl(m: f64, t: f64) -> Outcome {
    NACL.outcome(m, t)
}

fn al_ghafri_kcl(m: f64, t: f64) -> Outcome {
    KCL.outcome(m, t)
}

fn al_ghafri_cacl2(m: f64, t: f64) -> Outcome {
    CACL2.outcome(m, t)
}

fn al_ghafri_mgcl2(m: f64, t: f64) -> Outcome {
    MGCL2.outcome(m, t)
}

fn al_ghafri_ki(m: f64, t: f64) -> Outcome {
    KI.outcome(m, t)
}

/// Conde (2004): `ρ = ρ_w(T) Σ ρᵢ rⁱ` with `r` the mass ratio and `t` in K.
fn conde(r: f64, t: f64, coeffs: [f64; 4]) -> Outcome {
    let relative: f64 = coeffs
        .iter()
        .zip(0..)
        .map(|(c, power)| c * r.powi(power))
        .sum();
    let reference = kell(t - CELSIUS_OFFSET);
    Outcome::WithReference {
        reference,
        value: reference * relative,
    }
}

fn conde_licl(r: f64, t: f64) -> Outcome {
    conde(r, t, [1.0, 0.540_966, -0.303_792, 0.100_791])
}

fn conde_cacl2(r: f64, t: f64) -> Outcome {
    conde(r, t, [1.0, 0.836_014, -0.436_300, 0.105_642])
}

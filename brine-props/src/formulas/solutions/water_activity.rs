//! Water activity of solutions (dimensionless).

use crate::{
    ConcentrationUnit, FormulaDescriptor, NativeDomain, Outcome, Property, Registration, Solute,
    TemperatureUnit,
    constants::{CELSIUS_OFFSET, CRITICAL_TEMPERATURE},
};

use super::{debye_huckel, pitzer};

const AT_25_C: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Celsius, 25.0, 25.0);
const AT_298_K: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Kelvin, 298.15, 298.15);
const CONDE_T: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Celsius, 0.0, 100.0);

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::solution(
        Property::WaterActivity,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Clegg",
            AT_25_C,
            NativeDomain::new(ConcentrationUnit::MoleFraction, 0.0, 0.25),
            clegg_nacl,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Tang",
            AT_25_C,
            NativeDomain::new(ConcentrationUnit::Molality, 1e-9, 14.0),
            tang_nacl,
        ),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::NaCl,
        FormulaDescriptor::solution(
            "Pitzer",
            AT_298_K,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 6.0),
            pitzer_nacl,
        ),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::KCl,
        FormulaDescriptor::solution(
            "Tang",
            AT_25_C,
            NativeDomain::new(ConcentrationUnit::Molality, 1e-9, 13.0),
            tang_kcl,
        )
        .as_default()
        .with_note("default pending a temperature-dependent Pitzer fit"),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::LiCl,
        FormulaDescriptor::solution(
            "Conde",
            CONDE_T,
            NativeDomain::new(ConcentrationUnit::MassFraction, 1e-5, 0.55),
            conde_licl,
        )
        .as_default()
        .with_note("temperature range deduced from published plots"),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::LiCl,
        FormulaDescriptor::solution(
            "Pitzer",
            AT_298_K,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 6.0),
            pitzer_licl,
        ),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::CaCl2,
        FormulaDescriptor::solution(
            "Conde",
            CONDE_T,
            NativeDomain::new(ConcentrationUnit::MassFraction, 1e-4, 0.6),
            conde_cacl2,
        )
        .as_default()
        .with_note("temperature range deduced from published plots"),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::LiBr,
        FormulaDescriptor::solution(
            "Pitzer",
            AT_298_K,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 2.5),
            pitzer_libr,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::KCl,
        FormulaDescriptor::solution(
            "Pitzer",
            AT_298_K,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 4.8),
            pitzer_kcl,
        ),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::Na2SO4,
        FormulaDescriptor::solution(
            "Pitzer",
            AT_298_K,
            NativeDomain::new(ConcentrationUnit::Molality, 0.0, 4.0),
            pitzer_na2so4,
        )
        .as_default(),
    ),
    Registration::solution(
        Property::WaterActivity,
        Solute::Na2SO4,
        FormulaDescriptor::solution(
            "Clegg",
            AT_25_C,
            NativeDomain::new(ConcentrationUnit::MoleFraction, 0.0, 0.23),
            clegg_na2so4,
        )
        .with_note("not monotonic above x = 0.19"),
    ),
];

/// Mole-fraction based Pitzer-Simonson-Clegg coefficients.
struct Clegg {
    solute: Solute,
    a_x: f64,
    b: f64,
    alpha: f64,
    w1: f64,
    u1: f64,
    v1: f64,
}

impl Clegg {
    /// Closest-approach parameter shared by all salts.
    const RHO: f64 = 13.0;

    /// Water activity at salt mole fraction `x`.
    fn water_activity(&self, x: f64) -> f64 {
        let (x_cation, x_anion) = self.solute.ion_mole_fractions(x);
        let x_water = 1.0 - (x_cation + x_anion);
        let z_anion = f64::from(self.solute.charges().1);
        let ionic = self.solute.mole_fraction_ionic_strength(x);
        let pair = x_cation * x_anion;

        let ln_f = 2.0 * self.a_x * ionic.powf(1.5) / (1.0 + Self::RHO * ionic.sqrt())
            - pair * self.b * (-self.alpha * ionic.sqrt()).exp()
            + (1.0 - x_water) * x_anion * (1.0 + z_anion) * self.w1
            + (1.0 - 2.0 * x_water) * pair * (1.0 + z_anion).powi(2) / z_anion * self.u1
            + 4.0 * x_water * (2.0 - 3.0 * x_water) * pair * self.v1;

        ln_f.exp() * x_water
    }
}

const CLEGG_NACL: Clegg = Clegg {
    solute: Solute::NaCl,
    a_x: 2.915,
    b: 24.220_23,
    alpha: 5.0,
    w1: 0.794_537_8,
    u1: 12.153_04,
    v1: -12.763_57,
};

const CLEGG_NA2SO4: Clegg = Clegg {
    solute: Solute::Na2SO4,
    a_x: 2.915,
    b: 48.560_28,
    alpha: 8.0,
    w1: 5.555_706,
    u1: 21.883_52,
    v1: -22.816_74,
};

fn clegg_nacl(x: f64, _t: f64) -> Outcome {
    Outcome::Plain(CLEGG_NACL.water_activity(x))
}

fn clegg_na2so4(x: f64, _t: f64) -> Outcome {
    Outcome::Plain(CLEGG_NA2SO4.water_activity(x))
}

fn tang_nacl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(debye_huckel::NACL.water_activity(m))
}

fn tang_kcl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(debye_huckel::KCL.water_activity(m))
}

fn pitzer_nacl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::NACL.water_activity(m))
}

fn pitzer_kcl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::KCL.water_activity(m))
}

fn pitzer_na2so4(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::NA2SO4.water_activity(m))
}

fn pitzer_licl(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::LICL.water_activity(m))
}

fn pitzer_libr(m: f64, _t: f64) -> Outcome {
    Outcome::Plain(pitzer::LIBR.water_activity(m))
}

/// Conde (2004) fit. `w` mass fraction, `t` in °C.
fn conde(w: f64, t: f64, pi: [f64; 10]) -> f64 {
    let a = 2.0 - (1.0 + (w / pi[0]).powf(pi[1])).powf(pi[2]);
    let b = (1.0 + (w / pi[3]).powf(pi[4])).powf(pi[5]) - 1.0;
    let reduced = (t + CELSIUS_OFFSET) / CRITICAL_TEMPERATURE;
    let f = a + b * reduced;

    let pi25 = 1.0
        - (1.0 + (w / pi[6]).powf(pi[7])).powf(pi[8])
        - pi[9] * (-(w - 0.1).powi(2) / 0.005).exp();

    f * pi25
}

fn conde_licl(w: f64, t: f64) -> Outcome {
    Outcome::Plain(conde(
        w,
        t,
        [0.28, 4.30, 0.6, 0.21, 5.1, 0.49, 0.362, -4.75, -0.4, 0.03],
    ))
}

fn conde_cacl2(w: f64, t: f64) -> Outcome {
    Outcome::Plain(conde(
        w,
        t,
        [0.31, 3.698, 0.6, 0.231, 4.584, 0.49, 0.478, -5.20, -0.4, 0.018],
    ))
}

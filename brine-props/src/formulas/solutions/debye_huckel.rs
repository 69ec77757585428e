//! Extended Debye-Hückel fits of Tang, Munkelwitz & Wang (1986) at 25 °C.
//!
//! The mean activity coefficient follows
//! `log₁₀ γ = −z₁z₂ A √I / (1 + B √I) + β I + C I² + D I³ + E I⁴`, and the
//! osmotic coefficient is its Gibbs-Duhem integral (Hamer & Wu, 1972).

use crate::{Solute, constants::WATER_MOLAR_MASS};

const LN_10: f64 = 2.302_585;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ExtendedDebyeHuckel {
    pub solute: Solute,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub beta: f64,
}

impl ExtendedDebyeHuckel {
    fn charge_product(&self) -> f64 {
        let (z1, z2) = self.solute.charges();
        f64::from(z1 * z2)
    }

    pub(crate) fn activity_coefficient(&self, m: f64) -> f64 {
        let i = self.solute.ionic_strength(m);
        let root = i.sqrt();
        let log_gamma = -self.charge_product() * self.a * root / (1.0 + self.b * root)
            + self.beta * i
            + self.c * i.powi(2)
            + self.d * i.powi(3)
            + self.e * i.powi(4);
        10_f64.powf(log_gamma)
    }

    pub(crate) fn osmotic_coefficient(&self, m: f64) -> f64 {
        let b = 1.0 + self.b * m.sqrt();
        let long_range = self.charge_product() * self.a / (self.b.powi(3) * m)
            * (b - 2.0 * LN_10 * b.log10() - 1.0 / b);
        let short_range = -self.beta * m / 2.0
            - 2.0 / 3.0 * self.c * m.powi(2)
            - 3.0 / 4.0 * self.d * m.powi(3)
            - 4.0 / 5.0 * self.e * m.powi(4);
        1.0 - LN_10 * (long_range + short_range)
    }

    /// Water activity; exactly 1 at zero molality.
    pub(crate) fn water_activity(&self, m: f64) -> f64 {
        if m <= 0.0 {
            return 1.0;
        }
        (-self.solute.ion_count() * WATER_MOLAR_MASS * self.osmotic_coefficient(m) * m).exp()
    }
}

pub(crate) const NACL: ExtendedDebyeHuckel = ExtendedDebyeHuckel {
    solute: Solute::NaCl,
    a: 0.5108,
    b: 1.37,
    c: 4.803e-3,
    d: -2.736e-4,
    e: 0.0,
    beta: 2.796e-2,
};

pub(crate) const KCL: ExtendedDebyeHuckel = ExtendedDebyeHuckel {
    solute: Solute::KCl,
    a: 0.5108,
    b: 1.35,
    c: 7.625e-3,
    d: -7.892e-4,
    e: 2.492e-5,
    beta: -9.842e-3,
};

//! Pitzer (1973) ion-interaction model for single salts at 25 °C.

use crate::{Solute, constants::WATER_MOLAR_MASS};

/// Debye-Hückel slope for the osmotic coefficient at 25 °C.
const A_PHI: f64 = 0.3915;
const B: f64 = 1.2;
const ALPHA: f64 = 2.0;

/// Binary interaction parameters of one salt.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pitzer {
    pub solute: Solute,
    pub beta0: f64,
    pub beta1: f64,
    pub c_phi: f64,
}

/// Charge and stoichiometry weights of the Debye-Hückel, `B`, and `C` terms.
struct Weights {
    charge: f64,
    second: f64,
    third: f64,
    ions: f64,
}

impl Pitzer {
    fn weights(&self) -> Weights {
        let (n1, n2) = self.solute.dissociation();
        let (z1, z2) = self.solute.charges();
        let (n1, n2) = (f64::from(n1), f64::from(n2));
        let ions = n1 + n2;
        Weights {
            charge: f64::from(z1 * z2),
            second: 2.0 * n1 * n2 / ions,
            third: 2.0 * (n1 * n2).powf(1.5) / ions,
            ions,
        }
    }

    /// Osmotic coefficient at molality `m`.
    pub(crate) fn osmotic_coefficient(&self, m: f64) -> f64 {
        let w = self.weights();
        let root = self.solute.ionic_strength(m).sqrt();
        let f_phi = -A_PHI * root / (1.0 + B * root);
        let b_phi = self.beta0 + self.beta1 * (-ALPHA * root).exp();
        1.0 + w.charge * f_phi + m * w.second * b_phi + m.powi(2) * w.third * self.c_phi
    }

    pub(crate) fn water_activity(&self, m: f64) -> f64 {
        let ions = self.weights().ions;
        (-ions * WATER_MOLAR_MASS * m * self.osmotic_coefficient(m)).exp()
    }

    /// Mean molal activity coefficient at molality `m`.
    pub(crate) fn activity_coefficient(&self, m: f64) -> f64 {
        if m <= 0.0 {
            return 1.0;
        }
        let w = self.weights();
        let strength = self.solute.ionic_strength(m);
        let root = strength.sqrt();
        let f_gamma = -A_PHI * (root / (1.0 + B * root) + 2.0 / B * (1.0 + B * root).ln());

        let x = ALPHA * root;
        let b_gamma = 2.0 * self.beta0
            + 2.0 * self.beta1 / (ALPHA.powi(2) * strength)
                * (1.0 - (1.0 + x - x.powi(2) / 2.0) * (-x).exp());

        (w.charge * f_gamma + m * w.second * b_gamma + m.powi(2) * w.third * 1.5 * self.c_phi).exp()
    }
}

pub(crate) const NACL: Pitzer = Pitzer {
    solute: Solute::NaCl,
    beta0: 0.0765,
    beta1: 0.2664,
    c_phi: 0.00127,
};

pub(crate) const KCL: Pitzer = Pitzer {
    solute: Solute::KCl,
    beta0: 0.04835,
    beta1: 0.2122,
    c_phi: -0.00084,
};

pub(crate) const LICL: Pitzer = Pitzer {
    solute: Solute::LiCl,
    beta0: 0.1494,
    beta1: 0.3074,
    c_phi: 0.00359,
};

pub(crate) const LIBR: Pitzer = Pitzer {
    solute: Solute::LiBr,
    beta0: 0.1748,
    beta1: 0.2547,
    c_phi: 0.0053,
};

/// Pitzer and Mayorga (1973).
pub(crate) const NA2SO4: Pitzer = Pitzer {
    solute: Solute::Na2SO4,
    beta0: 0.01958,
    beta1: 1.113,
    c_phi: 0.00497,
};

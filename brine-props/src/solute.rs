use std::{fmt, str::FromStr};

use uom::si::{
    f64::MolarMass,
    molar_mass::{gram_per_mole, kilogram_per_mole},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PropertyError;

/// An ion making up one side of a dissolved salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ion {
    Al,
    Ca,
    K,
    Li,
    Mg,
    Na,
    Cl,
    I,
    SO4,
    Br,
}

impl Ion {
    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let grams = match self {
            Ion::Al => 26.982,
            Ion::Ca => 40.078,
            Ion::K => 39.098,
            Ion::Li => 6.94,
            Ion::Mg => 24.305,
            Ion::Na => 22.99,
            Ion::Cl => 35.453,
            Ion::I => 126.904,
            Ion::SO4 => 96.063,
            Ion::Br => 79.904,
        };
        MolarMass::new::<gram_per_mole>(grams)
    }
}

/// Electrolytes with a known constant table.
///
/// Each solute dissociates into `ν₁` cations of charge `z₁` and `ν₂`
/// anions of charge `z₂`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Solute {
    AlCl3,
    CaCl2,
    KCl,
    KI,
    LiBr,
    LiCl,
    MgCl2,
    NaCl,
    Na2SO4,
}

impl Solute {
    pub const ALL: [Solute; 9] = [
        Solute::AlCl3,
        Solute::CaCl2,
        Solute::KCl,
        Solute::KI,
        Solute::LiBr,
        Solute::LiCl,
        Solute::MgCl2,
        Solute::NaCl,
        Solute::Na2SO4,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Solute::AlCl3 => "AlCl3",
            Solute::CaCl2 => "CaCl2",
            Solute::KCl => "KCl",
            Solute::KI => "KI",
            Solute::LiBr => "LiBr",
            Solute::LiCl => "LiCl",
            Solute::MgCl2 => "MgCl2",
            Solute::NaCl => "NaCl",
            Solute::Na2SO4 => "Na2SO4",
        }
    }

    /// Cation and anion.
    #[must_use]
    pub fn ions(self) -> (Ion, Ion) {
        match self {
            Solute::AlCl3 => (Ion::Al, Ion::Cl),
            Solute::CaCl2 => (Ion::Ca, Ion::Cl),
            Solute::KCl => (Ion::K, Ion::Cl),
            Solute::KI => (Ion::K, Ion::I),
            Solute::LiBr => (Ion::Li, Ion::Br),
            Solute::LiCl => (Ion::Li, Ion::Cl),
            Solute::MgCl2 => (Ion::Mg, Ion::Cl),
            Solute::NaCl => (Ion::Na, Ion::Cl),
            Solute::Na2SO4 => (Ion::Na, Ion::SO4),
        }
    }

    /// Dissociation numbers `(ν₁, ν₂)`.
    #[must_use]
    pub fn dissociation(self) -> (u8, u8) {
        match self {
            Solute::AlCl3 => (1, 3),
            Solute::CaCl2 | Solute::MgCl2 => (1, 2),
            Solute::Na2SO4 => (2, 1),
            _ => (1, 1),
        }
    }

    /// Absolute charge numbers `(z₁, z₂)`.
    #[must_use]
    pub fn charges(self) -> (u8, u8) {
        match self {
            Solute::AlCl3 => (3, 1),
            Solute::CaCl2 | Solute::MgCl2 => (2, 1),
            Solute::Na2SO4 => (1, 2),
            _ => (1, 1),
        }
    }

    /// Total number of ions released per formula unit, `ν = ν₁ + ν₂`.
    #[must_use]
    pub fn ion_count(self) -> f64 {
        let (n1, n2) = self.dissociation();
        f64::from(n1 + n2)
    }

    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let (cation, anion) = self.ions();
        let (n1, n2) = self.dissociation();
        cation.molar_mass() * f64::from(n1) + anion.molar_mass() * f64::from(n2)
    }

    /// Molar mass in kg/mol, the unit every correlation works in.
    pub(crate) fn molar_mass_si(self) -> f64 {
        self.molar_mass().get::<kilogram_per_mole>()
    }

    /// Mole fractions of cation and anion for a salt mole fraction `x`.
    ///
    /// Counts dissociated ions: `xᵢ = νᵢ x / (1 + x (ν₁ + ν₂ − 1))`.
    #[must_use]
    pub fn ion_mole_fractions(self, x: f64) -> (f64, f64) {
        let (n1, n2) = self.dissociation();
        let (n1, n2) = (f64::from(n1), f64::from(n2));
        let total = 1.0 + x * (n1 + n2 - 1.0);
        (n1 * x / total, n2 * x / total)
    }

    /// Molal ionic strength `I = ½ Σ mᵢ zᵢ²` for molality `m`.
    #[must_use]
    pub fn ionic_strength(self, m: f64) -> f64 {
        let (n1, n2) = self.dissociation();
        let (z1, z2) = self.charges();
        let sum = f64::from(n1) * f64::from(z1).powi(2) + f64::from(n2) * f64::from(z2).powi(2);
        0.5 * m * sum
    }

    /// Mole-fraction ionic strength `Iₓ = ½ Σ xᵢ zᵢ²` for salt mole fraction `x`.
    #[must_use]
    pub fn mole_fraction_ionic_strength(self, x: f64) -> f64 {
        let (x1, x2) = self.ion_mole_fractions(x);
        let (z1, z2) = self.charges();
        0.5 * (x1 * f64::from(z1).powi(2) + x2 * f64::from(z2).powi(2))
    }
}

impl fmt::Display for Solute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Solute {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Solute::ALL
            .into_iter()
            .find(|solute| solute.name() == s)
            .ok_or_else(|| PropertyError::UnknownSolute {
                solute: s.to_owned(),
                valid: Solute::ALL.iter().map(|s| s.name().to_owned()).collect(),
            })
    }
}

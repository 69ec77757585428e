//! Correlation descriptors.
//!
//! A [`FormulaDescriptor`] is the typed record behind one literature
//! correlation: its name, native units, validity domain, and the function
//! that evaluates it. Descriptors are plain `Copy` data assembled in `const`
//! registration tables, one table per formula module.

use brine_core::ValidityRange;

use crate::{ConcentrationUnit, Property, PropertyError, Solute, TemperatureUnit};

/// A native unit paired with the validity range expressed in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeDomain<U> {
    pub unit: U,
    pub range: ValidityRange,
}

impl<U> NativeDomain<U> {
    #[must_use]
    pub const fn new(unit: U, min: f64, max: f64) -> Self {
        Self {
            unit,
            range: ValidityRange::new(min, max),
        }
    }
}

/// The result of a solution correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A solution value only.
    Plain(f64),
    /// A solution value along with the pure-solvent value at the same temperature.
    WithReference { reference: f64, value: f64 },
}

impl Outcome {
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Outcome::Plain(value) | Outcome::WithReference { value, .. } => value,
        }
    }

    #[must_use]
    pub fn reference(self) -> Option<f64> {
        match self {
            Outcome::Plain(_) => None,
            Outcome::WithReference { reference, .. } => Some(reference),
        }
    }
}

/// How a correlation is evaluated, in its native units.
#[derive(Debug, Clone, Copy)]
pub enum Correlation {
    /// A pure-water property of temperature.
    Water(fn(f64) -> f64),
    /// A solution property of concentration and temperature, in that order.
    Solution(fn(f64, f64) -> Outcome),
    /// A saturation concentration of temperature, expressed in `unit`.
    Saturated {
        unit: ConcentrationUnit,
        compute: fn(f64) -> Result<f64, PropertyError>,
    },
}

/// One correlation for one property and (optional) solute.
#[derive(Debug, Clone, Copy)]
pub struct FormulaDescriptor {
    /// Source name, unique within its property and solute.
    pub source: &'static str,
    /// Whether this is the source used when none is requested.
    pub default: bool,
    pub temperature: NativeDomain<TemperatureUnit>,
    /// Absent for correlations of temperature only.
    pub concentration: Option<NativeDomain<ConcentrationUnit>>,
    /// Whether the correlation also yields the pure-solvent value.
    pub has_solvent_reference: bool,
    /// Curation remark on the declared ranges, if any.
    pub note: Option<&'static str>,
    pub correlation: Correlation,
}

impl FormulaDescriptor {
    /// Describes a pure-water correlation.
    #[must_use]
    pub const fn water(
        source: &'static str,
        temperature: NativeDomain<TemperatureUnit>,
        compute: fn(f64) -> f64,
    ) -> Self {
        Self {
            source,
            default: false,
            temperature,
            concentration: None,
            has_solvent_reference: false,
            note: None,
            correlation: Correlation::Water(compute),
        }
    }

    /// Describes a solution correlation of concentration and temperature.
    #[must_use]
    pub const fn solution(
        source: &'static str,
        temperature: NativeDomain<TemperatureUnit>,
        concentration: NativeDomain<ConcentrationUnit>,
        compute: fn(f64, f64) -> Outcome,
    ) -> Self {
        Self {
            source,
            default: false,
            temperature,
            concentration: Some(concentration),
            has_solvent_reference: false,
            note: None,
            correlation: Correlation::Solution(compute),
        }
    }

    /// Describes a saturation correlation of temperature only.
    #[must_use]
    pub const fn saturated(
        source: &'static str,
        temperature: NativeDomain<TemperatureUnit>,
        unit: ConcentrationUnit,
        compute: fn(f64) -> Result<f64, PropertyError>,
    ) -> Self {
        Self {
            source,
            default: false,
            temperature,
            concentration: None,
            has_solvent_reference: false,
            note: None,
            correlation: Correlation::Saturated { unit, compute },
        }
    }

    #[must_use]
    pub const fn as_default(self) -> Self {
        Self {
            default: true,
            ..self
        }
    }

    #[must_use]
    pub const fn with_reference(self) -> Self {
        Self {
            has_solvent_reference: true,
            ..self
        }
    }

    #[must_use]
    pub const fn with_note(self, note: &'static str) -> Self {
        Self {
            note: Some(note),
            ..self
        }
    }
}

/// A descriptor bound to the property and solute it answers for.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub property: Property,
    /// `None` for pure water.
    pub solute: Option<Solute>,
    pub descriptor: FormulaDescriptor,
}

impl Registration {
    #[must_use]
    pub const fn water(property: Property, descriptor: FormulaDescriptor) -> Self {
        Self {
            property,
            solute: None,
            descriptor,
        }
    }

    #[must_use]
    pub const fn solution(
        property: Property,
        solute: Solute,
        descriptor: FormulaDescriptor,
    ) -> Self {
        Self {
            property,
            solute: Some(solute),
            descriptor,
        }
    }
}

//! Concentration conversions.
//!
//! Mole fraction, mass fraction, molality, and mass ratio are related in
//! closed form through the solute's molar mass; [`basic`] converts among
//! them using the mass fraction as pivot. Molarity also depends on the
//! solution density, so conversions to and from `c` go through a
//! [`UnitConverter`] borrowing a [`PropertyEvaluator`].

use brine_core::{FnModel, Values};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ConcentrationUnit, Evaluated, FormulaDescriptor, Property, PropertyError, PropertyEvaluator,
    Solute, Temperature, constants::WATER_MOLAR_MASS, evaluate::SolutionRequest,
};

/// Settings for molarity conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MolarityOptions {
    /// Density source; the registry default when `None`.
    pub density_source: Option<String>,
    /// Outer mass-fraction limits for the search when converting from
    /// molarity. The search starts inside the density source's own range
    /// and only grows toward the upper limit when needed.
    pub w_bounds: [f64; 2],
}

impl Default for MolarityOptions {
    fn default() -> Self {
        Self {
            density_source: None,
            w_bounds: [0.0, 0.99],
        }
    }
}

impl MolarityOptions {
    #[must_use]
    pub fn with_density_source(self, source: impl Into<String>) -> Self {
        Self {
            density_source: Some(source.into()),
            ..self
        }
    }

    /// Checks that `w_bounds` is an ordered interval within `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] naming the offending bounds.
    pub fn validate(&self) -> Result<(), PropertyError> {
        let [lo, hi] = self.w_bounds;
        if lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo < hi && hi < 1.0 {
            Ok(())
        } else {
            Err(PropertyError::InvalidInput(format!(
                "molarity search bounds [{lo}, {hi}] must satisfy 0 <= lo < hi < 1"
            )))
        }
    }
}

/// The units convertible without a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasicUnit {
    MoleFraction,
    MassFraction,
    Molality,
    MassRatio,
}

impl TryFrom<ConcentrationUnit> for BasicUnit {
    type Error = PropertyError;

    fn try_from(unit: ConcentrationUnit) -> Result<Self, Self::Error> {
        match unit {
            ConcentrationUnit::MoleFraction => Ok(BasicUnit::MoleFraction),
            ConcentrationUnit::MassFraction => Ok(BasicUnit::MassFraction),
            ConcentrationUnit::Molality => Ok(BasicUnit::Molality),
            ConcentrationUnit::MassRatio => Ok(BasicUnit::MassRatio),
            ConcentrationUnit::Molarity => Err(PropertyError::InvalidInput(
                "molarity needs a solution density to convert".into(),
            )),
        }
    }
}

impl BasicUnit {
    fn to_mass_fraction(self, value: f64, molar_mass: f64) -> f64 {
        match self {
            BasicUnit::MassFraction => value,
            BasicUnit::MassRatio => value / (1.0 + value),
            BasicUnit::Molality => {
                let r = value * molar_mass;
                r / (1.0 + r)
            }
            BasicUnit::MoleFraction => {
                let solute = value * molar_mass;
                solute / (solute + (1.0 - value) * WATER_MOLAR_MASS)
            }
        }
    }

    fn from_mass_fraction(self, w: f64, molar_mass: f64) -> f64 {
        match self {
            BasicUnit::MassFraction => w,
            BasicUnit::MassRatio => w / (1.0 - w),
            BasicUnit::Molality => w / ((1.0 - w) * molar_mass),
            BasicUnit::MoleFraction => {
                let solute = w / molar_mass;
                solute / (solute + (1.0 - w) / WATER_MOLAR_MASS)
            }
        }
    }
}

/// Converts among `x`, `w`, `m`, and `r` for `solute`.
///
/// # Errors
///
/// Returns [`PropertyError::InvalidInput`] if either unit is molarity.
pub fn basic(
    values: &Values,
    from: ConcentrationUnit,
    to: ConcentrationUnit,
    solute: Solute,
) -> Result<Values, PropertyError> {
    if from == to {
        return Ok(values.clone());
    }
    let (from, to) = (BasicUnit::try_from(from)?, BasicUnit::try_from(to)?);
    let molar_mass = solute.molar_mass_si();
    Ok(values.map(|value| to.from_mass_fraction(from.to_mass_fraction(value, molar_mass), molar_mass)))
}

/// Converts concentrations in any unit, including molarity.
///
/// Obtained from [`PropertyEvaluator::converter`].
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<'a> {
    evaluator: &'a PropertyEvaluator,
}

impl<'a> UnitConverter<'a> {
    pub(crate) fn new(evaluator: &'a PropertyEvaluator) -> Self {
        Self { evaluator }
    }

    fn options(&self) -> &'a MolarityOptions {
        &self.evaluator.config().molarity
    }

    /// Converts `values` from one unit to another.
    ///
    /// `temperature` only matters when molarity is involved. Warnings from
    /// the density evaluation are returned with the result.
    ///
    /// # Errors
    ///
    /// Fails if the density source cannot be resolved, if a molarity target
    /// is outside what the density correlation reaches within the search
    /// bounds, or on incompatible array shapes.
    pub fn convert(
        &self,
        values: &Values,
        from: ConcentrationUnit,
        to: ConcentrationUnit,
        solute: Solute,
        temperature: &Temperature,
    ) -> Result<Evaluated, PropertyError> {
        if from.is_basic() && to.is_basic() {
            return basic(values, from, to, solute).map(Evaluated::plain);
        }

        if from == to {
            return Ok(Evaluated::plain(values.clone()));
        }

        if from == ConcentrationUnit::Molarity {
            let w = self.from_molarity(values, solute, temperature)?;
            let value = basic(&w.value, ConcentrationUnit::MassFraction, to, solute)?;
            return Ok(Evaluated { value, ..w });
        }

        let w = basic(values, from, ConcentrationUnit::MassFraction, solute)?;
        self.to_molarity(&w, solute, temperature)
    }

    /// Molarity (mol/m³) of mass fractions `w`, as `c = ρ(w, T) w / M`.
    ///
    /// # Errors
    ///
    /// Fails if the density cannot be evaluated.
    pub fn to_molarity(
        &self,
        w: &Values,
        solute: Solute,
        temperature: &Temperature,
    ) -> Result<Evaluated, PropertyError> {
        let density = self.density(w, solute, temperature)?;
        let molar_mass = solute.molar_mass_si();
        let value = density.value.zip_with(w, |rho, w| rho * w / molar_mass)?;
        Ok(Evaluated {
            value,
            reference: None,
            warnings: density.warnings,
        })
    }

    /// Mass fractions matching molarities `c`.
    ///
    /// Each element is found by inverting [`to_molarity`](Self::to_molarity)
    /// over a bracket that starts at the density source's native range and
    /// grows toward [`MolarityOptions::w_bounds`] only while molarity keeps
    /// increasing. Density warnings raised while searching are dropped; the
    /// returned warnings belong to the final mass fractions.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InversionDomain`] for a molarity the density
    /// correlation does not reach.
    pub fn from_molarity(
        &self,
        c: &Values,
        solute: Solute,
        temperature: &Temperature,
    ) -> Result<Evaluated, PropertyError> {
        let inverter = self.evaluator.config().inverter();
        let native_max = self.native_max_mass_fraction(solute)?;

        let w = c.try_zip_with(&temperature.values, |target, t| {
            let at = Temperature::new(t, temperature.unit);
            let molarity = |w: f64| -> Result<f64, PropertyError> {
                self.to_molarity(&Values::Scalar(w), solute, &at)?
                    .value
                    .as_scalar()
                    .ok_or_else(|| PropertyError::Calculation("expected a scalar molarity".into()))
            };
            let bounds = self.search_bounds(native_max, target, &molarity)?;
            let forward = FnModel::new(|w: &f64| molarity(*w));
            Ok::<_, PropertyError>(inverter.invert(&forward, target, bounds)?.x)
        })?;

        let density = self.density(&w, solute, temperature)?;
        Ok(Evaluated {
            value: w,
            reference: None,
            warnings: density.warnings,
        })
    }

    /// Mass-fraction bracket for reaching molarity `target`.
    ///
    /// The upper end starts at `native_max` and grows geometrically until
    /// it reaches `target`, hits the outer bound, or molarity stops
    /// increasing. Density fits diverge far outside their range, so the
    /// last increasing point is kept.
    fn search_bounds(
        &self,
        native_max: f64,
        target: f64,
        molarity: impl Fn(f64) -> Result<f64, PropertyError>,
    ) -> Result<[f64; 2], PropertyError> {
        const GROWTH: f64 = 1.25;

        let [lo, outer] = self.options().w_bounds;
        let mut hi = native_max.clamp(lo, outer);
        if hi <= lo {
            hi = outer;
        }

        let mut c_hi = molarity(hi)?;
        while c_hi < target && hi < outer {
            let next = (hi * GROWTH).min(outer);
            let c_next = molarity(next)?;
            if !c_next.is_finite() || c_next <= c_hi {
                break;
            }
            (hi, c_hi) = (next, c_next);
        }
        Ok([lo, hi])
    }

    /// Upper end of the density source's concentration range, as a mass fraction.
    fn native_max_mass_fraction(&self, solute: Solute) -> Result<f64, PropertyError> {
        let descriptor = self.density_descriptor(solute)?;
        let Some(domain) = descriptor.concentration else {
            return Ok(self.options().w_bounds[1]);
        };
        basic(
            &Values::Scalar(domain.range.max),
            domain.unit,
            ConcentrationUnit::MassFraction,
            solute,
        )?
        .as_scalar()
        .ok_or_else(|| PropertyError::Calculation("expected a scalar mass fraction".into()))
    }

    fn density_descriptor(&self, solute: Solute) -> Result<&'a FormulaDescriptor, PropertyError> {
        let source = self.options().density_source.as_deref();
        let descriptor = self
            .evaluator
            .registry()
            .resolve(Property::Density, Some(solute), source)?;

        if descriptor.concentration.map(|domain| domain.unit) == Some(ConcentrationUnit::Molarity) {
            return Err(PropertyError::InvalidInput(format!(
                "density source `{}` for {solute} is expressed in molarity and cannot convert molarity",
                descriptor.source
            )));
        }
        Ok(descriptor)
    }

    fn density(
        &self,
        w: &Values,
        solute: Solute,
        temperature: &Temperature,
    ) -> Result<Evaluated, PropertyError> {
        let descriptor = self.density_descriptor(solute)?;
        self.evaluator.evaluate(&SolutionRequest {
            property: Property::Density,
            solute,
            temperature,
            source: Some(descriptor.source),
            relative: false,
            concentration: (ConcentrationUnit::MassFraction, w),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn basic_scalar(value: f64, from: &str, to: &str, solute: Solute) -> f64 {
        let values = basic(&Values::from(value), from.parse().unwrap(), to.parse().unwrap(), solute)
            .unwrap();
        values.as_scalar().unwrap()
    }

    #[test]
    fn sodium_chloride_conversions() {
        assert_relative_eq!(basic_scalar(0.4, "w", "x", Solute::NaCl), 0.1705, max_relative = 1e-3);
        assert_relative_eq!(basic_scalar(10.0, "m", "w", Solute::NaCl), 0.3689, max_relative = 1e-3);
        assert_relative_eq!(basic_scalar(0.25, "w", "r", Solute::NaCl), 1.0 / 3.0);
    }

    #[test]
    fn lithium_chloride_molality() {
        assert_relative_eq!(basic_scalar(17.0, "m", "w", Solute::LiCl), 0.4188, max_relative = 1e-3);
    }

    #[test]
    fn zero_concentration_is_zero_everywhere() {
        for unit in ["x", "w", "m", "r"] {
            assert_relative_eq!(basic_scalar(0.0, "w", unit, Solute::CaCl2), 0.0);
        }
    }

    #[test]
    fn molarity_is_not_basic() {
        let err = basic(
            &Values::from(1.0),
            ConcentrationUnit::Molarity,
            ConcentrationUnit::MassFraction,
            Solute::NaCl,
        )
        .unwrap_err();
        assert!(matches!(err, PropertyError::InvalidInput(_)));
    }

    #[test]
    fn molarity_bounds_are_validated() {
        assert!(MolarityOptions::default().validate().is_ok());

        let reversed = MolarityOptions {
            w_bounds: [0.5, 0.1],
            ..MolarityOptions::default()
        };
        assert!(reversed.validate().is_err());

        let saturated = MolarityOptions {
            w_bounds: [0.0, 1.0],
            ..MolarityOptions::default()
        };
        assert!(saturated.validate().is_err());
    }
}

//! Property evaluation.
//!
//! [`PropertyEvaluator`] owns a [`FormulaRegistry`] and an [`EngineConfig`]
//! and answers property requests for water and for solutions. Each request
//! goes through the same pipeline:
//!
//! 1. resolve the correlation (failing fast on an unknown name),
//! 2. reject relative output from a source without a solvent reference,
//! 3. convert the temperature to the native unit and check its range,
//! 4. convert the single concentration to the native unit and check its range,
//! 5. evaluate the correlation elementwise,
//! 6. divide by the solvent reference when relative output is requested.
//!
//! Range excursions never fail a request. They are returned as
//! [`RangeWarning`]s next to the values.

use brine_core::{Parameter, RangeWarning, Values, check};
use brine_solve::{Inverter, equation::bisection};
use tracing::debug;

use crate::{
    ConcentrationUnit, Correlation, FormulaDescriptor, FormulaRegistry, MolarityOptions, Outcome,
    Property, PropertyError, Solute, Temperature, TemperatureUnit,
    convert::UnitConverter,
};

/// Numerical settings of a [`PropertyEvaluator`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Bisection settings shared by every inversion.
    pub solver: bisection::Config,
    pub molarity: MolarityOptions,
    /// Relative slack when deciding whether an inversion target is reachable.
    pub domain_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver: bisection::Config::default(),
            molarity: MolarityOptions::default(),
            domain_tolerance: 1e-9,
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), PropertyError> {
        self.solver
            .validate()
            .map_err(|reason| PropertyError::InvalidInput(reason.to_owned()))?;
        self.molarity.validate()?;
        if !self.domain_tolerance.is_finite() || self.domain_tolerance < 0.0 {
            return Err(PropertyError::InvalidInput(
                "domain_tolerance must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn inverter(&self) -> Inverter {
        Inverter::new(self.solver).with_domain_tolerance(self.domain_tolerance)
    }
}

/// Values computed by the engine along with any range excursions.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    pub value: Values,
    /// Pure-solvent values, for sources with a solvent reference.
    pub reference: Option<Values>,
    pub warnings: Vec<RangeWarning>,
}

impl Evaluated {
    pub(crate) fn plain(value: Values) -> Self {
        Self {
            value,
            reference: None,
            warnings: Vec::new(),
        }
    }

    /// Returns `true` if every input was inside its validity range.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A solution property request, keyed by name.
///
/// Names are parsed when the query is evaluated, so a misspelled property,
/// solute, unit, or source fails with an error listing the alternatives.
///
/// ```
/// use brine_props::{PropertyEvaluator, SolutionQuery};
///
/// let engine = PropertyEvaluator::standard()?;
/// let query = SolutionQuery::new("density")
///     .solute("NaCl")
///     .temperature(25.0, "C")
///     .concentration("w", 0.1);
///
/// let density = engine.solution(&query)?;
/// assert!((density.value.as_scalar().unwrap() - 1069.0).abs() < 1.0);
/// # Ok::<(), brine_props::PropertyError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionQuery {
    property: String,
    solute: String,
    temperature: Values,
    temperature_unit: String,
    source: Option<String>,
    relative: bool,
    concentrations: Vec<(String, Values)>,
}

impl SolutionQuery {
    /// A query for `property` of NaCl at 25 °C, with no concentration yet.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            solute: Solute::NaCl.name().to_owned(),
            temperature: Values::Scalar(25.0),
            temperature_unit: TemperatureUnit::Celsius.tag().to_owned(),
            source: None,
            relative: false,
            concentrations: Vec::new(),
        }
    }

    #[must_use]
    pub fn solute(self, solute: impl Into<String>) -> Self {
        Self {
            solute: solute.into(),
            ..self
        }
    }

    #[must_use]
    pub fn temperature(self, values: impl Into<Values>, unit: impl Into<String>) -> Self {
        Self {
            temperature: values.into(),
            temperature_unit: unit.into(),
            ..self
        }
    }

    #[must_use]
    pub fn source(self, source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }

    /// Requests the value divided by the pure-solvent value.
    #[must_use]
    pub fn relative(self, relative: bool) -> Self {
        Self { relative, ..self }
    }

    /// Adds a concentration. Exactly one is required at evaluation.
    #[must_use]
    pub fn concentration(mut self, unit: impl Into<String>, values: impl Into<Values>) -> Self {
        self.concentrations.push((unit.into(), values.into()));
        self
    }

    /// The same query for another property.
    pub(crate) fn for_property(&self, property: Property) -> Self {
        Self {
            property: property.name().to_owned(),
            ..self.clone()
        }
    }

    /// Parses every name and returns the typed parts.
    pub(crate) fn parse(&self) -> Result<ParsedQuery<'_>, PropertyError> {
        let property: Property = self.property.parse()?;
        let solute: Solute = self.solute.parse()?;
        let temperature = Temperature::parse(self.temperature.clone(), &self.temperature_unit)?;

        let units = self
            .concentrations
            .iter()
            .map(|(unit, _)| unit.parse::<ConcentrationUnit>())
            .collect::<Result<Vec<_>, _>>()?;

        let concentration = match (units.as_slice(), self.concentrations.as_slice()) {
            ([unit], [(_, values)]) => (*unit, values),
            _ => {
                return Err(PropertyError::AmbiguousOrMissingConcentration {
                    given: self.concentrations.iter().map(|(unit, _)| unit.clone()).collect(),
                });
            }
        };

        Ok(ParsedQuery {
            property,
            solute,
            temperature,
            source: self.source.as_deref(),
            relative: self.relative,
            concentration,
        })
    }
}

/// A [`SolutionQuery`] with every name parsed.
pub(crate) struct ParsedQuery<'a> {
    pub property: Property,
    pub solute: Solute,
    pub temperature: Temperature,
    pub source: Option<&'a str>,
    pub relative: bool,
    pub concentration: (ConcentrationUnit, &'a Values),
}

impl ParsedQuery<'_> {
    pub(crate) fn request(&self) -> SolutionRequest<'_> {
        SolutionRequest {
            property: self.property,
            solute: self.solute,
            temperature: &self.temperature,
            source: self.source,
            relative: self.relative,
            concentration: self.concentration,
        }
    }
}

/// A typed solution request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolutionRequest<'a> {
    pub property: Property,
    pub solute: Solute,
    pub temperature: &'a Temperature,
    pub source: Option<&'a str>,
    pub relative: bool,
    pub concentration: (ConcentrationUnit, &'a Values),
}

/// Evaluates water and solution properties from a registry.
#[derive(Debug, Clone)]
pub struct PropertyEvaluator {
    registry: FormulaRegistry,
    config: EngineConfig,
}

impl PropertyEvaluator {
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] if `config` is invalid.
    pub fn new(registry: FormulaRegistry, config: EngineConfig) -> Result<Self, PropertyError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// An evaluator over the built-in correlations with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Registry`] if the built-in tables are inconsistent.
    pub fn standard() -> Result<Self, PropertyError> {
        Self::new(FormulaRegistry::standard()?, EngineConfig::default())
    }

    #[must_use]
    pub fn registry(&self) -> &FormulaRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn converter(&self) -> UnitConverter<'_> {
        UnitConverter::new(self)
    }

    /// Evaluates a pure-water property.
    ///
    /// # Errors
    ///
    /// Fails if the property has no water correlation or `source` is unknown.
    pub fn water(
        &self,
        property: Property,
        temperature: &Temperature,
        source: Option<&str>,
    ) -> Result<Evaluated, PropertyError> {
        let descriptor = self.registry.resolve(property, None, source)?;
        let Correlation::Water(compute) = descriptor.correlation else {
            return Err(kind_error(descriptor, property));
        };

        let (t, warnings) = native_temperature(descriptor, temperature);
        Ok(Evaluated {
            value: t.map(compute),
            reference: None,
            warnings,
        })
    }

    /// Evaluates a solution property.
    ///
    /// # Errors
    ///
    /// Structural problems are reported before any computation:
    /// - unknown property, solute, unit, or source names,
    /// - zero or several concentrations,
    /// - relative output from a source without a solvent reference.
    ///
    /// Numerical failures (molarity inversion, incompatible array lengths)
    /// are reported afterwards.
    pub fn solution(&self, query: &SolutionQuery) -> Result<Evaluated, PropertyError> {
        let parsed = query.parse()?;
        self.evaluate(&parsed.request())
    }

    pub(crate) fn evaluate(&self, request: &SolutionRequest<'_>) -> Result<Evaluated, PropertyError> {
        let SolutionRequest {
            property,
            solute,
            temperature,
            source,
            relative,
            concentration: (unit, values),
        } = *request;

        let descriptor = self.registry.resolve(property, Some(solute), source)?;
        if relative && !descriptor.has_solvent_reference {
            return Err(PropertyError::UnsupportedRelativeMode {
                name: descriptor.source,
                property,
            });
        }
        let (compute, domain) = match (descriptor.correlation, descriptor.concentration) {
            (Correlation::Solution(compute), Some(domain)) => (compute, domain),
            (Correlation::Saturated { .. }, _) => {
                return Err(PropertyError::InvalidInput(format!(
                    "{property} depends on temperature only; use `solubility` instead"
                )));
            }
            _ => return Err(kind_error(descriptor, property)),
        };

        debug!(%property, %solute, source = descriptor.source, relative, "evaluating solution property");
        let (t, mut warnings) = native_temperature(descriptor, temperature);

        let converted = self
            .converter()
            .convert(values, unit, domain.unit, solute, temperature)?;
        warnings.extend(converted.warnings);
        let c = converted.value;
        warnings.extend(check(
            &c,
            domain.range,
            Parameter::Concentration,
            domain.unit.tag(),
            descriptor.source,
        ));

        let (value, reference) = apply(&c, &t, compute)?;
        let value = match (&reference, relative) {
            (Some(reference), true) => value.zip_with(reference, |v, r| v / r)?,
            _ => value,
        };

        Ok(Evaluated {
            value,
            reference,
            warnings: warnings
                .into_iter()
                .map(|warning| attach_solute(warning, solute))
                .collect(),
        })
    }

    /// Saturation concentration of `solute` at `temperature`, in `unit`.
    ///
    /// # Errors
    ///
    /// Fails on unknown names, or if the saturation search fails.
    pub fn solubility(
        &self,
        solute: &str,
        temperature: &Temperature,
        source: Option<&str>,
        unit: &str,
    ) -> Result<Evaluated, PropertyError> {
        let solute: Solute = solute.parse()?;
        let out_unit: ConcentrationUnit = unit.parse()?;

        let descriptor = self
            .registry
            .resolve(Property::Solubility, Some(solute), source)?;
        let Correlation::Saturated {
            unit: native_unit,
            compute,
        } = descriptor.correlation
        else {
            return Err(kind_error(descriptor, Property::Solubility));
        };

        let (t, mut warnings) = native_temperature(descriptor, temperature);
        let saturated = t.try_map(compute)?;

        let converted =
            self.converter()
                .convert(&saturated, native_unit, out_unit, solute, temperature)?;
        warnings.extend(converted.warnings);

        Ok(Evaluated {
            value: converted.value,
            reference: None,
            warnings: warnings
                .into_iter()
                .map(|warning| attach_solute(warning, solute))
                .collect(),
        })
    }

    /// Converts a concentration between units, parsing every name.
    ///
    /// Matching units return the values unchanged without looking at the
    /// solute, so even an unknown solute name is accepted in that case.
    ///
    /// # Errors
    ///
    /// Fails on unknown unit or solute names, or if a molarity conversion fails.
    pub fn convert(
        &self,
        values: &Values,
        from: &str,
        to: &str,
        solute: &str,
        temperature: &Temperature,
    ) -> Result<Evaluated, PropertyError> {
        let from: ConcentrationUnit = from.parse()?;
        let to: ConcentrationUnit = to.parse()?;
        if from == to {
            return Ok(Evaluated::plain(values.clone()));
        }
        let solute: Solute = solute.parse()?;
        self.converter()
            .convert(values, from, to, solute, temperature)
            .map(|converted| Evaluated {
                warnings: converted
                    .warnings
                    .into_iter()
                    .map(|warning| attach_solute(warning, solute))
                    .collect(),
                ..converted
            })
    }
}

/// Converts `temperature` to the descriptor's native unit and checks its range.
pub(crate) fn native_temperature(
    descriptor: &FormulaDescriptor,
    temperature: &Temperature,
) -> (Values, Vec<RangeWarning>) {
    let native = descriptor.temperature;
    let t = temperature.to(native.unit);
    let warning = check(
        &t,
        native.range,
        Parameter::Temperature,
        native.unit.tag(),
        descriptor.source,
    );
    (t, warning.into_iter().collect())
}

/// Evaluates a correlation elementwise, splitting values from references.
fn apply(
    c: &Values,
    t: &Values,
    compute: fn(f64, f64) -> Outcome,
) -> Result<(Values, Option<Values>), PropertyError> {
    let mut references = Vec::new();
    let value = c.zip_with(t, |c, t| {
        let outcome = compute(c, t);
        references.extend(outcome.reference());
        outcome.value()
    })?;

    let reference = if references.len() != value.len() {
        None
    } else if value.is_scalar() {
        references.first().copied().map(Values::Scalar)
    } else {
        Some(Values::from(references))
    };

    Ok((value, reference))
}

fn attach_solute(warning: RangeWarning, solute: Solute) -> RangeWarning {
    if warning.solute.is_some() {
        warning
    } else {
        warning.with_solute(solute.name())
    }
}

fn kind_error(descriptor: &FormulaDescriptor, property: Property) -> PropertyError {
    PropertyError::Calculation(format!(
        "source `{}` for {property} has an unexpected correlation kind",
        descriptor.source
    ))
}

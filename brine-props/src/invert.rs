//! Inverse queries.
//!
//! Both inversions search the native domain of the selected correlation,
//! so a target the correlation cannot reach inside its validity range fails
//! with [`PropertyError::InversionDomain`] instead of extrapolating.

use std::convert::Infallible;

use brine_core::{FnModel, Parameter, Values, check};

use crate::{
    ConcentrationUnit, Correlation, Evaluated, Property, PropertyError, PropertyEvaluator, Solute,
    Temperature, TemperatureUnit,
    evaluate::native_temperature,
};

/// A request to recover concentrations from values of a solution property.
///
/// ```
/// use brine_props::{ConcentrationInversion, PropertyEvaluator};
///
/// let engine = PropertyEvaluator::standard()?;
/// let w = engine.concentration_from(&ConcentrationInversion::new(0.39).unit("w"))?;
/// assert!((w.value.as_scalar().unwrap() - 0.49).abs() < 0.01);
/// # Ok::<(), brine_props::PropertyError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationInversion {
    target: Values,
    property: String,
    solute: String,
    temperature: Values,
    temperature_unit: String,
    source: Option<String>,
    unit: String,
}

impl ConcentrationInversion {
    /// Inverts NaCl water activity to mass fraction at 25 °C unless changed.
    #[must_use]
    pub fn new(target: impl Into<Values>) -> Self {
        Self {
            target: target.into(),
            property: Property::WaterActivity.name().to_owned(),
            solute: Solute::NaCl.name().to_owned(),
            temperature: Values::Scalar(25.0),
            temperature_unit: TemperatureUnit::Celsius.tag().to_owned(),
            source: None,
            unit: ConcentrationUnit::MassFraction.tag().to_owned(),
        }
    }

    #[must_use]
    pub fn property(self, property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..self
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

    /// Output concentration unit.
    #[must_use]
    pub fn unit(self, unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            ..self
        }
    }
}

/// Humidity descriptions accepted by [`PropertyEvaluator::dewpoint`].
#[derive(Debug, Clone, PartialEq)]
pub enum Humidity {
    /// Partial pressure of water vapor (Pa).
    VaporPressure(Values),
    /// Relative humidity (%) at an air temperature.
    RelativeHumidity {
        rh_percent: Values,
        temperature: Temperature,
    },
    /// Water activity of a surface in equilibrium with the air.
    Activity { aw: Values, temperature: Temperature },
}

impl Humidity {
    /// Relative humidity at 25 °C.
    #[must_use]
    pub fn relative(rh_percent: impl Into<Values>) -> Self {
        Humidity::RelativeHumidity {
            rh_percent: rh_percent.into(),
            temperature: Temperature::default(),
        }
    }

    /// Water activity at 25 °C.
    #[must_use]
    pub fn activity(aw: impl Into<Values>) -> Self {
        Humidity::Activity {
            aw: aw.into(),
            temperature: Temperature::default(),
        }
    }
}

impl PropertyEvaluator {
    /// Concentrations at which a solution property takes the target values.
    ///
    /// Each target is inverted independently (broadcast against the
    /// temperature) over the selected source's native concentration range,
    /// then converted to the requested unit.
    ///
    /// # Errors
    ///
    /// - Structural errors for unknown names, before any search.
    /// - [`PropertyError::InvalidInput`] for a property without concentration input.
    /// - [`PropertyError::InversionDomain`] for an unreachable target.
    pub fn concentration_from(
        &self,
        request: &ConcentrationInversion,
    ) -> Result<Evaluated, PropertyError> {
        let property: Property = request.property.parse()?;
        let solute: Solute = request.solute.parse()?;
        let temperature = Temperature::parse(request.temperature.clone(), &request.temperature_unit)?;
        let unit: ConcentrationUnit = request.unit.parse()?;

        let descriptor = self
            .registry()
            .resolve(property, Some(solute), request.source.as_deref())?;
        let (Correlation::Solution(compute), Some(domain)) =
            (descriptor.correlation, descriptor.concentration)
        else {
            return Err(PropertyError::InvalidInput(format!(
                "{property} of {solute} from `{}` is not a function of concentration",
                descriptor.source
            )));
        };

        let (t, mut warnings) = native_temperature(descriptor, &temperature);
        let inverter = self.config().inverter();
        let bounds = domain.range.as_array();

        let native = request.target.try_zip_with(&t, |target, t| {
            let forward = FnModel::new(|c: &f64| Ok::<_, Infallible>(compute(*c, t).value()));
            Ok::<_, PropertyError>(inverter.invert(&forward, target, bounds)?.x)
        })?;
        warnings.extend(check(
            &native,
            domain.range,
            Parameter::Concentration,
            domain.unit.tag(),
            descriptor.source,
        ));

        let converted = self
            .converter()
            .convert(&native, domain.unit, unit, solute, &temperature)?;
        warnings.extend(converted.warnings);

        Ok(Evaluated {
            value: converted.value,
            reference: None,
            warnings: warnings
                .into_iter()
                .map(|warning| warning.with_solute(solute.name()))
                .collect(),
        })
    }

    /// Dew point temperatures, in `unit`, for the given humidity.
    ///
    /// The vapor pressure correlation is inverted over its own temperature
    /// range. Relative humidity and activity are turned into a partial
    /// pressure with the same correlation at their air temperature.
    ///
    /// # Errors
    ///
    /// Fails on unknown names, incompatible array lengths, or a partial
    /// pressure the correlation cannot reach.
    pub fn dewpoint(
        &self,
        humidity: &Humidity,
        unit: &str,
        source: Option<&str>,
    ) -> Result<Evaluated, PropertyError> {
        let unit: TemperatureUnit = unit.parse()?;
        let descriptor = self
            .registry()
            .resolve(Property::VaporPressure, None, source)?;
        let Correlation::Water(psat) = descriptor.correlation else {
            return Err(PropertyError::Calculation(format!(
                "vapor pressure source `{}` is not a function of temperature",
                descriptor.source
            )));
        };

        let (pressure, mut warnings) = match humidity {
            Humidity::VaporPressure(p) => (p.clone(), Vec::new()),
            Humidity::RelativeHumidity {
                rh_percent,
                temperature,
            } => {
                let saturation = self.water(Property::VaporPressure, temperature, source)?;
                let p = rh_percent.zip_with(&saturation.value, |rh, p| rh / 100.0 * p)?;
                (p, saturation.warnings)
            }
            Humidity::Activity { aw, temperature } => {
                let saturation = self.water(Property::VaporPressure, temperature, source)?;
                let p = aw.zip_with(&saturation.value, |aw, p| aw * p)?;
                (p, saturation.warnings)
            }
        };

        let native = descriptor.temperature;
        let forward = FnModel::new(|t: &f64| Ok::<_, Infallible>(psat(*t)));
        let dewpoint = self
            .config()
            .inverter()
            .invert_all(&forward, &pressure, native.range.as_array())?;
        warnings.extend(check(
            &dewpoint,
            native.range,
            Parameter::Temperature,
            native.unit.tag(),
            descriptor.source,
        ));

        Ok(Evaluated {
            value: Temperature::new(dewpoint, native.unit).to(unit),
            reference: None,
            warnings,
        })
    }
}

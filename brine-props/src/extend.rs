//! Quantities derived from water activity.

use crate::{
    ConcentrationUnit, Evaluated, Property, PropertyError, PropertyEvaluator, SolutionQuery,
    Solute, Temperature, TemperatureUnit,
    constants::{GAS_CONSTANT, WATER_MOLAR_MASS},
    evaluate::SolutionRequest,
};

impl PropertyEvaluator {
    /// Molar volume of liquid water (m³/mol), from the atmospheric density.
    ///
    /// # Errors
    ///
    /// Fails only if the registry has no water density.
    pub fn water_molar_volume(&self, temperature: &Temperature) -> Result<Evaluated, PropertyError> {
        let density = self.water(Property::Density, temperature, None)?;
        Ok(Evaluated {
            value: density.value.map(|rho| WATER_MOLAR_MASS / rho),
            ..density
        })
    }

    /// Osmotic pressure (Pa), `Π = −R T ln(a_w) / v_m`.
    ///
    /// The query's property is ignored; water activity is evaluated with
    /// the query's solute, temperature, source, and concentration.
    ///
    /// # Errors
    ///
    /// Fails as [`PropertyEvaluator::solution`] does for water activity.
    pub fn osmotic_pressure(&self, query: &SolutionQuery) -> Result<Evaluated, PropertyError> {
        let (activity, temperature) = self.water_activity(query)?;
        let molar_volume = self.water_molar_volume(&temperature)?;
        let t = temperature.to(TemperatureUnit::Kelvin);

        let ln_aw = activity.value.map(f64::ln);
        let rt_over_v = t.zip_with(&molar_volume.value, |t, v| GAS_CONSTANT * t / v)?;
        let value = ln_aw.zip_with(&rt_over_v, |ln_aw, rt_v| -rt_v * ln_aw)?;

        let mut warnings = activity.warnings;
        warnings.extend(molar_volume.warnings);
        Ok(Evaluated {
            value,
            reference: None,
            warnings,
        })
    }

    /// Molal osmotic coefficient, `φ = −ln(a_w) / (M_w ν m)`.
    ///
    /// Undefined (NaN) at zero concentration. The query's property is
    /// ignored as in [`PropertyEvaluator::osmotic_pressure`].
    ///
    /// # Errors
    ///
    /// Fails as [`PropertyEvaluator::solution`] does for water activity.
    pub fn osmotic_coefficient(&self, query: &SolutionQuery) -> Result<Evaluated, PropertyError> {
        let query = query.for_property(Property::WaterActivity);
        let parsed = query.parse()?;
        let activity = self.evaluate(&parsed.request())?;

        let (unit, values) = parsed.concentration;
        let molality = self.converter().convert(
            values,
            unit,
            ConcentrationUnit::Molality,
            parsed.solute,
            &parsed.temperature,
        )?;

        let nu = parsed.solute.ion_count();
        let value = activity
            .value
            .zip_with(&molality.value, |aw, m| -aw.ln() / (WATER_MOLAR_MASS * nu * m))?;

        let mut warnings = activity.warnings;
        warnings.extend(molality.warnings);
        Ok(Evaluated {
            value,
            reference: None,
            warnings,
        })
    }

    /// Water activity of a solution saturated with `solute`.
    ///
    /// This is the equilibrium relative humidity above the salt. The
    /// saturation molality comes from `solubility_source` and the activity
    /// from `activity_source`; either falls back to the registry default.
    /// Warnings from both steps are returned.
    ///
    /// # Errors
    ///
    /// Fails as [`PropertyEvaluator::solubility`] does, or if the solute has
    /// no water activity correlation.
    pub fn aw_saturated(
        &self,
        solute: &str,
        temperature: &Temperature,
        solubility_source: Option<&str>,
        activity_source: Option<&str>,
    ) -> Result<Evaluated, PropertyError> {
        let saturated = self.solubility(solute, temperature, solubility_source, "m")?;
        let solute: Solute = solute.parse()?;

        let activity = self.evaluate(&SolutionRequest {
            property: Property::WaterActivity,
            solute,
            temperature,
            source: activity_source,
            relative: false,
            concentration: (ConcentrationUnit::Molality, &saturated.value),
        })?;

        let mut warnings = saturated.warnings;
        warnings.extend(activity.warnings);
        Ok(Evaluated {
            value: activity.value,
            reference: None,
            warnings,
        })
    }

    fn water_activity(
        &self,
        query: &SolutionQuery,
    ) -> Result<(Evaluated, Temperature), PropertyError> {
        let query = query.for_property(Property::WaterActivity);
        let parsed = query.parse()?;
        let activity = self.evaluate(&parsed.request())?;
        Ok((activity, parsed.temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn engine() -> PropertyEvaluator {
        PropertyEvaluator::standard().unwrap()
    }

    #[test]
    fn molar_volume_at_room_temperature() -> Result<(), PropertyError> {
        let v = engine().water_molar_volume(&Temperature::celsius(25.0))?;
        assert_relative_eq!(v.value.as_scalar().unwrap(), 1.806_87e-5, max_relative = 1e-4);
        Ok(())
    }

    #[test]
    fn osmotic_pressure_of_concentrated_brine() -> Result<(), PropertyError> {
        let query = SolutionQuery::new("density").concentration("m", 4.0);
        let pressure = engine().osmotic_pressure(&query)?;
        assert_relative_eq!(pressure.value.as_scalar().unwrap(), 22.218e6, max_relative = 1e-3);
        Ok(())
    }

    #[test]
    fn pure_water_has_no_osmotic_pressure() -> Result<(), PropertyError> {
        let query = SolutionQuery::new("water activity").concentration("w", 0.0);
        let pressure = engine().osmotic_pressure(&query)?;
        assert_relative_eq!(pressure.value.as_scalar().unwrap(), 0.0);
        Ok(())
    }

    #[test]
    fn osmotic_coefficient_near_saturation() -> Result<(), PropertyError> {
        let query = SolutionQuery::new("water activity").concentration("w", 0.27);
        let phi = engine().osmotic_coefficient(&query)?;
        assert_relative_eq!(phi.value.as_scalar().unwrap(), 1.2935, max_relative = 1e-3);
        Ok(())
    }

    #[test]
    fn saturated_humidity_above_common_salts() -> Result<(), PropertyError> {
        let at_25 = Temperature::celsius(25.0);
        let aw = |solute| {
            engine()
                .aw_saturated(solute, &at_25, None, None)
                .map(|aw| aw.value.as_scalar().unwrap())
        };
        assert_relative_eq!(aw("NaCl")?, 0.753, epsilon = 2e-3);
        assert_relative_eq!(aw("KCl")?, 0.843, epsilon = 2e-3);
        assert_relative_eq!(aw("LiCl")?, 0.106, epsilon = 2e-3);
        Ok(())
    }

    #[test]
    fn saturated_humidity_warns_outside_either_range() -> Result<(), PropertyError> {
        // Clegg is a 25 °C correlation; the solubility table is not.
        let aw = engine().aw_saturated("NaCl", &Temperature::celsius(40.0), None, None)?;
        assert!(aw.warnings.iter().any(|w| w.source == "Clegg"));
        assert!(aw.warnings.iter().all(|w| w.source != "CRC Handbook"));
        assert_relative_eq!(aw.value.as_scalar().unwrap(), 0.7495, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn saturated_humidity_without_a_solubility_source() {
        let err = engine()
            .aw_saturated("CaCl2", &Temperature::celsius(25.0), None, None)
            .unwrap_err();
        let PropertyError::UnknownSolute { valid, .. } = err else {
            panic!("expected an unknown solute, got {err:?}");
        };
        assert_eq!(valid, ["KCl", "LiCl", "NaCl"]);
    }

    #[test]
    fn osmotic_coefficient_agrees_with_pitzer() -> Result<(), PropertyError> {
        let query = SolutionQuery::new("water activity")
            .source("Pitzer")
            .temperature(298.15, "K")
            .concentration("m", 6.0);
        let phi = engine().osmotic_coefficient(&query)?;
        assert_relative_eq!(phi.value.as_scalar().unwrap(), 1.2732, max_relative = 1e-3);
        Ok(())
    }
}

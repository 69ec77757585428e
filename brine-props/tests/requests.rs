//! Request validation, shape handling, and source selection.

use approx::assert_relative_eq;
use brine_core::{Parameter, Values};
use brine_props::{
    ConcentrationInversion, Property, PropertyError, PropertyEvaluator, SolutionQuery, Solute,
    Temperature, convert_concentration,
};

fn engine() -> PropertyEvaluator {
    PropertyEvaluator::standard().expect("built-in registry is consistent")
}

#[test]
fn structural_errors_win_over_range_problems() {
    let engine = engine();
    let far_out = SolutionQuery::new("density").temperature(900.0, "C");

    let cases = [
        (far_out.clone().solute("NaBr").concentration("w", 5.0), "unknown solute"),
        (far_out.clone().concentration("ppm", 5.0), "unknown unit"),
        (far_out.clone().source("Nobody").concentration("w", 5.0), "unknown source"),
        (
            far_out.clone().concentration("w", 5.0).concentration("x", 5.0),
            "exactly one concentration",
        ),
        (
            SolutionQuery::new("viscosity").concentration("w", 5.0),
            "unknown property",
        ),
    ];

    for (query, message) in cases {
        let err = engine.solution(&query).unwrap_err();
        assert!(
            err.to_string().contains(message),
            "`{err}` should mention `{message}`"
        );
    }
}

#[test]
fn unknown_source_lists_the_registered_ones() {
    let query = SolutionQuery::new("water activity")
        .source("Nobody")
        .concentration("m", 1.0);
    let err = engine().solution(&query).unwrap_err();
    assert_eq!(
        err,
        PropertyError::UnknownSource {
            name: "Nobody".into(),
            property: Property::WaterActivity,
            solute: Some(Solute::NaCl),
            valid: vec!["Clegg", "Tang", "Pitzer"],
        }
    );
}

#[test]
fn solute_registered_elsewhere_but_not_for_this_property() {
    let query = SolutionQuery::new("refractive index")
        .solute("LiBr")
        .concentration("w", 0.1);
    let PropertyError::UnknownSolute { solute, valid } = engine().solution(&query).unwrap_err()
    else {
        panic!("expected an unknown solute error");
    };
    assert_eq!(solute, "LiBr");
    assert_eq!(valid, vec!["KCl".to_owned(), "NaCl".to_owned()]);
}

#[test]
fn temperature_only_property_points_to_solubility() {
    let query = SolutionQuery::new("solubility").concentration("w", 0.1);
    let err = engine().solution(&query).unwrap_err();
    assert!(matches!(err, PropertyError::InvalidInput(ref reason) if reason.contains("solubility")));
}

#[test]
fn default_and_explicit_default_agree() -> Result<(), PropertyError> {
    let engine = engine();
    for (property, solute) in [
        ("density", "NaCl"),
        ("water activity", "LiCl"),
        ("surface tension", "CaCl2"),
        ("refractive index", "KCl"),
    ] {
        let parsed_property: Property = property.parse()?;
        let parsed_solute: Solute = solute.parse()?;
        let default = engine
            .registry()
            .default_source(parsed_property, Some(parsed_solute))?;

        let query = SolutionQuery::new(property)
            .solute(solute)
            .concentration("w", 0.1);
        let implicit = engine.solution(&query)?;
        let explicit = engine.solution(&query.source(default))?;
        assert_eq!(implicit, explicit);
    }
    Ok(())
}

#[test]
fn shapes_follow_the_inputs() -> Result<(), PropertyError> {
    let engine = engine();

    let scalar = engine.solution(&SolutionQuery::new("density").concentration("w", 0))?;
    assert!(scalar.value.is_scalar());

    let vector = engine.solution(
        &SolutionQuery::new("density")
            .temperature([10.0, 20.0, 30.0, 40.0], "C")
            .concentration("w", 0.1),
    )?;
    let densities = vector.value.to_vec();
    assert_eq!(densities.len(), 4);
    assert!(densities.windows(2).all(|pair| pair[0] > pair[1]));

    let paired = engine.solution(
        &SolutionQuery::new("surface tension")
            .temperature([20.0, 30.0], "C")
            .concentration("m", [1.0, 2.0]),
    )?;
    assert_eq!(paired.value.len(), 2);
    assert_eq!(paired.reference.map(|r| r.len()), Some(2));
    Ok(())
}

#[test]
fn relative_surface_tension_exceeds_one() -> Result<(), PropertyError> {
    let query = SolutionQuery::new("surface tension")
        .concentration("w", [0.05, 0.15])
        .relative(true);
    let relative = engine().solution(&query)?.value.to_vec();
    assert!(relative.iter().all(|&ratio| ratio > 1.0));
    assert!(relative[1] > relative[0]);
    Ok(())
}

#[test]
fn range_warnings_use_native_units() -> Result<(), PropertyError> {
    // 20 mol/kg is a mole fraction of about 0.265, past the 0.25 limit.
    let query = SolutionQuery::new("water activity").concentration("m", 20.0);
    let aw = engine().solution(&query)?;

    assert!(aw.value.as_scalar().is_some_and(f64::is_finite));
    let [warning] = aw.warnings.as_slice() else {
        panic!("expected one warning, got {:?}", aw.warnings);
    };
    assert_eq!(warning.parameter, Parameter::Concentration);
    assert_eq!(warning.unit, "x");
    assert_eq!(warning.source, "Clegg");
    assert_eq!(warning.solute.as_deref(), Some("NaCl"));
    assert_relative_eq!(warning.observed[0], 20.0 / (20.0 + 1.0 / 0.018_015_268), max_relative = 1e-9);
    Ok(())
}

#[test]
fn identity_conversion_ignores_the_solute() -> Result<(), PropertyError> {
    let values = convert_concentration([0.1, 0.2], "w", "w", "Unobtainium", 25, "C")?;
    assert_eq!(values, Values::from([0.1, 0.2]));

    let err = convert_concentration(0.1, "w", "m", "Unobtainium", 25, "C").unwrap_err();
    assert!(matches!(err, PropertyError::UnknownSolute { .. }));
    Ok(())
}

#[test]
fn molarity_out_of_reach_is_a_domain_error() {
    let err = engine()
        .convert(&Values::from(1e6), "c", "w", "NaCl", &Temperature::default())
        .unwrap_err();
    assert!(matches!(err, PropertyError::InversionDomain { .. }));
}

#[test]
fn inversion_requests_validate_names_first() {
    let engine = engine();

    let bad_unit = ConcentrationInversion::new(0.5).unit("ppm");
    assert!(matches!(
        engine.concentration_from(&bad_unit).unwrap_err(),
        PropertyError::UnknownUnit { .. }
    ));

    let bad_source = ConcentrationInversion::new(0.5).source("Nobody");
    assert!(matches!(
        engine.concentration_from(&bad_source).unwrap_err(),
        PropertyError::UnknownSource { .. }
    ));
}

#[test]
fn engine_is_shareable_across_threads() -> Result<(), PropertyError> {
    let engine = engine();
    let query = SolutionQuery::new("water activity").concentration("m", 3.0);
    let expected = engine.solution(&query)?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.solution(&query)))
            .collect();
        for handle in handles {
            let result = handle.join().expect("worker thread panicked");
            assert_eq!(result.as_ref(), Ok(&expected));
        }
    });
    Ok(())
}

//! Property-based checks of conversions and inversions.

use brine_core::Values;
use brine_props::{
    ConcentrationInversion, ConcentrationUnit, PropertyEvaluator, SolutionQuery, Solute,
    convert::basic, default_engine,
};
use proptest::prelude::*;

const BASIC_UNITS: [ConcentrationUnit; 4] = [
    ConcentrationUnit::MoleFraction,
    ConcentrationUnit::MassFraction,
    ConcentrationUnit::Molality,
    ConcentrationUnit::MassRatio,
];

fn engine() -> &'static PropertyEvaluator {
    default_engine().expect("built-in registry is consistent")
}

fn scalar(values: &Values) -> f64 {
    values.as_scalar().expect("scalar in, scalar out")
}

/// Evaluates water activity at `value` and inverts it back to `unit`.
fn round_trip(solute: &str, unit: &str, value: f64, celsius: f64) -> f64 {
    let query = SolutionQuery::new("water activity")
        .solute(solute)
        .temperature(celsius, "C")
        .concentration(unit, value);
    let aw = engine().solution(&query).expect("forward evaluation");

    let request = ConcentrationInversion::new(aw.value)
        .solute(solute)
        .temperature(celsius, "C")
        .unit(unit);
    scalar(&engine().concentration_from(&request).expect("inversion").value)
}

proptest! {
    #[test]
    fn basic_conversions_round_trip(
        w in 0.001_f64..0.9,
        solute in prop::sample::select(Solute::ALL.to_vec()),
        from in prop::sample::select(BASIC_UNITS.to_vec()),
        to in prop::sample::select(BASIC_UNITS.to_vec()),
    ) {
        let start = basic(&Values::from(w), ConcentrationUnit::MassFraction, from, solute).unwrap();
        let there = basic(&start, from, to, solute).unwrap();
        let back = basic(&there, to, from, solute).unwrap();

        let (start, back) = (scalar(&start), scalar(&back));
        prop_assert!((back - start).abs() <= 1e-9 * start.abs());
    }

    #[test]
    fn identity_conversion_is_exact(value in -1e3_f64..1e3) {
        let same = engine()
            .convert(&Values::from(value), "c", "c", "NaCl", &Default::default())
            .unwrap();
        prop_assert_eq!(scalar(&same.value), value);
    }

    #[test]
    fn molarity_round_trips_for_molality_density_fits(
        w in 0.005_f64..0.14,
        solute in prop::sample::select(vec!["KCl", "MgCl2", "KI", "CaCl2"]),
    ) {
        let c = engine()
            .convert(&Values::from(w), "w", "c", solute, &Default::default())
            .unwrap();
        prop_assert!(scalar(&c.value) > 0.0);

        let back = engine().convert(&c.value, "c", "w", solute, &Default::default()).unwrap();
        let back = scalar(&back.value);
        prop_assert!((back - w).abs() < 1e-9, "{solute}: {back} != {w}");
    }

    #[test]
    fn clegg_activity_inverts_to_mole_fraction(x in 0.001_f64..0.249) {
        let recovered = round_trip("NaCl", "x", x, 25.0);
        prop_assert!((recovered - x).abs() < 1e-8, "{recovered} != {x}");
    }

    #[test]
    fn potassium_chloride_activity_inverts_to_molality(m in 0.01_f64..12.9) {
        let recovered = round_trip("KCl", "m", m, 25.0);
        prop_assert!((recovered - m).abs() < 1e-7 * m.max(1.0), "{recovered} != {m}");
    }

    #[test]
    fn lithium_chloride_activity_inverts_at_any_temperature(
        w in 0.01_f64..0.54,
        celsius in 0.0_f64..100.0,
    ) {
        let recovered = round_trip("LiCl", "w", w, celsius);
        prop_assert!((recovered - w).abs() < 1e-8, "{recovered} != {w}");
    }
}

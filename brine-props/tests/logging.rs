//! Range warnings reach the `tracing` subscriber from the free functions.

use std::{
    io,
    sync::{Arc, Mutex},
};

use brine_props::{SolutionQuery, evaluate_solution_property};

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer lock")).into_owned()
    }
}

fn capture<T>(run: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let output = tracing::subscriber::with_default(subscriber, run);
    (output, captured.contents())
}

#[test]
fn excursions_are_logged_and_values_returned() {
    let query = SolutionQuery::new("density")
        .temperature(120.0, "C")
        .concentration("w", 0.1);
    let (density, logs) = capture(|| evaluate_solution_property(&query));

    let density = density.expect("range excursions are not errors");
    assert!(density.as_scalar().is_some_and(f64::is_finite));

    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("Temperature outside of validity range"), "{logs}");
    assert!(logs.contains("Simion"), "{logs}");
    assert!(logs.contains("NaCl"), "{logs}");
    assert!(!logs.contains("Concentration outside"), "{logs}");
}

#[test]
fn in_range_requests_log_nothing() {
    let query = SolutionQuery::new("water activity").concentration("m", 2.0);
    let (aw, logs) = capture(|| evaluate_solution_property(&query));

    assert!(aw.is_ok());
    assert!(logs.is_empty(), "{logs}");
}

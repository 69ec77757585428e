use crate::{FormulaDescriptor, NativeDomain, Property, Registration, TemperatureUnit};

const RANGE: NativeDomain<TemperatureUnit> =
    NativeDomain::new(TemperatureUnit::Kelvin, 273.15, 373.15);

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::water(
        Property::DiffusivityInAir,
        FormulaDescriptor::water("Massman", RANGE, massman).as_default(),
    ),
    Registration::water(
        Property::DiffusivityInAir,
        FormulaDescriptor::water("MM72", RANGE, marrero_mason),
    ),
];

const T0: f64 = 273.15;

/// Massman (1998). `t` in K, result in m²/s.
fn massman(t: f64) -> f64 {
    0.2178 * (t / T0).powf(1.81) * 1e-4
}

/// Marrero & Mason (1972), as reported by Massman. `t` in K, result in m²/s.
fn marrero_mason(t: f64) -> f64 {
    0.209 * (t / T0).powf(2.072) * 1e-4
}

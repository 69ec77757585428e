use crate::{FormulaDescriptor, NativeDomain, Property, Registration, TemperatureUnit};

pub(crate) const REGISTRATIONS: &[Registration] = &[Registration::water(
    Property::Viscosity,
    FormulaDescriptor::water(
        "Huber",
        NativeDomain::new(TemperatureUnit::Kelvin, 253.15, 383.15),
        huber,
    )
    .as_default(),
)];

/// Huber et al. (2009), IAPWS, at atmospheric pressure. `t` in K, result in Pa·s.
fn huber(t: f64) -> f64 {
    const A: [f64; 4] = [280.68, 511.45, 61.131, 0.459_03];
    const B: [f64; 4] = [-1.9, -7.7, -19.6, -40.0];

    let reduced = t / 300.0;
    let sum: f64 = A.iter().zip(B).map(|(a, b)| a * reduced.powf(b)).sum();
    sum * 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn room_temperature_viscosity() {
        assert_relative_eq!(huber(298.15), 0.890e-3, max_relative = 2e-3);
    }
}

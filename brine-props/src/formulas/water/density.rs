use crate::{
    FormulaDescriptor, NativeDomain, Property, Registration, TemperatureUnit,
    constants::{CRITICAL_DENSITY, CRITICAL_TEMPERATURE},
};

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::water(
        Property::Density,
        FormulaDescriptor::water(
            "Kell",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 150.0),
            kell,
        )
        .as_default(),
    ),
    Registration::water(
        Property::DensitySat,
        FormulaDescriptor::water(
            "Wagner",
            NativeDomain::new(TemperatureUnit::Kelvin, 273.15, CRITICAL_TEMPERATURE),
            wagner_saturated,
        )
        .as_default(),
    ),
    Registration::water(
        Property::DensitySat,
        FormulaDescriptor::water(
            "Conde",
            NativeDomain::new(TemperatureUnit::Kelvin, 273.15, CRITICAL_TEMPERATURE),
            conde_saturated,
        ),
    ),
];

/// Kell (1975), density at atmospheric pressure. `t` in °C, result in kg/m³.
pub(crate) fn kell(t: f64) -> f64 {
    let numerator = 999.839_52 + 16.945_176 * t - 7.987_040_1e-3 * t.powi(2)
        - 46.170_461e-6 * t.powi(3)
        + 105.563_02e-9 * t.powi(4)
        - 280.542_53e-12 * t.powi(5);
    numerator / (1.0 + 16.879_850e-3 * t)
}

/// Wagner & Pruß (2002), saturated liquid density. `t` in K, result in kg/m³.
pub(crate) fn wagner_saturated(t: f64) -> f64 {
    saturated_series(
        t,
        [
            1.992_740_64,
            1.099_653_42,
            -0.510_839_303,
            -1.754_934_79,
            -45.517_035_2,
            -6.746_944_50e5,
        ],
    )
}

/// Conde (2004), refit of the saturated liquid density. `t` in K, result in kg/m³.
fn conde_saturated(t: f64) -> f64 {
    saturated_series(
        t,
        [
            1.993_771_843_0,
            1.098_521_160_4,
            -0.509_449_299_6,
            -1.761_912_427_0,
            -44.900_548_026_7,
            -723_692.261_863_2,
        ],
    )
}

fn saturated_series(t: f64, c: [f64; 6]) -> f64 {
    const EXPONENTS: [f64; 6] = [
        1.0 / 3.0,
        2.0 / 3.0,
        5.0 / 3.0,
        16.0 / 3.0,
        43.0 / 3.0,
        110.0 / 3.0,
    ];

    let phi = 1.0 - t / CRITICAL_TEMPERATURE;
    let series: f64 = c
        .iter()
        .zip(EXPONENTS)
        .map(|(ci, exponent)| ci * phi.powf(exponent))
        .sum();

    CRITICAL_DENSITY * (1.0 + series)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn kell_reference_points() {
        assert_relative_eq!(kell(4.0), 999.97, max_relative = 1e-5);
        assert_relative_eq!(kell(25.0), 997.04, max_relative = 1e-5);
        assert_relative_eq!(kell(60.0), 983.20, max_relative = 1e-5);
    }

    #[test]
    fn saturated_density_sources_agree() {
        let t = 298.15;
        assert_relative_eq!(wagner_saturated(t), 997.0, max_relative = 1e-3);
        assert_relative_eq!(conde_saturated(t), wagner_saturated(t), max_relative = 1e-3);
        assert_relative_eq!(wagner_saturated(CRITICAL_TEMPERATURE), CRITICAL_DENSITY);
    }
}

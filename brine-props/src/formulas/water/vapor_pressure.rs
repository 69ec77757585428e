use crate::{
    FormulaDescriptor, NativeDomain, Property, Registration, TemperatureUnit,
    constants::{ATMOSPHERIC_PRESSURE, CRITICAL_PRESSURE, CRITICAL_TEMPERATURE},
};

pub(crate) const REGISTRATIONS: &[Registration] = &[
    Registration::water(
        Property::VaporPressure,
        FormulaDescriptor::water(
            "Wexler",
            NativeDomain::new(TemperatureUnit::Kelvin, 273.15, 373.15),
            wexler,
        ),
    ),
    Registration::water(
        Property::VaporPressure,
        FormulaDescriptor::water(
            "Bridgeman",
            NativeDomain::new(TemperatureUnit::Celsius, 0.0, 374.15),
            bridgeman,
        ),
    ),
    Registration::water(
        Property::VaporPressure,
        // Strictly valid from the triple point, 273.16 K.
        FormulaDescriptor::water(
            "Wagner",
            NativeDomain::new(TemperatureUnit::Kelvin, 273.15, CRITICAL_TEMPERATURE),
            wagner,
        )
        .as_default(),
    ),
];

/// Wexler (1976), eq. 17. `t` in K, result in Pa.
fn wexler(t: f64) -> f64 {
    const E: [f64; 6] = [
        -7.511_52e3,
        9.653_896_44e1,
        2.399_897e-2,
        -1.165_455_1e-5,
        -1.281_033_6e-8,
        2.099_840_5e-11,
    ];
    const B: f64 = -1.215_079_9e1;

    let series: f64 = E
        .iter()
        .zip(-1..)
        .map(|(e, power)| e * t.powi(power))
        .sum();

    (B * t.ln() + series).exp()
}

/// Bridgeman & Aldrich (1964). `t` in °C, result in Pa.
fn bridgeman(t: f64) -> f64 {
    const A: f64 = 1.064_233_20;
    const B: f64 = 1.013_792_1;
    const C: f64 = 5.835_31e-4;
    const D: f64 = 4.163_852_82;
    const E: f64 = 237.098_157;
    const F: f64 = 0.302_315_74;
    const G: f64 = 3.377_565e-3;
    const H: f64 = 1.152_894;
    const K: f64 = 0.745_794;
    const L: f64 = 654.290_6;
    const M: f64 = 266.778;
    const TX: f64 = 187.0;

    let tx = TX / 100.0;
    let y1 = D * (t - TX) / (t + E);
    let x = (t - TX) / 100.0;
    let z = tx * (-1.0 + 2.0 * (H - K * (L / (t + M)).acosh()));
    let a = z.powi(2) * (tx.powi(2) - z.powi(2)) / (F * (1.0 + G * t));

    let shifted = x - 0.01 * a;
    let y2 = 3.0 * 3.0_f64.sqrt() / (2.0 * tx.powi(3)) * shifted * (tx.powi(2) - shifted.powi(2))
        / 100.0;

    let log_p = A + y1 - B * (1.0 + C * t) * y2;
    10.0_f64.powf(log_p) * ATMOSPHERIC_PRESSURE
}

/// Wagner & Pruß (2002), IAPWS. `t` in K, result in Pa.
pub(crate) fn wagner(t: f64) -> f64 {
    const A: [f64; 6] = [
        -7.859_517_83,
        1.844_082_59,
        -11.786_649_7,
        22.680_741_1,
        -15.961_871_9,
        1.801_225_02,
    ];

    let v = 1.0 - t / CRITICAL_TEMPERATURE;
    let series = A[0] * v
        + A[1] * v.powf(1.5)
        + A[2] * v.powi(3)
        + A[3] * v.powf(3.5)
        + A[4] * v.powi(4)
        + A[5] * v.powf(7.5);

    (CRITICAL_TEMPERATURE / t * series).exp() * CRITICAL_PRESSURE
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sources_agree_at_room_temperature() {
        let t = 298.15;
        assert_relative_eq!(wagner(t), 3169.8, max_relative = 1e-4);
        assert_relative_eq!(wexler(t), 3169.8, max_relative = 2e-3);
        assert_relative_eq!(bridgeman(25.0), 3169.8, max_relative = 2e-3);
    }

    #[test]
    fn wagner_near_freezing_and_boiling() {
        assert_relative_eq!(wagner(274.15), 657.08, max_relative = 1e-4);
        assert_relative_eq!(wagner(373.124), 101_325.0, max_relative = 1e-3);
    }

    #[test]
    fn wagner_reaches_critical_pressure() {
        assert_relative_eq!(wagner(CRITICAL_TEMPERATURE), CRITICAL_PRESSURE);
    }
}

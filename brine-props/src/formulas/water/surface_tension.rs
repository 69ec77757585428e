use crate::{
    FormulaDescriptor, NativeDomain, Property, Registration, TemperatureUnit,
    constants::CRITICAL_TEMPERATURE,
};

pub(crate) const REGISTRATIONS: &[Registration] = &[Registration::water(
    Property::SurfaceTension,
    FormulaDescriptor::water(
        "IAPWS",
        NativeDomain::new(TemperatureUnit::Kelvin, 248.15, CRITICAL_TEMPERATURE),
        iapws,
    )
    .as_default(),
)];

/// IAPWS (2014) release on the surface tension of ordinary water.
/// `t` in K, result in N/m.
pub(crate) fn iapws(t: f64) -> f64 {
    const B: f64 = 0.2358;
    const MU: f64 = 1.256;
    const BETA: f64 = -0.625;

    let tau = 1.0 - t / CRITICAL_TEMPERATURE;
    B * tau.powf(MU) * (1.0 + BETA * tau)
}

//! Pure-water correlations.

pub(crate) mod density;
pub(crate) mod diffusivity;
pub(crate) mod surface_tension;
pub(crate) mod vapor_pressure;
pub(crate) mod viscosity;

use crate::Registration;

pub(crate) const TABLES: &[&[Registration]] = &[
    vapor_pressure::REGISTRATIONS,
    surface_tension::REGISTRATIONS,
    density::REGISTRATIONS,
    viscosity::REGISTRATIONS,
    diffusivity::REGISTRATIONS,
];

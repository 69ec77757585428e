//! Electrolyte solution correlations.

pub(crate) mod activity_coefficient;
pub(crate) mod conductivity;
pub(crate) mod density;
pub(crate) mod refractive_index;
pub(crate) mod solubility;
pub(crate) mod surface_tension;
pub(crate) mod water_activity;

mod debye_huckel;
mod pitzer;

use crate::Registration;

pub(crate) const TABLES: &[&[Registration]] = &[
    density::REGISTRATIONS,
    surface_tension::REGISTRATIONS,
    water_activity::REGISTRATIONS,
    activity_coefficient::REGISTRATIONS,
    refractive_index::REGISTRATIONS,
    conductivity::REGISTRATIONS,
    solubility::REGISTRATIONS,
];

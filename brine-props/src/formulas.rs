//! The built-in correlation tables.

pub(crate) mod solutions;
pub(crate) mod water;

use crate::Registration;

/// Every built-in registration, water tables first.
pub(crate) fn registrations() -> impl Iterator<Item = &'static Registration> {
    water::TABLES
        .iter()
        .chain(solutions::TABLES)
        .flat_map(|table| *table)
}

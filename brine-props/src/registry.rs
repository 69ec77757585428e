//! Lookup of correlations by property, solute, and source name.

use std::collections::BTreeMap;

use crate::{
    Correlation, FormulaDescriptor, Property, PropertyError, Registration, RegistryError, Solute,
    formulas,
};

/// Key of a registry entry: a property of water (`None`) or of a solute.
type Key = (Property, Option<Solute>);

#[derive(Debug, Clone)]
struct Entry {
    /// Descriptors in registration order.
    formulas: Vec<FormulaDescriptor>,
    /// Index of the default descriptor in `formulas`.
    default: usize,
}

/// An immutable index of every known correlation.
///
/// Each `(property, solute)` pair maps to one or more descriptors with
/// distinct source names, exactly one of which is the default.
#[derive(Debug, Clone)]
pub struct FormulaRegistry {
    entries: BTreeMap<Key, Entry>,
}

impl FormulaRegistry {
    /// Builds the registry from the built-in correlation tables.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the built-in tables are inconsistent.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::from_registrations(formulas::registrations())
    }

    /// Builds a registry from arbitrary registrations.
    ///
    /// # Errors
    ///
    /// Returns the first defect found:
    /// - a correlation kind that does not match its property and solute,
    /// - a concentration domain on a correlation without concentration input
    ///   (or a missing one on a correlation with it),
    /// - a source name registered twice for the same key,
    /// - two defaults, or no default, for the same key.
    pub fn from_registrations<'a>(
        registrations: impl IntoIterator<Item = &'a Registration>,
    ) -> Result<Self, RegistryError> {
        let mut pending: BTreeMap<Key, (Vec<FormulaDescriptor>, Option<usize>)> = BTreeMap::new();

        for registration in registrations {
            let Registration {
                property,
                solute,
                descriptor,
            } = *registration;
            validate_kind(property, solute, &descriptor)?;

            let (formulas, default) = pending.entry((property, solute)).or_default();

            if formulas.iter().any(|f| f.source == descriptor.source) {
                return Err(RegistryError::DuplicateSource {
                    property,
                    solute,
                    name: descriptor.source,
                });
            }

            if descriptor.default {
                if let Some(index) = *default {
                    return Err(RegistryError::DuplicateDefault {
                        property,
                        solute,
                        first: formulas[index].source,
                        second: descriptor.source,
                    });
                }
                *default = Some(formulas.len());
            }

            formulas.push(descriptor);
        }

        let entries = pending
            .into_iter()
            .map(|((property, solute), (formulas, default))| {
                let default = default.ok_or(RegistryError::MissingDefault { property, solute })?;
                Ok(((property, solute), Entry { formulas, default }))
            })
            .collect::<Result<_, RegistryError>>()?;

        Ok(Self { entries })
    }

    /// Selects a correlation.
    ///
    /// `solute` is `None` for pure water. Without an explicit `source`, the
    /// default for the pair is returned.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::UnknownProperty`] if nothing is registered for the
    ///   property in that context (water or solution).
    /// - [`PropertyError::UnknownSolute`] if the property exists for
    ///   solutions but not for this solute.
    /// - [`PropertyError::UnknownSource`] if `source` is not registered for
    ///   the pair.
    pub fn resolve(
        &self,
        property: Property,
        solute: Option<Solute>,
        source: Option<&str>,
    ) -> Result<&FormulaDescriptor, PropertyError> {
        let entry = self.entry(property, solute)?;

        let Some(name) = source else {
            return Ok(&entry.formulas[entry.default]);
        };

        entry
            .formulas
            .iter()
            .find(|formula| formula.source == name)
            .ok_or_else(|| PropertyError::UnknownSource {
                name: name.to_owned(),
                property,
                solute,
                valid: entry.formulas.iter().map(|f| f.source).collect(),
            })
    }

    /// Source names registered for the pair, in registration order.
    ///
    /// # Errors
    ///
    /// Fails like [`resolve`](Self::resolve) for an unknown property or solute.
    pub fn sources(
        &self,
        property: Property,
        solute: Option<Solute>,
    ) -> Result<Vec<&'static str>, PropertyError> {
        let entry = self.entry(property, solute)?;
        Ok(entry.formulas.iter().map(|f| f.source).collect())
    }

    /// Name of the default source for the pair.
    ///
    /// # Errors
    ///
    /// Fails like [`resolve`](Self::resolve) for an unknown property or solute.
    pub fn default_source(
        &self,
        property: Property,
        solute: Option<Solute>,
    ) -> Result<&'static str, PropertyError> {
        self.resolve(property, solute, None).map(|f| f.source)
    }

    /// Solutes with at least one correlation for `property`, in name order.
    #[must_use]
    pub fn solutes(&self, property: Property) -> Vec<Solute> {
        let mut solutes: Vec<Solute> = self
            .entries
            .keys()
            .filter(|(p, _)| *p == property)
            .filter_map(|(_, solute)| *solute)
            .collect();
        solutes.sort_by_key(|solute| solute.name());
        solutes
    }

    /// Properties available for pure water.
    #[must_use]
    pub fn water_properties(&self) -> Vec<Property> {
        self.properties(|solute| solute.is_none())
    }

    /// Properties available for at least one solute.
    #[must_use]
    pub fn solution_properties(&self) -> Vec<Property> {
        self.properties(|solute| solute.is_some())
    }

    fn properties(&self, keep: impl Fn(Option<Solute>) -> bool) -> Vec<Property> {
        let mut properties: Vec<Property> = self
            .entries
            .keys()
            .filter(|(_, solute)| keep(*solute))
            .map(|(property, _)| *property)
            .collect();
        properties.dedup();
        properties
    }

    fn entry(&self, property: Property, solute: Option<Solute>) -> Result<&Entry, PropertyError> {
        if let Some(entry) = self.entries.get(&(property, solute)) {
            return Ok(entry);
        }

        match solute {
            None => Err(unknown_property(property, self.water_properties())),
            Some(solute) => {
                let solutes = self.solutes(property);
                if solutes.is_empty() {
                    Err(unknown_property(property, self.solution_properties()))
                } else {
                    Err(PropertyError::UnknownSolute {
                        solute: solute.name().to_owned(),
                        valid: solutes.iter().map(|s| s.name().to_owned()).collect(),
                    })
                }
            }
        }
    }
}

fn unknown_property(property: Property, valid: Vec<Property>) -> PropertyError {
    PropertyError::UnknownProperty {
        property: property.name().to_owned(),
        valid: valid.into_iter().map(Property::name).collect(),
    }
}

/// Checks that the correlation kind fits the property and solute.
fn validate_kind(
    property: Property,
    solute: Option<Solute>,
    descriptor: &FormulaDescriptor,
) -> Result<(), RegistryError> {
    let kind_matches = match descriptor.correlation {
        Correlation::Water(_) => solute.is_none(),
        Correlation::Solution(_) => solute.is_some() && !property.is_saturated(),
        Correlation::Saturated { .. } => solute.is_some() && property.is_saturated(),
    };
    if !kind_matches {
        return Err(RegistryError::KindMismatch {
            property,
            solute,
            name: descriptor.source,
        });
    }

    let takes_concentration = matches!(descriptor.correlation, Correlation::Solution(_));
    if takes_concentration != descriptor.concentration.is_some() {
        return Err(RegistryError::ConcentrationDomain {
            property,
            solute,
            name: descriptor.source,
        });
    }

    Ok(())
}

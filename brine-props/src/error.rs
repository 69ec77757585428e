use brine_core::ShapeError;
use brine_solve::{InverseError, equation::bisection};
use thiserror::Error;

use crate::{Property, Solute};

/// Errors that may occur when evaluating, converting, or inverting properties.
///
/// Structural variants (`Unknown*`, `AmbiguousOrMissingConcentration`,
/// `UnsupportedRelativeMode`) are raised before any numeric work and list
/// the valid alternatives. Leaving a correlation's validity range is never
/// an error; see [`RangeWarning`](brine_core::RangeWarning).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// A unit tag outside the fixed enumeration.
    #[error("unknown unit `{unit}`; valid units are {}", valid.join(", "))]
    UnknownUnit {
        unit: String,
        valid: Vec<&'static str>,
    },

    /// A solute missing from the solute table or not registered for a property.
    #[error("unknown solute `{solute}`; valid solutes are {}", valid.join(", "))]
    UnknownSolute { solute: String, valid: Vec<String> },

    /// A property name that is not recognized in this context.
    #[error("unknown property `{property}`; valid properties are {}", valid.join(", "))]
    UnknownProperty {
        property: String,
        valid: Vec<&'static str>,
    },

    /// An explicit source name not registered for the property and solute.
    #[error(
        "unknown source `{name}` for {}; valid sources are {}",
        describe_key(*property, *solute),
        valid.join(", ")
    )]
    UnknownSource {
        name: String,
        property: Property,
        solute: Option<Solute>,
        valid: Vec<&'static str>,
    },

    /// Zero or several concentration units were given where exactly one is required.
    #[error("exactly one concentration is required, got {} ({})", given.len(), given.join(", "))]
    AmbiguousOrMissingConcentration { given: Vec<String> },

    /// Relative output was requested from a source without a solvent reference.
    #[error("source `{name}` for {property} has no solvent reference; relative output is unsupported")]
    UnsupportedRelativeMode { name: &'static str, property: Property },

    /// The target cannot be reached by the forward relation over its domain.
    #[error(
        "target {target} is not achievable over domain [{}, {}] (achievable range [{}, {}])",
        domain[0], domain[1], achievable[0], achievable[1]
    )]
    InversionDomain {
        target: f64,
        domain: [f64; 2],
        achievable: [f64; 2],
    },

    /// Array inputs of incompatible lengths.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The built-in registry failed validation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The input values are invalid or inconsistent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {0}")]
    Calculation(String),
}

impl From<InverseError> for PropertyError {
    fn from(err: InverseError) -> Self {
        match err {
            InverseError::OutOfDomain {
                target,
                domain,
                achievable,
            } => PropertyError::InversionDomain {
                target,
                domain,
                achievable,
            },
            InverseError::Forward(source) | InverseError::Solver(bisection::Error::Model(source)) => {
                match source.downcast::<PropertyError>() {
                    Ok(err) => *err,
                    Err(other) => PropertyError::Calculation(other.to_string()),
                }
            }
            other => PropertyError::Calculation(other.to_string()),
        }
    }
}

/// Defects found while building a [`FormulaRegistry`](crate::FormulaRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no default source for {}", describe_key(*property, *solute))]
    MissingDefault {
        property: Property,
        solute: Option<Solute>,
    },

    #[error(
        "both `{first}` and `{second}` are flagged default for {}",
        describe_key(*property, *solute)
    )]
    DuplicateDefault {
        property: Property,
        solute: Option<Solute>,
        first: &'static str,
        second: &'static str,
    },

    #[error("source `{name}` is registered twice for {}", describe_key(*property, *solute))]
    DuplicateSource {
        property: Property,
        solute: Option<Solute>,
        name: &'static str,
    },

    /// The correlation kind does not fit the property and solute.
    #[error("source `{name}` has the wrong correlation kind for {}", describe_key(*property, *solute))]
    KindMismatch {
        property: Property,
        solute: Option<Solute>,
        name: &'static str,
    },

    /// A concentration domain is missing, or present on a correlation without concentration input.
    #[error(
        "source `{name}` has an inconsistent concentration domain for {}",
        describe_key(*property, *solute)
    )]
    ConcentrationDomain {
        property: Property,
        solute: Option<Solute>,
        name: &'static str,
    },
}

fn describe_key(property: Property, solute: Option<Solute>) -> String {
    match solute {
        Some(solute) => format!("{property} of {solute}"),
        None => format!("{property} of water"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use brine_core::FnModel;
    use brine_solve::Inverter;

    #[test]
    fn unknown_source_lists_alternatives() {
        let err = PropertyError::UnknownSource {
            name: "Nobody".into(),
            property: Property::VaporPressure,
            solute: None,
            valid: vec!["Wexler", "Bridgeman", "Wagner"],
        };
        assert_eq!(
            err.to_string(),
            "unknown source `Nobody` for vapor pressure of water; \
             valid sources are Wexler, Bridgeman, Wagner"
        );
    }

    #[test]
    fn out_of_domain_maps_to_inversion_domain() {
        let model = FnModel::new(|x: &f64| Ok::<_, Infallible>(1.0 - x));
        let err: PropertyError = Inverter::default()
            .invert(&model, 2.0, [0.0, 0.5])
            .unwrap_err()
            .into();
        assert!(matches!(err, PropertyError::InversionDomain { .. }));
    }

    #[test]
    fn forward_property_errors_survive_inversion() {
        let model = FnModel::new(|_: &f64| {
            Err::<f64, _>(PropertyError::InvalidInput("no density".into()))
        });
        let err: PropertyError = Inverter::default()
            .invert(&model, 0.5, [0.0, 1.0])
            .unwrap_err()
            .into();
        assert_eq!(err, PropertyError::InvalidInput("no density".into()));
    }

    #[test]
    fn unconverged_inversion_is_a_calculation_error() {
        let model = FnModel::new(|x: &f64| Ok::<_, Infallible>(x.powi(3)));
        let inverter = Inverter::new(bisection::Config::default().with_max_iters(2));
        let err: PropertyError = inverter.invert(&model, 0.3, [0.0, 1.0]).unwrap_err().into();
        assert!(matches!(err, PropertyError::Calculation(ref reason) if reason.contains("2 iterations")));
    }
}

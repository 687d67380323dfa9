use hooke_units::{Dimension, MagnitudeError, UnitError};
use thiserror::Error;

/// Errors that may occur when computing a spring force from unchecked magnitudes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ForceError {
    /// A magnitude has a different physical dimension than its parameter requires.
    ///
    /// For example, a time passed where a displacement is expected.
    #[error("dimension mismatch for `{parameter}`: expected {expected}, got {found}")]
    DimensionMismatch {
        parameter: &'static str,
        expected: Dimension,
        found: Dimension,
    },

    /// A magnitude has no unit, so its dimension cannot be checked.
    #[error("`{parameter}` has no unit")]
    TypeMismatch { parameter: &'static str },

    /// A unit expression could not be parsed.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl ForceError {
    /// Attaches a parameter name to a failed dimension check.
    pub(crate) fn for_parameter(parameter: &'static str, error: MagnitudeError) -> Self {
        match error {
            MagnitudeError::Unitless => Self::TypeMismatch { parameter },
            MagnitudeError::Dimension { expected, found } => Self::DimensionMismatch {
                parameter,
                expected,
                found,
            },
        }
    }
}

use thiserror::Error;

use crate::Dimension;

/// Errors that may occur when parsing units or magnitudes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The symbol is not in the unit table.
    #[error("unknown unit symbol `{0}`")]
    UnknownUnit(String),

    /// The unit expression does not follow the `a*b/c^n` grammar,
    /// or its exponents overflow.
    #[error("malformed unit expression `{0}`")]
    MalformedUnit(String),

    /// The numeric part of a magnitude is missing, unparsable, or not finite.
    #[error("invalid magnitude `{0}`")]
    InvalidNumber(String),
}

/// Errors that may occur when checking a magnitude's dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MagnitudeError {
    /// The magnitude carries no unit, so its dimension is unknown.
    #[error("magnitude has no unit")]
    Unitless,

    /// The magnitude's dimension differs from the required one.
    #[error("expected {expected}, got {found}")]
    Dimension {
        expected: Dimension,
        found: Dimension,
    },
}

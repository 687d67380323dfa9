use hooke_units::Magnitude;
use serde::{Deserialize, Serialize};

use crate::ForceError;

use super::{Input, checked::validate};

/// Spring parameters given as text magnitudes, such as `"10 cm"` and `"2.5 kN/m"`.
///
/// Each field serializes as a single string, so a configuration reads the same
/// in any serde format:
///
/// ```toml
/// displacement = "10 cm"
/// spring_constant = "2.5 kN/m"
/// ```
///
/// Deserialization only checks that each string is a well-formed magnitude.
/// Dimensions are checked by [`SpringConfig::to_input`], so the error names
/// the offending parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Displacement from the equilibrium position.
    pub displacement: Magnitude,

    /// Spring constant, or stiffness.
    pub spring_constant: Magnitude,
}

impl SpringConfig {
    /// Creates a configuration from two magnitudes.
    #[must_use]
    pub fn new(displacement: Magnitude, spring_constant: Magnitude) -> Self {
        Self {
            displacement,
            spring_constant,
        }
    }

    /// Validates the configuration and converts it into a typed [`Input`].
    ///
    /// # Errors
    ///
    /// Returns a [`ForceError`] if either field has no unit or the wrong dimension.
    pub fn to_input(&self) -> Result<Input, ForceError> {
        validate(&self.displacement, &self.spring_constant)
    }
}

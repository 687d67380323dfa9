use hooke_core::Model;
use hooke_units::{Magnitude, SpringConstant};
use uom::si::f64::{Force, Length};

use crate::ForceError;

use super::{Input, Output, Spring, SpringConfig, restoring_force};

/// Computes the restoring force from magnitudes whose units are only known at runtime.
///
/// Each magnitude is checked against the dimension its parameter requires and
/// converted to SI before the force is computed, so `"10 cm"` and `"0.1 m"`
/// give the same result.
///
/// Only dimensions are checked. Finite inputs whose product overflows `f64`
/// give an infinite force, as with [`restoring_force`].
///
/// # Errors
///
/// Returns [`ForceError::TypeMismatch`] if either magnitude has no unit, or
/// [`ForceError::DimensionMismatch`] if `displacement` is not a length or
/// `spring_constant` is not a force per length.
///
/// # Example
///
/// ```
/// use hooke_components::spring::checked_restoring_force;
/// use uom::si::force::newton;
///
/// let force = checked_restoring_force(
///     &"10 cm".parse().unwrap(),
///     &"100 N/m".parse().unwrap(),
/// )
/// .unwrap();
/// assert!((force.get::<newton>() + 10.0).abs() < 1e-9);
/// ```
pub fn checked_restoring_force(
    displacement: &Magnitude,
    spring_constant: &Magnitude,
) -> Result<Force, ForceError> {
    let Input {
        displacement,
        spring_constant,
    } = validate(displacement, spring_constant)?;

    Ok(restoring_force(displacement, spring_constant))
}

/// Checks both magnitudes and converts them into a typed [`Input`].
pub(super) fn validate(
    displacement: &Magnitude,
    spring_constant: &Magnitude,
) -> Result<Input, ForceError> {
    let displacement: Length = displacement
        .quantity()
        .map_err(|error| ForceError::for_parameter("displacement", error))?;

    let spring_constant: SpringConstant = spring_constant
        .quantity()
        .map_err(|error| ForceError::for_parameter("spring_constant", error))?;

    Ok(Input::new(displacement, spring_constant))
}

/// A spring model whose inputs are validated at runtime.
///
/// Wraps [`Spring`], checking the dimension of each [`SpringConfig`] field
/// before delegating to it.
pub struct CheckedSpring;

impl Model for CheckedSpring {
    type Input = SpringConfig;
    type Output = Output;
    type Error = ForceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let input = input.to_input()?;
        let Ok(output) = Spring.call(&input);
        Ok(output)
    }
}

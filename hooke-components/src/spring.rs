//! Restoring force of an ideal spring.

mod checked;
mod config;

use std::convert::Infallible;

use hooke_core::Model;
use hooke_units::{Magnitude, SpringConstant, Unit};
use uom::si::{
    f64::{Force, Length},
    force::newton,
    length::meter,
};

use crate::ForceError;

pub use checked::{CheckedSpring, checked_restoring_force};
pub use config::SpringConfig;

/// Computes the restoring force of an ideal spring, `F = -k·x`.
///
/// The force opposes the displacement: a stretched spring (positive
/// displacement) pulls back with a negative force.
///
/// Inputs are not range-checked. A product beyond `f64::MAX` gives an
/// infinite force.
///
/// # Example
///
/// ```
/// use hooke_components::spring::restoring_force;
/// use hooke_units::SpringConstant;
/// use uom::si::{f64::{Force, Length}, force::newton, length::meter};
///
/// let k: SpringConstant = Force::new::<newton>(100.0) / Length::new::<meter>(1.0);
/// let force = restoring_force(Length::new::<meter>(0.2), k);
/// assert!((force.get::<newton>() + 20.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn restoring_force(displacement: Length, spring_constant: SpringConstant) -> Force {
    -(displacement * spring_constant)
}

/// An ideal linear spring.
///
/// Computes the restoring force from the displacement and spring constant.
pub struct Spring;

/// Input to the spring model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    /// Displacement from the equilibrium position.
    pub displacement: Length,

    /// Spring constant, or stiffness.
    pub spring_constant: SpringConstant,
}

/// Output from the spring model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    /// Restoring force exerted by the spring.
    pub force: Force,
}

impl Input {
    /// Creates an `Input` from a displacement and spring constant.
    #[must_use]
    pub fn new(displacement: Length, spring_constant: SpringConstant) -> Self {
        Self {
            displacement,
            spring_constant,
        }
    }

    /// Sets displacement from a `uom::Length`.
    #[must_use]
    pub fn displacement(mut self, displacement: Length) -> Self {
        self.displacement = displacement;
        self
    }

    /// Sets displacement in SI units (m).
    #[must_use]
    pub fn displacement_si(self, displacement: f64) -> Self {
        self.displacement(Length::new::<meter>(displacement))
    }

    /// Sets the spring constant from a `SpringConstant` quantity.
    #[must_use]
    pub fn spring_constant(mut self, spring_constant: SpringConstant) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    /// Sets the spring constant in SI units (N/m).
    #[must_use]
    pub fn spring_constant_si(self, spring_constant: f64) -> Self {
        self.spring_constant(Force::new::<newton>(spring_constant) / Length::new::<meter>(1.0))
    }
}

impl Default for Input {
    /// Creates a default input with zero displacement and a 1 N/m spring.
    fn default() -> Self {
        Self {
            displacement: Length::new::<meter>(0.0),
            spring_constant: Force::new::<newton>(1.0) / Length::new::<meter>(1.0),
        }
    }
}

impl Output {
    /// Creates an `Output` from a raw SI force (N).
    #[must_use]
    pub fn from_si(force: f64) -> Self {
        Self {
            force: Force::new::<newton>(force),
        }
    }

    /// Expresses the force in the unit given by `unit`, such as `"kN"` or `"lbf"`.
    ///
    /// # Example
    ///
    /// ```
    /// use hooke_components::spring::Output;
    ///
    /// let output = Output::from_si(-1_500.0);
    /// assert_eq!(output.force_in("kN").unwrap().to_string(), "-1.5 kN");
    /// assert!(output.force_in("m").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::Unit`] if `unit` cannot be parsed, or
    /// [`ForceError::DimensionMismatch`] if it is not a unit of force.
    pub fn force_in(&self, unit: &str) -> Result<Magnitude, ForceError> {
        let unit = Unit::parse(unit)?;
        Magnitude::from_quantity(self.force, unit)
            .map_err(|error| ForceError::for_parameter("force", error))
    }
}

impl Model for Spring {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    /// Computes the restoring force for the given displacement and stiffness.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Input {
            displacement,
            spring_constant,
        } = *input;

        Ok(Output {
            force: restoring_force(displacement, spring_constant),
        })
    }
}

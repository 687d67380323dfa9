use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length, Mass, Time},
        force::newton,
        length::meter,
        mass::kilogram,
        time::second,
    },
    typenum::{N2, P1, Z0},
};

use crate::Dimension;

/// Spring constant, or stiffness, N/m in SI (equivalently kg/s²).
pub type SpringConstant = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// A typed `uom` quantity with a known runtime [`Dimension`].
///
/// Bridges text-sourced [`Magnitude`](crate::Magnitude) values, whose
/// dimension is only known at runtime, to the compile-time checked quantities
/// used by models.
pub trait DimensionedQuantity: Copy {
    /// The runtime dimension matching this quantity's type-level dimension.
    const DIMENSION: Dimension;

    /// Creates the quantity from a value in coherent SI units.
    fn from_si(value: f64) -> Self;

    /// Returns the quantity's value in coherent SI units.
    fn si_value(&self) -> f64;
}

impl DimensionedQuantity for Length {
    const DIMENSION: Dimension = Dimension::LENGTH;

    fn from_si(value: f64) -> Self {
        Length::new::<meter>(value)
    }

    fn si_value(&self) -> f64 {
        self.get::<meter>()
    }
}

impl DimensionedQuantity for Mass {
    const DIMENSION: Dimension = Dimension::MASS;

    fn from_si(value: f64) -> Self {
        Mass::new::<kilogram>(value)
    }

    fn si_value(&self) -> f64 {
        self.get::<kilogram>()
    }
}

impl DimensionedQuantity for Time {
    const DIMENSION: Dimension = Dimension::TIME;

    fn from_si(value: f64) -> Self {
        Time::new::<second>(value)
    }

    fn si_value(&self) -> f64 {
        self.get::<second>()
    }
}

impl DimensionedQuantity for Force {
    const DIMENSION: Dimension = Dimension::FORCE;

    fn from_si(value: f64) -> Self {
        Force::new::<newton>(value)
    }

    fn si_value(&self) -> f64 {
        self.get::<newton>()
    }
}

impl DimensionedQuantity for SpringConstant {
    const DIMENSION: Dimension = Dimension::SPRING_CONSTANT;

    fn from_si(value: f64) -> Self {
        Force::new::<newton>(value) / Length::new::<meter>(1.0)
    }

    fn si_value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{force::kilonewton, length::centimeter};

    #[test]
    fn spring_constant_from_force_and_length() {
        let k: SpringConstant = Force::new::<kilonewton>(2.0) / Length::new::<centimeter>(4.0);
        assert_relative_eq!(k.si_value(), 50_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            SpringConstant::from_si(50_000.0).value,
            k.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn si_values_are_coherent() {
        assert_relative_eq!(Length::new::<centimeter>(20.0).si_value(), 0.2);
        assert_relative_eq!(Force::from_si(-20.0).get::<newton>(), -20.0);
        assert_relative_eq!(Time::from_si(1.5).si_value(), 1.5);
        assert_relative_eq!(Mass::from_si(3.0).si_value(), 3.0);
    }

    #[test]
    fn runtime_dimensions_agree_with_types() {
        assert_eq!(
            Length::DIMENSION.checked_mul(SpringConstant::DIMENSION),
            Some(Force::DIMENSION)
        );
    }
}

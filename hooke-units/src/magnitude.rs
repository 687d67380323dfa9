use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Dimension, DimensionedQuantity, MagnitudeError, Unit, UnitError};

/// A numeric value paired with an optional unit.
///
/// A magnitude without a unit is *unitless*: its dimension is unknown and it
/// fails every dimension check. This is distinct from a value in a
/// dimensionless unit such as `1`.
///
/// Magnitudes parse from and serialize to text of the form `"<value> <unit>"`,
/// with at least one space between the number and the unit expression.
///
/// # Example
///
/// ```
/// use hooke_units::Magnitude;
/// use uom::si::{f64::Length, length::meter};
///
/// let displacement: Magnitude = "10 cm".parse().unwrap();
/// let length: Length = displacement.quantity().unwrap();
/// assert!((length.get::<meter>() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Magnitude {
    value: f64,
    unit: Option<Unit>,
}

impl Magnitude {
    /// Creates a magnitude with the given unit.
    #[must_use]
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// Creates a magnitude without a unit.
    #[must_use]
    pub fn unitless(value: f64) -> Self {
        Self { value, unit: None }
    }

    /// Expresses a typed quantity in the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`MagnitudeError::Dimension`] if `unit` does not have the
    /// quantity's dimension.
    pub fn from_quantity<Q: DimensionedQuantity>(
        quantity: Q,
        unit: Unit,
    ) -> Result<Self, MagnitudeError> {
        check(Q::DIMENSION, unit.dimension())?;
        Ok(Self::new(unit.from_si(quantity.si_value()), unit))
    }

    /// Returns the numeric value, in the magnitude's own unit.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit, or `None` for a unitless magnitude.
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Returns the dimension, or `None` for a unitless magnitude.
    #[must_use]
    pub fn dimension(&self) -> Option<Dimension> {
        self.unit.as_ref().map(Unit::dimension)
    }

    /// Returns the value in coherent SI units.
    ///
    /// A unitless magnitude returns its value unchanged.
    #[must_use]
    pub fn si_value(&self) -> f64 {
        self.unit
            .as_ref()
            .map_or(self.value, |unit| unit.to_si(self.value))
    }

    /// Checks that the magnitude has the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`MagnitudeError::Unitless`] if the magnitude has no unit, or
    /// [`MagnitudeError::Dimension`] if its dimension differs from `expected`.
    pub fn require(&self, expected: Dimension) -> Result<(), MagnitudeError> {
        let found = self.dimension().ok_or(MagnitudeError::Unitless)?;
        check(expected, found)
    }

    /// Re-expresses the magnitude in another unit of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude is unitless or if `unit` has a
    /// different dimension.
    pub fn convert_to(&self, unit: &Unit) -> Result<Self, MagnitudeError> {
        self.require(unit.dimension())?;
        Ok(Self::new(unit.from_si(self.si_value()), unit.clone()))
    }

    /// Converts the magnitude into a typed quantity after checking its dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude is unitless or if its dimension does
    /// not match `Q`.
    pub fn quantity<Q: DimensionedQuantity>(&self) -> Result<Q, MagnitudeError> {
        self.require(Q::DIMENSION)?;
        Ok(Q::from_si(self.si_value()))
    }
}

fn check(expected: Dimension, found: Dimension) -> Result<(), MagnitudeError> {
    if expected == found {
        Ok(())
    } else {
        Err(MagnitudeError::Dimension { expected, found })
    }
}

/// Parses `"<value>"` or `"<value> <unit>"`.
///
/// The value must be a finite number.
impl FromStr for Magnitude {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, unit) = match trimmed.split_once(char::is_whitespace) {
            Some((number, unit)) => (number, Some(unit)),
            None => (trimmed, None),
        };

        let value = number
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| UnitError::InvalidNumber(s.to_string()))?;

        match unit {
            Some(unit) => Ok(Self::new(value, Unit::parse(unit)?)),
            None => Ok(Self::unitless(value)),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {unit}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Serialize for Magnitude {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Magnitude {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Magnitude>()
            .map_err(|e| serde::de::Error::custom(format!("Failed to parse magnitude: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Force, Length, Time},
        force::{newton, pound_force},
        length::meter,
    };

    use crate::SpringConstant;

    #[test]
    fn parse_with_unit() {
        let m: Magnitude = "0.2 m".parse().unwrap();
        assert_relative_eq!(m.value(), 0.2);
        assert_eq!(m.dimension(), Some(Dimension::LENGTH));
        assert_eq!(m.unit().map(Unit::symbol), Some("m"));

        let k: Magnitude = "  2.5   kN / m ".parse().unwrap();
        assert_relative_eq!(k.si_value(), 2_500.0);
        assert_eq!(k.to_string(), "2.5 kN/m");
    }

    #[test]
    fn parse_without_unit() {
        let m: Magnitude = "-3e2".parse().unwrap();
        assert_eq!(m, Magnitude::unitless(-300.0));
        assert_eq!(m.dimension(), None);
        assert_relative_eq!(m.si_value(), -300.0);
        assert_eq!(m.to_string(), "-300");
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        for text in ["", "m", "abc m", "NaN m", "inf N", "1,5 m"] {
            assert!(
                matches!(text.parse::<Magnitude>(), Err(UnitError::InvalidNumber(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_reports_unit_errors() {
        assert_eq!(
            "3 zorkmid".parse::<Magnitude>(),
            Err(UnitError::UnknownUnit("zorkmid".to_string()))
        );
        assert_eq!(
            "1 m m".parse::<Magnitude>(),
            Err(UnitError::MalformedUnit("m m".to_string()))
        );
    }

    #[test]
    fn require_dimension() {
        let time: Magnitude = "2 s".parse().unwrap();
        assert_eq!(
            time.require(Dimension::LENGTH),
            Err(MagnitudeError::Dimension {
                expected: Dimension::LENGTH,
                found: Dimension::TIME,
            })
        );
        assert_eq!(
            Magnitude::unitless(2.0).require(Dimension::LENGTH),
            Err(MagnitudeError::Unitless)
        );
        assert!(time.require(Dimension::TIME).is_ok());
    }

    #[test]
    fn convert_between_compatible_units() {
        let m: Magnitude = "12 in".parse().unwrap();
        let ft = m.convert_to(&Unit::parse("ft").unwrap()).unwrap();
        assert_relative_eq!(ft.value(), 1.0, max_relative = 1e-12);
        assert_eq!(ft.unit().map(Unit::symbol), Some("ft"));

        let s = Unit::parse("s").unwrap();
        assert!(matches!(
            m.convert_to(&s),
            Err(MagnitudeError::Dimension { .. })
        ));
    }

    #[test]
    fn typed_quantities() {
        let length: Length = "25 cm".parse::<Magnitude>().unwrap().quantity().unwrap();
        assert_relative_eq!(length.get::<meter>(), 0.25);

        let k: SpringConstant = "100 N/m".parse::<Magnitude>().unwrap().quantity().unwrap();
        assert_relative_eq!(k.value, 100.0);

        let wrong = "25 cm".parse::<Magnitude>().unwrap().quantity::<Time>();
        assert!(matches!(wrong, Err(MagnitudeError::Dimension { .. })));
    }

    #[test]
    fn from_typed_quantity() {
        let force = Force::new::<newton>(-20.0);
        let lbf = Magnitude::from_quantity(force, Unit::parse("lbf").unwrap()).unwrap();
        assert_relative_eq!(
            lbf.value(),
            force.get::<pound_force>(),
            max_relative = 1e-6
        );

        let not_force = Magnitude::from_quantity(force, Unit::parse("m").unwrap());
        assert_eq!(
            not_force,
            Err(MagnitudeError::Dimension {
                expected: Dimension::FORCE,
                found: Dimension::LENGTH,
            })
        );
    }

    #[test]
    fn serde_as_string() {
        let m: Magnitude = "0.1 m".parse().unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"0.1 m\"");

        let back: Magnitude = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let err = serde_json::from_str::<Magnitude>("\"0.1 zorkmid\"").unwrap_err();
        assert!(err.to_string().contains("zorkmid"));
    }
}

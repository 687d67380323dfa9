use std::fmt;

/// Number of SI base dimensions.
const BASE_COUNT: usize = 7;

/// SI base unit symbols, in display order.
///
/// Mass is listed first so derived units read the conventional way (`kg·m·s^-2`).
const DISPLAY_ORDER: [(usize, &str); BASE_COUNT] = [
    (1, "kg"),
    (0, "m"),
    (2, "s"),
    (3, "A"),
    (4, "K"),
    (5, "mol"),
    (6, "cd"),
];

/// The physical dimension of a quantity, as exponents of the SI base dimensions.
///
/// Exponents are stored in ISQ order: length, mass, time, electric current,
/// thermodynamic temperature, amount of substance, luminous intensity.
/// This mirrors the type-level dimension `uom` uses, but is checked at runtime
/// so values whose unit is only known from text can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    exponents: [i8; BASE_COUNT],
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);

    /// Force per unit length (N/m), equivalently mass per time squared (kg/s²).
    pub const SPRING_CONSTANT: Self = Self::new(0, 1, -2, 0, 0, 0, 0);

    /// Creates a dimension from its base exponents, in ISQ order.
    #[must_use]
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            exponents: [
                length,
                mass,
                time,
                current,
                temperature,
                amount,
                luminosity,
            ],
        }
    }

    /// Returns the base exponents, in ISQ order.
    #[must_use]
    pub const fn exponents(&self) -> [i8; BASE_COUNT] {
        self.exponents
    }

    /// Returns `true` if every exponent is zero.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Multiplies two dimensions, returning `None` if an exponent overflows.
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i8::checked_add)
    }

    /// Divides two dimensions, returning `None` if an exponent overflows.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i8::checked_sub)
    }

    /// Raises a dimension to an integer power, returning `None` on overflow.
    #[must_use]
    pub fn checked_pow(self, power: i8) -> Option<Self> {
        let mut exponents = [0; BASE_COUNT];
        for (out, exp) in exponents.iter_mut().zip(self.exponents) {
            *out = exp.checked_mul(power)?;
        }
        Some(Self { exponents })
    }

    /// Returns a descriptive name for commonly used dimensions.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find_map(|(dimension, name)| (dimension == self).then_some(*name))
    }

    fn zip_with(self, rhs: Self, op: impl Fn(i8, i8) -> Option<i8>) -> Option<Self> {
        let mut exponents = [0; BASE_COUNT];
        for ((out, a), b) in exponents
            .iter_mut()
            .zip(self.exponents)
            .zip(rhs.exponents)
        {
            *out = op(a, b)?;
        }
        Some(Self { exponents })
    }
}

const NAMED: [(Dimension, &str); 10] = [
    (Dimension::DIMENSIONLESS, "dimensionless"),
    (Dimension::LENGTH, "length"),
    (Dimension::MASS, "mass"),
    (Dimension::TIME, "time"),
    (Dimension::FORCE, "force"),
    (Dimension::SPRING_CONSTANT, "force per length"),
    (Dimension::new(2, 0, 0, 0, 0, 0, 0), "area"),
    (Dimension::new(1, 0, -1, 0, 0, 0, 0), "velocity"),
    (Dimension::new(1, 0, -2, 0, 0, 0, 0), "acceleration"),
    (Dimension::new(2, 1, -2, 0, 0, 0, 0), "energy"),
];

/// Formats the dimension by name when it has one (`force`), and in SI base
/// units otherwise (`kg·m^2·s^-3`).
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }

        let mut first = true;
        for (index, symbol) in DISPLAY_ORDER {
            let exp = self.exponents[index];
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if exp == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{symbol}^{exp}")?;
            }
        }
        Ok(())
    }
}

mod table;

use std::{fmt, str::FromStr};

use crate::{Dimension, UnitError};

/// A unit of measure parsed from a unit expression.
///
/// Expressions are built from unit symbols known to `uom`:
///
/// ```text
/// expr   = term ('/' term)?
/// term   = factor (('*' | '·') factor)*
/// factor = symbol ('^' integer)?
/// ```
///
/// The symbol `1` stands for a dimensionless factor, so `1/s` is valid.
/// Whitespace is allowed around operators but not inside a symbol, so `m m`
/// is rejected rather than read as `mm`.
///
/// # Example
///
/// ```
/// use hooke_units::{Dimension, Unit};
/// use uom::si::{f64::{Force, Length}, force::pound_force, length::inch};
///
/// let unit = Unit::parse("lbf / in").unwrap();
/// assert_eq!(unit.dimension(), Dimension::SPRING_CONSTANT);
/// assert_eq!(unit.symbol(), "lbf/in");
///
/// let expected = (Force::new::<pound_force>(1.0) / Length::new::<inch>(1.0)).value;
/// assert!((unit.factor() - expected).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    symbol: String,
    dimension: Dimension,
    factor: f64,
}

impl Unit {
    /// Parses a unit expression.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if a symbol is not a known unit, or
    /// [`UnitError::MalformedUnit`] if the expression is empty, has more than
    /// one `/`, has an empty factor, has whitespace inside a symbol, or has an
    /// invalid exponent.
    pub fn parse(expr: &str) -> Result<Self, UnitError> {
        let malformed = || UnitError::MalformedUnit(expr.to_string());

        let mut parts = expr.split('/');
        let numerator = parts.next().ok_or_else(malformed)?;
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(malformed());
        }

        let (mut dimension, mut factor) = parse_term(numerator, expr)?;
        if let Some(denominator) = denominator {
            let (den_dimension, den_factor) = parse_term(denominator, expr)?;
            dimension = dimension
                .checked_div(den_dimension)
                .ok_or_else(malformed)?;
            factor /= den_factor;
        }

        let symbol = expr.split_whitespace().collect();
        Ok(Self {
            symbol,
            dimension,
            factor,
        })
    }

    /// Returns the normalized symbol, with whitespace around operators removed.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the physical dimension of this unit.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the factor that converts a value in this unit to coherent SI.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Converts a value expressed in this unit to coherent SI.
    #[must_use]
    pub fn to_si(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Converts a coherent SI value into this unit.
    #[must_use]
    pub fn from_si(&self, value: f64) -> f64 {
        value / self.factor
    }
}

fn parse_term(term: &str, expr: &str) -> Result<(Dimension, f64), UnitError> {
    let mut dimension = Dimension::DIMENSIONLESS;
    let mut factor = 1.0;

    for part in term.split(['*', '·']) {
        let (part_dimension, part_factor) = parse_factor(part, expr)?;
        dimension = dimension
            .checked_mul(part_dimension)
            .ok_or_else(|| UnitError::MalformedUnit(expr.to_string()))?;
        factor *= part_factor;
    }

    Ok((dimension, factor))
}

fn parse_factor(factor: &str, expr: &str) -> Result<(Dimension, f64), UnitError> {
    let malformed = || UnitError::MalformedUnit(expr.to_string());

    let (symbol, power) = match factor.split_once('^') {
        Some((symbol, power)) => (
            symbol.trim(),
            power.trim().parse::<i8>().map_err(|_| malformed())?,
        ),
        None => (factor.trim(), 1),
    };

    if symbol.is_empty() || symbol.contains(char::is_whitespace) {
        return Err(malformed());
    }

    let (dimension, scale) = if symbol == "1" {
        (Dimension::DIMENSIONLESS, 1.0)
    } else {
        let leaf = table::lookup(symbol)
            .ok_or_else(|| UnitError::UnknownUnit(symbol.to_string()))?;
        (leaf.dimension, leaf.factor)
    };

    let dimension = dimension.checked_pow(power).ok_or_else(malformed)?;
    Ok((dimension, scale.powi(i32::from(power))))
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

use std::str::FromStr;

use uom::si::f64::{Force, Length, Mass, Time};

use crate::{Dimension, DimensionedQuantity};

/// A single unit symbol resolved to its dimension and SI factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Leaf {
    pub dimension: Dimension,
    pub factor: f64,
}

/// Quantity kinds a unit symbol may belong to, tried in order.
///
/// Symbols are recognized by `uom`'s own parser for each kind, so every
/// abbreviation `uom` defines for these quantities (`cm`, `in`, `lbf`, `dyn`,
/// `min`, …) is available with `uom`'s conversion factor. Derived units such as
/// `N/m` or `lbf/in` are composed by the expression parser.
static KINDS: &[fn(&str) -> Option<Leaf>] = &[
    leaf::<Length>,
    leaf::<Mass>,
    leaf::<Time>,
    leaf::<Force>,
];

/// Looks up a single unit symbol, such as `cm` or `lbf`.
pub(crate) fn lookup(symbol: &str) -> Option<Leaf> {
    let text = format!("1 {symbol}");
    KINDS.iter().find_map(|kind| kind(&text))
}

fn leaf<Q: DimensionedQuantity + FromStr>(text: &str) -> Option<Leaf> {
    let quantity = text.parse::<Q>().ok()?;
    Some(Leaf {
        dimension: Q::DIMENSION,
        factor: quantity.si_value(),
    })
}

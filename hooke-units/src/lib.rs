//! Dimensioned quantities and unit validation for Hooke.
//!
//! Two complementary ways of carrying units are provided:
//!
//! - Typed quantities from [`uom`], checked by the compiler, plus the
//!   [`SpringConstant`] quantity that `uom` does not define.
//! - [`Magnitude`], a value with a unit parsed at runtime from text such as
//!   `"10 cm"` or `"2.5 kN/m"`. Its [`Dimension`] is checked before it is
//!   converted into a typed quantity.
//!
//! Units are resolved against a static, immutable unit table. There is no
//! global registry to configure.

mod dimension;
mod error;
mod magnitude;
mod quantity;
mod unit;

pub use dimension::Dimension;
pub use error::{MagnitudeError, UnitError};
pub use magnitude::Magnitude;
pub use quantity::{DimensionedQuantity, SpringConstant};
pub use unit::Unit;

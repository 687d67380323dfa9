//! Core traits for Hooke.
//!
//! - [`Model`] — a deterministic callable that maps a typed input to a typed output

mod model;

pub use model::Model;

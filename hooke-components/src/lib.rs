//! Spring force models for Hooke.
//!
//! The restoring force of an ideal spring follows Hooke's Law, `F = -k·x`.
//! It is available in two forms:
//!
//! - [`spring::restoring_force`] and the [`spring::Spring`] model take typed
//!   `uom` quantities, so dimensional errors are caught by the compiler.
//! - [`spring::checked_restoring_force`] and the [`spring::CheckedSpring`]
//!   model take [`Magnitude`](hooke_units::Magnitude) values whose units are
//!   only known at runtime, validating each dimension before computing.

mod error;

pub mod spring;

pub use error::ForceError;

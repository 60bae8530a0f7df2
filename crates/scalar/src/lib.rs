//! Scalar field arithmetic bound to an elliptic-curve group order
//!
//! This crate implements [`ScalarField`], a value type representing one
//! element of Z/nZ where n is the order of a named elliptic-curve group.
//! Every value is tagged with its originating [`Curve`], so arithmetic
//! across mismatched curves is rejected instead of silently coerced, and
//! every externally observable value is the canonical representative in
//! `[0, n)`.
//!
//! Fresh scalars come from a cryptographically secure random source via
//! rejection sampling, which yields a uniform distribution over `[1, n-1]`
//! with no modulo bias.

pub mod curve;
pub mod error;
pub mod scalar;

pub use curve::Curve;
pub use error::{Error, Result};
pub use scalar::ScalarField;

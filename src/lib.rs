//! # recrypt-math
//!
//! Scalar field arithmetic bound to the order of a named elliptic-curve
//! group. This is the numeric substrate that higher-level elliptic-curve
//! protocols (key generation, proxy re-encryption, threshold schemes)
//! build on; point arithmetic and key formats live elsewhere.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - [`recrypt-params`]: per-curve constants (group orders, sizes, NIDs)
//! - [`recrypt-scalar`]: the `ScalarField` value type and its arithmetic
//!
//! ## Usage
//!
//! ```
//! use recrypt_math::prelude::*;
//!
//! let k = ScalarField::random(Curve::Secp256k1)?;
//! let k_inv = k.invert()?;
//! # Ok::<(), Error>(())
//! ```

pub use recrypt_params as params;
pub use recrypt_scalar as scalar;

/// Common imports for recrypt-math users
pub mod prelude {
    pub use crate::scalar::{Curve, Error, Result, ScalarField};
}

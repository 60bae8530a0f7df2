//! Constant values for recrypt-math scalar arithmetic
//!
//! This library provides the per-curve parameters shared across the
//! recrypt-math workspace: group orders, element sizes, and the
//! OpenSSL-compatible numeric identifiers used to name curves.

#![no_std]

// Elliptic curve group constants
pub mod curves;

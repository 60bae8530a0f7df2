//! Named elliptic-curve groups and their cached orders
//!
//! A [`Curve`] names one of the supported groups and resolves, on demand,
//! to the arbitrary-precision group order that all scalar arithmetic
//! reduces against. Orders are decoded from the constants in
//! `recrypt-params` once per curve and shared process-wide; the cache is
//! populate-once, read-many, so concurrent lookups need no further
//! synchronization.

use std::fmt;
use std::sync::OnceLock;

use num_bigint::BigUint;
use recrypt_params::curves::{CurveConstants, NIST_P256, NIST_P384, SECP256K1};

use crate::error::{Error, Result};

/// A named elliptic-curve group supported for scalar arithmetic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp256k1
    Secp256k1,
    /// NIST P-256 (prime256v1)
    NistP256,
    /// NIST P-384 (secp384r1)
    NistP384,
}

static SECP256K1_ORDER: OnceLock<BigUint> = OnceLock::new();
static NIST_P256_ORDER: OnceLock<BigUint> = OnceLock::new();
static NIST_P384_ORDER: OnceLock<BigUint> = OnceLock::new();

impl Curve {
    /// All supported curves
    pub const ALL: [Curve; 3] = [Curve::Secp256k1, Curve::NistP256, Curve::NistP384];

    /// Resolve a curve from its OpenSSL numeric identifier
    ///
    /// This is the entry point for untrusted curve identifiers; an
    /// unknown NID fails with [`Error::CurveSetup`].
    pub fn from_nid(nid: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.nid() == nid)
            .ok_or_else(|| Error::CurveSetup {
                context: "NID",
                details: format!("unsupported curve NID {}", nid),
            })
    }

    /// Resolve a curve from its OpenSSL short name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.name() == name)
            .ok_or_else(|| Error::CurveSetup {
                context: "name",
                details: format!("unsupported curve name {:?}", name),
            })
    }

    /// Canonical curve name (OpenSSL short name)
    pub fn name(&self) -> &'static str {
        self.constants().name
    }

    /// OpenSSL numeric identifier for the curve
    pub fn nid(&self) -> i32 {
        self.constants().nid
    }

    /// Width of a serialized scalar in bytes
    ///
    /// Also the number of random bytes drawn per rejection-sampling
    /// attempt when generating a fresh scalar.
    pub fn field_size(&self) -> usize {
        self.constants().field_size
    }

    /// The group order n
    ///
    /// Decoded from the big-endian constant on first use and cached for
    /// the life of the process. Always positive for supported curves.
    pub fn order(&self) -> &'static BigUint {
        let cell = match self {
            Curve::Secp256k1 => &SECP256K1_ORDER,
            Curve::NistP256 => &NIST_P256_ORDER,
            Curve::NistP384 => &NIST_P384_ORDER,
        };
        cell.get_or_init(|| BigUint::from_bytes_be(self.constants().n))
    }

    fn constants(&self) -> &'static CurveConstants {
        match self {
            Curve::Secp256k1 => &SECP256K1,
            Curve::NistP256 => &NIST_P256,
            Curve::NistP384 => &NIST_P384,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Scalar field elements modulo a curve's group order

use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};
use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::curve::Curve;
use crate::error::{validate, Error, Result};

/// An element of Z/nZ for a named curve's group order n
///
/// Immutable value type: every operation returns a new instance and
/// never mutates its operands. Externally observable values are always
/// the canonical representative in `[0, n)`, and every value carries the
/// [`Curve`] it is reduced against so mixed-curve arithmetic is rejected
/// with [`Error::CurveMismatch`] instead of producing garbage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarField {
    value: BigUint,
    curve: Curve,
}

impl ScalarField {
    /// Generate a uniformly random scalar in `[1, n-1]` from the
    /// operating system's secure random source
    ///
    /// See [`random_with_rng`](Self::random_with_rng) for the sampling
    /// contract; this is the same algorithm driven by [`OsRng`].
    pub fn random(curve: Curve) -> Result<Self> {
        Self::random_with_rng(curve, &mut OsRng)
    }

    /// Generate a uniformly random scalar in `[1, n-1]` from the given
    /// cryptographically secure generator
    ///
    /// Draws `curve.field_size()` bytes, interprets them as a big-endian
    /// integer, and rejection-samples until the value lies strictly
    /// inside `(0, n)`. Rejection keeps the distribution uniform with no
    /// modulo bias; for the supported curves the expected number of
    /// retries is well below one. A failure of the underlying source is
    /// surfaced as [`Error::RandomGeneration`] and never retried, since
    /// masking it could silently weaken the randomness guarantee.
    pub fn random_with_rng<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> Result<Self> {
        let order = curve.order();
        let mut buf = vec![0u8; curve.field_size()];

        loop {
            rng.try_fill_bytes(&mut buf)
                .map_err(|e| Error::RandomGeneration {
                    context: "scalar generation",
                    details: e.to_string(),
                })?;

            let candidate = BigUint::from_bytes_be(&buf);
            if !candidate.is_zero() && &candidate < order {
                return Ok(ScalarField {
                    value: candidate,
                    curve,
                });
            }
            // Out of range: resample with fresh bytes
        }
    }

    /// Create a scalar from an integer, reducing it modulo the order
    ///
    /// The validating constructor for trust boundaries: any input is
    /// mapped to its canonical representative in `[0, n)`.
    pub fn new(value: BigUint, curve: Curve) -> Self {
        let value = value % curve.order();
        ScalarField { value, curve }
    }

    /// Wrap an integer already known to be reduced
    ///
    /// Does not re-validate the range; callers constructing from
    /// protocol-internal intermediates own that guarantee. Every
    /// arithmetic operation re-reduces its result, so the invariant
    /// self-heals on the next step. Use [`new`](Self::new) when the
    /// input is untrusted.
    pub fn from_integer(value: BigUint, curve: Curve) -> Self {
        ScalarField { value, curve }
    }

    /// The canonical reduced integer value
    pub fn to_integer(&self) -> BigUint {
        self.value.clone()
    }

    /// Borrow the canonical reduced integer value
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The curve whose group order this scalar is reduced against
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Whether this scalar is the additive identity
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Serialize to fixed-width big-endian bytes
    ///
    /// The output is `curve.field_size()` bytes, left-padded with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.curve.field_size();
        let raw = self.value.to_bytes_be();
        let mut out = vec![0u8; size];
        // value < n <= 2^(8 * size), so raw always fits
        out[size - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Deserialize from fixed-width big-endian bytes
    ///
    /// Validates the length against `curve.field_size()` and reduces the
    /// decoded integer modulo the order.
    pub fn from_bytes(bytes: &[u8], curve: Curve) -> Result<Self> {
        validate::length("ScalarField", bytes.len(), curve.field_size())?;
        Ok(Self::new(BigUint::from_bytes_be(bytes), curve))
    }

    /// Multiply two scalars modulo the curve order
    ///
    /// Computes `(a * b) mod n` in a single multiply-and-reduce
    /// expression; the result is the canonical representative on the
    /// shared curve.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_curve(other, "multiply")?;
        let value = (&self.value * &other.value) % self.curve.order();
        Ok(ScalarField {
            value,
            curve: self.curve,
        })
    }

    /// Truncating integer division of the canonical representatives
    ///
    /// Computes `floor(a / b)` on the underlying integers. This is NOT
    /// field division: it is deliberately not `a * b^-1 mod n`, and the
    /// asymmetry with [`mul`](Self::mul)/[`invert`](Self::invert) is
    /// load-bearing for downstream protocol code. Callers wanting field
    /// division compose it as `a.mul(&b.invert()?)`.
    ///
    /// The quotient is at most the dividend, which is already below the
    /// order, so no further reduction is applied.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.check_same_curve(other, "divide")?;
        if other.value.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "scalar division",
            });
        }
        let value = &self.value / &other.value;
        Ok(ScalarField {
            value,
            curve: self.curve,
        })
    }

    /// Compute the multiplicative inverse modulo the curve order
    ///
    /// Uses the extended Euclidean algorithm. Defined only when
    /// `gcd(value, n) == 1`; for the supported prime-order curves that
    /// is every nonzero scalar, so only zero (or a value sharing a
    /// factor with a composite order) fails with
    /// [`Error::NotInvertible`].
    pub fn invert(&self) -> Result<Self> {
        if self.value.is_zero() {
            return Err(Error::NotInvertible {
                reason: "zero has no multiplicative inverse",
            });
        }

        let a = BigInt::from(self.value.clone());
        let n = BigInt::from(self.curve.order().clone());
        let ExtendedGcd { gcd, x, .. } = a.extended_gcd(&n);
        if !gcd.is_one() {
            return Err(Error::NotInvertible {
                reason: "value shares a nontrivial factor with the order",
            });
        }

        // gcd == a*x + n*y, so x is the inverse; normalize into [0, n)
        let value = x
            .mod_floor(&n)
            .to_biguint()
            .expect("mod_floor with a positive modulus is non-negative");
        Ok(ScalarField {
            value,
            curve: self.curve,
        })
    }

    fn check_same_curve(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.curve != other.curve {
            return Err(Error::CurveMismatch {
                operation,
                left: self.curve.name(),
                right: other.curve.name(),
            });
        }
        Ok(())
    }
}

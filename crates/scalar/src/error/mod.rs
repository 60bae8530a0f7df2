//! Error handling for scalar field operations

use std::fmt;

/// The error type for scalar field operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested curve could not be resolved to a group/order
    CurveSetup {
        /// What was used to identify the curve
        context: &'static str,
        /// Details about the unresolvable identifier
        details: String,
    },

    /// A binary operation received operands bound to different curves
    CurveMismatch {
        /// Operation that was attempted
        operation: &'static str,
        /// Curve of the left-hand operand
        left: &'static str,
        /// Curve of the right-hand operand
        right: &'static str,
    },

    /// The divisor's integer value is zero
    DivisionByZero {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Inverse requested for a value not coprime with the order
    NotInvertible {
        /// Why the value has no inverse
        reason: &'static str,
    },

    /// The secure random source failed
    RandomGeneration {
        /// Operation that needed entropy
        context: &'static str,
        /// Details from the underlying source
        details: String,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for scalar field operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CurveSetup { context, details } => {
                write!(f, "Cannot resolve curve from {}: {}", context, details)
            }
            Error::CurveMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Curve mismatch in {}: left operand is on {}, right operand is on {}",
                    operation, left, right
                )
            }
            Error::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            Error::NotInvertible { reason } => {
                write!(f, "Value has no modular inverse: {}", reason)
            }
            Error::RandomGeneration { context, details } => {
                write!(f, "Random generation failed in {}: {}", context, details)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

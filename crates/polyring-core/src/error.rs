//! Error types for polynomial ring construction and arithmetic.
//!
//! Mirrors the shape of a comprehensive domain-error enum: one variant per
//! failure kind, each carrying the data needed to explain itself, a
//! `Display` impl, and `std::error::Error`. Operations never retry or
//! silently degrade; `try_divide`-style queries return `Option` instead of
//! erroring on the (dominant) non-divisible case.

use std::fmt;

/// All failure kinds that can arise from ring construction or polynomial
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// Dividing by a zero polynomial.
    DivisionByZero,

    /// A division that was required to be exact left a nonzero remainder.
    NotDivisible { dividend: String, divisor: String },

    /// An exact coefficient does not fit the declared coefficient type.
    /// Arises in exponentiation when a multinomial coefficient overflows a
    /// fixed-width coefficient ring.
    CoefficientOverflow { operation: String },

    /// Converting or promoting a polynomial would drop a nonzero exponent
    /// on a variable the target ring does not have.
    IncompatibleVariables { variable: String },

    /// Ring construction was given a repeated variable name, or a name
    /// already present in the base ring's variable set.
    DuplicateVariable { name: String },

    /// An internal consistency check failed. This indicates a bug in the
    /// library, not a user error.
    InvariantViolation { detail: String },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::DivisionByZero => write!(f, "division by the zero polynomial"),
            PolyError::NotDivisible { dividend, divisor } => {
                write!(f, "{dividend} is not divisible by {divisor}")
            }
            PolyError::CoefficientOverflow { operation } => {
                write!(
                    f,
                    "coefficient overflow in {operation}; widen the coefficient ring"
                )
            }
            PolyError::IncompatibleVariables { variable } => {
                write!(
                    f,
                    "conversion would drop a nonzero exponent on variable {variable}"
                )
            }
            PolyError::DuplicateVariable { name } => {
                write!(f, "duplicate variable name {name} in ring construction")
            }
            PolyError::InvariantViolation { detail } => {
                write!(f, "internal invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for PolyError {}

/// Type alias for operations that can fail with a [`PolyError`].
pub type PolyResult<T> = Result<T, PolyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolyError::DivisionByZero;
        assert_eq!(err.to_string(), "division by the zero polynomial");

        let err = PolyError::DuplicateVariable {
            name: "x".to_string(),
        };
        assert!(err.to_string().contains("duplicate variable name x"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(PolyError::DivisionByZero, PolyError::DivisionByZero);
        assert_ne!(
            PolyError::DivisionByZero,
            PolyError::CoefficientOverflow {
                operation: "pow".to_string()
            }
        );
    }
}

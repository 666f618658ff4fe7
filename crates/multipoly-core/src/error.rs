//! Errors raised by polynomial operations.

use multipoly_numeric::CoeffError;
use thiserror::Error;

/// Errors that can occur in polynomial operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A power was requested with a negative exponent.
    #[error("negative exponent: {0}")]
    NegativeExponent(i64),

    /// Division or lcm on an operand without exactly one term.
    #[error("only monomials can be divided or have an lcm")]
    NotAMonomial,

    /// Some exponent of the divisor exceeds the dividend's.
    #[error("divisor does not divide the dividend")]
    Indivisible,

    /// The polynomial has no non-zero term.
    #[error("zero polynomial has no leading term")]
    ZeroPolynomial,

    /// Division by a zero scalar.
    #[error("division by zero")]
    DivisionByZero,
}

impl From<CoeffError> for PolyError {
    fn from(err: CoeffError) -> Self {
        match err {
            CoeffError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;

//! Polynomial coefficients.
//!
//! A coefficient is an integer, an exact rational or an approximate real.
//! Exactness is preserved whenever both operands are exact; any approximate
//! operand makes the result approximate.

use dashu::base::Inverse;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::num::NonZeroU32;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use thiserror::Error;

/// Errors raised by coefficient arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoeffError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// A coefficient from the numeric tower.
///
/// Rationals with denominator 1 are demoted to [`Coeff::Int`] by every
/// constructor and operation in this crate, so an integral exact value has
/// a single representation.
#[derive(Clone, Debug)]
pub enum Coeff {
    /// An arbitrary precision integer.
    Int(IBig),
    /// An arbitrary precision rational in lowest terms.
    Ratio(RBig),
    /// An approximate real.
    Real(f64),
}

impl Coeff {
    /// Creates an integer coefficient.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::Int(IBig::from(value))
    }

    /// Creates the exact rational `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`CoeffError::DivisionByZero`] if the denominator is zero.
    pub fn ratio(numerator: i64, denominator: i64) -> Result<Self, CoeffError> {
        if denominator == 0 {
            return Err(CoeffError::DivisionByZero);
        }
        let mut num = IBig::from(numerator);
        if denominator < 0 {
            num = -num;
        }
        let den = UBig::from(denominator.unsigned_abs());
        Ok(Self::from_rational(RBig::from_parts(num, den)))
    }

    /// Creates an approximate coefficient.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self::Real(value)
    }

    /// Wraps an exact rational, demoting it to an integer when possible.
    #[must_use]
    pub fn from_rational(value: RBig) -> Self {
        if value.denominator().is_one() {
            let (num, _) = value.into_parts();
            Self::Int(num)
        } else {
            Self::Ratio(value)
        }
    }

    /// Returns true for integer and rational coefficients.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        !matches!(self, Self::Real(_))
    }

    /// Returns the exact value as a rational, or `None` for approximate values.
    #[must_use]
    pub fn to_rational(&self) -> Option<RBig> {
        match self {
            Self::Int(n) => Some(RBig::from(n.clone())),
            Self::Ratio(r) => Some(r.clone()),
            Self::Real(_) => None,
        }
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Int(n) => n.to_f64().value(),
            Self::Ratio(r) => r.to_f64().value(),
            Self::Real(x) => *x,
        }
    }

    /// Divides by another coefficient.
    ///
    /// The quotient is exact when both operands are exact.
    ///
    /// # Errors
    ///
    /// Returns [`CoeffError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, CoeffError> {
        if rhs.is_zero() {
            return Err(CoeffError::DivisionByZero);
        }
        match (self.to_rational(), rhs.to_rational()) {
            (Some(a), Some(b)) => Ok(Self::from_rational(a / b)),
            _ => Ok(Self::Real(self.to_f64() / rhs.to_f64())),
        }
    }

    /// Returns the reciprocal `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`CoeffError::DivisionByZero`] if `self` is zero.
    pub fn recip(&self) -> Result<Self, CoeffError> {
        match self {
            _ if self.is_zero() => Err(CoeffError::DivisionByZero),
            Self::Int(n) => Ok(Self::from_rational(RBig::from(n.clone()).inv())),
            Self::Ratio(r) => Ok(Self::from_rational(r.clone().inv())),
            Self::Real(x) => Ok(Self::Real(x.recip())),
        }
    }

    /// Divides by a positive integer. Never fails, exactness is kept.
    #[must_use]
    pub fn div_count(&self, n: NonZeroU32) -> Self {
        match self {
            Self::Real(x) => Self::Real(x / f64::from(n.get())),
            Self::Int(a) => Self::from_rational(RBig::from(a.clone()) / RBig::from(UBig::from(n.get()))),
            Self::Ratio(r) => Self::from_rational(r / &RBig::from(UBig::from(n.get()))),
        }
    }

    /// Applies a binary operation with the tower's promotion rules.
    fn combine(
        &self,
        rhs: &Self,
        int: impl FnOnce(&IBig, &IBig) -> IBig,
        ratio: impl FnOnce(&RBig, &RBig) -> RBig,
        real: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(int(a, b)),
            (Self::Real(_), _) | (_, Self::Real(_)) => Self::Real(real(self.to_f64(), rhs.to_f64())),
            (Self::Int(a), Self::Ratio(b)) => Self::from_rational(ratio(&RBig::from(a.clone()), b)),
            (Self::Ratio(a), Self::Int(b)) => Self::from_rational(ratio(a, &RBig::from(b.clone()))),
            (Self::Ratio(a), Self::Ratio(b)) => Self::from_rational(ratio(a, b)),
        }
    }
}

impl Default for Coeff {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Coeff {
    fn zero() -> Self {
        Self::Int(IBig::ZERO)
    }

    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Ratio(r) => r.is_zero(),
            Self::Real(x) => *x == 0.0,
        }
    }
}

impl One for Coeff {
    fn one() -> Self {
        Self::Int(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

impl PartialEq for Coeff {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Real(_), _) | (_, Self::Real(_)) => self.to_f64() == other.to_f64(),
            _ => self.to_rational() == other.to_rational(),
        }
    }
}

impl PartialEq<i64> for Coeff {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::int(*other)
    }
}

impl PartialEq<i32> for Coeff {
    fn eq(&self, other: &i32) -> bool {
        *self == Self::from(*other)
    }
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Ratio(r) => write!(f, "{r}"),
            // Debug keeps the fractional part of integral floats ("1.0").
            Self::Real(x) => write!(f, "{x:?}"),
        }
    }
}

// Arithmetic operations
impl Add for &Coeff {
    type Output = Coeff;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b, |a, b| a + b, |a, b| a + b)
    }
}

impl Add for Coeff {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Coeff> for Coeff {
    type Output = Self;

    fn add(self, rhs: &Coeff) -> Self::Output {
        &self + rhs
    }
}

impl AddAssign<&Coeff> for Coeff {
    fn add_assign(&mut self, rhs: &Coeff) {
        *self = &*self + rhs;
    }
}

impl Sub for &Coeff {
    type Output = Coeff;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b, |a, b| a - b, |a, b| a - b)
    }
}

impl Sub for Coeff {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Coeff> for Coeff {
    type Output = Self;

    fn sub(self, rhs: &Coeff) -> Self::Output {
        &self - rhs
    }
}

impl SubAssign<&Coeff> for Coeff {
    fn sub_assign(&mut self, rhs: &Coeff) {
        *self = &*self - rhs;
    }
}

impl Mul for &Coeff {
    type Output = Coeff;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a * b, |a, b| a * b, |a, b| a * b)
    }
}

impl Mul for Coeff {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Coeff> for Coeff {
    type Output = Self;

    fn mul(self, rhs: &Coeff) -> Self::Output {
        &self * rhs
    }
}

impl Neg for &Coeff {
    type Output = Coeff;

    fn neg(self) -> Self::Output {
        match self {
            Coeff::Int(n) => Coeff::Int(-n),
            Coeff::Ratio(r) => Coeff::Ratio(-r),
            Coeff::Real(x) => Coeff::Real(-x),
        }
    }
}

impl Neg for Coeff {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<i64> for Coeff {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<i32> for Coeff {
    fn from(value: i32) -> Self {
        Self::int(i64::from(value))
    }
}

impl From<u32> for Coeff {
    fn from(value: u32) -> Self {
        Self::Int(IBig::from(value))
    }
}

impl From<f64> for Coeff {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<IBig> for Coeff {
    fn from(value: IBig) -> Self {
        Self::Int(value)
    }
}

impl From<RBig> for Coeff {
    fn from(value: RBig) -> Self {
        Self::from_rational(value)
    }
}

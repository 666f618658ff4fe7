//! Ring arithmetic on sparse polynomials.
//!
//! Binary operators return cancelled polynomials. The compound assignment
//! operators `+=` and `-=` accumulate in place and may leave zero entries
//! behind until [`Poly::cancel`] is called.

use multipoly_numeric::Coeff;
use num_traits::{One, Zero};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::trace;

use crate::error::{PolyError, Result};
use crate::sparse::Poly;

impl Poly {
    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Coeff) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        let mut result = Self::zero();
        result.terms = self
            .terms
            .iter()
            .map(|(key, x)| (key.clone(), x * c))
            .collect();
        result.cancel();
        result
    }

    /// Divides by a scalar, multiplying by its reciprocal.
    ///
    /// The reciprocal is exact for integer and rational scalars.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `c` is zero.
    pub fn div_scalar(&self, c: impl Into<Coeff>) -> Result<Self> {
        let inv = c.into().recip()?;
        Ok(self.scale(&inv))
    }

    /// Raises the polynomial to the power `n`.
    ///
    /// Uses binary exponentiation, so only O(log n) products are formed.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `n < 0`.
    pub fn pow(&self, n: i64) -> Result<Self> {
        let exp = u64::try_from(n).map_err(|_| PolyError::NegativeExponent(n))?;
        Ok(self.pow_unsigned(exp))
    }

    /// Binary exponentiation for a non-negative exponent.
    pub(crate) fn pow_unsigned(&self, exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut n = exp;
        let mut products = 0u32;

        while n > 0 {
            if n % 2 == 1 {
                result = &result * &base;
                n -= 1;
            } else {
                base = &base * &base;
                n /= 2;
            }
            products += 1;
        }

        trace!(exp, products, terms = result.len(), "computed polynomial power");
        result
    }
}

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        for (key, c) in &rhs.terms {
            self.accumulate(key.clone(), c.clone());
        }
    }
}

impl AddAssign for Poly {
    fn add_assign(&mut self, rhs: Poly) {
        for (key, c) in rhs.terms {
            self.accumulate(key, c);
        }
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        for (key, c) in &rhs.terms {
            self.accumulate(key.clone(), -c);
        }
    }
}

impl SubAssign for Poly {
    fn sub_assign(&mut self, rhs: Poly) {
        *self -= &rhs;
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

impl Add<&Poly> for Poly {
    type Output = Self;

    fn add(mut self, rhs: &Poly) -> Self::Output {
        self += rhs;
        self.cancel();
        self
    }
}

impl Add for Poly {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self.cancel();
        self
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs
    }
}

impl Sub<&Poly> for Poly {
    type Output = Self;

    fn sub(mut self, rhs: &Poly) -> Self::Output {
        self -= rhs;
        self.cancel();
        self
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self - &rhs
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        let mut result = Poly::zero();
        result.terms = self.terms.iter().map(|(key, c)| (key.clone(), -c)).collect();
        result
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for c in self.terms.values_mut() {
            *c = -&*c;
        }
        self
    }
}

/// Schoolbook convolution over both key sets.
impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Poly::zero();
        if self.is_empty() || rhs.is_empty() {
            return result;
        }

        result.terms.reserve(self.len() * rhs.len());
        for (k1, c1) in &self.terms {
            for (k2, c2) in &rhs.terms {
                result.accumulate(k1.mul(k2), c1 * c2);
            }
        }

        // (x - 2)(x + 2) = x^2 - 4: the x term cancels
        result.cancel();
        result
    }
}

impl Mul<&Poly> for Poly {
    type Output = Self;

    fn mul(self, rhs: &Poly) -> Self::Output {
        &self * rhs
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign<&Poly> for Poly {
    fn mul_assign(&mut self, rhs: &Poly) {
        *self = &*self * rhs;
    }
}

impl Mul<&Coeff> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Coeff) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Coeff> for Poly {
    type Output = Self;

    fn mul(self, rhs: Coeff) -> Self::Output {
        self.scale(&rhs)
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.is_zero_valued()
    }
}

impl One for Poly {
    fn one() -> Self {
        Self::monomial(crate::exponents::Exponents::one(), Coeff::one())
    }
}

impl Sum for Poly {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut total = Self::zero();
        for p in iter {
            total += p;
        }
        total.cancel();
        total
    }
}

impl<'a> Sum<&'a Poly> for Poly {
    fn sum<I: Iterator<Item = &'a Poly>>(iter: I) -> Self {
        let mut total = Self::zero();
        for p in iter {
            total += p;
        }
        total.cancel();
        total
    }
}

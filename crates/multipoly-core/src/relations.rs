//! Division and least common multiple of monomials.

use multipoly_numeric::Coeff;
use num_traits::One;

use crate::error::{PolyError, Result};
use crate::exponents::Exponents;
use crate::sparse::Poly;

impl Poly {
    /// Returns the only non-zero term, or `NotAMonomial`.
    fn single_term(&self) -> Result<(&Exponents, &Coeff)> {
        let mut terms = self.nonzero_terms();
        match (terms.next(), terms.next()) {
            (Some(term), None) => Ok(term),
            _ => Err(PolyError::NotAMonomial),
        }
    }

    /// Returns true if the polynomial has exactly one non-zero term.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.single_term().is_ok()
    }

    /// Divides one single-term polynomial by another.
    ///
    /// The coefficient quotient is exact when both coefficients are exact.
    ///
    /// # Errors
    ///
    /// - [`PolyError::NotAMonomial`] if either operand has other than one term
    /// - [`PolyError::Indivisible`] if `divisor` does not divide `self`
    pub fn div_monomial(&self, divisor: &Self) -> Result<Self> {
        let (k1, c1) = self.single_term()?;
        let (k2, c2) = divisor.single_term()?;

        let key = k1.div(k2).ok_or(PolyError::Indivisible)?;
        let c = c1.checked_div(c2)?;
        Ok(Self::monomial(key, c))
    }

    /// Computes the least common multiple of two single-term polynomials.
    ///
    /// The result always has coefficient 1.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotAMonomial`] if either operand has other than
    /// one term.
    pub fn lcm(&self, other: &Self) -> Result<Self> {
        let (k1, _) = self.single_term()?;
        let (k2, _) = other.single_term()?;
        Ok(Self::monomial(k1.lcm(k2), Coeff::one()))
    }
}

//! Substitution of a variable by a polynomial.

use multipoly_numeric::Coeff;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::sparse::Poly;

impl Poly {
    /// Replaces `x_var` with `other` throughout the polynomial.
    ///
    /// Each power `other^e` is computed once and shared by every term whose
    /// `x_var` exponent is `e`. Composing with a constant evaluates `x_var`.
    #[must_use]
    pub fn compose(&self, other: &Self, var: usize) -> Self {
        let mut powers: FxHashMap<u32, Self> = FxHashMap::default();
        let mut result = Self::zero();

        for (key, c) in self.nonzero_terms() {
            let exp = key.exponent(var);
            if exp == 0 {
                result.accumulate(key.clone(), c.clone());
                continue;
            }

            let power = powers
                .entry(exp)
                .or_insert_with(|| other.pow_unsigned(u64::from(exp)));
            let rest = Self::monomial(key.with_exponent(var, 0), c.clone());
            result += &rest * &*power;
        }

        trace!(var, powers = powers.len(), terms = result.len(), "composed polynomial");
        result.cancel();
        result
    }

    /// Evaluates `x_var` at a scalar, leaving the other variables in place.
    #[must_use]
    pub fn substitute(&self, var: usize, value: impl Into<Coeff>) -> Self {
        self.compose(&Self::constant(value), var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_powers() {
        let x = Poly::var(0);
        let y = Poly::var(1);

        assert_eq!(Poly::new(1, &[3]).compose(&Poly::new(1, &[2]), 0), Poly::new(1, &[6]));
        assert_eq!(x.pow(3).unwrap().compose(&y.pow(2).unwrap(), 0), y.pow(6).unwrap());
        assert_eq!(x.compose(&y.pow(2).unwrap(), 0), y.pow(2).unwrap());
    }

    #[test]
    fn test_compose_missing_variable() {
        let x = Poly::var(0);
        let y = Poly::var(1);
        assert_eq!(x.compose(&y, 2), x);
    }

    #[test]
    fn test_compose_binomial() {
        let x = Poly::var(0);
        let y = Poly::var(1);
        let z = Poly::var(2);

        // x^2 with x -> z + 3y
        let sub = &z + &Poly::new(3, &[0, 1]);
        let expected = z.pow(2).unwrap() + Poly::new(6, &[0, 1, 1]) + Poly::new(9, &[0, 2]);
        assert_eq!(x.pow(2).unwrap().compose(&sub, 0), expected);

        // (x^2 + y) with y -> x^2
        let p = x.pow(2).unwrap() + y;
        assert_eq!(p.compose(&x.pow(2).unwrap(), 1), Poly::new(2, &[2]));
    }

    #[test]
    fn test_compose_scalar_evaluates() {
        assert_eq!(Poly::new(1, &[3]).compose(&Poly::from(2), 0), Poly::from(8));
        assert_eq!(Poly::new(1, &[0, 3]).substitute(1, 2), Poly::from(8));

        // (3 x y^2 + 5 y^2 z) with y -> 2x
        let p = Poly::new(3, &[1, 2]) + Poly::new(5, &[0, 2, 1]);
        let expected = Poly::new(12, &[3]) + Poly::new(20, &[2, 0, 1]);
        assert_eq!(p.compose(&Poly::new(2, &[1]), 1), expected);
    }

    #[test]
    fn test_compose_identity() {
        let p = Poly::from_coeffs([1, -4, 0, 2]) * Poly::new(3, &[0, 1, 2]);
        for var in 0..3 {
            assert_eq!(p.compose(&Poly::var(var), var), p);
        }
    }

    #[test]
    fn test_compose_cancels() {
        // (x - 1) with x -> 1 is the zero polynomial
        let p = Poly::from_coeffs([-1, 1]);
        let r = p.compose(&Poly::one(), 0);
        assert!(r.is_empty());
    }
}

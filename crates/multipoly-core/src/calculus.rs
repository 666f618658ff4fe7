//! Differentiation and integration with respect to one variable.

use multipoly_numeric::Coeff;
use std::num::NonZeroU32;

use crate::sparse::Poly;

impl Poly {
    /// Returns the partial derivative with respect to `x_var`.
    ///
    /// `d/dx (c * x^n) = c * n * x^(n-1)`; terms without `x_var` vanish.
    #[must_use]
    pub fn derivative(&self, var: usize) -> Self {
        let mut result = Self::zero();
        for (key, c) in self.nonzero_terms() {
            let exp = key.exponent(var);
            if exp == 0 {
                continue;
            }
            result.accumulate(key.with_exponent(var, exp - 1), c * &Coeff::from(exp));
        }
        result.cancel();
        result
    }

    /// Returns the antiderivative with respect to `x_var`.
    ///
    /// `∫ c * x^n dx = c / (n+1) * x^(n+1)`. No integration constant is
    /// added. Division is exact for exact coefficients.
    #[must_use]
    pub fn integral(&self, var: usize) -> Self {
        let mut result = Self::zero();
        for (key, c) in self.nonzero_terms() {
            let exp = NonZeroU32::MIN.saturating_add(key.exponent(var));
            result.accumulate(key.with_exponent(var, exp.get()), c.div_count(exp));
        }
        result.cancel();
        result
    }
}

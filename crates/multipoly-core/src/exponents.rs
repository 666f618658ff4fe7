//! Exponent keys for sparse multivariate polynomials.
//!
//! An exponent key stores the power of each variable, index `i` holding the
//! power of `x_i`. Keys of different lengths may coexist in one polynomial:
//! a missing trailing position is an exponent of zero, and every binary
//! operation zero-pads the shorter key.
//!
//! Keys are always canonical: trailing zeros are trimmed, except for the
//! constant key `(0)`.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;

/// Number of variables stored inline before the key spills to the heap.
pub const INLINE_VARS: usize = 4;

type ExpVec = SmallVec<[u32; INLINE_VARS]>;

/// A canonical exponent key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Exponents(ExpVec);

impl Exponents {
    /// Creates the key of the constant term, `(0)`.
    #[must_use]
    pub fn one() -> Self {
        Self(smallvec![0])
    }

    /// Creates the key of the variable `x_i`.
    #[must_use]
    pub fn var(i: usize) -> Self {
        let mut exps: ExpVec = smallvec![0; i + 1];
        exps[i] = 1;
        Self(exps)
    }

    /// Creates a key from exponents, trimming trailing zeros.
    #[must_use]
    pub fn from_slice(exps: &[u32]) -> Self {
        Self::trimmed(exps.iter().copied().collect())
    }

    /// Restores the canonical form of a raw exponent vector.
    fn trimmed(mut exps: ExpVec) -> Self {
        while exps.len() > 1 && exps.last() == Some(&0) {
            exps.pop();
        }
        if exps.is_empty() {
            exps.push(0);
        }
        Self(exps)
    }

    /// Combines two keys component-wise, zero-padding the shorter one.
    fn zip_padded(&self, other: &Self, mut f: impl FnMut(u32, u32) -> u32) -> Self {
        let n = self.len().max(other.len());
        Self::trimmed((0..n).map(|i| f(self.exponent(i), other.exponent(i))).collect())
    }

    /// Returns the exponent of variable i (zero past the end of the key).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Returns the stored exponents.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Returns the number of stored positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a canonical key stores at least one position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true for the constant key.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns a copy with the exponent of `var` replaced, re-trimmed.
    #[must_use]
    pub fn with_exponent(&self, var: usize, exp: u32) -> Self {
        let mut exps = self.0.clone();
        if exps.len() <= var {
            exps.resize(var + 1, 0);
        }
        exps[var] = exp;
        Self::trimmed(exps)
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.zip_padded(other, |a, b| a + b)
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `None` if some exponent of `other` exceeds the one in `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.divides(self) {
            Some(self.zip_padded(other, |a, b| a - b))
        } else {
            None
        }
    }

    /// Returns true if self divides other.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, &e)| e <= other.exponent(i))
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        self.zip_padded(other, u32::max)
    }
}

impl Default for Exponents {
    fn default() -> Self {
        Self::one()
    }
}

/// Zero-padded lexicographic order, variable 0 most significant.
impl Ord for Exponents {
    fn cmp(&self, other: &Self) -> Ordering {
        let n = self.len().max(other.len());
        (0..n)
            .map(|i| self.exponent(i).cmp(&other.exponent(i)))
            .find(|&ord| ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Exponents {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exponents{:?}", self.as_slice())
    }
}

impl From<&[u32]> for Exponents {
    fn from(exps: &[u32]) -> Self {
        Self::from_slice(exps)
    }
}

impl<const N: usize> From<[u32; N]> for Exponents {
    fn from(exps: [u32; N]) -> Self {
        Self::from_slice(&exps)
    }
}

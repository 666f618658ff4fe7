//! Sparse multivariate polynomials.
//!
//! A polynomial maps canonical exponent keys to coefficients. The empty map
//! is the zero polynomial. In-place accumulation (`+=`, `-=`) may leave
//! transient zero entries behind; [`Poly::cancel`] purges them, and every
//! other producing operation returns a cancelled polynomial.

use multipoly_numeric::Coeff;
use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::collections::hash_map;
use std::fmt;

use crate::exponents::Exponents;

/// A sparse multivariate polynomial.
#[derive(Clone, Debug, Default)]
pub struct Poly {
    /// Coefficients keyed by canonical exponent vectors.
    pub(crate) terms: FxHashMap<Exponents, Coeff>,
}

impl Poly {
    /// Creates the single-term polynomial `c * x0^e0 * x1^e1 * ...`.
    ///
    /// A zero coefficient gives the zero polynomial.
    #[must_use]
    pub fn new(c: impl Into<Coeff>, exps: &[u32]) -> Self {
        Self::monomial(Exponents::from_slice(exps), c.into())
    }

    /// Creates a single-term polynomial from a canonical key.
    #[must_use]
    pub fn monomial(key: Exponents, c: Coeff) -> Self {
        let mut poly = Self::zero();
        if !c.is_zero() {
            poly.terms.insert(key, c);
        }
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::monomial(Exponents::one(), Coeff::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: impl Into<Coeff>) -> Self {
        Self::monomial(Exponents::one(), c.into())
    }

    /// Creates the variable `x_i`.
    #[must_use]
    pub fn var(i: usize) -> Self {
        Self::monomial(Exponents::var(i), Coeff::one())
    }

    /// Creates a polynomial in `x0` from its coefficients in ascending degree
    /// order. Zero entries are skipped.
    #[must_use]
    pub fn from_coeffs<I, C>(coeffs: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coeff>,
    {
        let mut poly = Self::zero();
        for (i, c) in (0u32..).zip(coeffs) {
            let c = c.into();
            if !c.is_zero() {
                poly.accumulate(Exponents::from_slice(&[i]), c);
            }
        }
        poly
    }

    /// Adds `c` to the coefficient stored at `key` without cancelling.
    pub(crate) fn accumulate(&mut self, key: Exponents, c: Coeff) {
        match self.terms.entry(key) {
            hash_map::Entry::Occupied(mut entry) => *entry.get_mut() += &c,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(c);
            }
        }
    }

    /// Returns the coefficient of the given exponents.
    ///
    /// The key may be shorter or longer than any stored key; absent keys
    /// have coefficient zero.
    #[must_use]
    pub fn coeff(&self, exps: &[u32]) -> Coeff {
        self.terms
            .get(&Exponents::from_slice(exps))
            .cloned()
            .unwrap_or_else(Coeff::zero)
    }

    /// Returns the number of stored entries, transient zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms with a non-zero coefficient.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.nonzero_terms().count()
    }

    /// Returns true if every stored coefficient is zero.
    ///
    /// This holds for uncancelled polynomials too, so it is the test
    /// equality is built on.
    #[must_use]
    pub fn is_zero_valued(&self) -> bool {
        self.terms.values().all(Zero::is_zero)
    }

    /// Removes every entry whose coefficient is zero.
    pub fn cancel(&mut self) {
        self.terms.retain(|_, c| !c.is_zero());
    }

    /// Returns the total degree, or 0 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.nonzero_terms()
            .map(|(key, _)| key.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Iterates over stored `(key, coefficient)` pairs, transient zeros
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (&Exponents, &Coeff)> {
        self.terms.iter()
    }

    /// Iterates over the entries with a non-zero coefficient.
    pub(crate) fn nonzero_terms(&self) -> impl Iterator<Item = (&Exponents, &Coeff)> {
        self.terms.iter().filter(|(_, c)| !c.is_zero())
    }

    /// Returns a lazy iterator over the terms as single-term polynomials.
    ///
    /// Zero entries are skipped without touching the receiver; calling
    /// `terms()` again starts over.
    #[must_use]
    pub fn terms(&self) -> Terms<'_> {
        Terms {
            inner: self.terms.iter(),
        }
    }
}

/// Iterator over the non-zero terms of a [`Poly`].
#[derive(Clone)]
pub struct Terms<'a> {
    inner: hash_map::Iter<'a, Exponents, Coeff>,
}

impl Iterator for Terms<'_> {
    type Item = Poly;

    fn next(&mut self) -> Option<Poly> {
        self.inner
            .by_ref()
            .find(|(_, c)| !c.is_zero())
            .map(|(key, c)| Poly::monomial(key.clone(), c.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// `a == b` iff every coefficient of `a - b` is zero.
impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        let left = self.terms.iter().all(|(key, c)| match other.terms.get(key) {
            Some(d) => (c - d).is_zero(),
            None => c.is_zero(),
        });
        left && other
            .terms
            .iter()
            .all(|(key, d)| self.terms.contains_key(key) || d.is_zero())
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for Poly {
    fn from(c: i64) -> Self {
        Self::constant(c)
    }
}

impl From<i32> for Poly {
    fn from(c: i32) -> Self {
        Self::constant(c)
    }
}

impl From<f64> for Poly {
    fn from(c: f64) -> Self {
        Self::constant(c)
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<_> = self.nonzero_terms().collect();
        if terms.is_empty() {
            return write!(f, "Poly()");
        }
        terms.sort_by(|a, b| a.0.cmp(b.0));

        for (i, (key, c)) in terms.into_iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "Poly({c}")?;
            for e in key.as_slice() {
                write!(f, ", {e}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

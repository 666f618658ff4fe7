//! Monomial orderings and leading-term extraction.
//!
//! An ordering picks the dominant term of a polynomial, and the resulting
//! [`SortKey`] orders a collection of polynomials by their dominant terms.

use multipoly_numeric::Coeff;
use num_traits::One;
use std::cmp::Ordering;

use crate::error::{PolyError, Result};
use crate::exponents::Exponents;
use crate::sparse::Poly;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    #[default]
    Grlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Exponents, b: &Exponents) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
        }
    }

    /// Returns the sort key of a single monomial.
    #[must_use]
    pub fn key(&self, exps: &Exponents) -> SortKey {
        let degree = match self {
            MonomialOrder::Lex => 0,
            MonomialOrder::Grlex => exps.total_degree(),
        };
        SortKey {
            degree,
            exponents: exps.clone(),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compares two monomials lexicographically.
pub fn cmp_lex(a: &Exponents, b: &Exponents) -> Ordering {
    a.cmp(b)
}

/// Compares two monomials by graded lexicographic order.
pub fn cmp_grlex(a: &Exponents, b: &Exponents) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}

/// Sort key of a polynomial's dominant term.
///
/// Under [`MonomialOrder::Lex`] the degree component is always 0, so keys
/// compare by exponents alone.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SortKey {
    degree: u32,
    exponents: Exponents,
}

impl SortKey {
    /// Returns the degree component.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the exponents of the dominant term.
    #[must_use]
    pub fn exponents(&self) -> &Exponents {
        &self.exponents
    }
}

impl Poly {
    /// Returns the sort key of the dominant term under `order`.
    ///
    /// Zero-valued polynomials have no key and sort before everything else.
    #[must_use]
    pub fn sort_key(&self, order: MonomialOrder) -> Option<SortKey> {
        self.nonzero_terms().map(|(key, _)| order.key(key)).max()
    }

    /// Sort key for lexicographic order.
    #[must_use]
    pub fn key_lex(&self) -> Option<SortKey> {
        self.sort_key(MonomialOrder::Lex)
    }

    /// Sort key for graded lexicographic order.
    #[must_use]
    pub fn key_grlex(&self) -> Option<SortKey> {
        self.sort_key(MonomialOrder::Grlex)
    }

    fn leading(&self, order: MonomialOrder) -> Result<(&Exponents, &Coeff)> {
        self.nonzero_terms()
            .max_by(|a, b| order.compare(a.0, b.0))
            .ok_or(PolyError::ZeroPolynomial)
    }

    /// Returns the leading term under `order`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPolynomial`] if every coefficient is zero.
    pub fn leading_term(&self, order: MonomialOrder) -> Result<Self> {
        let (key, c) = self.leading(order)?;
        Ok(Self::monomial(key.clone(), c.clone()))
    }

    /// Returns the leading monomial (coefficient 1) under `order`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPolynomial`] if every coefficient is zero.
    pub fn leading_monomial(&self, order: MonomialOrder) -> Result<Self> {
        let (key, _) = self.leading(order)?;
        Ok(Self::monomial(key.clone(), Coeff::one()))
    }

    /// Returns the leading coefficient under `order`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPolynomial`] if every coefficient is zero.
    pub fn leading_coefficient(&self, order: MonomialOrder) -> Result<Coeff> {
        let (_, c) = self.leading(order)?;
        Ok(c.clone())
    }
}

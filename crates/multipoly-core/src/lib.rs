//! # multipoly-core
//!
//! Sparse multivariate polynomial algebra.
//!
//! This crate provides:
//! - A canonical sparse representation keyed by trimmed exponent vectors
//! - Ring arithmetic with binary exponentiation
//! - Division and lcm of monomials
//! - Differentiation and integration per variable
//! - Composition with memoized powers
//! - Lexicographic and graded-lex leading terms
//!
//! Coefficients come from [`multipoly_numeric::Coeff`]: arithmetic stays
//! exact while every operand is exact.
//!
//! ## Example
//!
//! ```rust
//! use multipoly_core::{MonomialOrder, Poly};
//!
//! let x = Poly::var(0);
//! let y = Poly::var(1);
//! let p = (Poly::new(2, &[1]) + y).pow(3).unwrap();
//!
//! assert_eq!(p.leading_term(MonomialOrder::Lex).unwrap(), Poly::new(8, &[3]));
//! assert_eq!(p.derivative(0).degree(), 2);
//! assert_eq!(x.compose(&Poly::from(4), 0), Poly::from(4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arith;
mod calculus;
mod compose;
pub mod error;
pub mod exponents;
pub mod ordering;
mod relations;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use exponents::Exponents;
pub use ordering::{MonomialOrder, SortKey};
pub use sparse::{Poly, Terms};

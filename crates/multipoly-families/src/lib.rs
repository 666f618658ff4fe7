//! # multipoly-families
//!
//! Named polynomial families built on multipoly-core.
//!
//! This crate provides:
//! - Products of natural roots `(x-1)(x-2)...(x-n)`
//! - Geometric sums `1 + x + ... + x^n`
//! - Hermite, Chebyshev and Legendre sequences from their three-term
//!   recurrences, memoized per generator
//!
//! Every family is univariate in `x0` and is built only from the core's
//! construction and arithmetic operations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod families;

pub use families::{Family, PolyFamilies};

//! # multipoly
//!
//! Sparse multivariate polynomial algebra in Rust.
//!
//! Polynomials are stored as maps from exponent vectors to coefficients,
//! with coefficients drawn from a small numeric tower: arbitrary-precision
//! integers, exact rationals and floating-point reals.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Integers and rationals never lose precision;
//!   reals are contagious
//! - **Sparse Representation**: Only non-zero terms are stored, in any
//!   number of variables
//! - **Calculus**: Per-variable differentiation and integration
//! - **Composition**: Substitution of a polynomial for a variable
//! - **Orderings**: Lex and graded-lex leading terms and sort keys
//! - **Families**: Hermite, Chebyshev, Legendre and friends
//!
//! ## Quick Start
//!
//! ```rust
//! use multipoly::prelude::*;
//!
//! let x = Poly::var(0);
//! let y = Poly::var(1);
//!
//! let p = (&x + &y).pow(2).unwrap();
//! assert_eq!(p.coeff(&[1, 1]), 2);
//! assert_eq!(p.derivative(0), Poly::new(2, &[1]) + Poly::new(2, &[0, 1]));
//!
//! let mut families = PolyFamilies::new();
//! assert_eq!(families.chebyshev(2).to_string(), "Poly(-1, 0) + Poly(2, 2)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use multipoly_core as core;
pub use multipoly_families as families;
pub use multipoly_numeric as numeric;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use multipoly_core::{Exponents, MonomialOrder, Poly, PolyError, SortKey};
    pub use multipoly_families::{Family, PolyFamilies};
    pub use multipoly_numeric::{Coeff, CoeffError};
}

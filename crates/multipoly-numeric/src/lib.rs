//! # multipoly-numeric
//!
//! The coefficient tower for multipoly.
//!
//! This crate wraps `dashu` to provide a single coefficient type that mixes:
//! - Arbitrary precision integers
//! - Arbitrary precision rationals (always in lowest terms)
//! - Approximate reals (`f64`)
//!
//! ## Promotion Rules
//!
//! - exact ∘ exact → exact (an integral rational is demoted to an integer)
//! - exact ∘ approximate → approximate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coeff;

#[cfg(test)]
mod proptests;

pub use coeff::{Coeff, CoeffError};

//! # Secret Sharing
//!
//! This library recovers the secret of a Shamir secret sharing scheme over
//! the integers, i.e. the constant term of a polynomial of degree `k - 1`,
//! from `k` or more shares whose values are written as numerals in bases
//! 2 through 16.
//!
//! All arithmetic is performed on arbitrary-precision integers, so no
//! rounding can corrupt the secret.
//!
//! ## Components
//!
//! - Numeral decoding and rendering (`numeral`)
//! - Points, integer polynomials and Lagrange interpolation (`poly`)
//! - Secret reconstruction (`shamir`)
//! - Typed share sets as produced by an input parser (`input`)

mod errors;
pub mod input;
pub mod numeral;
pub mod poly;
pub mod shamir;

// Re-exports.
pub use self::errors::*;

//! Points, polynomials with integer coefficients and exact Lagrange
//! interpolation over the rationals.

pub mod lagrange;
mod point;
mod rational;
mod univariate;

// Re-exports.
pub use self::{point::*, rational::*, univariate::*};

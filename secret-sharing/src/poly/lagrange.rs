//! Lagrange interpolation over the rationals.
//!
//! Points are interpolated with arbitrary-precision integers only, so the
//! results are exact. Denominators are never inverted, they are carried
//! along as the second half of a fraction.
use num_bigint::BigInt;
use num_traits::{CheckedDiv, One, Zero};

use crate::{Error, Result};

use super::{Point, Rational};

/// Returns the nominator and the denominator of the i-th Lagrange basis
/// polynomial evaluated at x, for the given set of x values.
///
/// The i-th Lagrange basis polynomial is defined as:
/// ```text
///     L_i(x) = \prod_{j=0,j≠i}^n (x - x_j) / (x_i - x_j)
/// ```
/// i.e. it holds `L_i(x_i)` = 1 and `L_i(x_j) = 0` for all `j ≠ i`.
///
/// The fraction is not reduced. The denominator is zero if and only if
/// `x_i` appears more than once.
pub fn basis(xs: &[BigInt], i: usize, x: &BigInt) -> (BigInt, BigInt) {
    let mut nom = BigInt::one();
    let mut denom = BigInt::one();
    for j in 0..xs.len() {
        if j == i {
            continue;
        }
        nom *= x - &xs[j]; // (x - x_j)
        denom *= &xs[i] - &xs[j]; // (x_i - x_j)
    }

    (nom, denom)
}

/// Returns the nominator and the denominator of the i-th Lagrange
/// coefficient for the given set of x values.
///
/// The i-th Lagrange coefficient is defined as:
/// ```text
///     L_i(0) = \prod_{j=0,j≠i}^n (0 - x_j) / (x_i - x_j)
/// ```
pub fn coefficient(xs: &[BigInt], i: usize) -> (BigInt, BigInt) {
    basis(xs, i, &BigInt::zero())
}

/// Returns the constant term of the polynomial passing through the given
/// points, dividing each term separately.
///
/// Every term `y_i * nom_i / denom_i` is truncated towards zero before
/// it is added to the sum. The result is therefore exact only when each
/// term divides evenly. This holds for shares of an integer polynomial
/// taken at `x = 1, 2, ..., k`, but not in general.
pub fn constant_term(points: &[Point]) -> Result<BigInt> {
    let xs = x_coordinates(points);

    let mut secret = BigInt::zero();
    for (i, point) in points.iter().enumerate() {
        let (nom, denom) = coefficient(&xs, i);
        let term = (&point.y * nom)
            .checked_div(&denom)
            .ok_or(Error::DenominatorZero)?;
        secret += term;
    }

    Ok(secret)
}

/// Evaluates the Lagrange interpolation polynomial of the given points at x.
///
/// The Lagrange polynomial is defined as:
/// ```text
///     L(x) = \sum_{i=0}^n y_i * L_i(x)
/// ```
/// where `L_i(x)` represents the i-th Lagrange basis polynomial.
pub fn interpolate(points: &[Point], x: &BigInt) -> Result<Rational> {
    let xs = x_coordinates(points);

    let mut value = Rational::zero();
    for (i, point) in points.iter().enumerate() {
        let (nom, denom) = basis(&xs, i, x);
        let term = Rational::new(&point.y * nom, denom).ok_or(Error::DenominatorZero)?;
        value += term;
    }

    Ok(value)
}

fn x_coordinates(points: &[Point]) -> Vec<BigInt> {
    points.iter().map(|p| BigInt::from(p.x)).collect()
}

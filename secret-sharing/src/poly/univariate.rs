use num_bigint::BigInt;
use num_traits::Zero;

use super::Point;

/// Univariate polynomial with integer coefficients.
///
/// ```text
/// A(x) = \sum_{i=0}^{deg_x} a_i x^i
/// ```
///
/// The constant zero polynomial is represented by a vector with one zero
/// element, rather than by an empty vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    a: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a polynomial with the given coefficients, starting with
    /// the constant term.
    pub fn with_coefficients<T: Into<BigInt>>(a: Vec<T>) -> Self {
        if a.is_empty() {
            return Self {
                a: vec![BigInt::zero()],
            };
        }

        let a = a.into_iter().map(Into::into).collect();
        Self { a }
    }

    /// Returns the number of coefficients in the polynomial.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Returns the coefficient of the constant term.
    pub fn constant(&self) -> &BigInt {
        &self.a[0]
    }

    /// Evaluates the polynomial at the given point using Horner's rule.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        self.a
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, ai| acc * x + ai)
    }

    /// Samples the polynomial at the given x-coordinates.
    pub fn points(&self, xs: impl IntoIterator<Item = u64>) -> Vec<Point> {
        xs.into_iter()
            .map(|x| Point::new(x, self.eval(&BigInt::from(x))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::Polynomial;

    #[test]
    fn test_eval() {
        let p = Polynomial::with_coefficients(vec![3, 0, 1]); // x^2 + 3
        assert_eq!(p.size(), 3);
        assert_eq!(p.constant(), &BigInt::from(3));
        assert_eq!(p.eval(&BigInt::from(0)), BigInt::from(3));
        assert_eq!(p.eval(&BigInt::from(2)), BigInt::from(7));
        assert_eq!(p.eval(&BigInt::from(-3)), BigInt::from(12));

        let p = Polynomial::with_coefficients(Vec::<i64>::new());
        assert_eq!(p.size(), 1);
        assert_eq!(p.eval(&BigInt::from(10)), BigInt::from(0));
    }

    #[test]
    fn test_points() {
        let p = Polynomial::with_coefficients(vec![-5, 2]); // 2x - 5
        let points = p.points([1, 2, 10]);

        let ys: Vec<_> = points.iter().map(|p| p.y().clone()).collect();
        assert_eq!(
            ys,
            vec![BigInt::from(-3), BigInt::from(-1), BigInt::from(15)]
        );
        let xs: Vec<_> = points.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![1, 2, 10]);
    }
}

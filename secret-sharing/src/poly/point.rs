use num_bigint::BigInt;

/// A point (x,y) on a univariate polynomial f(x), where y = f(x).
///
/// The x-coordinate is the identifier of the share and is never zero,
/// as f(0) is the secret itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// The x-coordinate of the point.
    pub(crate) x: u64,
    /// The y-coordinate of the point.
    pub(crate) y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(&self) -> u64 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

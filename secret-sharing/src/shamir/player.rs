use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    poly::{lagrange, Point, Rational},
    Error, Result,
};

/// The way the Lagrange terms of the secret are divided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Each term is divided on its own and truncated towards zero.
    ///
    /// The remainders are silently dropped, so the secret is correct only
    /// if every term divides evenly.
    #[default]
    Truncate,
    /// The terms are summed as an exact fraction which must reduce to
    /// an integer, otherwise the shares are rejected as inconsistent.
    Exact,
}

/// A constructor of the shared secret.
pub struct Player {
    /// The number of shares needed to reconstruct the secret, i.e. one more
    /// than the degree of the secret-sharing polynomial.
    threshold: usize,
    /// The division policy.
    policy: DivisionPolicy,
}

impl Player {
    /// Creates a new player truncating each Lagrange term.
    pub fn new(threshold: usize) -> Self {
        Player {
            threshold,
            policy: DivisionPolicy::default(),
        }
    }

    /// Sets the division policy.
    pub fn with_policy(mut self, policy: DivisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the number of shares needed to reconstruct the secret.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the division policy.
    pub fn policy(&self) -> DivisionPolicy {
        self.policy
    }

    /// Reconstructs the secret from the provided shares.
    ///
    /// Only the first `threshold` shares are used, in the order given.
    /// Shares are not sorted, so the subset depends on how the caller
    /// ordered them.
    pub fn reconstruct_secret(&self, shares: &[Point]) -> Result<BigInt> {
        let shares = self.select(shares)?;

        match self.policy {
            DivisionPolicy::Truncate => lagrange::constant_term(shares),
            DivisionPolicy::Exact => lagrange::interpolate(shares, &BigInt::zero())?
                .into_integer()
                .ok_or(Error::InconsistentPolynomial),
        }
    }

    /// Verifies the shares following the first `threshold` shares against
    /// the polynomial determined by those.
    ///
    /// Returns the x-coordinates of the shares which do not lie on the
    /// polynomial.
    pub fn verify_shares(&self, shares: &[Point]) -> Result<Vec<u64>> {
        let selected = self.select(shares)?;

        let mut invalid = Vec::new();
        for share in &shares[selected.len()..] {
            let y = lagrange::interpolate(selected, &BigInt::from(share.x))?;
            if y != Rational::from(share.y.clone()) {
                invalid.push(share.x);
            }
        }

        Ok(invalid)
    }

    /// Returns the shares used for reconstruction.
    fn select<'a>(&self, shares: &'a [Point]) -> Result<&'a [Point]> {
        if self.threshold == 0 {
            return Err(Error::InvalidThreshold);
        }
        if shares.len() < self.threshold {
            return Err(Error::NotEnoughShares {
                required: self.threshold,
                available: shares.len(),
            });
        }

        let shares = &shares[..self.threshold];
        if let Some(x) = Self::duplicate_x(shares) {
            return Err(Error::DuplicateXCoordinate(x));
        }

        Ok(shares)
    }

    /// Returns the first x-coordinate shared by two shares, if any.
    fn duplicate_x(shares: &[Point]) -> Option<u64> {
        // For a small number of shareholders, a brute-force approach should
        // suffice.
        for i in 0..shares.len() {
            for j in (i + 1)..shares.len() {
                if shares[i].x == shares[j].x {
                    return Some(shares[i].x);
                }
            }
        }
        None
    }
}

/// Reconstructs the secret from the first `k` points using the
/// default division policy.
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt> {
    Player::new(k).reconstruct_secret(points)
}

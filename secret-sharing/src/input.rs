//! Share sets as handed over by an input parser.
//!
//! A share set is a JSON object of the form
//! ```text
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     ...
//! }
//! ```
//! where every key other than `keys` is a share id, which becomes the
//! x-coordinate of the decoded point.
use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::{
    numeral,
    poly::Point,
    shamir::{DivisionPolicy, Player},
    Error, Result,
};

/// Share set parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    /// The declared number of shares.
    pub n: usize,
    /// The number of shares needed to reconstruct the secret.
    pub k: usize,
}

/// A share whose value is written as a numeral.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    /// The base of the numeral in decimal notation.
    pub base: String,
    /// The numeral.
    pub value: String,
}

impl EncodedShare {
    /// Decodes the share into a point with the given x-coordinate.
    pub fn decode(&self, x: u64) -> Result<Point> {
        let base = numeral::parse_base(&self.base)?;
        let y = numeral::decode(&self.value, base)?;
        Ok(Point::new(x, BigInt::from(y)))
    }
}

/// A set of encoded shares together with the reconstruction threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSet {
    /// Share set parameters.
    pub keys: Keys,
    /// Encoded shares, keyed by share id.
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

impl ShareSet {
    /// Returns the number of shares needed to reconstruct the secret.
    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// Returns the declared number of shares, which may differ from
    /// the number of shares present.
    pub fn declared_count(&self) -> usize {
        self.keys.n
    }

    /// Decodes all shares into points ordered by ascending share id.
    pub fn points(&self) -> Result<Vec<Point>> {
        let mut ids = self
            .shares
            .iter()
            .map(|(id, share)| parse_id(id).map(|x| (x, share)))
            .collect::<Result<Vec<_>>>()?;
        ids.sort_by_key(|(x, _)| *x);

        ids.into_iter().map(|(x, share)| share.decode(x)).collect()
    }

    /// Reconstructs the secret from the first `k` shares.
    pub fn reconstruct_secret(&self, policy: DivisionPolicy) -> Result<BigInt> {
        let points = self.points()?;
        Player::new(self.threshold())
            .with_policy(policy)
            .reconstruct_secret(&points)
    }
}

/// Parses a share id, which must be a positive integer.
fn parse_id(id: &str) -> Result<u64> {
    match id.parse::<u64>() {
        Ok(x) if x > 0 => Ok(x),
        _ => Err(Error::InvalidShareId(id.to_owned())),
    }
}

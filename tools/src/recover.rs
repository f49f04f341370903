//! Secret recovery from share set files.
use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;
use shamir_secret_sharing::{
    input::ShareSet,
    shamir::{DivisionPolicy, Player},
};
use slog::{debug, info, warn};

use crate::logger::get_logger;

/// Recovery options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// The way the Lagrange terms are divided.
    pub policy: DivisionPolicy,
    /// Whether the shares beyond the threshold should be verified.
    pub verify: bool,
}

/// The outcome of recovering the secret of one share set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Where the share set was read from.
    pub source: String,
    /// The number of shares used.
    pub threshold: usize,
    /// The number of shares present.
    pub shares: usize,
    /// The secret in decimal notation.
    pub secret: String,
    /// The ids of the shares off the polynomial, if verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_shares: Option<Vec<u64>>,
}

/// Reads a JSON share set and recovers its secret.
pub fn recover(source: &str, reader: impl Read, options: &Options) -> Result<Report> {
    let logger = get_logger("tools/recover");

    let set: ShareSet = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse share set {}", source))?;
    recover_share_set(source, &set, options)
        .with_context(|| format!("failed to recover secret of {}", source))
        .map(|report| {
            info!(logger, "Recovered secret";
                "source" => source,
                "threshold" => report.threshold,
                "shares" => report.shares,
            );
            report
        })
}

/// Recovers the secret of a parsed share set.
pub fn recover_share_set(source: &str, set: &ShareSet, options: &Options) -> Result<Report> {
    let logger = get_logger("tools/recover");

    let points = set.points()?;
    if points.len() != set.declared_count() {
        warn!(logger, "Share count does not match the declared count";
            "source" => source,
            "declared" => set.declared_count(),
            "present" => points.len(),
        );
    }
    debug!(logger, "Decoded shares";
        "source" => source,
        "ids" => ?points.iter().map(|p| p.x()).collect::<Vec<_>>(),
    );

    let player = Player::new(set.threshold()).with_policy(options.policy);
    let secret = player.reconstruct_secret(&points)?;

    let invalid_shares = match options.verify {
        true => {
            let invalid = player.verify_shares(&points)?;
            if !invalid.is_empty() {
                warn!(logger, "Shares do not lie on the recovered polynomial";
                    "source" => source,
                    "ids" => ?invalid,
                );
            }
            Some(invalid)
        }
        false => None,
    };

    Ok(Report {
        source: source.to_owned(),
        threshold: player.threshold(),
        shares: points.len(),
        secret: secret.to_string(),
        invalid_shares,
    })
}

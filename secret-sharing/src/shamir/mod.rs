//! Shamir secret reconstruction over the integers.

mod player;

// Re-exports.
pub use self::player::*;

//! Command line tooling for recovering secrets from share sets.

pub mod logger;
pub mod recover;

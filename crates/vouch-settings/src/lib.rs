//! Probe plan parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves plans provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CaseConfig, ProbeConfigV1, SCHEMA_PROBE_V1};
pub use resolve::{Overrides, ProbeCase, ResolvedPlan};

/// Parse `vouch.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ProbeConfigV1> {
    let cfg: ProbeConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the cases to run (plan defaults + overrides + per-case settings).
pub fn resolve_config(cfg: ProbeConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedPlan> {
    resolve::resolve_config(cfg, overrides)
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_PROBE_V1: &str = "vouch.probe.v1";

/// `vouch.toml` schema v1: an ordered list of checks to evaluate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProbeConfigV1 {
    /// Optional schema string for tooling (`vouch.probe.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Default policy for cases that name none: `ignore`, `assume` or `verify`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Default message for cases that carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub cases: Vec<CaseConfig>,
}

/// One check: `value <= bound` under `policy`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaseConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    pub value: i64,

    pub bound: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

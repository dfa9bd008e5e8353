use crate::model::{ProbeConfigV1, SCHEMA_PROBE_V1};
use anyhow::Context;
use std::collections::BTreeSet;
use vouch_core::PolicyKind;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Policy applied to every case, ahead of case and plan settings.
    pub policy: Option<String>,
    /// Run only the case with this name.
    pub case: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeCase {
    pub name: String,
    pub policy: PolicyKind,
    pub value: i64,
    pub bound: i64,
    pub message: String,
}

impl ProbeCase {
    pub fn condition(&self) -> bool {
        self.value <= self.bound
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedPlan {
    pub cases: Vec<ProbeCase>,
}

pub fn resolve_config(cfg: ProbeConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedPlan> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_PROBE_V1
    {
        anyhow::bail!("unsupported schema: {schema} (expected {SCHEMA_PROBE_V1})");
    }

    let override_policy = overrides
        .policy
        .as_deref()
        .map(parse_policy)
        .transpose()
        .context("invalid policy override")?;
    let default_policy = cfg
        .policy
        .as_deref()
        .map(parse_policy)
        .transpose()
        .context("invalid plan policy")?
        .unwrap_or(PolicyKind::Verify);
    let default_message = cfg.message.clone().unwrap_or_default();

    let mut seen = BTreeSet::new();
    let mut cases = Vec::with_capacity(cfg.cases.len());
    for cc in cfg.cases {
        if cc.name.trim().is_empty() {
            anyhow::bail!("case names must not be empty");
        }
        if !seen.insert(cc.name.clone()) {
            anyhow::bail!("duplicate case name: {}", cc.name);
        }

        let case_policy = cc
            .policy
            .as_deref()
            .map(parse_policy)
            .transpose()
            .with_context(|| format!("invalid policy for case {}", cc.name))?;

        cases.push(ProbeCase {
            policy: override_policy.or(case_policy).unwrap_or(default_policy),
            message: cc.message.unwrap_or_else(|| default_message.clone()),
            name: cc.name,
            value: cc.value,
            bound: cc.bound,
        });
    }

    if let Some(wanted) = overrides.case.as_deref() {
        cases.retain(|case| case.name == wanted);
        if cases.is_empty() {
            anyhow::bail!("no case named {wanted}");
        }
    }

    for case in &cases {
        if case.policy == PolicyKind::Assume && !case.condition() {
            anyhow::bail!(
                "case {}: assume with a failing condition ({} <= {}) is undefined behavior; refusing to probe it",
                case.name,
                case.value,
                case.bound
            );
        }
    }

    Ok(ResolvedPlan { cases })
}

fn parse_policy(v: &str) -> anyhow::Result<PolicyKind> {
    Ok(v.parse::<PolicyKind>()?)
}

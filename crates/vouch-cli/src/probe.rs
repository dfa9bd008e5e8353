//! Evaluates one resolved case through the check primitive.

use std::fmt;
use std::str::FromStr;
use vouch_core::{
    Assume, Ignore, PolicyKind, Verify, check, check_unchecked, check_unchecked_at, here,
};
use vouch_settings::ProbeCase;

/// Which entry point evaluates the check.
///
/// `Macro` records the module path; `Function` goes through `#[track_caller]`
/// and records no function name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckForm {
    #[default]
    Macro,
    Function,
}

impl fmt::Display for CheckForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckForm::Macro => "macro",
            CheckForm::Function => "fn",
        })
    }
}

impl FromStr for CheckForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macro" => Ok(CheckForm::Macro),
            "fn" | "function" => Ok(CheckForm::Function),
            other => Err(format!("unknown check form: {other} (expected macro|fn)")),
        }
    }
}

/// How a check that returned normally went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Held,
    IgnoredViolation,
}

impl Outcome {
    pub fn summary(self, case: &ProbeCase) -> String {
        match self {
            Outcome::Held => format!("ok {} ({})", case.name, case.policy),
            Outcome::IgnoredViolation => {
                format!("ok {} ({}, violation ignored)", case.name, case.policy)
            }
        }
    }
}

/// Runs `case.value <= case.bound` under the case's policy.
///
/// Returns only if the check returns; a failing verify check aborts the process.
pub fn run_case(case: &ProbeCase, form: CheckForm) -> anyhow::Result<Outcome> {
    let holds = case.condition();
    match (case.policy, form) {
        (PolicyKind::Ignore, CheckForm::Macro) => check!(Ignore, holds, &case.message),
        (PolicyKind::Ignore, CheckForm::Function) => check(Ignore, holds, &case.message),
        (PolicyKind::Verify, CheckForm::Macro) => check!(Verify, holds, &case.message),
        (PolicyKind::Verify, CheckForm::Function) => check(Verify, holds, &case.message),
        (PolicyKind::Assume, _) => {
            if !holds {
                anyhow::bail!(
                    "assume with a failing condition ({} <= {}) is undefined behavior; refusing to probe it",
                    case.value,
                    case.bound
                );
            }
            // SAFETY: `holds` is true on this path.
            unsafe {
                match form {
                    CheckForm::Macro => check_unchecked_at(Assume, holds, &case.message, here!()),
                    CheckForm::Function => check_unchecked(Assume, holds, &case.message),
                }
            }
        }
    }

    Ok(if holds {
        Outcome::Held
    } else {
        Outcome::IgnoredViolation
    })
}

//! Policy tags and the run-time policy vocabulary.
//!
//! `Ignore`, `Assume` and `Verify` are zero-sized markers selected at compile
//! time. [`PolicyKind`] names the same three policies as a value, for callers
//! that pick a policy from configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Documents a condition without enforcing it at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

/// Promises the optimizer that a condition holds. Violations are undefined behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assume;

/// Enforces a condition; a violation reports a diagnostic and aborts.
///
/// The diagnostic is printed by the panic hook before the abort, so a
/// silent custom hook suppresses it. The abort itself always happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Verify;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Ignore {}
    impl Sealed for super::Assume {}
    impl Sealed for super::Verify {}
}

/// Implemented by the three policy tags.
pub trait Policy: sealed::Sealed + Copy {
    const KIND: PolicyKind;
}

/// Policies whose violation is never undefined behavior.
///
/// Only these may be passed to the safe entry points ([`crate::check`],
/// [`crate::check_at`], [`crate::check!`]).
pub trait CheckedPolicy: Policy {}

impl Policy for Ignore {
    const KIND: PolicyKind = PolicyKind::Ignore;
}

impl Policy for Assume {
    const KIND: PolicyKind = PolicyKind::Assume;
}

impl Policy for Verify {
    const KIND: PolicyKind = PolicyKind::Verify;
}

impl CheckedPolicy for Ignore {}
impl CheckedPolicy for Verify {}

/// Run-time name for one of the three policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Ignore,
    Assume,
    Verify,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Ignore, PolicyKind::Assume, PolicyKind::Verify];

    /// The kind selected by a policy tag type.
    pub const fn of<P: Policy>() -> PolicyKind {
        P::KIND
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Ignore => "ignore",
            PolicyKind::Assume => "assume",
            PolicyKind::Verify => "verify",
        }
    }

    /// `true` when a violated condition under this policy is not undefined behavior.
    pub const fn is_checked(self) -> bool {
        !matches!(self, PolicyKind::Assume)
    }

    /// `true` only for the policy with an observable run-time reaction.
    pub const fn enforces_at_runtime(self) -> bool {
        matches!(self, PolicyKind::Verify)
    }

    /// One-line summary of what a violated condition does under this policy.
    pub const fn describe(self) -> &'static str {
        match self {
            PolicyKind::Ignore => {
                "documents the condition; a violation is accepted silently at run time"
            }
            PolicyKind::Assume => {
                "tells the optimizer the condition holds; a violation at run time is undefined behavior"
            }
            PolicyKind::Verify => {
                "enforces the condition; a violation prints a diagnostic and aborts the process"
            }
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the three policies.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown policy: {input} (expected ignore|assume|verify)")]
pub struct ParsePolicyError {
    input: String,
}

impl ParsePolicyError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePolicyError {
                input: s.to_string(),
            })
    }
}

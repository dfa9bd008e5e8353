//! The check operation and its entry points.

use crate::gate::reject_const_eval;
use crate::location::SourceLocation;
use crate::policy::{CheckedPolicy, Policy, PolicyKind};
use crate::report::diagnose_and_terminate;

/// Checks `condition` under `policy`, capturing the call site.
///
/// A `true` condition is always a no-op. A `false` one rejects constant
/// evaluation under either policy; at run time [`Ignore`](crate::Ignore)
/// accepts it silently and [`Verify`](crate::Verify) reports it and aborts.
///
/// ```
/// use vouch_core::{Ignore, Verify, check};
///
/// const fn clamp_index(i: usize, len: usize) -> usize {
///     check(Verify, len > 0, "empty range");
///     if i < len { i } else { len - 1 }
/// }
///
/// const LAST: usize = clamp_index(9, 4);
/// assert_eq!(LAST, 3);
/// check(Ignore, LAST < 4, "");
/// ```
#[track_caller]
#[inline]
pub const fn check<P: CheckedPolicy>(policy: P, condition: bool, message: &str) {
    check_at(policy, condition, message, SourceLocation::caller());
}

/// [`check`] with an explicit location.
#[inline]
pub const fn check_at<P: CheckedPolicy>(
    _policy: P,
    condition: bool,
    message: &str,
    location: SourceLocation,
) {
    // SAFETY: `CheckedPolicy` is implemented for Ignore and Verify only, and
    // neither reaches the unreachable hint.
    unsafe { check_kind_unchecked(P::KIND, condition, message, location) }
}

/// Checks `condition` under any policy, including [`Assume`](crate::Assume).
///
/// # Safety
///
/// With `Assume`, `condition` must be `true`; a `false` condition at run time
/// is undefined behavior. Other policies carry no extra requirement.
#[track_caller]
#[inline]
pub const unsafe fn check_unchecked<P: Policy>(policy: P, condition: bool, message: &str) {
    // SAFETY: forwarded to the caller.
    unsafe { check_unchecked_at(policy, condition, message, SourceLocation::caller()) }
}

/// [`check_unchecked`] with an explicit location.
///
/// # Safety
///
/// Same contract as [`check_unchecked`].
#[inline]
pub const unsafe fn check_unchecked_at<P: Policy>(
    _policy: P,
    condition: bool,
    message: &str,
    location: SourceLocation,
) {
    // SAFETY: forwarded to the caller.
    unsafe { check_kind_unchecked(P::KIND, condition, message, location) }
}

/// Checks `condition` under a policy chosen at run time.
///
/// # Safety
///
/// With [`PolicyKind::Assume`], `condition` must be `true`.
#[inline]
pub const unsafe fn check_kind_unchecked(
    kind: PolicyKind,
    condition: bool,
    message: &str,
    location: SourceLocation,
) {
    if condition {
        return;
    }
    match kind {
        PolicyKind::Ignore => reject_const_eval(),
        // SAFETY: the caller guarantees the condition holds under Assume.
        PolicyKind::Assume => unsafe { std::hint::unreachable_unchecked() },
        PolicyKind::Verify => diagnose_and_terminate(
            message,
            location.line(),
            location.column(),
            location.file(),
            location.function(),
        ),
    }
}

/// Checks a condition under a [`CheckedPolicy`], recording file, line,
/// column and module path.
///
/// `check!(policy, condition)` or `check!(policy, condition, message)`.
/// Usable in `const fn`.
#[macro_export]
macro_rules! check {
    ($policy:expr, $condition:expr $(,)?) => {
        $crate::check_at($policy, $condition, "", $crate::here!())
    };
    ($policy:expr, $condition:expr, $message:expr $(,)?) => {
        $crate::check_at($policy, $condition, $message, $crate::here!())
    };
}

//! Policy-dispatched condition checks.
//!
//! One operation, three policies:
//!
//! | Policy   | condition `false` at run time           |
//! |----------|-----------------------------------------|
//! | `Ignore` | accepted silently                       |
//! | `Assume` | undefined behavior (optimizer hint)     |
//! | `Verify` | diagnostic on stderr, process aborts    |
//!
//! A `true` condition is a no-op under every policy. All checks are `const fn`;
//! a `false` condition reached while evaluating a `const` item is rejected by
//! the compiler under every policy.
//!
//! Only `Ignore` and `Verify` go through the safe entry points. `Assume` is
//! reachable through the `unsafe` ones, whose contract is that the condition
//! holds.
//!
//! ```
//! use vouch_core::{Assume, Verify, check, check_unchecked};
//!
//! const fn first_digit(bytes: &[u8]) -> u8 {
//!     vouch_core::check!(Verify, !bytes.is_empty(), "no input");
//!     let b = bytes[0];
//!     // SAFETY: every caller passes ASCII.
//!     unsafe { check_unchecked(Assume, b.is_ascii(), "") };
//!     b
//! }
//!
//! check(Verify, first_digit(b"7") == b'7', "parse");
//! ```
//!
//! # Constant evaluation
//!
//! A holding condition produces a constant:
//!
//! ```
//! use vouch_core::{Ignore, check};
//!
//! const OK: () = check(Ignore, 5 <= 6, "");
//! ```
//!
//! A failing one does not, even under `Ignore`:
//!
//! ```compile_fail
//! use vouch_core::{Ignore, check};
//!
//! const _: () = check(Ignore, 5 <= 4, "");
//! ```
//!
//! ```compile_fail
//! use vouch_core::{Verify, check};
//!
//! const _: () = check(Verify, 5 <= 4, "bound exceeded");
//! ```
//!
//! ```compile_fail
//! use vouch_core::{Assume, check_unchecked};
//!
//! const _: () = unsafe { check_unchecked(Assume, 5 <= 4, "") };
//! ```
//!
//! `Assume` cannot be passed to the safe entry point:
//!
//! ```compile_fail
//! use vouch_core::{Assume, check};
//!
//! check(Assume, true, "");
//! ```
//!
//! Rejection applies to `const` items, `const` blocks, const generic
//! arguments and `static` initializers:
//!
//! ```compile_fail
//! use vouch_core::{Ignore, check};
//!
//! static _S: () = check(Ignore, 5 <= 4, "");
//! ```
//!
//! ```compile_fail
//! use vouch_core::Ignore;
//!
//! static _S: () = vouch_core::check!(Ignore, 5 <= 4, "bound exceeded");
//! ```
//!
//! ```compile_fail
//! use vouch_core::{Ignore, check};
//!
//! const fn first(n: usize) -> usize {
//!     check(Ignore, n > 0, "empty");
//!     n.saturating_sub(1)
//! }
//! let _ = [0u8; first(0)];
//! ```
//!
//! A holding check is accepted in a `static` as well:
//!
//! ```
//! use vouch_core::{Ignore, Verify, check};
//!
//! static LIMIT: u32 = {
//!     check(Ignore, 5 <= 6, "");
//!     check(Verify, 5 <= 6, "");
//!     6
//! };
//! assert_eq!(LIMIT, 6);
//! ```

mod check;
mod gate;
mod location;
mod policy;
pub mod report;

pub use check::{check, check_at, check_kind_unchecked, check_unchecked, check_unchecked_at};
pub use location::SourceLocation;
pub use policy::{
    Assume, CheckedPolicy, Ignore, ParsePolicyError, Policy, PolicyKind, Verify,
};
pub use report::{DiagnosticLine, diagnose_and_terminate};

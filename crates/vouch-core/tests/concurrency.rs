//! Checks share no state, so concurrent callers never interact.

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use vouch_core::{Ignore, Verify, check};

#[test]
fn parallel_ignore_checks_do_not_interact() {
    let returned = AtomicUsize::new(0);
    (0..10_000u64).into_par_iter().for_each(|i| {
        check(Ignore, true, "parallel");
        check(Ignore, i % 2 == 0, "odd input");
        returned.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(returned.load(Ordering::Relaxed), 10_000);
}

#[test]
fn parallel_verify_checks_on_holding_conditions() {
    let total: u64 = (1..=1_000u64)
        .into_par_iter()
        .map(|i| {
            check(Verify, i >= 1, "lower bound");
            vouch_core::check!(Verify, i <= 1_000, "upper bound");
            i
        })
        .sum();
    assert_eq!(total, 500_500);
}

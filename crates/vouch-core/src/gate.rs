/// Rejects compile-time evaluation; does nothing observable at run time.
///
/// The compile-time interpreter has no integer value for the address of a
/// local, so doing arithmetic on one fails the evaluation. That covers
/// `const` items, `const` blocks, const generic arguments and `static`
/// initializers alike. At run time the address is an ordinary integer and
/// the result is discarded.
#[inline(always)]
#[allow(clippy::transmutes_expressible_as_ptr_casts)]
pub(crate) const fn reject_const_eval() {
    let anchor = 0u8;
    // SAFETY: a thin pointer and `usize` have the same size, and every bit
    // pattern is a valid `usize`.
    let addr = unsafe { core::mem::transmute::<*const u8, usize>(&anchor) };
    let _ = addr % 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_no_op_at_run_time() {
        reject_const_eval();
        reject_const_eval();
    }

    #[test]
    fn is_a_no_op_on_other_threads() {
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(reject_const_eval);
            }
        });
    }
}

/// Interpolate from `a` toward `b` by an 8-bit weight `s`, dividing by 256.
///
/// Operands are widened to `i32` before the multiply and the shift is
/// arithmetic, so negative deltas round toward negative infinity. The result
/// always lies between `a` and `b` for `s` in `0..=255`, which is what lets
/// callers narrow it back into the channel type without clamping.
#[inline(always)]
pub(crate) fn lerp_shift8(a: i32, b: i32, s: i32) -> i32 {
    debug_assert!((0..=255).contains(&s), "blend weight out of range: {s}");
    a + (((b - a) * s) >> 8)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

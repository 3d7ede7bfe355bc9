//! Word-level helpers shared by the field arithmetic.

/// Computes `lhs + rhs`, returning the result along with the carry (0 or 1).
#[inline(always)]
pub(crate) const fn overflowing_add(lhs: u64, rhs: u64) -> (u64, u64) {
    let (res, carry) = lhs.overflowing_add(rhs);
    (res, carry as u64)
}

/// Computes `lhs - rhs`, returning the result along with the borrow (0 or 1).
#[inline(always)]
pub(crate) const fn overflowing_sub(lhs: u64, rhs: u64) -> (u64, u64) {
    let (res, borrow) = lhs.overflowing_sub(rhs);
    (res, borrow as u64)
}

/// Mask selecting the low `bits` bits of a word.
#[inline(always)]
pub(crate) const fn low_mask(bits: u32) -> u64 {
    match 1u64.checked_shl(bits) {
        Some(bit) => bit - 1,
        None => u64::MAX,
    }
}

/// Wide variant of [`low_mask`].
#[inline(always)]
pub(crate) const fn low_mask_wide(bits: u32) -> u128 {
    match 1u128.checked_shl(bits) {
        Some(bit) => bit - 1,
        None => u128::MAX,
    }
}

/// Computes `lhs * rhs` without losing the high half.
#[inline(always)]
pub(crate) const fn widening_mul(lhs: u64, rhs: u64) -> u128 {
    (lhs as u128) * (rhs as u128)
}

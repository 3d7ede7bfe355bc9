//! Compile-time validation of a limb layout.
//!
//! Everything here is a `const fn` so that the result can be an associated
//! constant of [`FieldElement`][crate::FieldElement]: a layout is checked
//! once per instantiation, at compile time, and the outcome is free to read
//! on every call.

use super::{FieldParams, MODULUS_BYTES};
use crate::{
    ConfigError, Level,
    field::pack_le,
    level::{bound, max_level},
    primitives::low_mask_wide,
};

/// `2^255 = 19 (mod p)`: a carry out of the top limb re-enters limb 0 times this.
pub(crate) const FOLD: u64 = 19;

/// Number of carry passes performed by weak reduction.
pub(crate) const CARRY_PASSES: usize = 2;

/// Check that a layout is internally consistent.
///
/// - every limb width is in `1..=62` and the widths total 255 bits;
/// - `MODULUS` repacks to the encoding of `2^255 - 19`;
/// - `BIG_ZERO` is `m * MODULUS` limb by limb for a single `m >= 1`, hence
///   congruent to zero;
/// - `BIG_ZERO` covers every limb of a reduced subtrahend, and a reduced value
///   can be padded without running out of levels;
/// - two carry passes bring any word-sized limbs (and any small-scalar
///   product) back under the reduced bound.
pub const fn validate<P: FieldParams<LIMBS>, const LIMBS: usize>() -> Result<(), ConfigError> {
    if !limb_widths_ok(&P::LIMB_BITS) {
        return Err(ConfigError::LimbWidth);
    }

    let (modulus, exact) = pack_le(&P::LIMB_BITS, &P::MODULUS);
    if !exact || !bytes_eq(&modulus, &MODULUS_BYTES) {
        return Err(ConfigError::Modulus);
    }

    if big_zero_multiple(&P::MODULUS, &P::BIG_ZERO) == 0 {
        return Err(ConfigError::BigZero);
    }

    let r = P::REDUCED_BOUND_BITS;
    let max = max_level(r);
    let (bz_min, bz_max) = min_max(&P::BIG_ZERO);
    if bz_min < bound(r, Level::REDUCED) - 1 || bz_max >= bound(r, max) {
        return Err(ConfigError::Headroom);
    }
    if big_zero_level::<P, LIMBS>().get() >= max.get() {
        return Err(ConfigError::Headroom);
    }

    let reduced = bound(r, Level::REDUCED) as u128;
    let mut i = 0;
    while i < LIMBS {
        if (1u128 << P::LIMB_BITS[i]) > reduced {
            return Err(ConfigError::ReducedBound);
        }
        i += 1;
    }

    let scalar_input = (bound(r, max) as u128 - 1) * (u32::MAX as u128);
    if !carries_into(&P::LIMB_BITS, u64::MAX as u128, reduced)
        || !carries_into(&P::LIMB_BITS, scalar_input, reduced)
    {
        return Err(ConfigError::ReducedBound);
    }

    Ok(())
}

/// Highest level a subtrahend may be at: the largest `k` for which every limb
/// below `bound(k)` is still covered by the padding table.
pub const fn subtrahend_level<P: FieldParams<LIMBS>, const LIMBS: usize>() -> Level {
    let r = P::REDUCED_BOUND_BITS;
    let max = max_level(r);
    let (bz_min, _) = min_max(&P::BIG_ZERO);

    let mut level = Level::REDUCED;
    while level.get() < max.get() && bound(r, level.next()) - 1 <= bz_min {
        level = level.next();
    }
    level
}

/// Level of the padding table itself: the smallest `k` with every limb of
/// `BIG_ZERO` below `bound(k)`.
pub const fn big_zero_level<P: FieldParams<LIMBS>, const LIMBS: usize>() -> Level {
    let r = P::REDUCED_BOUND_BITS;
    let max = max_level(r);
    let (_, bz_max) = min_max(&P::BIG_ZERO);

    let mut level = Level::REDUCED;
    while level.get() < max.get() && bz_max >= bound(r, level) {
        level = level.next();
    }
    level
}

const fn limb_widths_ok(bits: &[u32]) -> bool {
    let mut total = 0u32;
    let mut i = 0;
    while i < bits.len() {
        if bits[i] == 0 || bits[i] > 62 {
            return false;
        }
        total += bits[i];
        i += 1;
    }
    total == 255
}

const fn bytes_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    let mut i = 0;
    while i < 32 {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// The `m` with `big_zero[i] == m * modulus[i]` for every `i`, or 0 if there
/// is none.
const fn big_zero_multiple(modulus: &[u64], big_zero: &[u64]) -> u64 {
    if modulus.is_empty() || modulus[0] == 0 {
        return 0;
    }
    let m = big_zero[0] / modulus[0];

    let mut i = 0;
    while i < modulus.len() {
        match modulus[i].checked_mul(m) {
            Some(v) if v == big_zero[i] => (),
            _ => return 0,
        }
        i += 1;
    }
    m
}

const fn min_max(limbs: &[u64]) -> (u64, u64) {
    let mut min = u64::MAX;
    let mut max = 0;
    let mut i = 0;
    while i < limbs.len() {
        if limbs[i] < min {
            min = limbs[i];
        }
        if limbs[i] > max {
            max = limbs[i];
        }
        i += 1;
    }
    (min, max)
}

/// Simulate the weak-reduction carry chain on upper bounds: starting from
/// limbs that are all at most `input`, does every output limb stay below
/// `reduced`?
///
/// Shifting, masking and adding are monotone, so running the chain on the
/// per-limb maxima yields a per-limb upper bound on any real output.
const fn carries_into<const LIMBS: usize>(bits: &[u32; LIMBS], input: u128, reduced: u128) -> bool {
    let mut max = [input; LIMBS];

    let mut pass = 0;
    while pass < CARRY_PASSES {
        let mut carry = 0u128;
        let mut i = 0;
        while i < LIMBS {
            let v = max[i].saturating_add(carry);
            carry = v >> bits[i];
            max[i] = if v < low_mask_wide(bits[i]) {
                v
            } else {
                low_mask_wide(bits[i])
            };
            i += 1;
        }
        max[0] = max[0].saturating_add(carry.saturating_mul(FOLD as u128));
        pass += 1;
    }

    let mut i = 0;
    while i < LIMBS {
        if max[i] >= reduced {
            return false;
        }
        i += 1;
    }
    true
}

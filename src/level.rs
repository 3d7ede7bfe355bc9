//! Reduction levels.
//!
//! A field element that has just come out of reduction sits at
//! [`Level::REDUCED`]. Every unreduced addition or subtraction can roughly
//! double the magnitude of its limbs, so the level counts how many such
//! doublings the limbs may have gone through:
//!
//! ```text
//! level k  <=>  every limb < 2^(REDUCED_BOUND_BITS + k)
//! ```
//!
//! Levels are public information (they depend only on the sequence of
//! operations, never on the values), so they are compared with ordinary
//! branches.

use core::fmt;

/// Number of unreduced doublings a relaxed field element's limbs may have gone
/// through since the last reduction.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Level(u8);

impl Level {
    /// Output level of weak reduction.
    pub const REDUCED: Self = Level(0);

    /// Create a level from a raw count.
    #[must_use]
    pub const fn new(count: u8) -> Self {
        Level(count)
    }

    /// Get the raw count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The larger of two levels.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }

    /// The level one doubling above `self`, saturating.
    #[must_use]
    pub const fn next(self) -> Self {
        Level(self.0.saturating_add(1))
    }

    /// Level of the sum of two values at levels `self` and `other`.
    #[must_use]
    pub const fn sum(self, other: Self) -> Self {
        self.max(other).next()
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exclusive upper bound on every limb of a value at `level`, for a layout
/// whose reduced limbs fit in `reduced_bound_bits` bits.
///
/// Saturates to `u64::MAX` once the bound no longer fits in a word.
#[must_use]
pub const fn bound(reduced_bound_bits: u32, level: Level) -> u64 {
    match 1u64.checked_shl(reduced_bound_bits.saturating_add(level.0 as u32)) {
        Some(bound) => bound,
        None => u64::MAX,
    }
}

/// Highest level whose bound keeps every limb below `2^63`, so that adding any
/// two valid limbs cannot overflow a word.
#[must_use]
pub const fn max_level(reduced_bound_bits: u32) -> Level {
    let headroom = 63u32.saturating_sub(reduced_bound_bits);
    if headroom > u8::MAX as u32 {
        Level(u8::MAX)
    } else {
        Level(headroom as u8)
    }
}

/// Is every limb strictly below `bound`?
///
/// This is the relaxed-representation predicate every field operation's
/// preconditions are phrased in. It inspects limb values, so it is variable
/// time; use it for checking inputs at trust boundaries, not on secrets inside
/// a hot loop.
#[must_use]
pub fn is_valid_relaxed(limbs: &[u64], bound: u64) -> bool {
    limbs.iter().all(|&limb| limb < bound)
}

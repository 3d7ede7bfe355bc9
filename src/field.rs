//! Relaxed field elements modulo `p = 2^255 - 19`.

mod add;
mod ct;
mod encoding;
mod reduce;
mod scalar;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

pub(crate) use encoding::pack_le;

use crate::{
    ConfigError, Error, FieldParams, Level, Result,
    errors::BoundViolation,
    level::{self, max_level},
    params::{big_zero_level, subtrahend_level, validate},
    primitives::low_mask,
};
use core::{fmt, marker::PhantomData};

/// An element of GF(2^255 - 19) in a relaxed limb representation.
///
/// The limbs are unsigned and, between reductions, may exceed the width
/// `P::LIMB_BITS[i]` they have in canonical form. Each element carries the
/// [`Level`] it is at: every limb is below [`FieldElement::bound`] of that
/// level, which is what lets [`FieldElement::fdifference`] guarantee that its
/// limb-wise subtraction never wraps around.
///
/// Two elements compare equal when they represent the same field element,
/// whatever their limbs and levels.
#[derive(Copy, Clone)]
pub struct FieldElement<P: FieldParams<LIMBS>, const LIMBS: usize> {
    limbs: [u64; LIMBS],
    level: Level,
    phantom: PhantomData<P>,
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self::from_limbs_unchecked([0; LIMBS], Level::REDUCED);

    /// The value `1`.
    pub const ONE: Self = Self::from_u64(1);

    /// Number of limbs.
    pub const LIMBS: usize = LIMBS;

    /// Highest level any element of this layout may be at.
    pub const MAX_LEVEL: Level = max_level(P::REDUCED_BOUND_BITS);

    /// Highest level the subtrahend of [`FieldElement::fdifference`] may be at.
    pub const SUBTRAHEND_LEVEL: Level = subtrahend_level::<P, LIMBS>();

    /// Level of the padding table added by [`FieldElement::add_big_zero`].
    pub const BIG_ZERO_LEVEL: Level = big_zero_level::<P, LIMBS>();

    /// Outcome of validating `P`, computed at compile time.
    const CONFIG: core::result::Result<(), ConfigError> = validate::<P, LIMBS>();

    /// Compile-time guard for the operations that cannot report an error.
    const VALID: () = assert!(Self::CONFIG.is_ok(), "invalid limb layout");

    pub(crate) const fn from_limbs_unchecked(limbs: [u64; LIMBS], level: Level) -> Self {
        Self {
            limbs,
            level,
            phantom: PhantomData,
        }
    }

    /// Create a field element from raw limbs claimed to be at `level`.
    ///
    /// Returns [`Error::InvalidOperandBound`] if `level` is above
    /// [`Self::MAX_LEVEL`] or any limb is not below [`Self::bound`]`(level)`.
    pub fn from_limbs(limbs: [u64; LIMBS], level: Level) -> Result<Self> {
        Self::check_config()?;
        Self::check_level(level, Self::MAX_LEVEL)?;

        let bound = Self::bound(level);
        match limbs.iter().position(|&limb| limb >= bound) {
            Some(index) => Err(BoundViolation::Limb { index, bound }.into()),
            None => Ok(Self::from_limbs_unchecked(limbs, level)),
        }
    }

    /// Create a field element from a `u64`. The result is canonical.
    pub const fn from_u64(n: u64) -> Self {
        let () = Self::VALID;

        let mut limbs = [0; LIMBS];
        let mut rest = n;
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = rest & low_mask(P::LIMB_BITS[i]);
            rest = match rest.checked_shr(P::LIMB_BITS[i]) {
                Some(rest) => rest,
                None => 0,
            };
            i += 1;
        }

        Self::from_limbs_unchecked(limbs, Level::REDUCED)
    }

    /// Borrow the limbs.
    pub const fn limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    /// The level this element is at.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Exclusive upper bound on the limbs of elements at `level`.
    pub const fn bound(level: Level) -> u64 {
        level::bound(P::REDUCED_BOUND_BITS, level)
    }

    /// Is every limb strictly below `bound`?
    pub fn is_valid_relaxed(&self, bound: u64) -> bool {
        level::is_valid_relaxed(&self.limbs, bound)
    }

    /// Validate the layout `P`.
    ///
    /// The check runs at compile time; this only reports its outcome.
    pub const fn check_params() -> core::result::Result<(), ConfigError> {
        Self::CONFIG
    }

    pub(crate) fn check_config() -> Result<()> {
        Self::CONFIG.map_err(Error::Misconfigured)
    }

    pub(crate) fn check_level(level: Level, max: Level) -> Result<()> {
        if level > max {
            return Err(BoundViolation::Level { level, max }.into());
        }
        Ok(())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Default for FieldElement<P, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> fmt::Debug for FieldElement<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldElement")
            .field("limbs", &self.limbs)
            .field("level", &self.level)
            .finish()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> num_traits::Zero for FieldElement<P, LIMBS> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.is_zero().into()
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<P: FieldParams<LIMBS>, const LIMBS: usize> zeroize::DefaultIsZeroes
    for FieldElement<P, LIMBS>
{
}

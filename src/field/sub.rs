//! Field difference.
//!
//! Limbs are unsigned, so subtracting `a` from `b` limb by limb wraps around
//! whenever `a[i] > b[i]`, even though the field difference is perfectly
//! well defined. The minuend is therefore first padded with a big zero: a
//! limb-wise multiple of `p` whose every limb is at least as large as any limb
//! a valid subtrahend may carry. The padded minuend is congruent to the
//! original one and dominates the subtrahend limb by limb, so the limb-wise
//! subtraction that follows never borrows.
//!
//! ```text
//! b'[i] = b[i] + BIG_ZERO[i] >= BIG_ZERO[i] >= a[i]
//! r[i]  = b'[i] - a[i]                         (no borrow between limbs)
//! r     = b - a + m*p  =  b - a (mod p)
//! ```

use super::FieldElement;
use crate::{
    FieldParams, Level, Result,
    errors::BoundViolation,
    primitives::{overflowing_add, overflowing_sub},
};
use core::ops::{Neg, Sub, SubAssign};
use subtle::Choice;

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Add the padding table `P::BIG_ZERO` to every limb.
    ///
    /// The result represents the same field element, sits at level
    /// `max(self.level(), Self::BIG_ZERO_LEVEL) + 1`, and every limb of it is
    /// at least as large as any limb of an element at
    /// [`Self::SUBTRAHEND_LEVEL`] or below.
    ///
    /// Fails with [`BoundViolation::Level`] when that level would exceed
    /// [`Self::MAX_LEVEL`].
    pub fn add_big_zero(&self) -> Result<Self> {
        Self::check_config()?;
        Self::check_level(self.level, Level::new(Self::MAX_LEVEL.get().saturating_sub(1)))?;

        let mut limbs = [0; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let (sum, carry) = overflowing_add(self.limbs[i], P::BIG_ZERO[i]);
            debug_assert_eq!(carry, 0);
            *limb = sum;
        }

        Ok(Self::from_limbs_unchecked(
            limbs,
            self.level.sum(Self::BIG_ZERO_LEVEL),
        ))
    }

    /// Raw limb-wise subtraction `b - a`, without padding or borrow propagation.
    ///
    /// Every limb is computed independently as `b[i] - a[i]`. This is only
    /// meaningful when `b` dominates `a` limb by limb; otherwise
    /// [`BoundViolation::Underflow`] is returned. The check accumulates borrows
    /// without branching and inspects the result once.
    ///
    /// The output is at the level of `b`.
    pub fn fdifference_raw(a: &Self, b: &Self) -> Result<Self> {
        Self::check_config()?;

        let mut limbs = [0; LIMBS];
        let mut underflow = 0;
        for (i, limb) in limbs.iter_mut().enumerate() {
            let (diff, borrow) = overflowing_sub(b.limbs[i], a.limbs[i]);
            *limb = diff;
            underflow |= borrow;
        }

        if Choice::from(underflow as u8).into() {
            return Err(BoundViolation::Underflow.into());
        }

        Ok(Self::from_limbs_unchecked(limbs, b.level))
    }

    /// Field difference `b - a (mod p)`.
    ///
    /// Note the argument order: the first argument is the subtrahend. It must
    /// be at [`Self::SUBTRAHEND_LEVEL`] or below; `b` is padded with
    /// [`FieldElement::add_big_zero`] and then `a` is subtracted limb-wise.
    ///
    /// The result is at level `max(b.level(), Self::BIG_ZERO_LEVEL) + 1`.
    pub fn fdifference(a: &Self, b: &Self) -> Result<Self> {
        Self::check_config()?;
        Self::check_level(a.level, Self::SUBTRAHEND_LEVEL)?;

        let padded = b.add_big_zero()?;
        debug_assert!(
            a.limbs
                .iter()
                .zip(padded.limbs.iter())
                .all(|(a, b)| a <= b)
        );

        Self::fdifference_raw(a, &padded)
    }

    /// Computes `self - rhs`, reporting out-of-bound operands.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        Self::fdifference(rhs, self)
    }

    /// Computes `-self`, reporting an out-of-bound operand.
    pub fn checked_neg(&self) -> Result<Self> {
        Self::fdifference(self, &Self::ZERO)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sub<&FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn sub(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        self.checked_sub(rhs)
            .expect("attempted to subtract with an out-of-bound operand")
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sub<FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    #[allow(clippy::op_ref)]
    fn sub(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        self - &rhs
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sub<&FieldElement<P, LIMBS>>
    for FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    #[allow(clippy::op_ref)]
    fn sub(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        &self - rhs
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sub<FieldElement<P, LIMBS>>
    for FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn sub(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        &self - &rhs
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> SubAssign<&Self> for FieldElement<P, LIMBS> {
    fn sub_assign(&mut self, rhs: &Self) {
        *self = *self - rhs;
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> SubAssign<Self> for FieldElement<P, LIMBS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for &FieldElement<P, LIMBS> {
    type Output = FieldElement<P, LIMBS>;

    fn neg(self) -> FieldElement<P, LIMBS> {
        self.checked_neg()
            .expect("attempted to negate an out-of-bound operand")
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for FieldElement<P, LIMBS> {
    type Output = FieldElement<P, LIMBS>;

    fn neg(self) -> FieldElement<P, LIMBS> {
        -&self
    }
}

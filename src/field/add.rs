//! Field sum.

use super::FieldElement;
use crate::{FieldParams, Level, Result, primitives::overflowing_add};
use core::ops::{Add, AddAssign};

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Limb-wise sum `a + b`, without carry propagation.
    ///
    /// The result is at level `max(a.level(), b.level()) + 1`, which must not
    /// exceed [`Self::MAX_LEVEL`].
    pub fn fsum(a: &Self, b: &Self) -> Result<Self> {
        Self::check_config()?;

        let max = Level::new(Self::MAX_LEVEL.get().saturating_sub(1));
        Self::check_level(a.level.max(b.level), max)?;

        let mut limbs = [0; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let (sum, carry) = overflowing_add(a.limbs[i], b.limbs[i]);
            debug_assert_eq!(carry, 0);
            *limb = sum;
        }

        Ok(Self::from_limbs_unchecked(limbs, a.level.sum(b.level)))
    }

    /// Computes `self + rhs`, reporting operands whose levels are exhausted.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        Self::fsum(self, rhs)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Add<&FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn add(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        self.checked_add(rhs)
            .expect("attempted to add past the maximum level")
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Add<FieldElement<P, LIMBS>>
    for &FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    #[allow(clippy::op_ref)]
    fn add(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        self + &rhs
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Add<&FieldElement<P, LIMBS>>
    for FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    #[allow(clippy::op_ref)]
    fn add(self, rhs: &FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        &self + rhs
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Add<FieldElement<P, LIMBS>>
    for FieldElement<P, LIMBS>
{
    type Output = FieldElement<P, LIMBS>;

    fn add(self, rhs: FieldElement<P, LIMBS>) -> FieldElement<P, LIMBS> {
        &self + &rhs
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> AddAssign<&Self> for FieldElement<P, LIMBS> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = *self + rhs;
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> AddAssign<Self> for FieldElement<P, LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

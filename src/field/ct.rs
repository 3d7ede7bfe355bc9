//! Constant-time support: impls of `subtle` traits.

use super::FieldElement;
use crate::FieldParams;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Does `self` represent zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for FieldElement<P, LIMBS> {
    /// Compares the represented field elements, not the limbs.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConditionallySelectable
    for FieldElement<P, LIMBS>
{
    /// Selects the limbs in constant time. The level of the result is the
    /// higher of the two, since which one was picked must not leak.
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self::from_limbs_unchecked(limbs, a.level.max(b.level))
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for FieldElement<P, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Eq for FieldElement<P, LIMBS> {}

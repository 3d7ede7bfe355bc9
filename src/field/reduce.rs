//! Weak and full reduction.

use super::FieldElement;
use crate::{
    FieldParams, Level,
    params::{CARRY_PASSES, FOLD},
    primitives::{low_mask, low_mask_wide},
};
use subtle::{Choice, ConstantTimeEq};

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Weak reduction: propagate carries so that every limb is back under the
    /// reduced bound. The result is at [`Level::REDUCED`] but not necessarily
    /// canonical.
    pub fn reduce(&self) -> Self {
        let mut wide = [0u128; LIMBS];
        for (w, &limb) in wide.iter_mut().zip(self.limbs.iter()) {
            *w = u128::from(limb);
        }
        Self::from_wide(wide)
    }

    /// Full reduction to the unique representative in `[0, p)`.
    pub fn canonicalize(&self) -> Self {
        let () = Self::VALID;
        let mut limbs = self.reduce().limbs;

        // q = floor((h + 19) / 2^255), which is 1 exactly when h >= p
        let mut q = (limbs[0] + FOLD) >> P::LIMB_BITS[0];
        for (&limb, &bits) in limbs.iter().zip(P::LIMB_BITS.iter()).skip(1) {
            q = (limb + q) >> bits;
        }

        // h - q*p = h + 19*q - q*2^255: the top carry is q and is dropped
        limbs[0] += FOLD * q;
        let mut carry = 0;
        for (limb, &bits) in limbs.iter_mut().zip(P::LIMB_BITS.iter()) {
            let v = *limb + carry;
            carry = v >> bits;
            *limb = v & low_mask(bits);
        }
        debug_assert_eq!(carry, q);

        Self::from_limbs_unchecked(limbs, Level::REDUCED)
    }

    /// Are the limbs of `self` the canonical ones?
    pub fn is_canonical(&self) -> Choice {
        self.canonicalize().limbs[..].ct_eq(&self.limbs[..])
    }

    /// Bring 128-bit limbs back to a reduced element.
    pub(crate) fn from_wide(mut wide: [u128; LIMBS]) -> Self {
        let () = Self::VALID;

        for _ in 0..CARRY_PASSES {
            let mut carry = 0u128;
            for (limb, &bits) in wide.iter_mut().zip(P::LIMB_BITS.iter()) {
                let v = *limb + carry;
                carry = v >> bits;
                *limb = v & low_mask_wide(bits);
            }
            wide[0] += carry * u128::from(FOLD);
        }

        let mut limbs = [0; LIMBS];
        for (limb, &w) in limbs.iter_mut().zip(wide.iter()) {
            debug_assert!(w < u128::from(Self::bound(Level::REDUCED)));
            *limb = w as u64;
        }

        Self::from_limbs_unchecked(limbs, Level::REDUCED)
    }
}

//! Multiplication by a small scalar.

use super::FieldElement;
use crate::{FieldParams, primitives::widening_mul};

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Computes `self * scalar` for a 32-bit scalar.
    ///
    /// Products are formed in 128 bits and carried back, so the input may be
    /// at any level; the result is at [`Level::REDUCED`][crate::Level::REDUCED].
    pub fn fscalar(&self, scalar: u32) -> Self {
        let mut wide = [0u128; LIMBS];
        for (w, &limb) in wide.iter_mut().zip(self.limbs.iter()) {
            *w = widening_mul(limb, u64::from(scalar));
        }
        Self::from_wide(wide)
    }
}

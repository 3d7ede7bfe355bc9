//! Random number generator support

use super::FieldElement;
use crate::FieldParams;
use rand_core::CryptoRng;

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Sample a uniformly random canonical field element.
    ///
    /// Draws 255-bit values and rejects those `>= p`; the rejection
    /// probability is about `2^-250`.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[31] &= 0x7f;

            if let Some(element) = Option::<Self>::from(Self::from_canonical_bytes(&bytes)) {
                return element;
            }
        }
    }
}

//! Little-endian byte encoding.

use super::FieldElement;
use crate::{FieldParams, Level, primitives::low_mask};
use subtle::{ConstantTimeEq, CtOption};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

/// Pack limbs of the given widths into 32 little-endian bytes.
///
/// The flag is false when a limb does not fit its width or the widths exceed
/// 256 bits; the offending bits are dropped in that case.
pub(crate) const fn pack_le(bits: &[u32], limbs: &[u64]) -> ([u8; 32], bool) {
    let mut out = [0u8; 32];
    let mut exact = bits.len() == limbs.len();
    let mut acc = 0u128;
    let mut acc_bits = 0;
    let mut pos = 0;

    let mut i = 0;
    while i < limbs.len() && i < bits.len() {
        let width = if bits[i] > 64 { 64 } else { bits[i] };
        let limb = limbs[i] & low_mask(width);
        exact &= width == bits[i] && limb == limbs[i];

        acc |= (limb as u128) << acc_bits;
        acc_bits += width;
        while acc_bits >= 8 {
            if pos < 32 {
                out[pos] = acc as u8;
                pos += 1;
            } else {
                exact &= acc as u8 == 0;
            }
            acc >>= 8;
            acc_bits -= 8;
        }
        i += 1;
    }

    if acc_bits > 0 {
        if pos < 32 {
            out[pos] = acc as u8;
        } else {
            exact &= acc as u8 == 0;
        }
    }

    (out, exact)
}

/// Split 32 little-endian bytes into limbs of the given widths.
fn unpack_le<const LIMBS: usize>(bits: &[u32; LIMBS], bytes: &[u8; 32]) -> [u64; LIMBS] {
    let mut limbs = [0; LIMBS];
    let mut acc = 0u128;
    let mut acc_bits = 0;
    let mut i = 0;

    for &byte in bytes {
        if i == LIMBS {
            break;
        }
        acc |= u128::from(byte) << acc_bits;
        acc_bits += 8;

        while i < LIMBS && acc_bits >= bits[i] {
            limbs[i] = (acc as u64) & low_mask(bits[i]);
            acc >>= bits[i];
            acc_bits -= bits[i];
            i += 1;
        }
    }

    limbs
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> FieldElement<P, LIMBS> {
    /// Decode from 32 little-endian bytes, ignoring the top bit.
    ///
    /// Values in `[p, 2^255)` are accepted as non-canonical representatives,
    /// as X25519 does. The result is at [`Level::REDUCED`].
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let () = Self::VALID;

        let mut bytes = *bytes;
        bytes[31] &= 0x7f;
        Self::from_limbs_unchecked(unpack_le(&P::LIMB_BITS, &bytes), Level::REDUCED)
    }

    /// Decode the canonical encoding of a field element.
    ///
    /// Fails if the top bit is set or the value is not below `p`.
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let element = Self::from_bytes(bytes);
        let is_canonical = element.to_bytes()[..].ct_eq(&bytes[..]);
        CtOption::new(element, is_canonical)
    }

    /// Canonical little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let (bytes, exact) = pack_le(&P::LIMB_BITS, &self.canonicalize().limbs);
        debug_assert!(exact);
        bytes
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, P: FieldParams<LIMBS>, const LIMBS: usize> Deserialize<'de>
    for FieldElement<P, LIMBS>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut buffer = [0u8; 32];
        serdect::array::deserialize_hex_or_bin(&mut buffer, deserializer)?;

        Option::<Self>::from(Self::from_canonical_bytes(&buffer))
            .ok_or_else(|| D::Error::custom("non-canonical field element"))
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<P: FieldParams<LIMBS>, const LIMBS: usize> Serialize for FieldElement<P, LIMBS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

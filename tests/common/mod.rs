//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use curve25519_fdifference::{FieldElement, FieldParams, Level, MODULUS_BYTES};
use num_bigint::BigUint;
use proptest::prelude::*;

/// `FieldElement` limbs to `num_bigint::BigUint`, without reducing.
///
/// Limbs may exceed their width, so they are weighted and summed rather than
/// concatenated.
pub fn to_biguint<P: FieldParams<LIMBS>, const LIMBS: usize>(
    x: &FieldElement<P, LIMBS>,
) -> BigUint {
    let mut acc = BigUint::from(0u8);
    let mut shift = 0usize;

    for (&limb, &bits) in x.limbs().iter().zip(P::LIMB_BITS.iter()) {
        acc += BigUint::from(limb) << shift;
        shift += bits as usize;
    }

    acc
}

/// `p = 2^255 - 19`
pub fn modulus() -> BigUint {
    BigUint::from_bytes_le(&MODULUS_BYTES)
}

/// Residue of the value represented by `x`.
pub fn residue<P: FieldParams<LIMBS>, const LIMBS: usize>(x: &FieldElement<P, LIMBS>) -> BigUint {
    to_biguint(x) % modulus()
}

/// `(b - a) mod p` computed on big integers.
pub fn expected_difference(a: &BigUint, b: &BigUint) -> BigUint {
    let p = modulus();
    ((b % &p) + &p - (a % &p)) % &p
}

/// Strategy for elements whose limbs are arbitrary below the bound of `level`.
pub fn element_at<P: FieldParams<LIMBS>, const LIMBS: usize>(
    level: Level,
) -> impl Strategy<Value = FieldElement<P, LIMBS>> {
    let bound = FieldElement::<P, LIMBS>::bound(level);
    proptest::array::uniform::<_, LIMBS>(0..bound).prop_map(move |limbs| {
        FieldElement::from_limbs(limbs, level).expect("limbs are below the bound")
    })
}

/// Strategy for elements at any level in `0..=max`.
pub fn element_up_to<P: FieldParams<LIMBS>, const LIMBS: usize>(
    max: Level,
) -> impl Strategy<Value = FieldElement<P, LIMBS>> {
    (0..=max.get()).prop_flat_map(|level| element_at::<P, LIMBS>(Level::new(level)))
}

/// Strategy for canonical elements, from 32 random bytes.
pub fn canonical<P: FieldParams<LIMBS>, const LIMBS: usize>()
-> impl Strategy<Value = FieldElement<P, LIMBS>> {
    any::<[u8; 32]>().prop_map(|bytes| FieldElement::from_bytes(&bytes).canonicalize())
}

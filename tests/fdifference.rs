//! Equivalence tests between `FieldElement::fdifference` and `num-bigint`.

mod common;

use common::{
    canonical, element_at, element_up_to, expected_difference, modulus, residue, to_biguint,
};
use curve25519_fdifference::{
    BoundViolation, Error, FieldElement, FieldElement51, FieldElement2625, FieldParams, Level,
    Radix51, Radix2625,
};
use num_bigint::BigUint;
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Highest level `fdifference` accepts for its minuend.
fn minuend_level<P: FieldParams<LIMBS>, const LIMBS: usize>() -> Level {
    Level::new(FieldElement::<P, LIMBS>::MAX_LEVEL.get() - 1)
}

/// Elements whose limbs are all `bound(level) - 1`.
fn saturated<P: FieldParams<LIMBS>, const LIMBS: usize>(level: Level) -> FieldElement<P, LIMBS> {
    let max = FieldElement::<P, LIMBS>::bound(level) - 1;
    FieldElement::from_limbs([max; LIMBS], level).unwrap()
}

/// Random limbs biased toward the edges of `0..bound`.
fn edge_limbs<const LIMBS: usize>(rng: &mut ChaCha8Rng, bound: u64) -> [u64; LIMBS] {
    let mut limbs = [0; LIMBS];
    for limb in limbs.iter_mut() {
        *limb = match rng.next_u32() % 4 {
            0 => 0,
            1 => bound - 1,
            2 => bound - 1 - (rng.next_u64() % 64).min(bound - 1),
            _ => rng.next_u64() % bound,
        };
    }
    limbs
}

fn check_no_underflow_at_edges<P: FieldParams<LIMBS>, const LIMBS: usize>(seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let a_bound = FieldElement::<P, LIMBS>::bound(FieldElement::<P, LIMBS>::SUBTRAHEND_LEVEL);
    let b_level = minuend_level::<P, LIMBS>();
    let b_bound = FieldElement::<P, LIMBS>::bound(b_level);

    for _ in 0..1000 {
        let a = FieldElement::<P, LIMBS>::from_limbs(
            edge_limbs(&mut rng, a_bound),
            FieldElement::<P, LIMBS>::SUBTRAHEND_LEVEL,
        )
        .unwrap();
        let b = FieldElement::<P, LIMBS>::from_limbs(edge_limbs(&mut rng, b_bound), b_level)
            .unwrap();

        let padded = b.add_big_zero().unwrap();
        assert!(
            a.limbs()
                .iter()
                .zip(padded.limbs().iter())
                .all(|(a, b)| a <= b)
        );

        let diff = FieldElement::fdifference(&a, &b).unwrap();
        assert_eq!(
            residue(&diff),
            expected_difference(&to_biguint(&a), &to_biguint(&b))
        );
    }
}

#[test]
fn all_zero_operands() {
    let diff = FieldElement51::fdifference(&FieldElement51::ZERO, &FieldElement51::ZERO).unwrap();
    assert_eq!(residue(&diff), BigUint::from(0u8));
    assert_eq!(diff.limbs(), &Radix51::BIG_ZERO);

    let diff =
        FieldElement2625::fdifference(&FieldElement2625::ZERO, &FieldElement2625::ZERO).unwrap();
    assert_eq!(residue(&diff), BigUint::from(0u8));
}

#[test]
fn three_minus_five() {
    let a = FieldElement51::from_u64(5);
    let b = FieldElement51::from_u64(3);
    let expected = modulus() - BigUint::from(2u8);

    let diff = FieldElement51::fdifference(&a, &b).unwrap();
    assert_eq!(residue(&diff), expected);
    assert_eq!(
        BigUint::from_bytes_le(&diff.canonicalize().to_bytes()),
        expected
    );

    let a = FieldElement2625::from_u64(5);
    let b = FieldElement2625::from_u64(3);
    let diff = FieldElement2625::fdifference(&a, &b).unwrap();
    assert_eq!(BigUint::from_bytes_le(&diff.to_bytes()), expected);
}

#[test]
fn saturated_minuend_zero_subtrahend() {
    let b = saturated::<Radix51, 5>(minuend_level::<Radix51, 5>());
    let diff = FieldElement51::fdifference(&FieldElement51::ZERO, &b).unwrap();
    assert_eq!(residue(&diff), residue(&b));
    assert_eq!(diff.level(), FieldElement51::MAX_LEVEL);
    assert!(diff.is_valid_relaxed(FieldElement51::bound(FieldElement51::MAX_LEVEL)));

    let b = saturated::<Radix2625, 10>(minuend_level::<Radix2625, 10>());
    let diff = FieldElement2625::fdifference(&FieldElement2625::ZERO, &b).unwrap();
    assert_eq!(residue(&diff), residue(&b));
    assert_eq!(diff.level(), FieldElement2625::MAX_LEVEL);
}

#[test]
fn saturated_subtrahend_zero_minuend() {
    let a = saturated::<Radix51, 5>(FieldElement51::SUBTRAHEND_LEVEL);
    let diff = FieldElement51::fdifference(&a, &FieldElement51::ZERO).unwrap();
    assert_eq!(
        residue(&diff),
        expected_difference(&to_biguint(&a), &BigUint::from(0u8))
    );

    let a = saturated::<Radix2625, 10>(FieldElement2625::SUBTRAHEND_LEVEL);
    let diff = FieldElement2625::fdifference(&a, &FieldElement2625::ZERO).unwrap();
    assert_eq!(
        residue(&diff),
        expected_difference(&to_biguint(&a), &BigUint::from(0u8))
    );
}

#[test]
fn no_underflow_at_edges_radix51() {
    check_no_underflow_at_edges::<Radix51, 5>(51);
}

#[test]
fn no_underflow_at_edges_radix2625() {
    check_no_underflow_at_edges::<Radix2625, 10>(2625);
}

#[test]
fn raw_difference_reports_underflow() {
    let a = FieldElement51::from_u64(5);
    let b = FieldElement51::from_u64(3);
    assert_eq!(
        FieldElement51::fdifference_raw(&a, &b),
        Err(Error::InvalidOperandBound(BoundViolation::Underflow))
    );

    let diff = FieldElement51::fdifference_raw(&b, &a).unwrap();
    assert_eq!(diff, FieldElement51::from_u64(2));
    assert_eq!(diff.level(), a.level());
}

#[test]
fn subtrahend_above_level_is_rejected() {
    let a = FieldElement51::from_limbs([0; 5], Level::new(2)).unwrap();
    assert_eq!(
        FieldElement51::fdifference(&a, &FieldElement51::ZERO),
        Err(Error::InvalidOperandBound(BoundViolation::Level {
            level: Level::new(2),
            max: FieldElement51::SUBTRAHEND_LEVEL,
        }))
    );
}

#[test]
fn minuend_at_max_level_is_rejected() {
    let b = FieldElement2625::from_limbs([0; 10], FieldElement2625::MAX_LEVEL).unwrap();
    let err = FieldElement2625::fdifference(&FieldElement2625::ZERO, &b).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidOperandBound(BoundViolation::Level { .. })
    ));
}

proptest! {
    #[test]
    fn congruence_radix51(
        a in element_up_to::<Radix51, 5>(FieldElement51::SUBTRAHEND_LEVEL),
        b in element_up_to::<Radix51, 5>(minuend_level::<Radix51, 5>()),
    ) {
        let diff = FieldElement51::fdifference(&a, &b).unwrap();
        prop_assert_eq!(
            residue(&diff),
            expected_difference(&to_biguint(&a), &to_biguint(&b))
        );
        prop_assert_eq!(
            diff.level(),
            b.level().max(FieldElement51::BIG_ZERO_LEVEL).next()
        );
        prop_assert!(diff.is_valid_relaxed(FieldElement51::bound(diff.level())));
    }

    #[test]
    fn congruence_radix2625(
        a in element_up_to::<Radix2625, 10>(FieldElement2625::SUBTRAHEND_LEVEL),
        b in element_up_to::<Radix2625, 10>(minuend_level::<Radix2625, 10>()),
    ) {
        let diff = FieldElement2625::fdifference(&a, &b).unwrap();
        prop_assert_eq!(
            residue(&diff),
            expected_difference(&to_biguint(&a), &to_biguint(&b))
        );
        prop_assert!(diff.is_valid_relaxed(FieldElement2625::bound(diff.level())));
    }

    #[test]
    fn padding_preserves_residue(b in element_up_to::<Radix51, 5>(minuend_level::<Radix51, 5>())) {
        let padded = b.add_big_zero().unwrap();
        prop_assert_eq!(residue(&padded), residue(&b));
        prop_assert_eq!(
            to_biguint(&padded) - to_biguint(&b),
            modulus() * BigUint::from(8u8)
        );
    }

    #[test]
    fn padding_dominates_subtrahends(
        a in element_at::<Radix2625, 10>(FieldElement2625::SUBTRAHEND_LEVEL),
        b in element_up_to::<Radix2625, 10>(minuend_level::<Radix2625, 10>()),
    ) {
        let padded = b.add_big_zero().unwrap();
        prop_assert_eq!(residue(&padded), residue(&b));
        for (x, y) in a.limbs().iter().zip(padded.limbs().iter()) {
            prop_assert!(x <= y);
        }
        prop_assert!(FieldElement2625::fdifference_raw(&a, &padded).is_ok());
    }

    #[test]
    fn deterministic(
        a in element_at::<Radix51, 5>(FieldElement51::SUBTRAHEND_LEVEL),
        b in element_at::<Radix51, 5>(Level::new(4)),
    ) {
        let x = FieldElement51::fdifference(&a, &b).unwrap();
        let y = FieldElement51::fdifference(&a, &b).unwrap();
        prop_assert_eq!(x.limbs(), y.limbs());
        prop_assert_eq!(x.level(), y.level());
    }

    #[test]
    fn difference_plus_subtrahend(
        a in element_up_to::<Radix51, 5>(FieldElement51::SUBTRAHEND_LEVEL),
        b in element_up_to::<Radix51, 5>(minuend_level::<Radix51, 5>()),
    ) {
        let diff = FieldElement51::fdifference(&a, &b).unwrap();

        // a difference at the top level has no room left for another sum
        let diff = if diff.level() < FieldElement51::MAX_LEVEL {
            diff
        } else {
            diff.reduce()
        };

        let sum = FieldElement51::fsum(&diff, &a).unwrap();
        prop_assert_eq!(sum.to_bytes(), b.to_bytes());
    }

    #[test]
    fn difference_plus_subtrahend_radix2625(
        a in element_up_to::<Radix2625, 10>(FieldElement2625::SUBTRAHEND_LEVEL),
        b in element_up_to::<Radix2625, 10>(Level::new(30)),
    ) {
        let diff = FieldElement2625::fdifference(&a, &b).unwrap();
        let sum = FieldElement2625::fsum(&diff, &a).unwrap();
        let (sum, b) = (sum.canonicalize(), b.canonicalize());
        prop_assert_eq!(sum.limbs(), b.limbs());
    }

    #[test]
    fn operators_agree(
        a in canonical::<Radix2625, 10>(),
        b in canonical::<Radix2625, 10>(),
    ) {
        let diff = FieldElement2625::fdifference(&a, &b).unwrap();
        prop_assert_eq!(b - a, diff);
        prop_assert_eq!(b.checked_sub(&a).unwrap(), diff);

        let mut c = b;
        c -= &a;
        prop_assert_eq!(c, diff);

        prop_assert_eq!(residue(&(-a + a)), BigUint::from(0u8));
    }
}

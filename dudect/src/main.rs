//! Timing tests for `curve25519-fdifference`.
//!
//! These use the `dudect_bencher` crate to check the field difference for
//! constant-time behavior.

use curve25519_fdifference::{FieldElement51, FieldElement2625};
use dudect_bencher::{ctbench_main, BenchRng, Class, CtRunner};
use rand_core::RngCore;

const ITERATIONS_OUTER: usize = 10_000;
const ITERATIONS_INNER: usize = 1_000;

/// Check `FieldElement51::fdifference` for constant-time operation.
///
/// Compares a subtrahend of zero against one whose limbs all sit at the
/// highest value the operation accepts.
fn fdifference51(runner: &mut CtRunner, rng: &mut BenchRng) {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    let b = FieldElement51::from_bytes(&bytes);

    let level = FieldElement51::SUBTRAHEND_LEVEL;
    let max = FieldElement51::bound(level) - 1;
    let zero = FieldElement51::from_limbs([0; 5], level).unwrap_or_default();
    let full = FieldElement51::from_limbs([max; 5], level).unwrap_or_default();

    // Precomputing the inputs appears to eliminate some noise
    let mut inputs = vec![];

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, zero));
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Right, full));
    }

    for (class, a) in inputs {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _ = FieldElement51::fdifference(&a, &b);
            }
        })
    }
}

/// Check `FieldElement2625::canonicalize` for constant-time operation.
///
/// Compares values below `p` against values in `[p, 2^255)`, which take the
/// other branch of a naive conditional subtraction.
fn canonicalize2625(runner: &mut CtRunner, rng: &mut BenchRng) {
    let mut small = [0u8; 32];
    rng.fill_bytes(&mut small);
    small[31] &= 0x3f;
    let small = FieldElement2625::from_bytes(&small);

    let mut large = [0xffu8; 32];
    large[31] = 0x7f;
    large[0] = 0xef;
    let large = FieldElement2625::from_bytes(&large);

    let mut inputs = vec![];

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, small));
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Right, large));
    }

    for (class, x) in inputs {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _ = x.canonicalize();
            }
        })
    }
}

ctbench_main!(fdifference51, canonicalize2625);

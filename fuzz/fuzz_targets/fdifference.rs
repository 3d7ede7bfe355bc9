#![no_main]
use libfuzzer_sys::fuzz_target;
use curve25519_fdifference::{FieldElement51, FieldElement2625, Level};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    Sub, Add, Scalar, Reduce
}

fuzz_target!(|operations: Vec<([u8; 32], u32, Operation)>| {
    let mut acc = FieldElement51::ZERO;
    let mut mirror = FieldElement2625::ZERO;

    for (bytes, scalar, op) in operations {
        let x = FieldElement51::from_bytes(&bytes);
        let y = FieldElement2625::from_bytes(&bytes);

        // keep one level of headroom for the padded minuend
        if acc.level() >= Level::new(FieldElement51::MAX_LEVEL.get() - 1) {
            acc = acc.reduce();
        }
        if mirror.level() >= Level::new(FieldElement2625::MAX_LEVEL.get() - 1) {
            mirror = mirror.reduce();
        }

        match op {
            Operation::Sub => {
                let diff = FieldElement51::fdifference(&x, &acc).expect("no underflow");
                let sum = FieldElement51::fsum(&diff, &x).expect("level headroom");
                assert_eq!(sum.to_bytes(), acc.to_bytes());
                acc = diff;
                mirror = FieldElement2625::fdifference(&y, &mirror).expect("no underflow");
            }
            Operation::Add => {
                acc = FieldElement51::fsum(&acc, &x).expect("level headroom");
                mirror = FieldElement2625::fsum(&mirror, &y).expect("level headroom");
            }
            Operation::Scalar => {
                acc = acc.fscalar(scalar);
                mirror = mirror.fscalar(scalar);
            }
            Operation::Reduce => {
                acc = acc.reduce();
                mirror = mirror.canonicalize();
            }
        }

        assert_eq!(acc.to_bytes(), mirror.to_bytes());
    }
});

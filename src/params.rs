//! Limb layouts for elements of GF(2^255 - 19).

mod check;

pub use check::{big_zero_level, subtrahend_level, validate};

pub(crate) use check::{CARRY_PASSES, FOLD};

use core::fmt::Debug;

/// Little-endian encoding of `p = 2^255 - 19`.
pub const MODULUS_BYTES: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// The layout of a field element as `LIMBS` unsigned limbs stored in `u64`s.
///
/// Limb `i` has weight `2^(LIMB_BITS[0] + ... + LIMB_BITS[i-1])`. Between
/// reductions the limbs are allowed to grow past `LIMB_BITS[i]`: how far is
/// tracked by the [`Level`][crate::Level] of each element.
///
/// Implementations are checked by [`validate`], which the field operations
/// evaluate at compile time. A layout that fails validation makes every
/// fallible operation return [`Error::Misconfigured`][crate::Error::Misconfigured],
/// and any use of an infallible one (decoding, reduction, scalar products,
/// comparison) fails to compile:
///
/// ```compile_fail
/// use curve25519_fdifference::{FieldElement, FieldParams, Radix51};
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// struct Wide;
///
/// impl FieldParams<5> for Wide {
///     const LIMB_BITS: [u32; 5] = [52, 51, 51, 51, 51];
///     const MODULUS: [u64; 5] = Radix51::MODULUS;
///     const BIG_ZERO: [u64; 5] = Radix51::BIG_ZERO;
///     const REDUCED_BOUND_BITS: u32 = 52;
/// }
///
/// let x = FieldElement::<Wide, 5>::from_bytes(&[0xff; 32]);
/// let _ = x.to_bytes();
/// ```
///
/// Unfortunately, `LIMBS` must be generic for now until const generics are stabilized.
pub trait FieldParams<const LIMBS: usize>:
    Copy + Debug + Default + Eq + Send + Sync + 'static
{
    /// Width of each limb in bits. The widths must add up to 255.
    const LIMB_BITS: [u32; LIMBS];

    /// `p` decomposed in this radix: `2^LIMB_BITS[i] - 1` for every limb except
    /// the lowest, which is `2^LIMB_BITS[0] - 19`.
    const MODULUS: [u64; LIMBS];

    /// Limb-wise multiple of [`Self::MODULUS`] added to the minuend before a
    /// subtraction. It is congruent to zero, and every limb of it is at least as
    /// large as any limb a subtrahend may carry.
    const BIG_ZERO: [u64; LIMBS];

    /// Limbs at [`Level::REDUCED`][crate::Level::REDUCED] are below
    /// `2^REDUCED_BOUND_BITS`.
    const REDUCED_BOUND_BITS: u32;
}

/// Five 51-bit limbs: the layout used on 64-bit targets.
///
/// The padding table is `8p`: `2^54 - 152` for the lowest limb and `2^54 - 8`
/// for the others.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Radix51;

impl FieldParams<5> for Radix51 {
    const LIMB_BITS: [u32; 5] = [51; 5];

    const MODULUS: [u64; 5] = [
        0x7_ffff_ffff_ffed,
        0x7_ffff_ffff_ffff,
        0x7_ffff_ffff_ffff,
        0x7_ffff_ffff_ffff,
        0x7_ffff_ffff_ffff,
    ];

    const BIG_ZERO: [u64; 5] = [
        0x3f_ffff_ffff_ff68,
        0x3f_ffff_ffff_fff8,
        0x3f_ffff_ffff_fff8,
        0x3f_ffff_ffff_fff8,
        0x3f_ffff_ffff_fff8,
    ];

    const REDUCED_BOUND_BITS: u32 = 52;
}

/// Ten limbs alternating between 26 and 25 bits (radix `2^25.5`): the layout
/// used with 32-bit multipliers.
///
/// The padding table is `16p`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Radix2625;

impl FieldParams<10> for Radix2625 {
    const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

    const MODULUS: [u64; 10] = [
        0x3ff_ffed, 0x1ff_ffff, 0x3ff_ffff, 0x1ff_ffff, 0x3ff_ffff, 0x1ff_ffff, 0x3ff_ffff,
        0x1ff_ffff, 0x3ff_ffff, 0x1ff_ffff,
    ];

    const BIG_ZERO: [u64; 10] = [
        0x3fff_fed0,
        0x1fff_fff0,
        0x3fff_fff0,
        0x1fff_fff0,
        0x3fff_fff0,
        0x1fff_fff0,
        0x3fff_fff0,
        0x1fff_fff0,
        0x3fff_fff0,
        0x1fff_fff0,
    ];

    const REDUCED_BOUND_BITS: u32 = 27;
}

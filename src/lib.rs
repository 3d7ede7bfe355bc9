//! Pure Rust implementation of field subtraction modulo `p = 2^255 - 19`
//! over relaxed limb representations.
//!
//! # About
//! Field elements of Curve25519 are stored as a handful of unsigned limbs
//! which are allowed to grow past their canonical width between reductions.
//! Additions are then simple limb-wise sums, but subtractions are not: an
//! unsigned limb-wise `b - a` wraps around as soon as one limb of `a` is
//! larger than the matching limb of `b`, whatever the field values are.
//!
//! [`FieldElement::fdifference`] avoids that by first adding a *big zero* to
//! the minuend ([`FieldElement::add_big_zero`]): a multiple of `p`, chosen so
//! that each of its limbs is at least as large as any limb a valid subtrahend
//! may have. The raw limb-wise subtraction ([`FieldElement::fdifference_raw`])
//! that follows can then never underflow, and the result stays congruent to
//! `b - a` modulo `p`.
//!
//! # Levels
//! How large the limbs of an element may be is tracked explicitly: every
//! [`FieldElement`] carries a [`Level`], and each operation checks the levels
//! of its operands against what it can safely accept. Operations that could
//! otherwise silently miscompute return [`Error::InvalidOperandBound`].
//!
//! # Limb layouts
//! - [`FieldElement51`]: five 51-bit limbs ([`Radix51`]).
//! - [`FieldElement2625`]: ten limbs alternating 26 and 25 bits ([`Radix2625`]).
//!
//! Layouts are described by the [`FieldParams`] trait and checked by
//! [`validate`] at compile time.
//!
//! # Example
//! ```
//! use curve25519_fdifference::FieldElement51;
//!
//! let a = FieldElement51::from_u64(5);
//! let b = FieldElement51::from_u64(3);
//!
//! // note the argument order: this is `b - a`
//! let diff = FieldElement51::fdifference(&a, &b)?;
//! assert_eq!(diff, -FieldElement51::from_u64(2));
//! # Ok::<(), curve25519_fdifference::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod errors;
mod field;
mod level;
mod params;
mod primitives;

pub use crate::{
    errors::{BoundViolation, ConfigError, Error, Result},
    field::FieldElement,
    level::{Level, bound, is_valid_relaxed, max_level},
    params::{
        FieldParams, MODULUS_BYTES, Radix51, Radix2625, big_zero_level, subtrahend_level,
        validate,
    },
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;

/// Field element with five 51-bit limbs.
pub type FieldElement51 = FieldElement<Radix51, 5>;

/// Field element with ten limbs of 26 and 25 bits.
pub type FieldElement2625 = FieldElement<Radix2625, 10>;

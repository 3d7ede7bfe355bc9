//! Error types.

use crate::Level;
use core::fmt;

/// Result type with the [`Error`] type of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The failure result for field operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An operand is outside the bound the operation is defined for.
    InvalidOperandBound(BoundViolation),

    /// The limb layout parameters are inconsistent with the padding table.
    Misconfigured(ConfigError),
}

/// How an operand violated the bound an operation requires of it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoundViolation {
    /// The limb at `index` is not below `bound`.
    Limb {
        /// Position of the offending limb.
        index: usize,
        /// Exclusive bound the limb had to respect.
        bound: u64,
    },

    /// The operand's level is above the highest level the operation accepts.
    Level {
        /// Level of the operand.
        level: Level,
        /// Highest accepted level.
        max: Level,
    },

    /// A limb of the subtrahend exceeds the matching limb of the minuend, so
    /// limb-wise subtraction would wrap around.
    Underflow,
}

/// Inconsistencies detected when validating a [`FieldParams`][crate::FieldParams]
/// implementation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Limb widths are zero, too wide for the storage word, or do not add up
    /// to 255 bits.
    LimbWidth,

    /// The modulus table does not decompose `2^255 - 19`.
    Modulus,

    /// The padding table is not a limb-wise multiple of the modulus table.
    BigZero,

    /// The padding table does not cover reduced subtrahends, or is too large
    /// to be added to a reduced value without exhausting every level.
    Headroom,

    /// Weak reduction can produce limbs above the reduced bound.
    ReducedBound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperandBound(violation) => {
                write!(f, "invalid operand bound: {violation}")
            }
            Self::Misconfigured(err) => write!(f, "misconfigured limb layout: {err}"),
        }
    }
}

impl fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limb { index, bound } => {
                write!(f, "limb {index} is not below {bound:#x}")
            }
            Self::Level { level, max } => {
                write!(f, "operand at level {level} exceeds maximum level {max}")
            }
            Self::Underflow => write!(f, "limb-wise subtraction would underflow"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimbWidth => write!(f, "limb widths must be in 1..=62 and total 255 bits"),
            Self::Modulus => write!(f, "modulus table does not encode 2^255 - 19"),
            Self::BigZero => write!(f, "padding table is not a multiple of the modulus"),
            Self::Headroom => write!(f, "padding table does not fit the level bounds"),
            Self::ReducedBound => write!(f, "weak reduction exceeds the reduced bound"),
        }
    }
}

impl core::error::Error for Error {}
impl core::error::Error for BoundViolation {}
impl core::error::Error for ConfigError {}

impl From<BoundViolation> for Error {
    fn from(violation: BoundViolation) -> Self {
        Self::InvalidOperandBound(violation)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Misconfigured(err)
    }
}

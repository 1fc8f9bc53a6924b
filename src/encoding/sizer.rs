//! Picks the narrowest fixed width for native-width integers.
//!
//! `isize` and `usize` have no wire width of their own. When encoded they take the
//! smallest of 1, 2, 4 or 8 bytes whose range holds the value. Bounds are inclusive, so
//! `127isize` and `255usize` still fit in one byte.

use super::constants::*;
use num_traits::ToPrimitive;

/// A wire width, in bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl Width {
    /// The width in bytes.
    pub fn bytes(self) -> usize { self as usize }
}

/// Smallest width holding the signed value `i`.
///
/// Both bounds are checked, so negative values keep their sign when narrowed.
///
/// # Example
///
/// ```
/// use lecodec::encoding::sizer::{int_width, Width};
///
/// assert_eq!(int_width(127), Width::One);
/// assert_eq!(int_width(128), Width::Two);
/// assert_eq!(int_width(-128), Width::One);
/// assert_eq!(int_width(-129), Width::Two);
/// ```
pub fn int_width(i: isize) -> Width {
    // isize is at most 64 bits wide on every supported target
    let i = i.to_i64().unwrap_or(i64::MAX);
    if I8_MIN <= i && i <= I8_MAX {
        Width::One
    } else if I16_MIN <= i && i <= I16_MAX {
        Width::Two
    } else if I32_MIN <= i && i <= I32_MAX {
        Width::Four
    } else {
        Width::Eight
    }
}

/// Smallest width holding the unsigned value `u`.
///
/// # Example
///
/// ```
/// use lecodec::encoding::sizer::{uint_width, Width};
///
/// assert_eq!(uint_width(255), Width::One);
/// assert_eq!(uint_width(256), Width::Two);
/// assert_eq!(uint_width(usize::MAX), Width::Eight);
/// ```
pub fn uint_width(u: usize) -> Width {
    let u = u.to_u64().unwrap_or(u64::MAX);
    if u <= U8_MAX {
        Width::One
    } else if u <= U16_MAX {
        Width::Two
    } else if u <= U32_MAX {
        Width::Four
    } else {
        Width::Eight
    }
}

//! # lecodec
//!
//! A little-endian binary codec for flat, positional records. Heterogeneous values are
//! written one after another with no tags, no length prefixes and no padding, and read
//! back by a caller that already knows the layout.
//!
//! # Usage
//!
//! Values to be encoded are collected as [`Value`]s. Every primitive converts into a
//! [`Value`], and the [`values!`] macro saves some typing:
//!
//! ```
//! use lecodec::prelude::*;
//!
//! let record = values![7u32, true, -2i16, "ok"];
//!
//! let encoded = encode_full(&record);
//!
//! assert_eq!(encoded, [7, 0, 0, 0, 1, 0xfe, 0xff, b'o', b'k']);
//! ```
//!
//! Fixed-width parts of a record are decoded strictly, failing if the buffer is short:
//!
//! ```
//! use lecodec::prelude::*;
//!
//! let (id, flag, delta): (u32, bool, i16) = decode(&[7, 0, 0, 0, 1, 0xfe, 0xff]).unwrap();
//!
//! assert_eq!((id, flag, delta), (7, true, -2));
//!
//! // one byte short
//! assert!(decode::<(u32, bool, i16)>(&[7, 0, 0, 0, 1, 0xfe]).is_err());
//! ```
//!
//! Single scalars can also be read leniently, padding short input with zeros:
//!
//! ```
//! use lecodec::prelude::*;
//!
//! assert_eq!(decode_u16(&[0x05]), 5);
//! assert_eq!(decode_u16(&[0x05, 0x00, 0xff]), 5);
//! ```
//!
//! # Structs
//!
//! Structs made only of fixed-width fields can derive [`Plain`](plain::Plain). They can
//! then be decoded with [`decode`](encoding::decode) and passed to the encoder as
//! opaque values.
//!
//! ```
//! use lecodec::prelude::*;
//!
//! #[derive(Plain, Debug, PartialEq)]
//! struct Header {
//!     kind: u8,
//!     len: u16,
//!     crc: u32,
//! }
//!
//! let header = Header { kind: 1, len: 2, crc: 3 };
//!
//! let enc = encode_full(&[Value::opaque(Header { kind: 1, len: 2, crc: 3 })]);
//! assert_eq!(enc.len(), Header::WIDTH);
//!
//! let dec: Header = decode(&enc).unwrap();
//! assert_eq!(dec, header);
//! ```
//!
//! # Format
//!
//! | Value                     | Encoding                                        |
//! | ---                       | ---                                             |
//! | `bool`                    | one byte, `0x01` or `0x00`                      |
//! | `i8`, `u8`                | one byte                                        |
//! | `i16`..`i64`              | two's complement, little-endian, exact width    |
//! | `u16`..`u64`              | little-endian, exact width                      |
//! | `isize`, `usize`          | narrowest of 1, 2, 4 or 8 bytes holding it      |
//! | `f32`, `f64`              | IEEE 754 bit pattern, little-endian             |
//! | text                      | UTF-8 bytes, no prefix, no terminator           |
//! | bytes                     | unchanged                                       |
//! | opaque                    | structural layout, or its `Debug` text          |
//! | [`Value::Absent`]         | ends the record, nothing after it is written    |
//!
//! Native-width integers do not have a stable width: `255usize` takes one byte, `256usize`
//! takes two. Use the fixed-width variants when the layout matters.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

/// Procedural macro for deriving [`Plain`](plain::Plain).
#[cfg(feature = "derive")]
pub use lecodec_derive::Plain;

pub mod encoding;
pub mod errors;
pub mod hash;
pub mod plain;
pub mod prelude;
mod util;

use bytes::Bytes;
use encoding::sizer::{int_width, uint_width};
pub use failure::Error;
use plain::Opaque;
use std::sync::Arc;

#[derive(Clone, Debug)]
/// A single value to be encoded, and its variants.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// let v = Value::from(7u32);
///
/// let width = match v {
///     Value::U32(_) => 4,
///     _ => panic!(),
/// };
///
/// assert_eq!(v.fixed_width(), Some(width));
/// ```
pub enum Value {
    /// No value. Encoding stops when it reaches one.
    ///
    /// # Example
    ///
    /// ```
    /// use lecodec::prelude::*;
    ///
    /// let nothing = Value::from(None::<u32>);
    ///
    /// assert!(nothing.is_absent());
    /// ```
    Absent,
    /// Boolean, one byte.
    Bool(bool),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Native-width signed integer, sized when encoded.
    Isize(isize),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// Native-width unsigned integer, sized when encoded.
    Usize(usize),
    /// Single precision float.
    F32(f32),
    /// Double precision float.
    F64(f64),
    /// Text, written as its UTF-8 bytes.
    Str(String),
    /// Raw bytes, written unchanged.
    Bytes(Bytes),
    /// Anything else.
    ///
    /// # Example
    ///
    /// ```
    /// use lecodec::prelude::*;
    ///
    /// #[derive(Debug)]
    /// struct Unknown;
    ///
    /// impl Opaque for Unknown {}
    ///
    /// // no structural encoding, so its `Debug` text is written instead
    /// assert_eq!(encode_full(&[Value::opaque(Unknown)]), b"Unknown");
    /// ```
    Opaque(Arc<dyn Opaque>),
}

impl Value {
    /// Wraps a type outside the closed set of variants.
    ///
    /// # Arguments
    ///
    /// * `o: O` - The value to be wrapped.
    pub fn opaque<O: Opaque + 'static>(o: O) -> Value { Value::Opaque(Arc::new(o)) }

    /// Indicates whether a value is [`Value::Absent`].
    ///
    /// # Example
    ///
    /// ```
    /// use lecodec::Value::Absent;
    ///
    /// assert!(Absent.is_absent());
    /// ```
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Absent => true,
            _ => false,
        }
    }

    /// The number of bytes this value takes on the wire, if it is a scalar.
    ///
    /// Native-width integers report the width the sizer picks for their magnitude.
    /// Text, bytes, opaque values and [`Value::Absent`] have no fixed width.
    ///
    /// # Example
    ///
    /// ```
    /// use lecodec::prelude::*;
    ///
    /// assert_eq!(Value::from(1.5f64).fixed_width(), Some(8));
    /// assert_eq!(Value::from(255usize).fixed_width(), Some(1));
    /// assert_eq!(Value::from(256usize).fixed_width(), Some(2));
    /// assert_eq!(Value::from("text").fixed_width(), None);
    /// ```
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            Value::Bool(_) | Value::I8(_) | Value::U8(_) => Some(1),
            Value::I16(_) | Value::U16(_) => Some(2),
            Value::I32(_) | Value::U32(_) | Value::F32(_) => Some(4),
            Value::I64(_) | Value::U64(_) | Value::F64(_) => Some(8),
            Value::Isize(i) => Some(int_width(*i).bytes()),
            Value::Usize(u) => Some(uint_width(*u).bytes()),
            Value::Absent | Value::Str(_) | Value::Bytes(_) | Value::Opaque(_) => None,
        }
    }
}

from_fn!(Value, bool, Value::Bool);
from_fn!(Value, i8, Value::I8);
from_fn!(Value, i16, Value::I16);
from_fn!(Value, i32, Value::I32);
from_fn!(Value, i64, Value::I64);
from_fn!(Value, isize, Value::Isize);
from_fn!(Value, u8, Value::U8);
from_fn!(Value, u16, Value::U16);
from_fn!(Value, u32, Value::U32);
from_fn!(Value, u64, Value::U64);
from_fn!(Value, usize, Value::Usize);
from_fn!(Value, f32, Value::F32);
from_fn!(Value, f64, Value::F64);
from_fn!(Value, String, Value::Str);
from_fn!(Value, Bytes, Value::Bytes);
from_fn!(Value, Vec<u8>, |v: Vec<u8>| Value::Bytes(Bytes::from(v)));

impl From<&str> for Value {
    fn from(s: &str) -> Value { Value::Str(s.to_owned()) }
}

impl From<&String> for Value {
    fn from(s: &String) -> Value { Value::Str(s.clone()) }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Value { Value::Bytes(Bytes::copy_from_slice(b)) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Value { o.map_or(Value::Absent, T::into) }
}

/// Builds a `Vec<Value>` from a list of expressions convertible into [`Value`].
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// let record = values![1u8, "two", 3.0f32];
///
/// assert_eq!(record.len(), 3);
/// ```
#[macro_export]
macro_rules! values {
    ($($v:expr),* $(,)?) => {
        vec![$($crate::Value::from($v)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_tests() {
        assert!(Value::Absent.is_absent());
        assert!(!Value::from(0u8).is_absent());

        assert_eq!(Value::from(5i32).fixed_width(), Some(4));
        assert_eq!(Value::from(true).fixed_width(), Some(1));
        assert_eq!(Value::from(vec![1u8, 2, 3]).fixed_width(), None);
    }

    #[test]
    fn options_map_to_absent() {
        assert!(Value::from(None::<i64>).is_absent());

        match Value::from(Some(9u16)) {
            Value::U16(9) => (),
            other => panic!("expected U16(9), got {:?}", other),
        }
    }

    #[test]
    fn native_width_follows_magnitude() {
        assert_eq!(Value::from(-128isize).fixed_width(), Some(1));
        assert_eq!(Value::from(-129isize).fixed_width(), Some(2));
        assert_eq!(Value::from(u32::MAX as usize).fixed_width(), Some(4));
    }

    #[test]
    fn values_macro() {
        let v = values![1u8, "a", Some(2u32), None::<u8>];
        assert_eq!(v.len(), 4);
        assert!(v[3].is_absent());
    }
}

use super::{constants::*, sizer::*};
use crate::Value;
use bytes::{Bytes, BytesMut};
use num_traits::ToBytes;
use smallvec::{Array, SmallVec};
use tracing::warn;

/// An output sink for encoded bytes.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl<A: Array<Item = u8>> Serializer for SmallVec<A> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl Serializer for BytesMut {
    type Out = Bytes;

    fn put_u8(&mut self, u: u8) { self.extend_from_slice(&[u]) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Bytes { self.freeze() }
}

/// Convenience methods for [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Add any fixed-width number in little-endian byte order.
    ///
    /// # Arguments
    ///
    /// * `n: N` - The value to be added.
    fn put_le<N: ToBytes>(&mut self, n: N);

    /// Add a [`bool`] as `0x01` or `0x00`.
    ///
    /// # Arguments
    ///
    /// * `b: bool` - The value to be added.
    fn put_bool(&mut self, b: bool);

    /// Add an [`isize`] at the narrowest width that holds it.
    ///
    /// # Arguments
    ///
    /// * `i: isize` - The value to be added.
    fn put_isize(&mut self, i: isize);

    /// Add a [`usize`] at the narrowest width that holds it.
    ///
    /// # Arguments
    ///
    /// * `u: usize` - The value to be added.
    fn put_usize(&mut self, u: usize);

    /// Add the UTF-8 bytes of a string, without prefix or terminator.
    ///
    /// # Arguments
    ///
    /// * `s: &str` - The value to be added.
    fn put_str(&mut self, s: &str);

    /// Add a [`Value`].
    ///
    /// [`Value::Absent`] adds nothing; stopping at it is up to the caller.
    ///
    /// # Arguments
    ///
    /// * `v: &Value` - The value to be added.
    fn put_value(&mut self, v: &Value);
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_le<N: ToBytes>(&mut self, n: N) { self.put_slice(ToBytes::to_le_bytes(&n).as_ref()) }

    #[inline]
    fn put_bool(&mut self, b: bool) {
        if b {
            self.put_u8(TRUE)
        } else {
            self.put_u8(FALSE)
        }
    }

    fn put_isize(&mut self, i: isize) {
        match int_width(i) {
            Width::One => self.put_le(i as i8),
            Width::Two => self.put_le(i as i16),
            Width::Four => self.put_le(i as i32),
            Width::Eight => self.put_le(i as i64),
        }
    }

    fn put_usize(&mut self, u: usize) {
        match uint_width(u) {
            Width::One => self.put_le(u as u8),
            Width::Two => self.put_le(u as u16),
            Width::Four => self.put_le(u as u32),
            Width::Eight => self.put_le(u as u64),
        }
    }

    #[inline]
    fn put_str(&mut self, s: &str) { self.put_slice(s.as_bytes()) }

    fn put_value(&mut self, v: &Value) {
        match v {
            Value::Absent => (),
            Value::Bool(b) => self.put_bool(*b),
            Value::I8(i) => self.put_le(*i),
            Value::I16(i) => self.put_le(*i),
            Value::I32(i) => self.put_le(*i),
            Value::I64(i) => self.put_le(*i),
            Value::Isize(i) => self.put_isize(*i),
            Value::U8(u) => self.put_le(*u),
            Value::U16(u) => self.put_le(*u),
            Value::U32(u) => self.put_le(*u),
            Value::U64(u) => self.put_le(*u),
            Value::Usize(u) => self.put_usize(*u),
            Value::F32(f) => self.put_le(*f),
            Value::F64(f) => self.put_le(*f),
            Value::Str(s) => self.put_str(s),
            Value::Bytes(bs) => self.put_slice(bs),
            Value::Opaque(o) => {
                let mut structural = Vec::new();
                match o.ser_le(&mut structural) {
                    Ok(()) => self.put_slice(&structural),
                    Err(e) => {
                        warn!(error = %e, value = ?o, "no structural encoding, writing text instead");
                        self.put_str(&format!("{:?}", o))
                    }
                }
            }
        }
    }
}

/// Encodes a [`bool`] as a single byte.
///
/// # Example
///
/// ```
/// use lecodec::encoding::ser::encode_bool;
///
/// assert_eq!(encode_bool(true), [1]);
/// assert_eq!(encode_bool(false), [0]);
/// ```
pub fn encode_bool(b: bool) -> [u8; 1] { [if b { TRUE } else { FALSE }] }

macro_rules! encode_fixed {
    ($name:ident, $typ:ty, $width:expr) => {
        #[doc = concat!("Encodes an [`", stringify!($typ), "`] in little-endian byte order.")]
        #[inline]
        pub fn $name(n: $typ) -> [u8; $width] { n.to_le_bytes() }
    };
}

encode_fixed!(encode_i8, i8, 1);
encode_fixed!(encode_u8, u8, 1);
encode_fixed!(encode_i16, i16, 2);
encode_fixed!(encode_u16, u16, 2);
encode_fixed!(encode_i32, i32, 4);
encode_fixed!(encode_u32, u32, 4);
encode_fixed!(encode_i64, i64, 8);
encode_fixed!(encode_u64, u64, 8);

/// Encodes the IEEE 754 bit pattern of an [`f32`] in little-endian byte order.
#[inline]
pub fn encode_f32(f: f32) -> [u8; 4] { f.to_bits().to_le_bytes() }

/// Encodes the IEEE 754 bit pattern of an [`f64`] in little-endian byte order.
#[inline]
pub fn encode_f64(f: f64) -> [u8; 8] { f.to_bits().to_le_bytes() }

/// The UTF-8 bytes of `s`.
#[inline]
pub fn encode_str(s: &str) -> &[u8] { s.as_bytes() }

/// Encodes an [`isize`] at the narrowest width that holds it.
///
/// # Example
///
/// ```
/// use lecodec::encoding::ser::encode_isize;
///
/// assert_eq!(encode_isize(-1).as_slice(), &[0xff]);
/// assert_eq!(encode_isize(300).as_slice(), &[0x2c, 0x01]);
/// ```
pub fn encode_isize(i: isize) -> SmallVec<[u8; 8]> {
    let mut out = SmallVec::new();
    out.put_isize(i);
    out
}

/// Encodes a [`usize`] at the narrowest width that holds it.
///
/// # Example
///
/// ```
/// use lecodec::encoding::ser::encode_usize;
///
/// assert_eq!(encode_usize(255).as_slice(), &[0xff]);
/// assert_eq!(encode_usize(65_536).as_slice(), &[0, 0, 1, 0]);
/// ```
pub fn encode_usize(u: usize) -> SmallVec<[u8; 8]> {
    let mut out = SmallVec::new();
    out.put_usize(u);
    out
}

//! Decoding.
//!
//! There are two ways to read bytes back, and they treat short input differently.
//!
//! * [`LeBytes`] is the strict reader behind [`decode`](super::decode) and
//!   [`decode_into`](super::decode_into). Every read needs its full width; running out
//!   of bytes is an error. Use it for positional records, where a short buffer means a
//!   corrupt or truncated record.
//! * The `decode_*` functions below are lenient. Short input is padded with zero bytes
//!   on the right, long input is cut to the width, and they never fail. Use them to
//!   pick a single scalar out of a frame whose trailing zeros may have been trimmed.

use crate::{errors::ShortBuffer, util::le_array};
use byteorder::{ByteOrder, LittleEndian};
use bytes::{Buf, Bytes};
use failure::Error;
use std::{borrow::Cow, ops::Deref};

#[derive(Clone, Debug, Default)]
/// A strict little-endian reader over a byte buffer.
pub struct LeBytes(Bytes);

impl Deref for LeBytes {
    type Target = Bytes;
    fn deref(&self) -> &Bytes { &self.0 }
}

impl From<Bytes> for LeBytes {
    fn from(b: Bytes) -> Self { LeBytes(b) }
}

impl From<Vec<u8>> for LeBytes {
    fn from(v: Vec<u8>) -> Self { LeBytes(Bytes::from(v)) }
}

impl<'a> From<&'a [u8]> for LeBytes {
    fn from(s: &'a [u8]) -> Self { LeBytes(Bytes::copy_from_slice(s)) }
}

impl LeBytes {
    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize { self.0.remaining() }

    /// Fails unless at least `len` bytes are left.
    #[inline]
    pub fn ensure(&self, len: usize) -> Result<(), Error> {
        if self.remaining() >= len {
            Ok(())
        } else {
            Err(ShortBuffer::new(len, self.remaining()).into())
        }
    }

    #[inline]
    fn take_byte(&mut self) -> Result<u8, Error> {
        self.ensure(1)?;
        Ok(self.0.get_u8())
    }

    /// Takes the next `len` bytes.
    #[inline]
    pub fn read_many(&mut self, len: usize) -> Result<Bytes, Error> {
        self.ensure(len)?;
        Ok(self.0.split_to(len))
    }

    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, Error> { Ok(self.take_byte()? != 0) }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> { self.take_byte() }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8, Error> { Ok(self.take_byte()? as i8) }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let bs = self.read_many(2)?;
        Ok(LittleEndian::read_u16(&bs))
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16, Error> {
        let bs = self.read_many(2)?;
        Ok(LittleEndian::read_i16(&bs))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let bs = self.read_many(4)?;
        Ok(LittleEndian::read_u32(&bs))
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32, Error> {
        let bs = self.read_many(4)?;
        Ok(LittleEndian::read_i32(&bs))
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, Error> {
        let bs = self.read_many(8)?;
        Ok(LittleEndian::read_u64(&bs))
    }

    #[inline]
    pub fn read_i64(&mut self) -> Result<i64, Error> {
        let bs = self.read_many(8)?;
        Ok(LittleEndian::read_i64(&bs))
    }

    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        let bs = self.read_many(4)?;
        Ok(f32::from_bits(LittleEndian::read_u32(&bs)))
    }

    #[inline]
    pub fn read_f64(&mut self) -> Result<f64, Error> {
        let bs = self.read_many(8)?;
        Ok(f64::from_bits(LittleEndian::read_u64(&bs)))
    }
}

/// Conforms `bs` to exactly `len` bytes: truncated if longer, zero-padded on the right
/// if shorter. Borrows when no padding is needed.
///
/// # Example
///
/// ```
/// use lecodec::encoding::de::fill_up_size;
///
/// assert_eq!(&*fill_up_size(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(&*fill_up_size(&[1], 3), &[1, 0, 0]);
/// ```
pub fn fill_up_size(bs: &[u8], len: usize) -> Cow<'_, [u8]> {
    if bs.len() >= len {
        Cow::Borrowed(&bs[..len])
    } else {
        let mut out = bs.to_vec();
        out.resize(len, 0);
        Cow::Owned(out)
    }
}

/// `true` iff `bs` is non-empty and its first byte is non-zero.
///
/// # Example
///
/// ```
/// use lecodec::encoding::de::decode_bool;
///
/// assert!(!decode_bool(&[]));
/// assert!(!decode_bool(&[0x00]));
/// assert!(decode_bool(&[0x02]));
/// ```
pub fn decode_bool(bs: &[u8]) -> bool { bs.first().map_or(false, |b| *b != 0) }

/// First byte of `bs`, or `0` if it is empty.
pub fn decode_u8(bs: &[u8]) -> u8 { bs.first().copied().unwrap_or(0) }

/// First byte of `bs` as two's complement, or `0` if it is empty.
pub fn decode_i8(bs: &[u8]) -> i8 { decode_u8(bs) as i8 }

macro_rules! lenient {
    ($name:ident, $typ:ty) => {
        #[doc = concat!(
            "Reads an [`", stringify!($typ), "`] from the front of `bs`, ",
            "padding short input with zeros."
        )]
        #[inline]
        pub fn $name(bs: &[u8]) -> $typ { <$typ>::from_le_bytes(le_array(bs)) }
    };
}

lenient!(decode_u16, u16);
lenient!(decode_i16, i16);
lenient!(decode_u32, u32);
lenient!(decode_i32, i32);
lenient!(decode_u64, u64);
lenient!(decode_i64, i64);

/// Reads an [`f32`] bit pattern from the front of `bs`, padding short input with zeros.
pub fn decode_f32(bs: &[u8]) -> f32 { f32::from_bits(decode_u32(bs)) }

/// Reads an [`f64`] bit pattern from the front of `bs`, padding short input with zeros.
pub fn decode_f64(bs: &[u8]) -> f64 { f64::from_bits(decode_u64(bs)) }

/// Reads eight bytes as in [`decode_i64`] and narrows to [`isize`].
///
/// Narrow encodings are zero-extended, not sign-extended: the one-byte encoding of `-1`
/// reads back as `255`.
pub fn decode_isize(bs: &[u8]) -> isize { decode_i64(bs) as isize }

/// Reads eight bytes as in [`decode_u64`] and narrows to [`usize`].
pub fn decode_usize(bs: &[u8]) -> usize { decode_u64(bs) as usize }

/// The whole of `bs` as text. Invalid UTF-8 sequences become U+FFFD.
pub fn decode_str(bs: &[u8]) -> String { String::from_utf8_lossy(bs).into_owned() }

/// Types with a lenient single-value decoding.
pub trait Lenient {
    /// Reads a value from the front of `bs`, see the [module docs](self).
    fn decode_lenient(bs: &[u8]) -> Self;
}

macro_rules! lenient_impl {
    ($typ:ty, $fn:ident) => {
        impl Lenient for $typ {
            #[inline]
            fn decode_lenient(bs: &[u8]) -> Self { $fn(bs) }
        }
    };
}

lenient_impl!(bool, decode_bool);
lenient_impl!(u8, decode_u8);
lenient_impl!(i8, decode_i8);
lenient_impl!(u16, decode_u16);
lenient_impl!(i16, decode_i16);
lenient_impl!(u32, decode_u32);
lenient_impl!(i32, decode_i32);
lenient_impl!(u64, decode_u64);
lenient_impl!(i64, decode_i64);
lenient_impl!(usize, decode_usize);
lenient_impl!(isize, decode_isize);
lenient_impl!(f32, decode_f32);
lenient_impl!(f64, decode_f64);
lenient_impl!(String, decode_str);

/// Decodes a single value of type `T` from `bs`, never failing.
///
/// # Example
///
/// ```
/// use lecodec::encoding::de::decode_one;
///
/// let n: u32 = decode_one(&[1, 1]);
/// assert_eq!(n, 257);
///
/// let s: String = decode_one(b"text");
/// assert_eq!(s, "text");
/// ```
pub fn decode_one<T: Lenient>(bs: &[u8]) -> T { T::decode_lenient(bs) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_pads_and_truncates() {
        assert_eq!(decode_u16(&[0x05]), 5);
        assert_eq!(decode_u16(&[0x05, 0x00, 0xff]), 5);
        assert_eq!(decode_u32(&[]), 0);
        assert_eq!(decode_i64(&[0xff; 9]), -1);
        assert_eq!(decode_i8(&[]), 0);
        assert_eq!(decode_u8(&[7, 8]), 7);
    }

    #[test]
    fn lenient_signed_is_zero_padded() {
        // 0xff padded to 0x00ff, not sign-extended
        assert_eq!(decode_i16(&[0xff]), 255);
        assert_eq!(decode_isize(&[0xff]), 255);
    }

    #[test]
    fn lenient_floats() {
        assert_eq!(decode_f32(&[0, 0, 0x80, 0x3f]), 1.0);
        // short input still reads, with zeroed high bytes
        assert_eq!(decode_f64(&[]).to_bits(), 0);
    }

    #[test]
    fn lenient_text() {
        assert_eq!(decode_str(b"hello"), "hello");
        assert_eq!(decode_str(&[0x68, 0xff]), "h\u{fffd}");
    }

    #[test]
    fn fill_up_borrows_when_long_enough() {
        match fill_up_size(&[1, 2, 3], 3) {
            Cow::Borrowed(b) => assert_eq!(b, &[1, 2, 3]),
            Cow::Owned(_) => panic!("should not have copied"),
        }
        assert_eq!(&*fill_up_size(&[], 2), &[0, 0]);
        assert!(fill_up_size(&[1, 2], 0).is_empty());
    }

    #[test]
    fn strict_reads_advance() {
        let d = &mut LeBytes::from(vec![1, 0, 2, 0, 0, 0, 9]);

        assert_eq!(d.read_u16().unwrap(), 1);
        assert_eq!(d.read_i32().unwrap(), 2);
        assert_eq!(d.remaining(), 1);
        assert!(d.read_bool().unwrap());
        assert_eq!(d.remaining(), 0);
    }

    #[test]
    fn strict_read_fails_when_short() {
        let d = &mut LeBytes::from(vec![1, 2, 3]);
        let err = d.read_u32().unwrap_err();

        let short = err.downcast_ref::<ShortBuffer>().unwrap();
        assert_eq!(*short, ShortBuffer::new(4, 3));
        // nothing was consumed
        assert_eq!(d.remaining(), 3);
    }
}

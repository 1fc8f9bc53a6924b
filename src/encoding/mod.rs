//! # Little-endian encoder and decoder
//!
//! Encode and decode functions for flat records.
//!
//! # Example
//!
//! ```
//! use lecodec::prelude::*;
//!
//! // a record with a fixed-width head and a text tail
//! let record = values![3u16, -1i32, "tail"];
//!
//! // and we've encoded it
//! let enc_full = encode_full(&record);
//!
//! // let's encode it a different way too
//!
//! // create a buffer
//! let out = &mut Vec::new();
//!
//! // and we've encoded it a different way
//! encode(&record, out);
//!
//! // but they are equivalent
//! assert_eq!(*out, enc_full);
//!
//! // the head has a known layout, decode it strictly
//! let (kind, delta): (u16, i32) = decode(&enc_full).unwrap();
//! assert_eq!((kind, delta), (3, -1));
//!
//! // the tail is whatever follows
//! assert_eq!(decode_str(&enc_full[6..]), "tail");
//! ```

use crate::{
    plain::{Plain, Slot},
    Value,
};
use failure::{Error, ResultExt};
use tracing::debug;

pub mod de;
pub use de::*;
pub mod ser;
pub use ser::*;
pub mod sizer;
mod constants;

/// Context attached to every strict decoding failure.
pub const DECODE_CONTEXT: &str = "binary read failed";

/// Encode `values` in order, storing output in `out`.
///
/// Encoding stops at the first [`Value::Absent`]; values after it are not written.
///
/// # Arguments
///
/// * `values: &[Value]` - The values to be encoded.
/// * `out: &mut S` - The [`Serializer`] where the encoder output will be stored.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// // output buffer
/// let out = &mut Vec::new();
///
/// // encode values
/// encode(&values![7u32, None::<u32>, 9u32], out);
///
/// // only the first one made it
/// assert_eq!(*out, [7, 0, 0, 0]);
/// ```
pub fn encode<S: Serializer>(values: &[Value], out: &mut S) {
    for v in values.iter().take_while(|v| !v.is_absent()) {
        out.put_value(v)
    }
}

/// Encodes `values` into a vector of bytes.
///
/// # Arguments
///
/// * `values: &[Value]` - The values to be encoded.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// let enc: Vec<u8> = encode_full(&values![true, 1u8]);
///
/// assert_eq!(enc, [1, 1]);
/// ```
pub fn encode_full(values: &[Value]) -> Vec<u8> {
    let mut out = Vec::new();
    encode(values, &mut out);
    out
}

/// Encodes `values` into exactly `length` bytes.
///
/// Short output is padded with zero bytes on the right. Long output is truncated on the
/// right, and the bytes past `length` are lost.
///
/// # Arguments
///
/// * `length: usize` - The length of the output.
/// * `values: &[Value]` - The values to be encoded.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// assert_eq!(encode_by_length(4, &values![1u16]), [1, 0, 0, 0]);
/// assert_eq!(encode_by_length(1, &values![0x0201u16]), [1]);
/// ```
pub fn encode_by_length(length: usize, values: &[Value]) -> Vec<u8> {
    let mut out = encode_full(values);
    if out.len() > length {
        debug!(encoded = out.len(), length, "truncating encoded values");
    }
    out.resize(length, 0);
    out
}

/// Decodes a [`Plain`] value from the front of `bs`, returns an error if `bs` is too
/// short.
///
/// Tuples decode their fields in order, so a record made of several slots can be read in
/// one call. Bytes after the value are ignored.
///
/// # Arguments
///
/// * `bs: &[u8]` - The buffer to be decoded.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// // decode value
/// let pair: Result<(u32, u32), Error> = decode(&[1, 0, 0, 0, 2, 0, 0, 0]);
/// assert_eq!(pair.unwrap(), (1, 2));
///
/// // five bytes are not enough for two `u32`s
/// assert!(decode::<(u32, u32)>(&[1, 0, 0, 0, 2]).is_err());
/// ```
pub fn decode<T: Plain>(bs: &[u8]) -> Result<T, Error> {
    let d = &mut window(bs, T::WIDTH);
    d.ensure(T::WIDTH).context(DECODE_CONTEXT)?;
    Ok(T::de_plain(d).context(DECODE_CONTEXT)?)
}

// Reader over at most the first `len` bytes of `bs`, so trailing input is never copied.
fn window(bs: &[u8], len: usize) -> LeBytes { LeBytes::from(&bs[..len.min(bs.len())]) }

/// Fills `slots` in order from the front of `bs`.
///
/// The combined width of the slots is checked first, so on error no slot has been
/// written.
///
/// # Arguments
///
/// * `bs: &[u8]` - The buffer to be decoded.
/// * `slots: &mut [&mut dyn Slot]` - The destinations, in wire order.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// let mut a = 0u32;
/// let mut b = 0u32;
///
/// assert!(decode_into(&[1, 0, 0, 0, 2], &mut [&mut a, &mut b]).is_err());
/// assert_eq!((a, b), (0, 0));
/// ```
pub fn decode_into(bs: &[u8], slots: &mut [&mut dyn Slot]) -> Result<(), Error> {
    let needed = slots.iter().map(|slot| slot.width()).sum();
    let d = &mut window(bs, needed);
    d.ensure(needed).context(DECODE_CONTEXT)?;
    for slot in slots.iter_mut() {
        slot.fill(d).context(DECODE_CONTEXT)?;
    }
    Ok(())
}

//! Types with a fixed little-endian layout, and the escape hatch for everything else.
//!
//! [`Plain`] types occupy exactly [`Plain::WIDTH`] bytes on the wire and are laid out
//! field by field, with no padding. They are what the strict decoder reads.
//!
//! [`Slot`] is the object-safe view of a [`Plain`] destination, used to decode into a
//! list of existing variables of different types.
//!
//! [`Opaque`] is implemented by types that travel inside [`Value::Opaque`](crate::Value).
//! Deriving [`Plain`] implements it as well; other types can implement it with an
//! empty body and get encoded as their `Debug` text.

use crate::{
    encoding::{de::LeBytes, ser::*},
    errors::Unencodable,
};
use failure::{format_err, Error};
use std::{convert::TryInto, fmt};

/// A type with a fixed-width positional little-endian layout.
pub trait Plain: Sized {
    /// Bytes occupied on the wire.
    const WIDTH: usize;

    /// Writes `self` to `s`, exactly [`Plain::WIDTH`] bytes.
    ///
    /// # Arguments
    ///
    /// * `s: &mut S` - The [`Serializer`] to write to.
    fn ser_plain<S: Serializer>(&self, s: &mut S);

    /// Reads a value, consuming exactly [`Plain::WIDTH`] bytes.
    ///
    /// # Errors
    ///
    /// Fails if `d` holds fewer than [`Plain::WIDTH`] bytes.
    fn de_plain(d: &mut LeBytes) -> Result<Self, Error>;
}

/// A decode destination.
///
/// # Example
///
/// ```
/// use lecodec::prelude::*;
///
/// let mut id = 0u32;
/// let mut flag = false;
///
/// decode_into(&[9, 0, 0, 0, 1], &mut [&mut id, &mut flag]).unwrap();
///
/// assert_eq!((id, flag), (9, true));
/// ```
pub trait Slot {
    /// Bytes consumed by [`Slot::fill`].
    fn width(&self) -> usize;

    /// Overwrites the slot with a value read from `d`.
    fn fill(&mut self, d: &mut LeBytes) -> Result<(), Error>;
}

impl<T: Plain> Slot for T {
    fn width(&self) -> usize { T::WIDTH }

    fn fill(&mut self, d: &mut LeBytes) -> Result<(), Error> {
        *self = T::de_plain(d)?;
        Ok(())
    }
}

/// A value outside the closed set of [`Value`](crate::Value) variants.
pub trait Opaque: fmt::Debug + Send + Sync {
    /// Appends the structural little-endian encoding of `self` to `out`.
    ///
    /// The default has no structural encoding and always fails, which makes the encoder
    /// fall back to the `Debug` text. Bytes written before an error are discarded.
    fn ser_le(&self, _out: &mut Vec<u8>) -> Result<(), Error> {
        Err(Unencodable::new(std::any::type_name::<Self>()).into())
    }
}

macro_rules! plain_prim {
    ($typ:ty, $read:ident) => {
        impl Plain for $typ {
            const WIDTH: usize = std::mem::size_of::<$typ>();

            #[inline]
            fn ser_plain<S: Serializer>(&self, s: &mut S) { s.put_le(*self) }

            #[inline]
            fn de_plain(d: &mut LeBytes) -> Result<Self, Error> { d.$read() }
        }
    };
}

plain_prim!(u8, read_u8);
plain_prim!(i8, read_i8);
plain_prim!(u16, read_u16);
plain_prim!(i16, read_i16);
plain_prim!(u32, read_u32);
plain_prim!(i32, read_i32);
plain_prim!(u64, read_u64);
plain_prim!(i64, read_i64);
plain_prim!(f32, read_f32);
plain_prim!(f64, read_f64);

impl Plain for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn ser_plain<S: Serializer>(&self, s: &mut S) { s.put_bool(*self) }

    #[inline]
    fn de_plain(d: &mut LeBytes) -> Result<Self, Error> { d.read_bool() }
}

impl<T: Plain, const N: usize> Plain for [T; N] {
    const WIDTH: usize = T::WIDTH * N;

    fn ser_plain<S: Serializer>(&self, s: &mut S) {
        for t in self {
            t.ser_plain(s);
        }
    }

    fn de_plain(d: &mut LeBytes) -> Result<Self, Error> {
        let mut out = Vec::with_capacity(N);
        for _ in 0..N {
            out.push(T::de_plain(d)?);
        }
        out.try_into()
            .map_err(|v: Vec<T>| format_err!("expected {} elements, read {}", N, v.len()))
    }
}

macro_rules! plain_tuple {
    ($($typ:ident $idx:tt),+) => {
        impl<$($typ: Plain),+> Plain for ($($typ,)+) {
            const WIDTH: usize = 0 $(+ <$typ as Plain>::WIDTH)+;

            fn ser_plain<Ser: Serializer>(&self, s: &mut Ser) {
                $(self.$idx.ser_plain(s);)+
            }

            fn de_plain(d: &mut LeBytes) -> Result<Self, Error> {
                Ok(($(<$typ as Plain>::de_plain(d)?,)+))
            }
        }
    };
}

plain_tuple!(A 0);
plain_tuple!(A 0, B 1);
plain_tuple!(A 0, B 1, C 2);
plain_tuple!(A 0, B 1, C 2, D 3);
plain_tuple!(A 0, B 1, C 2, D 3, E 4);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
plain_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_full;
    use crate::Value;

    #[test]
    fn widths() {
        assert_eq!(<bool as Plain>::WIDTH, 1);
        assert_eq!(<f64 as Plain>::WIDTH, 8);
        assert_eq!(<[u16; 3] as Plain>::WIDTH, 6);
        assert_eq!(<(u8, u32, [i16; 2]) as Plain>::WIDTH, 9);
    }

    #[test]
    fn tuple_layout_is_positional() {
        let mut out = Vec::new();
        (1u8, 2u16, -1i32).ser_plain(&mut out);

        assert_eq!(out, [1, 2, 0, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn array_round_trip() {
        let arr = [1.5f32, -0.0, 3.25];
        let mut out = Vec::new();
        arr.ser_plain(&mut out);

        let back = <[f32; 3]>::de_plain(&mut LeBytes::from(out)).unwrap();
        for (a, b) in arr.iter().zip(back.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn slot_fill_overwrites() {
        let mut slot = 0u16;
        let d = &mut LeBytes::from(&[0x34, 0x12][..]);

        assert_eq!(Slot::width(&slot), 2);
        slot.fill(d).unwrap();
        assert_eq!(slot, 0x1234);
    }

    #[derive(Debug)]
    struct NoLayout;

    impl Opaque for NoLayout {}

    #[test]
    fn default_opaque_is_unencodable() {
        let err = NoLayout.ser_le(&mut Vec::new()).unwrap_err();

        assert!(err.downcast_ref::<Unencodable>().is_some());
        assert_eq!(encode_full(&[Value::opaque(NoLayout)]), b"NoLayout");
    }
}

#[cfg(feature = "derive")]
pub use crate::Plain;
pub use crate::{
    encoding::{
        de::*,
        decode, decode_into, encode, encode_by_length, encode_full,
        ser::*,
    },
    errors::{Code, ShortBuffer, Unencodable},
    plain::{Opaque, Plain, Slot},
    values, Error, Value,
};
pub use bytes::Bytes;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoders_and_decoders_in_scope() {
        assert_eq!(decode_i8(&encode_i8(-3)), -3);
        assert_eq!(decode_u64(&encode_u64(9)), 9);
        assert_eq!(decode_f32(&encode_f32(0.25)), 0.25);
        assert!(decode_bool(&encode_bool(true)));
        assert_eq!(decode_str(encode_str("x")), "x");
        assert_eq!(decode_usize(&encode_usize(300)), 300);
        assert_eq!(decode_isize(&encode_isize(7)), 7);
    }
}

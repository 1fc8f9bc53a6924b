use lecodec::prelude::*;
use proptest::prelude::*;

macro_rules! round_trip {
    ($name:ident, $typ:ty, $enc:ident, $dec:ident) => {
        proptest! {
            #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

            #[test]
            fn $name(i in any::<$typ>()) {
                let enc = $enc(i);

                prop_assert_eq!(enc.len(), std::mem::size_of::<$typ>());
                prop_assert_eq!($dec(&enc), i);
                prop_assert_eq!(decode::<$typ>(&enc).ok(), Some(i));
                // writing through a Value gives the same bytes
                prop_assert_eq!(encode_full(&values![i]), enc.to_vec());
            }
        }
    };
}

round_trip!(round_trip_i8, i8, encode_i8, decode_i8);
round_trip!(round_trip_u8, u8, encode_u8, decode_u8);
round_trip!(round_trip_i16, i16, encode_i16, decode_i16);
round_trip!(round_trip_u16, u16, encode_u16, decode_u16);
round_trip!(round_trip_i32, i32, encode_i32, decode_i32);
round_trip!(round_trip_u32, u32, encode_u32, decode_u32);
round_trip!(round_trip_i64, i64, encode_i64, decode_i64);
round_trip!(round_trip_u64, u64, encode_u64, decode_u64);

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn round_trip_f32(f in any::<f32>()) {
        let enc = encode_f32(f);

        prop_assert_eq!(decode_f32(&enc).to_bits(), f.to_bits());
        prop_assert_eq!(decode::<f32>(&enc).map(f32::to_bits).ok(), Some(f.to_bits()));
    }

    #[test]
    fn round_trip_f64(f in any::<f64>()) {
        let enc = encode_f64(f);

        prop_assert_eq!(decode_f64(&enc).to_bits(), f.to_bits());
        prop_assert_eq!(decode::<f64>(&enc).map(f64::to_bits).ok(), Some(f.to_bits()));
    }

    #[test]
    fn round_trip_usize(u in any::<usize>()) {
        let enc = encode_usize(u);

        prop_assert_eq!(decode_usize(&enc), u);
    }

    #[test]
    fn round_trip_non_negative_isize(i in 0..=isize::MAX) {
        let enc = encode_isize(i);

        prop_assert_eq!(decode_isize(&enc), i);
    }

    #[test]
    fn negative_isize_keeps_sign_at_width(i in isize::MIN..0) {
        let enc = encode_isize(i);

        // sign-extending the narrow encoding recovers the value
        let mut wide = enc.to_vec();
        wide.resize(8, 0xff);
        prop_assert_eq!(decode_i64(&wide), i as i64);
    }

    #[test]
    fn bool_is_one_byte(b in any::<bool>()) {
        let enc = encode_bool(b);

        prop_assert_eq!(enc, [b as u8]);
        prop_assert_eq!(decode_bool(&enc), b);
    }

    #[test]
    fn text_round_trips(s in any::<String>()) {
        prop_assert_eq!(decode_str(encode_str(&s)), s.clone());
        prop_assert_eq!(encode_full(&values![s.as_str()]), s.into_bytes());
    }
}

#[test]
fn native_width_negative_one_reads_back_unsigned() {
    let enc = encode_isize(-1);

    assert_eq!(enc.as_slice(), &[0xff]);
    assert_eq!(decode_isize(&enc), 255);
}

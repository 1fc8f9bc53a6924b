use bytes::Bytes;
use lecodec::Value;
use proptest::prelude::*;

/// arbitrary Bytes for use with proptest
pub fn arb_bs() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(Bytes::from)
}

/// arbitrary fixed-width Value for use with proptest
pub fn arb_fixed() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        // 8-bit
        any::<u8>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        // 16-bit
        any::<u16>().prop_map(Value::from),
        any::<i16>().prop_map(Value::from),
        // 32-bit
        any::<u32>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        // 64-bit
        any::<u64>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // floats
        any::<f32>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
    ]
}

/// arbitrary present Value for use with proptest
///
/// Never produces [`Value::Absent`] or [`Value::Opaque`].
pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => arb_fixed(),
        // sizes
        1 => any::<usize>().prop_map(Value::from),
        1 => any::<isize>().prop_map(Value::from),
        // text and bytestrings
        1 => any::<String>().prop_map(Value::from),
        1 => arb_bs().prop_map(Value::from),
    ]
}

/// arbitrary record of present values for use with proptest
pub fn arb_values() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_value(), 0..20)
}

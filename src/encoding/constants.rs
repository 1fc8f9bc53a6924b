//! Width thresholds used to size native-width integers.

/// Largest value held by one signed byte, 0x7f
pub(crate) const I8_MAX: i64 = i8::MAX as i64;
/// Smallest value held by one signed byte, -0x80
pub(crate) const I8_MIN: i64 = i8::MIN as i64;
/// 0x7fff
pub(crate) const I16_MAX: i64 = i16::MAX as i64;
/// -0x8000
pub(crate) const I16_MIN: i64 = i16::MIN as i64;
/// 0x7fff_ffff
pub(crate) const I32_MAX: i64 = i32::MAX as i64;
/// -0x8000_0000
pub(crate) const I32_MIN: i64 = i32::MIN as i64;

/// Largest value held by one unsigned byte, 0xff
pub(crate) const U8_MAX: u64 = u8::MAX as u64;
/// 0xffff
pub(crate) const U16_MAX: u64 = u16::MAX as u64;
/// 0xffff_ffff
pub(crate) const U32_MAX: u64 = u32::MAX as u64;

/// `bool` encoding of `true`.
pub(crate) const TRUE: u8 = 0b0000_0001;
/// `bool` encoding of `false`.
pub(crate) const FALSE: u8 = 0b0000_0000;

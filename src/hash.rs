//! RS hash, in 32-bit and 64-bit flavours.
//!
//! Cheap, non-cryptographic hashes for bucketing encoded records.

const RS_B: u64 = 378_551;
const RS_A: u64 = 63_689;

/// 32-bit RS hash of `bs`.
///
/// # Example
///
/// ```
/// use lecodec::hash::rs32;
///
/// assert_eq!(rs32(b""), 0);
/// assert_eq!(rs32(b"a"), 97);
/// ```
pub fn rs32(bs: &[u8]) -> u32 {
    let b = RS_B as u32;
    let mut a = RS_A as u32;
    let mut hash = 0u32;
    for &c in bs {
        hash = hash.wrapping_mul(a).wrapping_add(c as u32);
        a = a.wrapping_mul(b);
    }
    hash
}

/// 64-bit RS hash of `bs`.
pub fn rs64(bs: &[u8]) -> u64 {
    let mut a = RS_A;
    let mut hash = 0u64;
    for &c in bs {
        hash = hash.wrapping_mul(a).wrapping_add(c as u64);
        a = a.wrapping_mul(RS_B);
    }
    hash
}

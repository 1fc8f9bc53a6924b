#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

/// Copies up to `N` bytes from the front of `b`, leaving the rest of the array zeroed.
pub(crate) fn le_array<const N: usize>(b: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let len = b.len().min(N);
    out[..len].copy_from_slice(&b[..len]);
    out
}

//! Payload to bit-index derivation shared by every filter.

use crate::hash::{DigestProvider, HashFunction, MAX_HASHES};

/// Visit every probe index for `data`, in provider order.
///
/// Each provider's seeds are written to a stack buffer and reduced modulo `size`.
/// Stops as soon as `visit` returns `false` and reports whether every probe was
/// visited. Seed counts a provider reports beyond the buffer are ignored.
/// `size` must be non-zero.
#[inline]
pub(crate) fn visit_probes<F>(functions: &[HashFunction], data: &[u8], size: u64, mut visit: F) -> bool
where
    F: FnMut(u64) -> bool,
{
    let mut seeds = [0u64; MAX_HASHES];

    for function in functions {
        let n = function.hashes(data, &mut seeds).min(seeds.len());
        for &seed in &seeds[..n] {
            if !visit(seed % size) {
                return false;
            }
        }
    }

    true
}

/// Collect every probe index for `data` into `indices`.
#[inline]
pub(crate) fn extend_probes(functions: &[HashFunction], data: &[u8], size: u64, indices: &mut Vec<u64>) {
    visit_probes(functions, data, size, |index| {
        indices.push(index);
        true
    });
}

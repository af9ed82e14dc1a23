//! Digest multiplexing: many probe seeds from one digest.
//!
//! A wide digest is cut into consecutive, non-overlapping 8-byte windows and each
//! window is read as a little-endian `u64`:
//!
//! ```text
//! digest:  [b0 .. b7][b8 .. b15][b16 .. b23][b24 .. b31][tail]
//! seeds:    seed 0    seed 1     seed 2      seed 3      (dropped)
//! ```
//!
//! A 32-byte SHA-256 digest therefore yields four seeds for the price of one hash
//! computation. At most [`MAX_HASHES`] seeds are taken from any digest.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::hash::multiplex::{put_u64s, HASH_SIZE};
//!
//! let digest = [1u8, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0xFF];
//! let mut seeds = [0u64; 4];
//!
//! let n = put_u64s(&digest, &mut seeds);
//! assert_eq!(n, digest.len() / HASH_SIZE);
//! assert_eq!(&seeds[..n], &[1, 2]);
//! ```

/// Bytes consumed per seed.
pub const HASH_SIZE: usize = std::mem::size_of::<u64>();

/// Largest number of seeds taken from a single digest (a 64-byte digest).
pub const MAX_HASHES: usize = 8;

/// Number of seeds a digest of `digest_len` bytes yields, capped at [`MAX_HASHES`].
#[must_use]
#[inline]
pub const fn hash_count(digest_len: usize) -> usize {
    let count = digest_len / HASH_SIZE;

    if count > MAX_HASHES {
        MAX_HASHES
    } else {
        count
    }
}

/// Read consecutive little-endian windows of `digest` into `hashes`.
///
/// Writes `min(digest.len() / 8, hashes.len())` seeds and returns that count.
/// Trailing bytes that do not fill a window are ignored, so a digest shorter than
/// 8 bytes produces nothing.
#[inline]
pub fn put_u64s(digest: &[u8], hashes: &mut [u64]) -> usize {
    let mut written = 0;

    for (slot, window) in hashes.iter_mut().zip(digest.chunks_exact(HASH_SIZE)) {
        let mut word = [0u8; HASH_SIZE];
        word.copy_from_slice(window);
        *slot = u64::from_le_bytes(word);
        written += 1;
    }

    written
}

/// Allocating form of [`put_u64s`], capped at [`MAX_HASHES`] seeds.
#[must_use]
pub fn to_u64s(digest: &[u8]) -> Vec<u64> {
    let mut hashes = vec![0; hash_count(digest.len())];
    let written = put_u64s(digest, &mut hashes);
    hashes.truncate(written);
    hashes
}

//! Packed bit array backing every Bloom filter in this crate.
//!
//! # Overview
//!
//! `Bits` is a fixed-size bit array stored as a `Vec<u64>`. Each 64-bit word holds
//! 64 bits, so the capacity is always a multiple of 64.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! Word 2: [bit 128][bit 129]...[bit 191]
//! ```
//!
//! Index `i` lives in word `i / 64` at bit `i % 64`.
//!
//! # Bounds
//!
//! `Bits` never resizes and never panics on a bad index:
//!
//! - `set_bit` past the end is a silent no-op
//! - `get_bit` past the end reads as `false`
//!
//! Filters keep their indices in range by reducing every seed modulo [`Bits::size`].
//!
//! # Examples
//!
//! ```
//! use bloom_filters::core::Bits;
//!
//! let mut bits = Bits::new(100);
//! assert_eq!(bits.size(), 128); // rounded up to whole words
//!
//! bits.set_bit(42);
//! assert!(bits.get_bit(42));
//! assert!(!bits.get_bit(43));
//! assert_eq!(bits.bits_count(), 1);
//! ```

/// Number of bits held by one storage word.
pub const WORD_BITS: u64 = u64::BITS as u64;

/// Fixed-size packed bit array over 64-bit words.
///
/// # Type Properties
///
/// - `Clone`: independent deep copy, no aliasing with the source
/// - `PartialEq`: exact word-for-word equality; stores of different word counts are unequal
/// - `Default`: the empty store (size 0), used as a decode target
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    /// Storage words, fixed length after construction.
    words: Vec<u64>,
}

impl Bits {
    /// Create a zeroed bit array able to hold `size` bits.
    ///
    /// Allocates `⌈size / 64⌉` words, and at least one word even when `size` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloom_filters::core::Bits;
    ///
    /// assert_eq!(Bits::new(0).size(), 64);
    /// assert_eq!(Bits::new(64).size(), 64);
    /// assert_eq!(Bits::new(65).size(), 128);
    /// ```
    #[must_use]
    pub fn new(size: u64) -> Self {
        let num_words = size.div_ceil(WORD_BITS).max(1);
        let num_words = usize::try_from(num_words).unwrap_or(usize::MAX);

        Self {
            words: vec![0; num_words],
        }
    }

    /// Adopt a raw word array verbatim.
    ///
    /// No rounding is applied, so an empty vector yields a store of size 0.
    #[must_use]
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Total number of bits this store can hold (word count × 64).
    #[must_use]
    #[inline]
    pub fn size(&self) -> u64 {
        self.words.len() as u64 * WORD_BITS
    }

    /// Number of 64-bit words.
    #[must_use]
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the store holds no words at all.
    ///
    /// Only reachable through [`Bits::default`] or [`Bits::from_words`]; stores made
    /// by [`Bits::new`] always hold at least one word.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Set the bit at `index` to 1.
    ///
    /// An index past the end is ignored: nothing is set and the store is not resized.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloom_filters::core::Bits;
    ///
    /// let mut bits = Bits::new(64);
    /// bits.set_bit(10);
    /// bits.set_bit(10); // idempotent
    /// bits.set_bit(1_000); // out of range, no-op
    /// assert_eq!(bits.bits_count(), 1);
    /// ```
    #[inline]
    pub fn set_bit(&mut self, index: u64) {
        let (word, mask) = Self::locate(index);

        if let Some(word) = self.words.get_mut(word) {
            *word |= mask;
        }
    }

    /// Read the bit at `index`.
    ///
    /// An index past the end reads as `false`.
    #[must_use]
    #[inline]
    pub fn get_bit(&self, index: u64) -> bool {
        let (word, mask) = Self::locate(index);

        self.words.get(word).is_some_and(|word| word & mask != 0)
    }

    /// Count the bits set to 1 across all words.
    ///
    /// Used for fill-ratio diagnostics.
    #[must_use]
    pub fn bits_count(&self) -> u64 {
        self.words
            .iter()
            .map(|word| u64::from(word.count_ones()))
            .sum()
    }

    /// Borrow the underlying words.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Consume the store and return its words.
    #[must_use]
    pub fn into_words(self) -> Vec<u64> {
        self.words
    }

    /// Replace the contents with `words`, reusing the existing allocation.
    pub(crate) fn reset_words<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = u64>,
    {
        self.words.clear();
        self.words.extend(words);
    }

    /// Split a bit index into a word position and a single-bit mask.
    #[inline]
    fn locate(index: u64) -> (usize, u64) {
        let word = usize::try_from(index / WORD_BITS).unwrap_or(usize::MAX);
        let mask = 1u64 << (index % WORD_BITS);

        (word, mask)
    }
}

impl From<Vec<u64>> for Bits {
    fn from(words: Vec<u64>) -> Self {
        Self::from_words(words)
    }
}

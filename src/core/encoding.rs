//! Binary and text encodings for [`Bits`].
//!
//! # Format
//!
//! ```text
//! [Word 0: 8 bytes LE][Word 1: 8 bytes LE]...[Word n-1: 8 bytes LE]
//! ```
//!
//! The binary form is the little-endian concatenation of every word, in word order.
//! There is no header: the word count is implied by the byte length. Decoding accepts
//! any length and silently drops a trailing remainder of 1-7 bytes.
//!
//! The text form wraps the binary form in base64 (standard alphabet, no padding) so a
//! bit array can be embedded in JSON or other textual configuration.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::core::Bits;
//!
//! let mut bits = Bits::new(128);
//! bits.set_bit(3);
//!
//! let bytes = bits.to_bytes();
//! assert_eq!(bytes.len(), 16);
//! assert_eq!(Bits::from_bytes(&bytes), bits);
//!
//! let text = bits.to_base64();
//! assert_eq!(text.parse::<Bits>().unwrap(), bits);
//! ```

use super::bits::Bits;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use std::fmt;
use std::str::FromStr;

/// Size in bytes of one encoded word.
pub const WORD_BYTES: usize = std::mem::size_of::<u64>();

/// Errors raised while decoding the text form of a bit array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The text is not valid unpadded standard base64.
    #[error("invalid base64 bit array: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl Bits {
    /// Encode the store as little-endian bytes, one 8-byte chunk per word.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.num_words() * WORD_BYTES);

        for word in self.words() {
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        bytes
    }

    /// Replace the contents of this store with the words decoded from `data`.
    ///
    /// Existing storage is reset first. Every complete 8-byte chunk becomes one word;
    /// a trailing remainder shorter than 8 bytes is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloom_filters::core::Bits;
    ///
    /// let mut bits = Bits::new(1024);
    /// bits.read_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 0xAA, 0xBB]);
    /// assert_eq!(bits.words(), &[1]);
    /// ```
    pub fn read_bytes(&mut self, data: &[u8]) {
        self.reset_words(data.chunks_exact(WORD_BYTES).map(|chunk| {
            let mut word = [0u8; WORD_BYTES];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        }));
    }

    /// Decode a store from its binary form.
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut bits = Self::default();
        bits.read_bytes(data);
        bits
    }

    /// Encode the store as unpadded standard base64 of its binary form.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD_NO_PAD.encode(self.to_bytes())
    }

    /// Replace the contents of this store with the words decoded from base64 `text`.
    ///
    /// On error the store is left untouched.
    pub fn read_base64(&mut self, text: &str) -> Result<(), EncodingError> {
        let bytes = STANDARD_NO_PAD.decode(text)?;
        self.read_bytes(&bytes);
        Ok(())
    }

    /// Decode a store from its base64 text form.
    pub fn from_base64(text: &str) -> Result<Self, EncodingError> {
        let mut bits = Self::default();
        bits.read_base64(text)?;
        Ok(bits)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl FromStr for Bits {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64(s)
    }
}

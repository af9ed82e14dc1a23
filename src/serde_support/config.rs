//! serde for [`BloomFilterConfig`] and the filters built from it.
//!
//! # Format
//!
//! ```json
//! {
//!   "size": 1024,
//!   "words": null,
//!   "bits": null,
//!   "hash_functions": ["fnv64", "sha256", null]
//! }
//! ```
//!
//! All keys are optional when deserializing. Storage keys are applied `size`, then
//! `words`, then `bits`, so the last one present wins. Unknown hash function names
//! and `null` entries become unset slots and fail validation with
//! [`BloomFilterError::HashIsNil`](crate::BloomFilterError::HashIsNil).
//!
//! Filters serialize as `{"bits": "<base64>", "hash_functions": [...]}` and are
//! rebuilt through the same validation on the way back in.

use super::bits::hash_function_name;
use crate::builder::BloomFilterConfig;
use crate::core::Bits;
use crate::filters::BloomFilter;
use crate::hash::HashFunction;
use crate::sync::ConcurrentBloomFilter;
use parking_lot::lock_api::RawMutex;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct ConfigSerde {
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    words: Option<Vec<u64>>,
    #[serde(default)]
    bits: Option<Bits>,
    #[serde(default)]
    hash_functions: Vec<Option<String>>,
}

#[derive(Serialize, Deserialize)]
struct FilterSerde {
    bits: Bits,
    hash_functions: Vec<String>,
}

fn names<E: ser::Error>(functions: &[HashFunction]) -> Result<Vec<String>, E> {
    functions
        .iter()
        .map(|function| hash_function_name(function).map(str::to_owned))
        .collect()
}

fn resolve(name: &str) -> Option<HashFunction> {
    let function = HashFunction::from_name(name);
    if function.is_none() {
        tracing::debug!(name, "unknown hash function name in config");
    }
    function
}

impl Serialize for BloomFilterConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hash_functions = self
            .hash_function_list()
            .iter()
            .map(|slot| match slot {
                Some(function) => hash_function_name(function).map(|name| Some(name.to_owned())),
                None => Ok(None),
            })
            .collect::<Result<_, S::Error>>()?;

        ConfigSerde {
            size: None,
            words: None,
            bits: self.storage().cloned(),
            hash_functions,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BloomFilterConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = ConfigSerde::deserialize(deserializer)?;
        let mut config = BloomFilterConfig::new();

        if let Some(size) = raw.size {
            config = config.size(size);
        }
        if let Some(words) = raw.words {
            config = config.words(words);
        }
        if let Some(bits) = raw.bits {
            config = config.bits(bits);
        }

        let slots = raw
            .hash_functions
            .iter()
            .map(|name| name.as_deref().and_then(resolve));

        Ok(config.hash_function_slots(slots))
    }
}

impl Serialize for BloomFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FilterSerde {
            bits: self.bits(),
            hash_functions: names(self.hash_functions())?,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BloomFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = FilterSerde::deserialize(deserializer)?;
        let slots = raw.hash_functions.iter().map(|name| resolve(name));

        BloomFilterConfig::new()
            .bits(raw.bits)
            .hash_function_slots(slots)
            .build()
            .map_err(de::Error::custom)
    }
}

impl<R: RawMutex> Serialize for ConcurrentBloomFilter<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FilterSerde {
            bits: self.bits(),
            hash_functions: names(self.hash_functions())?,
        }
        .serialize(serializer)
    }
}

impl<'de, R: RawMutex> Deserialize<'de> for ConcurrentBloomFilter<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BloomFilter::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomFilterError;

    #[test]
    fn test_config_from_json() {
        let config: BloomFilterConfig =
            serde_json::from_str(r#"{"size": 100, "hash_functions": ["fnv64", "sha256"]}"#).unwrap();
        let filter = config.build().unwrap();

        assert_eq!(filter.size(), 128);
        assert_eq!(filter.hash_functions(), &[HashFunction::Fnv64, HashFunction::Sha256]);
    }

    #[test]
    fn test_config_storage_precedence() {
        let config: BloomFilterConfig = serde_json::from_str(
            r#"{"size": 4096, "words": [1, 2], "bits": "AQAAAAAAAAA", "hash_functions": ["md5"]}"#,
        )
        .unwrap();
        assert_eq!(config.storage().map(Bits::words), Some([1u64].as_slice()));

        let config: BloomFilterConfig =
            serde_json::from_str(r#"{"size": 4096, "words": [1, 2], "hash_functions": ["md5"]}"#).unwrap();
        assert_eq!(config.storage().map(Bits::size), Some(128));
    }

    #[test]
    fn test_unknown_and_null_names_are_unset_slots() {
        let config: BloomFilterConfig =
            serde_json::from_str(r#"{"size": 64, "hash_functions": ["fnv64", "blake3", null]}"#).unwrap();
        assert_eq!(config.build().unwrap_err(), BloomFilterError::HashIsNil { slot: 1 });
    }

    #[test]
    fn test_empty_config() {
        let config: BloomFilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.build().unwrap_err(), BloomFilterError::InvalidSize { size: 0 });
    }

    #[test]
    fn test_config_round_trip() {
        let config = BloomFilterConfig::new()
            .size(256)
            .hash_function_slots([Some(HashFunction::Xxh3_128), None]);

        let json = serde_json::to_string(&config).unwrap();
        let restored: BloomFilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);

        let encoded = bincode::serialize(&config).unwrap();
        let restored: BloomFilterConfig = bincode::deserialize(&encoded).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_filter_json_round_trip() {
        let mut filter = BloomFilterConfig::new().size(512).default_hash_functions().build().unwrap();
        filter.add(b"hello");

        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"fnv64\""));

        let restored: BloomFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, filter);
        assert!(restored.test(b"hello"));
    }

    #[test]
    fn test_filter_bincode_round_trip() {
        let filter = ConcurrentBloomFilter::with_size(1024, [HashFunction::Sha1, HashFunction::Fnv128]).unwrap();
        filter.add(b"world");

        let encoded = bincode::serialize(&filter).unwrap();
        let restored: ConcurrentBloomFilter = bincode::deserialize(&encoded).unwrap();
        assert_eq!(restored.bits(), filter.bits());
        assert!(restored.test(b"world"));
    }

    #[test]
    fn test_filter_with_unknown_name_fails() {
        let json = r#"{"bits": "AQAAAAAAAAA", "hash_functions": ["nope"]}"#;
        let err = serde_json::from_str::<BloomFilter>(json).unwrap_err();
        assert!(err.to_string().contains("hash functions cannot be nil"));
    }

    #[test]
    fn test_filter_with_custom_hash_fails_to_serialize() {
        let filter = BloomFilter::with_size(64, [HashFunction::custom(crate::hash::XxHasher::new())]).unwrap();
        assert!(serde_json::to_string(&filter).is_err());
    }
}

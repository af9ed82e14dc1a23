//! serde for [`Bits`] and [`HashFunction`].
//!
//! # Format
//!
//! | Type           | Human-readable (JSON)       | Binary (bincode)          |
//! |----------------|-----------------------------|---------------------------|
//! | `Bits`         | unpadded base64 string      | byte string, LE words     |
//! | `HashFunction` | catalog name (`"sha256"`)   | catalog name              |
//!
//! Custom hash functions have no stable name and fail to serialize.

use crate::core::Bits;
use crate::hash::HashFunction;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Bits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base64())
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

struct BitsVisitor;

impl<'de> Visitor<'de> for BitsVisitor {
    type Value = Bits;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base64 string or a byte array of little-endian words")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Bits, E> {
        Bits::from_base64(text).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Bits, E> {
        Ok(Bits::from_bytes(bytes))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Bits, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(Bits::from_bytes(&bytes))
    }
}

impl<'de> Deserialize<'de> for Bits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(BitsVisitor)
        } else {
            deserializer.deserialize_bytes(BitsVisitor)
        }
    }
}

/// Name of a built-in hash function, or a serialization error for custom ones.
pub(crate) fn hash_function_name<E: serde::ser::Error>(function: &HashFunction) -> Result<&'static str, E> {
    if function.is_custom() {
        return Err(E::custom("custom hash functions cannot be serialized"));
    }
    Ok(function.name())
}

impl Serialize for HashFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(hash_function_name(self)?)
    }
}

impl<'de> Deserialize<'de> for HashFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        HashFunction::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown hash function: {name}")))
    }
}

//! Owned vector that serializes as its pack64 string

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{decode, encode};
use crate::error::{Pack64Error, Result};

/// A decoded vector of `f32` values.
///
/// `Display` and `Serialize` produce the pack64 string; `FromStr` and
/// `Deserialize` parse it with full validation. Since decoded values are
/// already exactly representable, re-encoding a parsed vector reproduces the
/// original string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedVector {
    data: Vec<f32>,
}

impl PackedVector {
    /// Wrap a vector of values
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Encode to the pack64 string
    pub fn encode(&self) -> Result<String> {
        encode(self.data.as_slice())
    }

    /// Decode from a pack64 string
    pub fn decode<S: AsRef<[u8]> + ?Sized>(input: &S) -> Result<Self> {
        decode(input).map(Self::new)
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the values
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Take ownership of the values
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl From<Vec<f32>> for PackedVector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

impl FromStr for PackedVector {
    type Err = Pack64Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for PackedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.encode().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl Serialize for PackedVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let encoded = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

struct PackedVisitor;

impl<'de> Visitor<'de> for PackedVisitor {
    type Value = PackedVector;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a pack64-encoded string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<PackedVector, E> {
        PackedVector::decode(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<PackedVector, E> {
        PackedVector::decode(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for PackedVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(PackedVisitor)
    }
}

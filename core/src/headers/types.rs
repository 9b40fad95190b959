//! headers/types.rs
//! Header model and header-level errors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{header_keys, REGISTERED_HEADER_NAMES};

/// JWE Protected Header.
///
/// An insertion-ordered JSON object. Encoding the same `Header` value always yields
/// the same bytes: keys in insertion order, compact JSON, no whitespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(Map<String, Value>);

impl Header {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a parameter; `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn alg(&self) -> Option<&str> {
        self.get_str(header_keys::ALG)
    }

    pub fn enc(&self) -> Option<&str> {
        self.get_str(header_keys::ENC)
    }

    pub fn zip(&self) -> Option<&str> {
        self.get_str(header_keys::ZIP)
    }
}

impl From<Map<String, Value>> for Header {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Header {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A header paired with its encoded protected segment.
///
/// `encoded` is the base64url text that is transmitted; it is the only AAD source.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtectedHeader {
    pub header: Header,
    pub encoded: String,
}

impl ProtectedHeader {
    /// AAD = ASCII(BASE64URL(UTF8(JWE Protected Header))).
    #[inline]
    pub fn aad(&self) -> &[u8] {
        self.encoded.as_bytes()
    }
}

/// Set of admitted header parameter names: registered names plus caller-declared
/// private names. Built once at construction and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderNames {
    names: BTreeSet<String>,
    private: BTreeSet<String>,
}

impl HeaderNames {
    /// Registered names only.
    pub fn registered() -> Self {
        Self::with_private(std::iter::empty::<String>())
    }

    /// Registered names plus the given private names.
    pub fn with_private<I, S>(private: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let private: BTreeSet<String> = private.into_iter().map(Into::into).collect();
        let names = REGISTERED_HEADER_NAMES
            .iter()
            .map(|n| n.to_string())
            .chain(private.iter().cloned())
            .collect();
        Self { names, private }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Caller-declared private names.
    pub fn private_names(&self) -> impl Iterator<Item = &str> {
        self.private.iter().map(String::as_str)
    }
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self::registered()
    }
}

/// Header admission failures. Checked in a fixed order, see `validate_header`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("missing \"alg\" in header")]
    MissingAlgorithm,

    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("missing \"enc\" in header")]
    MissingEncryptionAlgorithm,

    #[error("unsupported encryption algorithm: {name}")]
    UnsupportedEncryptionAlgorithm { name: String },

    #[error("unsupported compression algorithm: {name}")]
    UnsupportedCompressionAlgorithm { name: String },

    #[error("invalid header parameter name: {name}")]
    InvalidParameterName { name: String },

    /// Header could not be rendered as JSON.
    #[error("header encoding failed: {0}")]
    Encoding(String),
}

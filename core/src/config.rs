//! config.rs
//! Construction-time configuration. Captured immutably by `Jwe`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_DECOMPRESSED_LEN;
use crate::registry::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JweConfig {
    /// Private header parameter names admitted in addition to the registered ones.
    pub private_headers: Vec<String>,

    /// Built-in algorithms to enable, by name.
    /// - `None` → every built-in algorithm.
    pub algorithms: Option<Vec<String>>,

    /// Longest compact token accepted for decryption.
    /// - `None` → unbounded.
    pub max_token_len: Option<usize>,

    /// Upper bound on the inflated payload when `zip` is `DEF`.
    pub max_decompressed_len: usize,
}

impl Default for JweConfig {
    fn default() -> Self {
        Self {
            private_headers: Vec::new(),
            algorithms: None,
            max_token_len: None,
            max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN,
        }
    }
}

impl JweConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn with_private_header(mut self, name: impl Into<String>) -> Self {
        self.private_headers.push(name.into());
        self
    }

    pub fn with_algorithms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.algorithms = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = Some(max);
        self
    }

    pub fn with_max_decompressed_len(mut self, max: usize) -> Self {
        self.max_decompressed_len = max;
        self
    }
}

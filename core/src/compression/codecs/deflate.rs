//! `DEF`: raw DEFLATE (RFC 1951) via flate2, as required by RFC 7516 §4.1.3.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::compression::types::CompressionError;
use crate::constants::{alg_names, DEFAULT_MAX_DECOMPRESSED_LEN};
use crate::registry::CompressionAlgorithm;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeflateCompression {
    level: Compression,
    max_decompressed_len: usize,
}

impl DeflateCompression {
    pub fn new(level: u32, max_decompressed_len: usize) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level, max_decompressed_len }
    }

    pub fn max_decompressed_len(&self) -> usize {
        self.max_decompressed_len
    }
}

impl Default for DeflateCompression {
    fn default() -> Self {
        Self { level: Compression::default(), max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN }
    }
}

impl CompressionAlgorithm for DeflateCompression {
    fn name(&self) -> &str {
        alg_names::DEF
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let failed = |e: std::io::Error| CompressionError::CompressFailed {
            codec: alg_names::DEF.into(),
            msg: e.to_string(),
        };

        let mut enc = DeflateEncoder::new(Vec::new(), self.level);
        enc.write_all(data).map_err(failed)?;
        enc.finish().map_err(failed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        // Read one byte past the limit to tell "exactly max" from "too large".
        // Saturates for an effectively unbounded limit.
        let limit = u64::try_from(self.max_decompressed_len)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let mut out = Vec::new();
        DeflateDecoder::new(data)
            .take(limit)
            .read_to_end(&mut out)
            .map_err(|e| CompressionError::DecompressFailed {
                codec: alg_names::DEF.into(),
                msg: e.to_string(),
            })?;

        if out.len() > self.max_decompressed_len {
            return Err(CompressionError::TooLarge { max: self.max_decompressed_len });
        }
        Ok(out)
    }
}

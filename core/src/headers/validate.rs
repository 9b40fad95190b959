//! headers/validate.rs
//! Header admission control shared by the encrypt and decrypt paths.

use serde_json::Value;

use crate::headers::types::{Header, HeaderError, HeaderNames};
use crate::registry::{AlgorithmKind, AlgorithmRegistry};

/// Validate a header against the registry and the admitted parameter names.
///
/// Checks, in order:
/// 1. `alg` present
/// 2. `alg` registered as a key-management algorithm
/// 3. `enc` present
/// 4. `enc` registered as a content-encryption algorithm
/// 5. `zip`, if present, registered as a compression algorithm
/// 6. every key is a registered or declared private name
///
/// Pure predicate: no side effects, first failure wins.
pub fn validate_header(
    header: &Header,
    registry: &AlgorithmRegistry,
    names: &HeaderNames,
) -> Result<(), HeaderError> {
    let alg = header
        .get(AlgorithmKind::KeyManagement.header_key())
        .ok_or(HeaderError::MissingAlgorithm)?;
    check_registered(registry, AlgorithmKind::KeyManagement, alg)?;

    let enc = header
        .get(AlgorithmKind::ContentEncryption.header_key())
        .ok_or(HeaderError::MissingEncryptionAlgorithm)?;
    check_registered(registry, AlgorithmKind::ContentEncryption, enc)?;

    if let Some(zip) = header.get(AlgorithmKind::Compression.header_key()) {
        check_registered(registry, AlgorithmKind::Compression, zip)?;
    }

    if let Some(name) = header.keys().find(|k| !names.contains(k)) {
        return Err(HeaderError::InvalidParameterName { name: name.to_owned() });
    }

    Ok(())
}

// Non-string values never name an algorithm; the JSON text goes into the error.
fn check_registered(
    registry: &AlgorithmRegistry,
    kind: AlgorithmKind,
    value: &Value,
) -> Result<(), HeaderError> {
    match value.as_str() {
        Some(name) if registry.contains(kind, name) => Ok(()),
        Some(name) => Err(kind.unsupported(name)),
        None => Err(kind.unsupported(&value.to_string())),
    }
}

//! Text-safe encoding for raw cell buffers.
//!
//! The remote map service carries collision data as a Base64 string with
//! one byte per tile. Encoding uses the standard alphabet with padding,
//! matching what the service emits.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{GridError, GridResult};

/// Encodes a raw cell buffer as a Base64 string.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a Base64 string into a raw cell buffer.
///
/// Fails with [`GridError::MalformedEncoding`] on any alphabet, padding
/// or length violation; malformed input is never truncated or patched up.
pub fn decode(encoded: &str) -> GridResult<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|err| GridError::MalformedEncoding {
            reason: err.to_string(),
        })
}

/// Decodes a Base64 string and checks the decoded length.
///
/// Fails with [`GridError::DimensionMismatch`] when the decoded buffer
/// does not hold exactly `expected` bytes.
pub fn decode_exact(encoded: &str, expected: usize) -> GridResult<Vec<u8>> {
    let bytes = decode(encoded)?;
    if bytes.len() != expected {
        return Err(GridError::DimensionMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

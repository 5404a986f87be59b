//! Chunked base64 decoding for inline render payloads.
//!
//! DESIGN
//! ======
//! The payload is decoded [`DECODE_CHUNK_CHARS`] source characters at a time
//! into a list of byte parts, which is the shape a browser `Blob` is built
//! from. Only the final chunk may carry padding, so the chunked result is
//! identical to decoding the whole string at once.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

use crate::error::DecodeError;

/// Source characters decoded per chunk. Must stay a multiple of 4.
pub const DECODE_CHUNK_CHARS: usize = 512;

/// Decoded artifact bytes plus their declared MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPayload {
    content_type: String,
    parts: Vec<Vec<u8>>,
}

impl DecodedPayload {
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Byte parts in decode order.
    #[must_use]
    pub fn parts(&self) -> &[Vec<u8>] {
        &self.parts
    }

    /// Total decoded length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the parts into one buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.parts.concat()
    }
}

/// Decode padded standard base64 into a [`DecodedPayload`].
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] for characters outside the alphabet,
/// padding before the end of the input, or a length that is not a multiple of 4.
pub fn decode_base64(data: &str, content_type: &str) -> Result<DecodedPayload, DecodeError> {
    let source = data.trim().as_bytes();
    if source.len() % 4 != 0 {
        return Err(DecodeError::InvalidBase64(format!("invalid length {}", source.len())));
    }

    let chunk_count = source.len().div_ceil(DECODE_CHUNK_CHARS);
    let mut parts = Vec::with_capacity(chunk_count);
    for (index, chunk) in source.chunks(DECODE_CHUNK_CHARS).enumerate() {
        if index + 1 < chunk_count && chunk.contains(&b'=') {
            return Err(DecodeError::InvalidBase64(format!(
                "padding inside chunk {index} before end of input"
            )));
        }
        let mut part = Vec::with_capacity(chunk.len() / 4 * 3);
        BASE64_STANDARD
            .decode_vec(chunk, &mut part)
            .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;
        parts.push(part);
    }

    Ok(DecodedPayload { content_type: content_type.to_owned(), parts })
}

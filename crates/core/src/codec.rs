//! Size-triggered reversible compression for stored article bodies.
//!
//! Bodies at or above [`COMPRESS_THRESHOLD`] bytes are gzip-compressed at the
//! highest level before persistence; smaller bodies are stored verbatim. The
//! encoding is a storage detail: callers above the store layer only ever see
//! the decoded plain text.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

/// Minimum body length (in bytes) at which compression kicks in.
///
/// The decision is made independently on every write, so an edit may switch
/// an article between raw and compressed storage in either direction.
pub const COMPRESS_THRESHOLD: usize = 200;

/// On-disk representation of an article body.
///
/// The tag exists only at the serialization boundary; [`decode`] collapses
/// both variants back into plain text immediately on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoredBody {
    Raw(Vec<u8>),
    Compressed(Vec<u8>),
}

/// Errors from encoding or decoding a stored body.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("body compression failed: {0}")]
    Compress(#[source] std::io::Error),

    /// The stored record is corrupt: it claims to be compressed but does not
    /// decompress. Surfaced to callers as a storage-integrity failure.
    #[error("body decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("decoded body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode an article body for storage.
pub fn encode(text: &str) -> Result<StoredBody, CodecError> {
    if text.len() < COMPRESS_THRESHOLD {
        return Ok(StoredBody::Raw(text.as_bytes().to_vec()));
    }
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(text.as_bytes())
        .map_err(CodecError::Compress)?;
    let compressed = encoder.finish().map_err(CodecError::Compress)?;
    Ok(StoredBody::Compressed(compressed))
}

/// Decode a stored article body back to plain text.
///
/// Decompression failure means the record is corrupt on disk; it propagates
/// as an error and is never silently swallowed.
pub fn decode(body: &StoredBody) -> Result<String, CodecError> {
    match body {
        StoredBody::Raw(bytes) => Ok(String::from_utf8(bytes.clone())?),
        StoredBody::Compressed(bytes) => {
            let mut decoder = GzDecoder::new(bytes.as_slice());
            let mut text = Vec::new();
            decoder
                .read_to_end(&mut text)
                .map_err(CodecError::Decompress)?;
            Ok(String::from_utf8(text)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_stored_raw() {
        let body = "# Hello\nworld";
        let encoded = encode(body).unwrap();
        assert!(matches!(encoded, StoredBody::Raw(_)));
        assert_eq!(decode(&encoded).unwrap(), body);
    }

    #[test]
    fn long_body_round_trips_through_compression() {
        let body = "lorem ipsum dolor sit amet ".repeat(50);
        assert!(body.len() >= COMPRESS_THRESHOLD);
        let encoded = encode(&body).unwrap();
        assert!(matches!(encoded, StoredBody::Compressed(_)));
        assert_eq!(decode(&encoded).unwrap(), body);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let below = "a".repeat(COMPRESS_THRESHOLD - 1);
        assert!(matches!(encode(&below).unwrap(), StoredBody::Raw(_)));

        let at = "a".repeat(COMPRESS_THRESHOLD);
        assert!(matches!(encode(&at).unwrap(), StoredBody::Compressed(_)));
    }

    #[test]
    fn empty_body_round_trips() {
        let encoded = encode("").unwrap();
        assert_eq!(decode(&encoded).unwrap(), "");
    }

    #[test]
    fn corrupt_compressed_record_fails_to_decode() {
        let corrupt = StoredBody::Compressed(b"this is not a gzip stream".to_vec());
        let err = decode(&corrupt).unwrap_err();
        assert!(matches!(err, CodecError::Decompress(_)));
    }
}

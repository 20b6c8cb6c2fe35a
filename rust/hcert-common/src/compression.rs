// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! zlib (RFC 1950) adapter.
//!
//! Inflation is driven through [`flate2::Decompress`] directly so that a
//! stream which ends before its final block is reported as truncated instead
//! of silently yielding partial output. The output buffer grows on demand up
//! to the caller's limit.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

/// Default ceiling for inflated payloads.
///
/// A scanned QR code carries at most a few kilobytes; anything near this limit
/// is not a health certificate.
pub const DEFAULT_MAX_INFLATED_LEN: usize = 1024 * 1024;

const INITIAL_GROWTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompressionError {
    #[error("corrupt zlib stream: {0}")]
    Corrupt(String),

    #[error("zlib stream ended before its final block")]
    Truncated,

    #[error("inflated payload exceeds {max_len} bytes")]
    TooLarge { max_len: usize },

    #[error("zlib compression failed: {0}")]
    Compress(String),
}

/// Inflate a zlib stream, failing if the output would exceed `max_len` bytes.
///
/// The Adler-32 trailer is checked by the decompressor; a mismatch is reported
/// as [`CompressionError::Corrupt`].
pub fn inflate(input: &[u8], max_len: usize) -> Result<Vec<u8>, CompressionError> {
    if input.is_empty() {
        return Err(CompressionError::Truncated);
    }

    // One byte past the limit is enough to tell "exactly max_len" from "too large".
    let limit = max_len.saturating_add(1);
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(input.len().saturating_mul(INITIAL_GROWTH).clamp(64, limit.max(64)));

    loop {
        if out.len() == out.capacity() {
            let room = limit.saturating_sub(out.len());
            if room == 0 {
                return Err(CompressionError::TooLarge { max_len });
            }
            out.reserve_exact(out.capacity().max(64).min(room));
        }

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let consumed = usize::try_from(in_before).map_err(|e| CompressionError::Corrupt(e.to_string()))?;

        let status = inflater
            .decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| CompressionError::Corrupt(e.to_string()))?;

        if out.len() > max_len {
            return Err(CompressionError::TooLarge { max_len });
        }

        match status {
            Status::StreamEnd => {
                tracing::debug!(compressed = input.len(), inflated = out.len(), "inflated zlib stream");
                return Ok(out);
            }
            Status::Ok | Status::BufError => {
                // Output room left and nothing moved: the input ran out before the stream ended.
                let stalled = inflater.total_in() == in_before && inflater.total_out() == out_before;
                if stalled && out.len() < out.capacity() {
                    return Err(CompressionError::Truncated);
                }
            }
        }
    }
}

/// Deflate `input` into a zlib stream at the default compression level.
pub fn deflate(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), Compression::default());
    encoder
        .write_all(input)
        .map_err(|e| CompressionError::Compress(e.to_string()))?;
    encoder.finish().map_err(|e| CompressionError::Compress(e.to_string()))
}

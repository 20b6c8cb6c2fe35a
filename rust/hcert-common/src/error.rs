// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Structural CBOR failures after decompression.
///
/// The message carries the location of the mismatch; callers report these
/// under a single error kind regardless of which layer produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CborError {
    #[error("invalid COSE_Sign1 envelope: {0}")]
    Envelope(String),

    #[error("invalid CWT claims: {0}")]
    Claims(String),

    #[error("invalid certificate claim: {0}")]
    Certificate(String),

    #[error("CBOR encoding failed: {0}")]
    Encode(String),
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_common::{Base45Error, CborError, CompressionError};
use hcert_validation::ValidationError;
use thiserror::Error;

/// Every way decoding or re-encoding a certificate can fail.
///
/// Each variant has a stable tag ([`CertificateDecodingError::code`]) that
/// callers can log or map to user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateDecodingError {
    #[error("scan does not start with the expected prefix")]
    PrefixInvalid,

    #[error("base45 decoding failed: {0}")]
    Base45DecodingFailed(#[source] Base45Error),

    #[error("zlib decompression failed: {0}")]
    ZlibDecompressionFailed(#[source] CompressionError),

    #[error("zlib compression failed: {0}")]
    ZlibCompressionFailed(#[source] CompressionError),

    #[error("certificate is invalid: {0}")]
    JsonSchemaInvalid(#[source] SchemaError),

    #[error("base64 decoding failed: {0}")]
    Base64DecodingFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(#[source] DecryptError),
}

impl CertificateDecodingError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::PrefixInvalid => "HC_PREFIX_INVALID",
            Self::Base45DecodingFailed(_) => "HC_BASE45_DECODING_FAILED",
            Self::ZlibDecompressionFailed(_) => "HC_ZLIB_DECOMPRESSION_FAILED",
            Self::ZlibCompressionFailed(_) => "HC_ZLIB_COMPRESSION_FAILED",
            Self::JsonSchemaInvalid(_) => "HC_JSON_SCHEMA_INVALID",
            Self::Base64DecodingFailed(_) => "HC_BASE64_DECODING_FAILED",
            Self::DecryptionFailed(_) => "HC_DECRYPTION_FAILED",
        }
    }

    /// Schema violations, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::JsonSchemaInvalid(SchemaError::ValidationResultFailed(errors)) => Some(errors),
            _ => None,
        }
    }
}

impl From<CborError> for CertificateDecodingError {
    fn from(e: CborError) -> Self {
        Self::JsonSchemaInvalid(SchemaError::CborStructure(e))
    }
}

impl From<DecryptError> for CertificateDecodingError {
    fn from(e: DecryptError) -> Self {
        Self::DecryptionFailed(e)
    }
}

/// The decoded structure does not form a valid certificate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema validation failed with {} violation(s)", .0.len())]
    ValidationResultFailed(Vec<ValidationError>),

    #[error(transparent)]
    CborStructure(#[from] CborError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecryptError {
    #[error("key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("ciphertext of {0} bytes is not a non-empty multiple of the block size")]
    MalformedCiphertext(usize),

    #[error("invalid padding after decryption")]
    InvalidPadding,
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The decode pipeline and its inverse for encrypted test certificates.
//!
//! ```text
//! "HC1:" + base45 → zlib → COSE_Sign1 → CWT claims → DGC → schema check
//! ```
//!
//! Every stage is pure; an access value can be shared across threads and
//! used concurrently.

use std::sync::Arc;

use base64::Engine;
use hcert_common::{
    base45, decode_certificate, deflate, encode_cose_sign1, inflate, parse_cose_sign1, CborError,
    CborWebTokenHeader, CwtClaims, DigitalGreenCertificate, ParsedCoseSign1,
};
use hcert_validation::{CertificateSchema, CertificateValidator};

use crate::decrypt::decrypt_aes256_cbc;
use crate::error::{CertificateDecodingError, SchemaError};
use crate::settings::DecodeSettings;

#[derive(Debug, Clone)]
pub struct DigitalGreenCertificateAccess {
    settings: DecodeSettings,
    schema: Arc<CertificateSchema>,
}

impl DigitalGreenCertificateAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: DecodeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validate against `schema` instead of the default one.
    pub fn with_schema(mut self, schema: impl Into<Arc<CertificateSchema>>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn settings(&self) -> &DecodeSettings {
        &self.settings
    }

    /// Decode a scan into a schema-valid certificate.
    pub fn extract_digital_green_certificate(
        &self,
        scan: &str,
    ) -> Result<DigitalGreenCertificate, CertificateDecodingError> {
        traced("extract certificate", self.decode(scan).and_then(|cose| {
            let claims = CwtClaims::from_cbor(&cose.payload)?;
            self.certificate(&claims)
        }))
    }

    /// Decode a scan's issuer and validity window. The certificate itself is
    /// neither mapped nor validated.
    pub fn extract_cbor_web_token_header(
        &self,
        scan: &str,
    ) -> Result<CborWebTokenHeader, CertificateDecodingError> {
        traced("extract header", self.decode(scan).and_then(|cose| {
            Ok(CwtClaims::from_cbor(&cose.payload)?.header()?)
        }))
    }

    /// Certificate and header from a single pass over the scan.
    pub fn extract_certificate_and_header(
        &self,
        scan: &str,
    ) -> Result<(DigitalGreenCertificate, CborWebTokenHeader), CertificateDecodingError> {
        traced("extract certificate and header", self.decode(scan).and_then(|cose| {
            let claims = CwtClaims::from_cbor(&cose.payload)?;
            let header = claims.header()?;
            Ok((self.certificate(&claims)?, header))
        }))
    }

    /// The COSE `kid` of a scan, protected header first. Not verified.
    pub fn extract_key_identifier(&self, scan: &str) -> Result<Option<Vec<u8>>, CertificateDecodingError> {
        traced(
            "extract key identifier",
            self.decode(scan).map(|cose| cose.key_id().map(<[u8]>::to_vec)),
        )
    }

    /// Turn an encrypted COSE_Sign1 into the base45 text of a scannable
    /// certificate. The result carries no prefix.
    pub fn convert_to_base45(&self, encrypted_cose: &[u8], key: &[u8]) -> Result<String, CertificateDecodingError> {
        traced("convert to base45", reencode(encrypted_cose, key))
    }

    /// [`Self::convert_to_base45`] over the base64 text delivered by the
    /// test-result service.
    pub fn convert_base64_to_base45(
        &self,
        encrypted_base64: &str,
        key: &[u8],
    ) -> Result<String, CertificateDecodingError> {
        let encrypted = base64::engine::general_purpose::STANDARD
            .decode(encrypted_base64.trim())
            .map_err(|e| CertificateDecodingError::Base64DecodingFailed(e.to_string()));
        traced(
            "convert base64 to base45",
            encrypted.and_then(|encrypted| reencode(&encrypted, key)),
        )
    }

    fn decode(&self, scan: &str) -> Result<ParsedCoseSign1, CertificateDecodingError> {
        let text = scan
            .strip_prefix(self.settings.prefix.as_str())
            .ok_or(CertificateDecodingError::PrefixInvalid)?;

        let compressed = base45::decode(text).map_err(CertificateDecodingError::Base45DecodingFailed)?;
        let cose = inflate(&compressed, self.settings.max_inflated_len)
            .map_err(CertificateDecodingError::ZlibDecompressionFailed)?;

        tracing::debug!(
            base45_len = text.len(),
            compressed_len = compressed.len(),
            inflated_len = cose.len(),
            "decoded scan"
        );

        Ok(parse_cose_sign1(&cose)?)
    }

    fn certificate(&self, claims: &CwtClaims<'_>) -> Result<DigitalGreenCertificate, CertificateDecodingError> {
        let dgc = claims
            .digital_green_certificate
            .ok_or_else(|| CborError::Claims("missing hcert claim (-260)".to_string()))?;
        let certificate = decode_certificate(dgc)?;

        CertificateValidator::new(&self.schema)
            .validate(&certificate)
            .map_err(|errors| CertificateDecodingError::JsonSchemaInvalid(SchemaError::ValidationResultFailed(errors)))?;

        tracing::debug!(
            certificate_type = ?certificate.certificate_type(),
            entries = certificate.entries.len(),
            "certificate passed schema validation"
        );
        Ok(certificate)
    }
}

impl Default for DigitalGreenCertificateAccess {
    fn default() -> Self {
        Self {
            settings: DecodeSettings::default(),
            schema: Arc::new(CertificateSchema::default()),
        }
    }
}

fn reencode(encrypted_cose: &[u8], key: &[u8]) -> Result<String, CertificateDecodingError> {
    let encrypted = parse_cose_sign1(encrypted_cose)?;
    let payload = decrypt_aes256_cbc(&encrypted.payload, key)?;
    let cose = encode_cose_sign1(&encrypted.with_payload(payload))?;
    let compressed = deflate(&cose).map_err(CertificateDecodingError::ZlibCompressionFailed)?;

    tracing::debug!(
        cose_len = cose.len(),
        compressed_len = compressed.len(),
        "re-encoded decrypted certificate"
    );
    Ok(base45::encode(&compressed))
}

fn traced<T>(operation: &str, result: Result<T, CertificateDecodingError>) -> Result<T, CertificateDecodingError> {
    result.map_err(|e| {
        tracing::warn!(operation, code = e.code(), error = %e, "certificate operation failed");
        e
    })
}

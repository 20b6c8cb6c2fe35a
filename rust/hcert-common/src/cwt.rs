// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! CBOR Web Token (RFC 8392) claims carried in the COSE payload.
//!
//! The payload is a CBOR map keyed by integer claim labels. Only the labels
//! below are interpreted; the hcert claim is handed to the certificate mapper
//! as its raw CBOR encoding.

use minicbor::data::Type;
use minicbor::Decoder;

use crate::error::CborError;
use crate::header_map::{decode_label, is_integer, Label};

pub const CLAIM_ISSUER: i64 = 1;
pub const CLAIM_EXPIRATION_TIME: i64 = 4;
pub const CLAIM_ISSUED_AT: i64 = 6;
pub const CLAIM_HCERT: i64 = -260;
/// Key of the EU digital green certificate inside the hcert claim.
pub const HCERT_EU_DGC_V1: i64 = 1;

/// Issuer and validity window of a certificate.
///
/// `expiration_time > issued_at` is expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CborWebTokenHeader {
    pub issuer: String,
    /// Unix seconds.
    pub issued_at: i64,
    /// Unix seconds.
    pub expiration_time: i64,
}

/// The claims of a CWT payload, borrowed from the payload bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CwtClaims<'a> {
    pub issuer: Option<String>,
    pub issued_at: Option<i64>,
    pub expiration_time: Option<i64>,
    /// Encoded CBOR of the DGC map (`-260` → `1`), if present.
    pub digital_green_certificate: Option<&'a [u8]>,
}

fn claims_err(msg: impl Into<String>) -> CborError {
    CborError::Claims(msg.into())
}

impl<'a> CwtClaims<'a> {
    /// Read the claims map from a COSE payload. Unknown claims are skipped.
    pub fn from_cbor(payload: &'a [u8]) -> Result<Self, CborError> {
        let mut dec = Decoder::new(payload);
        let len = read_map_len(&mut dec, "payload")?;

        let mut claims = CwtClaims::default();
        for _ in 0..len {
            let key = decode_label(&mut dec).map_err(claims_err)?;
            match key {
                Label::Int(CLAIM_ISSUER) => {
                    let issuer = dec
                        .str()
                        .map_err(|e| claims_err(format!("issuer (1) is not a text string: {e}")))?;
                    claims.issuer = Some(issuer.to_string());
                }
                Label::Int(CLAIM_ISSUED_AT) => {
                    claims.issued_at = Some(read_epoch(&mut dec, "issued at (6)")?);
                }
                Label::Int(CLAIM_EXPIRATION_TIME) => {
                    claims.expiration_time = Some(read_epoch(&mut dec, "expiration time (4)")?);
                }
                Label::Int(CLAIM_HCERT) => {
                    claims.digital_green_certificate = read_hcert(&mut dec, payload)?;
                }
                _ => dec
                    .skip()
                    .map_err(|e| claims_err(format!("failed to skip claim {key:?}: {e}")))?,
            }
        }

        if dec.position() != payload.len() {
            return Err(claims_err("trailing bytes after claims map"));
        }

        Ok(claims)
    }

    /// The header claims, failing if any of them is missing.
    pub fn header(&self) -> Result<CborWebTokenHeader, CborError> {
        Ok(CborWebTokenHeader {
            issuer: self
                .issuer
                .clone()
                .ok_or_else(|| claims_err("missing issuer (1)"))?,
            issued_at: self
                .issued_at
                .ok_or_else(|| claims_err("missing issued at (6)"))?,
            expiration_time: self
                .expiration_time
                .ok_or_else(|| claims_err("missing expiration time (4)"))?,
        })
    }
}

fn read_map_len(dec: &mut Decoder<'_>, what: &str) -> Result<u64, CborError> {
    if !matches!(dec.datatype().map_err(|e| claims_err(e.to_string()))?, Type::Map | Type::MapIndef) {
        return Err(claims_err(format!("{what} is not a map")));
    }
    dec.map()
        .map_err(|e| claims_err(format!("failed to read {what} map: {e}")))?
        .ok_or_else(|| claims_err(format!("indefinite-length {what} map is not supported")))
}

/// NumericDate claims; a float with a fractional part is not accepted.
fn read_epoch(dec: &mut Decoder<'_>, what: &str) -> Result<i64, CborError> {
    let ty = dec.datatype().map_err(|e| claims_err(e.to_string()))?;
    if !is_integer(ty) {
        return Err(claims_err(format!("{what} is not an integer (found {ty:?})")));
    }
    dec.i64()
        .map_err(|e| claims_err(format!("{what} out of range: {e}")))
}

fn read_hcert<'a>(dec: &mut Decoder<'a>, payload: &'a [u8]) -> Result<Option<&'a [u8]>, CborError> {
    let len = read_map_len(dec, "hcert claim (-260)")?;

    let mut dgc = None;
    for _ in 0..len {
        let key = decode_label(dec).map_err(claims_err)?;
        let start = dec.position();
        dec.skip()
            .map_err(|e| claims_err(format!("failed to read hcert entry {key:?}: {e}")))?;
        if key == Label::Int(HCERT_EU_DGC_V1) {
            dgc = Some(&payload[start..dec.position()]);
        }
    }

    Ok(dgc)
}

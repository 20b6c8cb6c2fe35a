// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 envelope parsing and re-encoding.
//!
//! ```text
//! COSE_Sign1 = [ protected : bstr,
//!               unprotected : map,
//!               payload : bstr,
//!               signature : bstr ]
//! ```
//!
//! The signature is carried through untouched; nothing here verifies it.
//! The payload must be embedded (HC1 never uses detached payloads).

use minicbor::data::{Tag, Type};
use minicbor::{Decoder, Encoder};

use crate::error::CborError;
use crate::header_map::CoseHeaderMap;

pub const COSE_SIGN1_TAG: u64 = 18;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCoseSign1 {
    pub protected_headers: CoseHeaderMap,
    pub unprotected_headers: CoseHeaderMap,
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

impl ParsedCoseSign1 {
    /// Key identifier from the protected header, falling back to the unprotected one.
    pub fn key_id(&self) -> Option<&[u8]> {
        self.protected_headers
            .key_id()
            .or_else(|| self.unprotected_headers.key_id())
    }

    /// Same envelope with a different payload.
    pub fn with_payload(&self, payload: Vec<u8>) -> Self {
        Self {
            protected_headers: self.protected_headers.clone(),
            unprotected_headers: self.unprotected_headers.clone(),
            payload,
            signature: self.signature.clone(),
        }
    }
}

fn envelope_err(msg: impl Into<String>) -> CborError {
    CborError::Envelope(msg.into())
}

/// Parse a COSE_Sign1 structure from its CBOR encoding.
///
/// - Accepts an optional COSE_Sign1 tag (18), but rejects any other tag.
/// - Requires the top-level array length to be exactly 4.
/// - Accepts an empty bstr in place of the unprotected map; some issuers emit it.
/// - Rejects indefinite-length arrays/maps and trailing bytes.
pub fn parse_cose_sign1(input: &[u8]) -> Result<ParsedCoseSign1, CborError> {
    if input.is_empty() {
        return Err(envelope_err("empty input"));
    }

    let mut dec = Decoder::new(input);

    if matches!(dec.datatype().map_err(|e| envelope_err(e.to_string()))?, Type::Tag) {
        let tag = dec
            .tag()
            .map_err(|e| envelope_err(format!("failed to read CBOR tag: {e}")))?;
        if tag != Tag::new(COSE_SIGN1_TAG) {
            return Err(envelope_err("unexpected CBOR tag (expected COSE_Sign1 tag 18 or no tag)"));
        }
    }

    let len = dec
        .array()
        .map_err(|e| envelope_err(format!("top-level item is not an array: {e}")))?
        .ok_or_else(|| envelope_err("indefinite-length arrays are not supported"))?;

    if len != 4 {
        return Err(envelope_err(format!("array length was {len}, expected 4")));
    }

    // protected headers: a bstr that itself encodes a CBOR map
    let protected_bstr = dec
        .bytes()
        .map_err(|e| envelope_err(format!("failed to read protected headers (bstr): {e}")))?;

    let protected_headers = CoseHeaderMap::from_cbor(protected_bstr)
        .map_err(|e| envelope_err(format!("failed to parse protected headers: {e}")))?;

    // unprotected headers: a map, or an empty bstr standing in for one
    let unprotected_start = dec.position();
    let unprotected_headers = match dec.datatype().map_err(|e| envelope_err(e.to_string()))? {
        Type::Map | Type::MapIndef => CoseHeaderMap::decode(&mut dec)
            .map_err(|e| envelope_err(format!("failed to parse unprotected headers: {e}")))?,
        Type::Bytes => {
            let b = dec.bytes().map_err(|e| envelope_err(e.to_string()))?;
            if !b.is_empty() {
                return Err(envelope_err("unprotected headers are not a map"));
            }
            CoseHeaderMap::default()
        }
        _ => return Err(envelope_err("unprotected headers are not a map")),
    }
    .with_encoding(input[unprotected_start..dec.position()].to_vec());

    let payload = match dec.datatype().map_err(|e| envelope_err(e.to_string()))? {
        Type::Bytes => dec
            .bytes()
            .map_err(|e| envelope_err(format!("failed to read payload (bstr): {e}")))?
            .to_vec(),
        Type::Null => return Err(envelope_err("detached payloads are not supported")),
        other => return Err(envelope_err(format!("payload is not a bstr (found {other:?})"))),
    };

    let signature = dec
        .bytes()
        .map_err(|e| envelope_err(format!("failed to read signature (bstr): {e}")))?
        .to_vec();

    if dec.position() != input.len() {
        return Err(envelope_err("trailing bytes after COSE_Sign1"));
    }

    tracing::debug!(
        payload_len = payload.len(),
        signature_len = signature.len(),
        "parsed COSE_Sign1 envelope"
    );

    Ok(ParsedCoseSign1 {
        protected_headers,
        unprotected_headers,
        payload,
        signature,
    })
}

/// Encode a tagged COSE_Sign1 from a parsed envelope.
///
/// Header bytes are written as they were received, so re-encoding a parsed
/// message only changes what was changed on the struct.
pub fn encode_cose_sign1(msg: &ParsedCoseSign1) -> Result<Vec<u8>, CborError> {
    let encode_err = |e: minicbor::encode::Error<std::convert::Infallible>| CborError::Encode(e.to_string());

    let unprotected = msg.unprotected_headers.encoded_map_cbor();
    let mut out = Vec::with_capacity(
        16 + msg.protected_headers.encoded_map_cbor().len() + unprotected.len() + msg.payload.len() + msg.signature.len(),
    );

    {
        let mut enc = Encoder::new(&mut out);
        enc.tag(Tag::new(COSE_SIGN1_TAG)).map_err(encode_err)?;
        enc.array(4).map_err(encode_err)?;
        enc.bytes(msg.protected_headers.encoded_map_cbor()).map_err(encode_err)?;
    }

    if unprotected.is_empty() {
        Encoder::new(&mut out).map(0).map_err(encode_err)?;
    } else {
        out.extend_from_slice(unprotected);
    }

    {
        let mut enc = Encoder::new(&mut out);
        enc.bytes(&msg.payload).map_err(encode_err)?;
        enc.bytes(&msg.signature).map_err(encode_err)?;
    }

    Ok(out)
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE header maps.
//!
//! Only the labels HC1 consumers read are interpreted: the signature
//! algorithm and the key identifier. Every other label is skipped in place,
//! so arbitrarily nested values never build up a value tree.

use minicbor::data::Type;
use minicbor::Decoder;

/// COSE header label for the signature algorithm.
pub const HEADER_ALG: i64 = 1;
/// COSE header label for the key identifier.
pub const HEADER_KID: i64 = 4;

/// A CBOR map key as COSE and CWT use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Label {
    Int(i64),
    /// Text labels are private-use; their content is never needed.
    Text,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoseHeaderMap {
    encoded_map_cbor: Vec<u8>,
    algorithm: Option<i64>,
    key_id: Option<Vec<u8>>,
}

impl CoseHeaderMap {
    /// Decode the content of a protected header bstr. An empty bstr is an
    /// empty map.
    pub(crate) fn from_cbor(bytes: &[u8]) -> Result<Self, String> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let mut dec = Decoder::new(bytes);
        let map = Self::decode(&mut dec)?;

        if dec.position() != bytes.len() {
            return Err("trailing bytes after header map".to_string());
        }

        Ok(map.with_encoding(bytes.to_vec()))
    }

    /// Decode a header map at the decoder's position.
    pub(crate) fn decode(dec: &mut Decoder<'_>) -> Result<Self, String> {
        if !matches!(dec.datatype().map_err(|e| e.to_string())?, Type::Map | Type::MapIndef) {
            return Err("expected map".to_string());
        }

        let len = dec
            .map()
            .map_err(|e| format!("failed to read map: {e}"))?
            .ok_or_else(|| "indefinite-length maps are not supported".to_string())?;

        let mut map = Self::default();
        for _ in 0..len {
            match decode_label(dec)? {
                Label::Int(HEADER_ALG) => {
                    let ty = dec.datatype().map_err(|e| e.to_string())?;
                    if !is_integer(ty) {
                        return Err(format!("algorithm (1) is not an integer (found {ty:?})"));
                    }
                    map.algorithm = Some(dec.i64().map_err(|e| format!("algorithm (1) out of range: {e}"))?);
                }
                Label::Int(HEADER_KID) => {
                    let ty = dec.datatype().map_err(|e| e.to_string())?;
                    if !matches!(ty, Type::Bytes) {
                        return Err(format!("key identifier (4) is not a bstr (found {ty:?})"));
                    }
                    map.key_id = Some(dec.bytes().map_err(|e| e.to_string())?.to_vec());
                }
                label => dec
                    .skip()
                    .map_err(|e| format!("failed to skip header {label:?}: {e}"))?,
            }
        }

        Ok(map)
    }

    pub(crate) fn with_encoding(mut self, encoded_map_cbor: Vec<u8>) -> Self {
        self.encoded_map_cbor = encoded_map_cbor;
        self
    }

    /// The header exactly as it appeared on the wire.
    ///
    /// For the protected header this is the content of the bstr; for the
    /// unprotected header it is the full CBOR item (map or empty bstr).
    pub fn encoded_map_cbor(&self) -> &[u8] {
        &self.encoded_map_cbor
    }

    /// Signature algorithm identifier (label 1), e.g. `-7` for ES256.
    pub fn algorithm(&self) -> Option<i64> {
        self.algorithm
    }

    /// Key identifier (label 4).
    pub fn key_id(&self) -> Option<&[u8]> {
        self.key_id.as_deref()
    }
}

pub(crate) fn is_integer(ty: Type) -> bool {
    matches!(
        ty,
        Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::Int | Type::U8 | Type::U16 | Type::U32 | Type::U64
    )
}

pub(crate) fn decode_label(dec: &mut Decoder<'_>) -> Result<Label, String> {
    match dec.datatype().map_err(|e| e.to_string())? {
        ty if is_integer(ty) => {
            let i = dec.i64().map_err(|e| format!("failed to decode int label: {e}"))?;
            Ok(Label::Int(i))
        }
        Type::String => {
            dec.str().map_err(|e| format!("failed to decode text label: {e}"))?;
            Ok(Label::Text)
        }
        other => Err(format!("unsupported label type: {other:?}")),
    }
}

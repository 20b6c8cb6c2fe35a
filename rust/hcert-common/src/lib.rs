// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Building blocks for decoding HC1 health certificates.
//!
//! Each module is one stage of the decode pipeline and is usable on its own:
//! base45 text, zlib, the COSE_Sign1 envelope, CWT claims and the DGC claim
//! map. Orchestration lives in the `hcert` facade crate.

pub mod base45;
pub mod certificate;
pub mod claims;
pub mod compression;
pub mod cose_sign1;
pub mod cwt;
pub mod error;
pub mod header_map;

pub use base45::Base45Error;
pub use certificate::{
    CertificateEntries, CertificateType, DigitalGreenCertificate, Name, RecoveryEntry, TestEntry, VaccinationEntry,
};
pub use claims::decode_certificate;
pub use compression::{deflate, inflate, CompressionError, DEFAULT_MAX_INFLATED_LEN};
pub use cose_sign1::{encode_cose_sign1, parse_cose_sign1, ParsedCoseSign1, COSE_SIGN1_TAG};
pub use cwt::{CborWebTokenHeader, CwtClaims};
pub use error::CborError;
pub use header_map::{CoseHeaderMap, HEADER_ALG, HEADER_KID};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decode HC1 health certificate scans.
//!
//! [`DigitalGreenCertificateAccess`] runs the whole pipeline: prefix, base45,
//! zlib, COSE_Sign1, CWT claims, certificate mapping and schema validation.
//! It also turns encrypted test certificates from the test-result service
//! into scannable base45 text.
//!
//! Signatures are not verified.

pub mod access;
pub mod decrypt;
pub mod error;
pub mod settings;

pub use access::DigitalGreenCertificateAccess;
pub use error::{CertificateDecodingError, DecryptError, SchemaError};
pub use settings::{DecodeSettings, HC1_PREFIX};

pub use hcert_common::{
    CborWebTokenHeader, CertificateEntries, CertificateType, DigitalGreenCertificate, Name, RecoveryEntry,
    TestEntry, VaccinationEntry,
};
pub use hcert_validation::{CertificateSchema, ValidationError};

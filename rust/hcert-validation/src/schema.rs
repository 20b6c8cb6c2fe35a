// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The certificate schema: field patterns and bounds.
//!
//! Compiling the patterns is the only non-trivial cost, so the default schema
//! is built once per process ([`CertificateSchema::shared`]) and only read
//! afterwards. Callers that need different bounds build their own value and
//! hand it to the validator.

use once_cell::sync::Lazy;
use regex::Regex;

/// A regular expression together with the source it was compiled from.
///
/// Unanchored patterns match anywhere in the value, as in JSON schema.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

pub const DATE_PATTERN: &str = r"(19|20)\d{2}-\d{2}-\d{2}";
/// Empty (unknown), year-only or year-month dates of birth.
pub const PARTIAL_DATE_PATTERN: &str = r"^((19|20)\d{2}(-\d{2})?)?$";
pub const DATE_TIME_PATTERN: &str = r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}";
pub const VERSION_PATTERN: &str = r"^\d+.\d+.\d+$";
pub const STANDARDIZED_NAME_PATTERN: &str = r"^[A-Z<]*$";
pub const COUNTRY_PATTERN: &str = r"[A-Z]{1,10}";

#[derive(Debug, Clone)]
pub struct CertificateSchema {
    pub schema_version: &'static str,

    pub version: Pattern,
    pub date: Pattern,
    pub partial_date: Pattern,
    pub date_time: Pattern,
    pub standardized_name: Pattern,
    pub country: Pattern,

    pub name_max_len: usize,
    pub identifier_max_len: usize,
    pub issuer_max_len: usize,
    pub test_center_max_len: usize,
    pub test_name_max_len: usize,

    pub min_dose: u64,
    pub max_dose: u64,
}

static SHARED: Lazy<CertificateSchema> = Lazy::new(CertificateSchema::v1_0_0);

impl CertificateSchema {
    /// The process-wide default schema.
    pub fn shared() -> &'static CertificateSchema {
        &SHARED
    }

    /// Schema 1.0.0 of the EU digital green certificate.
    pub fn v1_0_0() -> Self {
        let compile = |source: &str| Pattern::new(source).unwrap();

        Self {
            schema_version: "1.0.0",
            version: compile(VERSION_PATTERN),
            date: compile(DATE_PATTERN),
            partial_date: compile(PARTIAL_DATE_PATTERN),
            date_time: compile(DATE_TIME_PATTERN),
            standardized_name: compile(STANDARDIZED_NAME_PATTERN),
            country: compile(COUNTRY_PATTERN),
            name_max_len: 50,
            identifier_max_len: 50,
            issuer_max_len: 50,
            test_center_max_len: 50,
            test_name_max_len: 80,
            min_dose: 1,
            max_dose: 9,
        }
    }
}

impl Default for CertificateSchema {
    fn default() -> Self {
        Self::shared().clone()
    }
}

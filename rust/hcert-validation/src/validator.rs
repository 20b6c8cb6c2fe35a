// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate validation against a [`CertificateSchema`].
//!
//! Validation never stops at the first problem: every field is checked and
//! every violation is reported, in document order.

use hcert_common::{
    CertificateEntries, DigitalGreenCertificate, Name, RecoveryEntry, TestEntry, VaccinationEntry,
};

use crate::schema::{CertificateSchema, Pattern};
use crate::validation_error::ValidationError;

#[derive(Debug, Clone, Copy)]
pub struct CertificateValidator<'s> {
    schema: &'s CertificateSchema,
}

impl CertificateValidator<'static> {
    /// Validator over the process-wide default schema.
    pub fn shared() -> Self {
        Self::new(CertificateSchema::shared())
    }
}

impl<'s> CertificateValidator<'s> {
    pub fn new(schema: &'s CertificateSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'s CertificateSchema {
        self.schema
    }

    /// Check `cert`; on failure return every violation found.
    pub fn validate(&self, cert: &DigitalGreenCertificate) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector {
            schema: self.schema,
            errors: Vec::new(),
        };

        if let Some(version) = c.required("#", "ver", cert.version.as_deref()) {
            c.pattern("#/ver", version, &self.schema.version);
        }

        match &cert.name {
            Some(name) => c.name(name),
            None => c.missing("#", "nam"),
        }

        if let Some(dob) = c.required("#", "dob", cert.date_of_birth.as_deref()) {
            // A date of birth may be unknown or partial.
            if !self.schema.partial_date.is_match(dob) {
                c.pattern("#/dob", dob, &self.schema.date);
            }
        }

        match &cert.entries {
            CertificateEntries::Vaccination(v) => c.entries("#/v", v, Collector::vaccination),
            CertificateEntries::Test(t) => c.entries("#/t", t, Collector::test),
            CertificateEntries::Recovery(r) => c.entries("#/r", r, Collector::recovery),
        }

        if c.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(violations = c.errors.len(), "certificate failed schema validation");
            Err(c.errors)
        }
    }
}

struct Collector<'s> {
    schema: &'s CertificateSchema,
    errors: Vec<ValidationError>,
}

impl Collector<'_> {
    fn push(&mut self, path: impl Into<String>, description: impl Into<String>) {
        self.errors.push(ValidationError::new(path, description));
    }

    fn missing(&mut self, parent: &str, name: &str) {
        self.push(parent, format!("Required property '{name}' is missing"));
    }

    /// Report a missing value; hand back the value when present.
    fn required<'v>(&mut self, parent: &str, name: &str, value: Option<&'v str>) -> Option<&'v str> {
        if value.is_none() {
            self.missing(parent, name);
        }
        value
    }

    fn pattern(&mut self, path: &str, value: &str, pattern: &Pattern) {
        if !pattern.is_match(value) {
            self.push(path, format!("'{value}' does not match pattern: '{}'", pattern.source()));
        }
    }

    fn max_len(&mut self, path: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(path, format!("Length of string is larger than max length {max}"));
        }
    }

    fn optional_max_len(&mut self, path: &str, value: Option<&str>, max: usize) {
        if let Some(v) = value {
            self.max_len(path, v, max);
        }
    }

    fn required_max_len(&mut self, parent: &str, name: &str, value: Option<&str>, max: usize) {
        if let Some(v) = self.required(parent, name, value) {
            self.max_len(&format!("{parent}/{name}"), v, max);
        }
    }

    fn required_pattern(&mut self, parent: &str, name: &str, value: Option<&str>, pattern: &Pattern) {
        if let Some(v) = self.required(parent, name, value) {
            self.pattern(&format!("{parent}/{name}"), v, pattern);
        }
    }

    fn dose(&mut self, parent: &str, name: &str, value: Option<u64>) {
        let Some(n) = value else {
            self.missing(parent, name);
            return;
        };
        let path = format!("{parent}/{name}");
        if n < self.schema.min_dose {
            self.push(path, format!("Value {n} is lower than minimum value of {}", self.schema.min_dose));
        } else if n > self.schema.max_dose {
            self.push(path, format!("Value {n} exceeds maximum value of {}", self.schema.max_dose));
        }
    }

    fn name(&mut self, name: &Name) {
        let schema = self.schema;
        let max = schema.name_max_len;

        self.optional_max_len("#/nam/fn", name.family_name.as_deref(), max);
        self.optional_max_len("#/nam/gn", name.given_name.as_deref(), max);

        if let Some(fnt) = self.required("#/nam", "fnt", name.standardized_family_name.as_deref()) {
            self.max_len("#/nam/fnt", fnt, max);
            self.pattern("#/nam/fnt", fnt, &schema.standardized_name);
        }
        if let Some(gnt) = name.standardized_given_name.as_deref() {
            self.max_len("#/nam/gnt", gnt, max);
            self.pattern("#/nam/gnt", gnt, &schema.standardized_name);
        }
    }

    fn entries<T>(&mut self, path: &str, entries: &[T], check: fn(&mut Self, &str, &T)) {
        if entries.is_empty() {
            self.push(path, "Length of array is smaller than the minimum 1");
        }
        for (i, entry) in entries.iter().enumerate() {
            check(self, &format!("{path}/{i}"), entry);
        }
    }

    /// Issuer, identifier and country are common to every entry kind.
    fn common(&mut self, p: &str, country: Option<&str>, issuer: Option<&str>, identifier: Option<&str>) {
        let schema = self.schema;
        self.required_pattern(p, "co", country, &schema.country);
        self.required_max_len(p, "is", issuer, schema.issuer_max_len);
        self.required_max_len(p, "ci", identifier, schema.identifier_max_len);
    }

    fn vaccination(&mut self, p: &str, v: &VaccinationEntry) {
        let schema = self.schema;
        self.required(p, "tg", v.disease_or_agent_targeted.as_deref());
        self.required(p, "vp", v.vaccine_or_prophylaxis.as_deref());
        self.required(p, "mp", v.vaccine_medicinal_product.as_deref());
        self.required(p, "ma", v.marketing_authorization_holder.as_deref());
        self.dose(p, "dn", v.dose_number);
        self.dose(p, "sd", v.total_series_of_doses);
        self.required_pattern(p, "dt", v.date_of_vaccination.as_deref(), &schema.date);
        self.common(
            p,
            v.country_of_vaccination.as_deref(),
            v.certificate_issuer.as_deref(),
            v.unique_certificate_identifier.as_deref(),
        );
    }

    fn test(&mut self, p: &str, t: &TestEntry) {
        let schema = self.schema;
        self.required(p, "tg", t.disease_or_agent_targeted.as_deref());
        self.required(p, "tt", t.type_of_test.as_deref());
        self.optional_max_len(&format!("{p}/nm"), t.naa_test_name.as_deref(), schema.test_name_max_len);
        self.required_pattern(p, "sc", t.date_time_of_sample_collection.as_deref(), &schema.date_time);
        if let Some(dr) = t.date_time_of_test_result.as_deref() {
            self.pattern(&format!("{p}/dr"), dr, &schema.date_time);
        }
        self.required(p, "tr", t.test_result.as_deref());
        self.required_max_len(p, "tc", t.test_center.as_deref(), schema.test_center_max_len);
        self.common(
            p,
            t.country_of_test.as_deref(),
            t.certificate_issuer.as_deref(),
            t.unique_certificate_identifier.as_deref(),
        );
    }

    fn recovery(&mut self, p: &str, r: &RecoveryEntry) {
        let schema = self.schema;
        self.required(p, "tg", r.disease_or_agent_targeted.as_deref());
        self.required_pattern(p, "fr", r.date_of_first_positive_test_result.as_deref(), &schema.date);
        self.common(
            p,
            r.country_of_test.as_deref(),
            r.certificate_issuer.as_deref(),
            r.unique_certificate_identifier.as_deref(),
        );
        self.required_pattern(p, "df", r.certificate_valid_from.as_deref(), &schema.date);
        self.required_pattern(p, "du", r.certificate_valid_until.as_deref(), &schema.date);
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decoded digital green certificate.
//!
//! Every claim is optional at this level: a key missing from the CBOR leaves
//! the field `None`, and the schema validator decides whether that is
//! acceptable.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateType {
    Vaccination,
    Test,
    Recovery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub standardized_family_name: Option<String>,
    pub standardized_given_name: Option<String>,
}

impl Name {
    /// Given name followed by family name, skipping whichever is absent.
    pub fn full_name(&self) -> String {
        [self.given_name.as_deref(), self.family_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaccinationEntry {
    pub disease_or_agent_targeted: Option<String>,
    pub vaccine_or_prophylaxis: Option<String>,
    pub vaccine_medicinal_product: Option<String>,
    pub marketing_authorization_holder: Option<String>,
    pub dose_number: Option<u64>,
    pub total_series_of_doses: Option<u64>,
    pub date_of_vaccination: Option<String>,
    pub country_of_vaccination: Option<String>,
    pub certificate_issuer: Option<String>,
    pub unique_certificate_identifier: Option<String>,
}

impl VaccinationEntry {
    pub fn is_last_dose_in_series(&self) -> bool {
        matches!(
            (self.dose_number, self.total_series_of_doses),
            (Some(dn), Some(sd)) if dn >= sd
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestEntry {
    pub disease_or_agent_targeted: Option<String>,
    pub type_of_test: Option<String>,
    pub test_result: Option<String>,
    pub naa_test_name: Option<String>,
    pub rat_test_name: Option<String>,
    pub date_time_of_sample_collection: Option<String>,
    pub date_time_of_test_result: Option<String>,
    pub test_center: Option<String>,
    pub country_of_test: Option<String>,
    pub certificate_issuer: Option<String>,
    pub unique_certificate_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryEntry {
    pub disease_or_agent_targeted: Option<String>,
    pub date_of_first_positive_test_result: Option<String>,
    pub country_of_test: Option<String>,
    pub certificate_issuer: Option<String>,
    pub certificate_valid_from: Option<String>,
    pub certificate_valid_until: Option<String>,
    pub unique_certificate_identifier: Option<String>,
}

/// The one populated entry list of a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateEntries {
    Vaccination(Vec<VaccinationEntry>),
    Test(Vec<TestEntry>),
    Recovery(Vec<RecoveryEntry>),
}

impl CertificateEntries {
    pub fn certificate_type(&self) -> CertificateType {
        match self {
            Self::Vaccination(_) => CertificateType::Vaccination,
            Self::Test(_) => CertificateType::Test,
            Self::Recovery(_) => CertificateType::Recovery,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Vaccination(v) => v.len(),
            Self::Test(t) => t.len(),
            Self::Recovery(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalGreenCertificate {
    pub version: Option<String>,
    pub name: Option<Name>,
    pub date_of_birth: Option<String>,
    pub entries: CertificateEntries,
}

impl DigitalGreenCertificate {
    pub fn certificate_type(&self) -> CertificateType {
        self.entries.certificate_type()
    }

    pub fn vaccination_certificates(&self) -> &[VaccinationEntry] {
        match &self.entries {
            CertificateEntries::Vaccination(v) => v,
            _ => &[],
        }
    }

    pub fn test_certificates(&self) -> &[TestEntry] {
        match &self.entries {
            CertificateEntries::Test(t) => t,
            _ => &[],
        }
    }

    pub fn recovery_certificates(&self) -> &[RecoveryEntry] {
        match &self.entries {
            CertificateEntries::Recovery(r) => r,
            _ => &[],
        }
    }

    /// Identifier of the first entry; issuers put exactly one entry in a certificate.
    pub fn unique_certificate_identifier(&self) -> Option<&str> {
        match &self.entries {
            CertificateEntries::Vaccination(v) => v.first()?.unique_certificate_identifier.as_deref(),
            CertificateEntries::Test(t) => t.first()?.unique_certificate_identifier.as_deref(),
            CertificateEntries::Recovery(r) => r.first()?.unique_certificate_identifier.as_deref(),
        }
    }
}

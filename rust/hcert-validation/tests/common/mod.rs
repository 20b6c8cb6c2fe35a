// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Typed certificate fixtures for validator tests.

#![allow(dead_code)]

use hcert_common::{
    CertificateEntries, DigitalGreenCertificate, Name, RecoveryEntry, TestEntry, VaccinationEntry,
};

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

pub(crate) fn name() -> Name {
    Name {
        family_name: s("Musterfrau-Gößinger"),
        given_name: s("Gabriele"),
        standardized_family_name: s("MUSTERFRAU<GOESSINGER"),
        standardized_given_name: s("GABRIELE"),
    }
}

pub(crate) fn vaccination() -> VaccinationEntry {
    VaccinationEntry {
        disease_or_agent_targeted: s("840539006"),
        vaccine_or_prophylaxis: s("1119349007"),
        vaccine_medicinal_product: s("EU/1/20/1528"),
        marketing_authorization_holder: s("ORG-100030215"),
        dose_number: Some(1),
        total_series_of_doses: Some(2),
        date_of_vaccination: s("2021-02-18"),
        country_of_vaccination: s("AT"),
        certificate_issuer: s("Ministry of Health, Austria"),
        unique_certificate_identifier: s("URN:UVCI:01:AT:10807843F94AEE0EE5093FBC254BD813#B"),
    }
}

pub(crate) fn test_entry() -> TestEntry {
    TestEntry {
        disease_or_agent_targeted: s("840539006"),
        type_of_test: s("LP6464-4"),
        test_result: s("260415000"),
        naa_test_name: s("Roche LightCycler qPCR"),
        rat_test_name: None,
        date_time_of_sample_collection: s("2021-05-29T22:34:17.595Z"),
        date_time_of_test_result: s("2021-05-31T08:12:09Z"),
        test_center: s("Test Centre 1"),
        country_of_test: s("DE"),
        certificate_issuer: s("Robert Koch-Institut"),
        unique_certificate_identifier: s("01DE/00000/1119349007/G7PSBAXMXVA2N0HM3U8YV7ZMT"),
    }
}

pub(crate) fn recovery() -> RecoveryEntry {
    RecoveryEntry {
        disease_or_agent_targeted: s("840539006"),
        date_of_first_positive_test_result: s("2021-04-21"),
        country_of_test: s("NL"),
        certificate_issuer: s("Ministry of Public Health, Welfare and Sport"),
        certificate_valid_from: s("2021-05-01"),
        certificate_valid_until: s("2021-10-21"),
        unique_certificate_identifier: s("urn:uvci:01:NL:LSP/REC/1289821"),
    }
}

pub(crate) fn certificate(entries: CertificateEntries) -> DigitalGreenCertificate {
    DigitalGreenCertificate {
        version: s("1.0.0"),
        name: Some(name()),
        date_of_birth: s("1998-02-26"),
        entries,
    }
}

pub(crate) fn vaccination_certificate() -> DigitalGreenCertificate {
    certificate(CertificateEntries::Vaccination(vec![vaccination()]))
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `hcert-common` integration tests.
//!
//! Fixtures are built with `minicbor::Encoder` from a tiny value tree so each
//! test can state exactly which keys and types it puts on the wire.

#![allow(dead_code)]

use minicbor::data::Tag;

/// Minimal set of CBOR key types used by these tests.
#[derive(Clone, Debug)]
pub(crate) enum TestCborKey {
    Int(i64),
    Text(&'static str),
}

impl TestCborKey {
    pub(crate) fn encode(&self, enc: &mut minicbor::Encoder<Vec<u8>>) {
        match self {
            TestCborKey::Int(i) => {
                enc.i64(*i).unwrap();
            }
            TestCborKey::Text(s) => {
                enc.str(s).unwrap();
            }
        }
    }
}

/// Minimal set of CBOR value types used by these tests.
#[derive(Clone, Debug)]
pub(crate) enum TestCborValue {
    Int(i64),
    Float(f64),
    Null,
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<TestCborValue>),
    Map(Vec<(TestCborKey, TestCborValue)>),
}

impl TestCborValue {
    pub(crate) fn text(s: &str) -> Self {
        TestCborValue::Text(s.to_string())
    }

    pub(crate) fn encode(&self, enc: &mut minicbor::Encoder<Vec<u8>>) {
        match self {
            TestCborValue::Int(i) => {
                enc.i64(*i).unwrap();
            }
            TestCborValue::Float(f) => {
                enc.f64(*f).unwrap();
            }
            TestCborValue::Null => {
                enc.null().unwrap();
            }
            TestCborValue::Bytes(b) => {
                enc.bytes(b).unwrap();
            }
            TestCborValue::Text(s) => {
                enc.str(s).unwrap();
            }
            TestCborValue::Array(items) => {
                enc.array(items.len() as u64).unwrap();
                for it in items {
                    it.encode(enc);
                }
            }
            TestCborValue::Map(entries) => {
                enc.map(entries.len() as u64).unwrap();
                for (k, v) in entries {
                    k.encode(enc);
                    v.encode(enc);
                }
            }
        }
    }

    pub(crate) fn to_cbor(&self) -> Vec<u8> {
        let mut enc = minicbor::Encoder::new(Vec::new());
        self.encode(&mut enc);
        enc.into_writer()
    }
}

fn text_map(entries: &[(&'static str, TestCborValue)]) -> TestCborValue {
    TestCborValue::Map(
        entries
            .iter()
            .map(|(k, v)| (TestCborKey::Text(k), v.clone()))
            .collect(),
    )
}

pub(crate) fn name_map() -> TestCborValue {
    text_map(&[
        ("fn", TestCborValue::text("Schmitt Mustermann")),
        ("gn", TestCborValue::text("Erika Dörte")),
        ("fnt", TestCborValue::text("SCHMITT<MUSTERMANN")),
        ("gnt", TestCborValue::text("ERIKA<DOERTE")),
    ])
}

pub(crate) fn vaccination_map() -> TestCborValue {
    text_map(&[
        ("tg", TestCborValue::text("840539006")),
        ("vp", TestCborValue::text("1119349007")),
        ("mp", TestCborValue::text("EU/1/20/1528")),
        ("ma", TestCborValue::text("ORG-100030215")),
        ("dn", TestCborValue::Int(2)),
        ("sd", TestCborValue::Int(2)),
        ("dt", TestCborValue::text("2021-02-02")),
        ("co", TestCborValue::text("DE")),
        ("is", TestCborValue::text("Bundesministerium für Gesundheit")),
        ("ci", TestCborValue::text("01DE/84503/1119349007/DXSGWLWL40SU8ZFKIYIBK39A3#S")),
    ])
}

pub(crate) fn recovery_map() -> TestCborValue {
    text_map(&[
        ("tg", TestCborValue::text("840539006")),
        ("fr", TestCborValue::text("2021-04-21")),
        ("co", TestCborValue::text("NL")),
        ("is", TestCborValue::text("Ministry of Public Health, Welfare and Sport")),
        ("df", TestCborValue::text("2021-05-01")),
        ("du", TestCborValue::text("2021-10-21")),
        ("ci", TestCborValue::text("urn:uvci:01:NL:LSP/REC/1289821")),
    ])
}

/// A DGC map with the given top-level entries appended to `ver`, `nam`, `dob`.
pub(crate) fn dgc_map(extra: Vec<(&'static str, TestCborValue)>) -> TestCborValue {
    let mut entries = vec![
        ("ver", TestCborValue::text("1.0.0")),
        ("nam", name_map()),
        ("dob", TestCborValue::text("1964-08-12")),
    ];
    entries.extend(extra);
    text_map(&entries)
}

pub(crate) fn vaccination_dgc() -> TestCborValue {
    dgc_map(vec![("v", TestCborValue::Array(vec![vaccination_map()]))])
}

/// A CWT payload wrapping `dgc` under `-260` → `1`.
pub(crate) fn cwt_payload(issuer: &str, iat: i64, exp: i64, dgc: TestCborValue) -> Vec<u8> {
    TestCborValue::Map(vec![
        (TestCborKey::Int(1), TestCborValue::text(issuer)),
        (TestCborKey::Int(4), TestCborValue::Int(exp)),
        (TestCborKey::Int(6), TestCborValue::Int(iat)),
        (
            TestCborKey::Int(-260),
            TestCborValue::Map(vec![(TestCborKey::Int(1), dgc)]),
        ),
    ])
    .to_cbor()
}

/// Encodes a protected header map as CBOR bytes.
pub(crate) fn encode_protected_header_bytes(entries: &[(i64, TestCborValue)]) -> Vec<u8> {
    let mut enc = minicbor::Encoder::new(Vec::new());
    enc.map(entries.len() as u64).unwrap();
    for (k, v) in entries {
        enc.i64(*k).unwrap();
        v.encode(&mut enc);
    }
    enc.into_writer()
}

/// Encodes a COSE_Sign1 message from components.
pub(crate) fn encode_cose_sign1(
    include_tag_18: bool,
    protected_bstr_contents: &[u8],
    unprotected: &TestCborValue,
    payload: &[u8],
    signature: &[u8],
) -> Vec<u8> {
    let mut enc = minicbor::Encoder::new(Vec::new());

    if include_tag_18 {
        enc.tag(Tag::new(18)).unwrap();
    }

    enc.array(4).unwrap();
    enc.bytes(protected_bstr_contents).unwrap();
    unprotected.encode(&mut enc);
    enc.bytes(payload).unwrap();
    enc.bytes(signature).unwrap();

    enc.into_writer()
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Typed mapping of the DGC claim map into [`DigitalGreenCertificate`].
//!
//! Each known key is read as exactly one CBOR type; a present key of the
//! wrong type fails with its path (`#/v/0/dn`). Unknown keys are skipped so
//! newer schema versions still decode.

use minicbor::data::Type;
use minicbor::Decoder;

use crate::certificate::{
    CertificateEntries, DigitalGreenCertificate, Name, RecoveryEntry, TestEntry, VaccinationEntry,
};
use crate::error::CborError;
use crate::header_map::is_integer;

fn cert_err(msg: impl Into<String>) -> CborError {
    CborError::Certificate(msg.into())
}

/// Decode the encoded DGC map (the value under hcert key `1`).
pub fn decode_certificate(dgc: &[u8]) -> Result<DigitalGreenCertificate, CborError> {
    let mut dec = Decoder::new(dgc);

    let mut version = None;
    let mut name = None;
    let mut date_of_birth = None;
    let mut entries: Vec<CertificateEntries> = Vec::with_capacity(1);

    read_map(&mut dec, "#", |key, dec| {
        let path = format!("#/{key}");
        match key {
            "ver" => version = Some(read_text(dec, &path)?),
            "nam" => name = Some(read_name(dec, &path)?),
            "dob" => date_of_birth = Some(read_text(dec, &path)?),
            "v" => entries.push(CertificateEntries::Vaccination(read_array(dec, &path, read_vaccination)?)),
            "t" => entries.push(CertificateEntries::Test(read_array(dec, &path, read_test)?)),
            "r" => entries.push(CertificateEntries::Recovery(read_array(dec, &path, read_recovery)?)),
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    if dec.position() != dgc.len() {
        return Err(cert_err("trailing bytes after certificate map"));
    }

    if entries.len() > 1 {
        return Err(cert_err("certificate carries more than one of 'v', 't', 'r'"));
    }
    let entries = entries
        .pop()
        .ok_or_else(|| cert_err("certificate carries none of 'v', 't', 'r'"))?;

    Ok(DigitalGreenCertificate {
        version,
        name,
        date_of_birth,
        entries,
    })
}

fn read_name(dec: &mut Decoder<'_>, path: &str) -> Result<Name, CborError> {
    let mut name = Name::default();
    read_map(dec, path, |key, dec| {
        let field = format!("{path}/{key}");
        match key {
            "fn" => name.family_name = Some(read_text(dec, &field)?),
            "gn" => name.given_name = Some(read_text(dec, &field)?),
            "fnt" => name.standardized_family_name = Some(read_text(dec, &field)?),
            "gnt" => name.standardized_given_name = Some(read_text(dec, &field)?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    Ok(name)
}

fn read_vaccination(dec: &mut Decoder<'_>, path: &str) -> Result<VaccinationEntry, CborError> {
    let mut v = VaccinationEntry::default();
    read_map(dec, path, |key, dec| {
        let field = format!("{path}/{key}");
        match key {
            "tg" => v.disease_or_agent_targeted = Some(read_text(dec, &field)?),
            "vp" => v.vaccine_or_prophylaxis = Some(read_text(dec, &field)?),
            "mp" => v.vaccine_medicinal_product = Some(read_text(dec, &field)?),
            "ma" => v.marketing_authorization_holder = Some(read_text(dec, &field)?),
            "dn" => v.dose_number = Some(read_uint(dec, &field)?),
            "sd" => v.total_series_of_doses = Some(read_uint(dec, &field)?),
            "dt" => v.date_of_vaccination = Some(read_text(dec, &field)?),
            "co" => v.country_of_vaccination = Some(read_text(dec, &field)?),
            "is" => v.certificate_issuer = Some(read_text(dec, &field)?),
            "ci" => v.unique_certificate_identifier = Some(read_text(dec, &field)?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    Ok(v)
}

fn read_test(dec: &mut Decoder<'_>, path: &str) -> Result<TestEntry, CborError> {
    let mut t = TestEntry::default();
    read_map(dec, path, |key, dec| {
        let field = format!("{path}/{key}");
        match key {
            "tg" => t.disease_or_agent_targeted = Some(read_text(dec, &field)?),
            "tt" => t.type_of_test = Some(read_text(dec, &field)?),
            "tr" => t.test_result = Some(read_text(dec, &field)?),
            "nm" => t.naa_test_name = Some(read_text(dec, &field)?),
            "ma" => t.rat_test_name = Some(read_text(dec, &field)?),
            "sc" => t.date_time_of_sample_collection = Some(read_text(dec, &field)?),
            "dr" => t.date_time_of_test_result = Some(read_text(dec, &field)?),
            "tc" => t.test_center = Some(read_text(dec, &field)?),
            "co" => t.country_of_test = Some(read_text(dec, &field)?),
            "is" => t.certificate_issuer = Some(read_text(dec, &field)?),
            "ci" => t.unique_certificate_identifier = Some(read_text(dec, &field)?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    Ok(t)
}

fn read_recovery(dec: &mut Decoder<'_>, path: &str) -> Result<RecoveryEntry, CborError> {
    let mut r = RecoveryEntry::default();
    read_map(dec, path, |key, dec| {
        let field = format!("{path}/{key}");
        match key {
            "tg" => r.disease_or_agent_targeted = Some(read_text(dec, &field)?),
            "fr" => r.date_of_first_positive_test_result = Some(read_text(dec, &field)?),
            "co" => r.country_of_test = Some(read_text(dec, &field)?),
            "is" => r.certificate_issuer = Some(read_text(dec, &field)?),
            "df" => r.certificate_valid_from = Some(read_text(dec, &field)?),
            "du" => r.certificate_valid_until = Some(read_text(dec, &field)?),
            "ci" => r.unique_certificate_identifier = Some(read_text(dec, &field)?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    Ok(r)
}

/// Walk a definite-length map with text keys.
///
/// `f` returns `Ok(false)` for keys it does not know; their values are
/// skipped. Non-text keys are skipped as well.
fn read_map<'b, F>(dec: &mut Decoder<'b>, path: &str, mut f: F) -> Result<(), CborError>
where
    F: FnMut(&'b str, &mut Decoder<'b>) -> Result<bool, CborError>,
{
    let ty = dec.datatype().map_err(|e| cert_err(format!("{path}: {e}")))?;
    if !matches!(ty, Type::Map) {
        return Err(cert_err(format!("{path}: expected map, found {ty:?}")));
    }
    let len = dec
        .map()
        .map_err(|e| cert_err(format!("{path}: {e}")))?
        .ok_or_else(|| cert_err(format!("{path}: indefinite-length maps are not supported")))?;

    for _ in 0..len {
        let handled = match dec.datatype().map_err(|e| cert_err(format!("{path}: {e}")))? {
            Type::String => {
                let key = dec.str().map_err(|e| cert_err(format!("{path}: {e}")))?;
                f(key, dec)?
            }
            _ => {
                dec.skip().map_err(|e| cert_err(format!("{path}: {e}")))?;
                false
            }
        };
        if !handled {
            dec.skip().map_err(|e| cert_err(format!("{path}: {e}")))?;
        }
    }

    Ok(())
}

fn read_array<'b, T>(
    dec: &mut Decoder<'b>,
    path: &str,
    mut item: impl FnMut(&mut Decoder<'b>, &str) -> Result<T, CborError>,
) -> Result<Vec<T>, CborError> {
    let ty = dec.datatype().map_err(|e| cert_err(format!("{path}: {e}")))?;
    if !matches!(ty, Type::Array) {
        return Err(cert_err(format!("{path}: expected array, found {ty:?}")));
    }
    let len = dec
        .array()
        .map_err(|e| cert_err(format!("{path}: {e}")))?
        .ok_or_else(|| cert_err(format!("{path}: indefinite-length arrays are not supported")))?;

    let mut out = Vec::with_capacity(len.min(16) as usize);
    for i in 0..len {
        out.push(item(dec, &format!("{path}/{i}"))?);
    }
    Ok(out)
}

fn read_text(dec: &mut Decoder<'_>, path: &str) -> Result<String, CborError> {
    let ty = dec.datatype().map_err(|e| cert_err(format!("{path}: {e}")))?;
    if !matches!(ty, Type::String) {
        return Err(cert_err(format!("{path}: expected text string, found {ty:?}")));
    }
    dec.str()
        .map(str::to_string)
        .map_err(|e| cert_err(format!("{path}: {e}")))
}

fn read_uint(dec: &mut Decoder<'_>, path: &str) -> Result<u64, CborError> {
    let ty = dec.datatype().map_err(|e| cert_err(format!("{path}: {e}")))?;
    if !is_integer(ty) {
        return Err(cert_err(format!("{path}: expected unsigned integer, found {ty:?}")));
    }
    dec.u64()
        .map_err(|e| cert_err(format!("{path}: expected unsigned integer: {e}")))
}

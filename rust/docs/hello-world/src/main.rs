// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Consumer example for the `hcert` crate.
//!
//! Set `RUST_LOG=hcert=debug` to see each pipeline stage.

use base64::Engine;
use hcert::{
    CborWebTokenHeader, CertificateDecodingError, CertificateEntries, DecodeSettings, DigitalGreenCertificate,
    DigitalGreenCertificateAccess,
};
use tracing_subscriber::EnvFilter;

/// Read a file to a string or exit with a clear error.
fn read(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("failed to read {path}: {e}");
        std::process::exit(2);
    })
}

fn print_header(h: &CborWebTokenHeader) {
    println!("issuer: {}", h.issuer);
    println!("issued_at: {}", h.issued_at);
    println!("expiration_time: {}", h.expiration_time);
}

fn print_certificate(c: &DigitalGreenCertificate) {
    let field = |name: &str, value: &Option<String>| {
        if let Some(v) = value {
            println!("  {name}: {v}");
        }
    };

    println!("type: {:?}", c.certificate_type());
    if let Some(name) = &c.name {
        println!("name: {}", name.full_name());
    }
    if let Some(dob) = &c.date_of_birth {
        println!("date_of_birth: {dob}");
    }

    match &c.entries {
        CertificateEntries::Vaccination(entries) => {
            for v in entries {
                println!("vaccination:");
                field("product", &v.vaccine_medicinal_product);
                if let (Some(dn), Some(sd)) = (v.dose_number, v.total_series_of_doses) {
                    println!("  dose: {dn}/{sd}");
                }
                field("date", &v.date_of_vaccination);
                field("country", &v.country_of_vaccination);
                field("id", &v.unique_certificate_identifier);
            }
        }
        CertificateEntries::Test(entries) => {
            for t in entries {
                println!("test:");
                field("type", &t.type_of_test);
                field("result", &t.test_result);
                field("sample_collected", &t.date_time_of_sample_collection);
                field("test_center", &t.test_center);
                field("id", &t.unique_certificate_identifier);
            }
        }
        CertificateEntries::Recovery(entries) => {
            for r in entries {
                println!("recovery:");
                field("first_positive", &r.date_of_first_positive_test_result);
                field("valid_from", &r.certificate_valid_from);
                field("valid_until", &r.certificate_valid_until);
                field("id", &r.unique_certificate_identifier);
            }
        }
    }
}

fn fail(e: &CertificateDecodingError) -> ! {
    eprintln!("{}: {e}", e.code());
    if let Some(errors) = e.validation_errors() {
        for v in errors {
            eprintln!("- {v}");
        }
    }
    std::process::exit(3);
}

fn get_arg_value(args: &[String], name: &str) -> Option<String> {
    let mut i = 0usize;
    while i < args.len() {
        if args[i] == name {
            return args.get(i + 1).cloned();
        }
        i += 1;
    }
    None
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn usage_and_exit(exe: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {exe} decode (--scan <text> | --file <file>) [--header-only] [--max-inflated <bytes>]");
    eprintln!("  {exe} convert --base64-file <file> --key <base64>");
    std::process::exit(2);
}

fn scan_from_args(args: &[String], exe: &str) -> String {
    match (get_arg_value(args, "--scan"), get_arg_value(args, "--file")) {
        (Some(scan), None) => scan,
        (None, Some(path)) => read(&path).trim().to_string(),
        _ => usage_and_exit(exe),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let exe = args.first().map(|s| s.as_str()).unwrap_or("hcert_hello_world");
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("");

    if mode == "decode" {
        let scan = scan_from_args(&args, exe);

        let mut settings = DecodeSettings::default();
        if let Some(max) = get_arg_value(&args, "--max-inflated") {
            let max = max.parse::<usize>().unwrap_or_else(|e| {
                eprintln!("invalid --max-inflated value {max}: {e}");
                std::process::exit(2);
            });
            settings = settings.with_max_inflated_len(max);
        }
        let access = DigitalGreenCertificateAccess::new().with_settings(settings);

        if has_flag(&args, "--header-only") {
            let header = access.extract_cbor_web_token_header(&scan).unwrap_or_else(|e| fail(&e));
            print_header(&header);
            return;
        }

        let (certificate, header) = access.extract_certificate_and_header(&scan).unwrap_or_else(|e| fail(&e));
        print_header(&header);
        if let Ok(Some(kid)) = access.extract_key_identifier(&scan) {
            println!("kid: {}", hex::encode(kid));
        }
        print_certificate(&certificate);
        return;
    }

    if mode == "convert" {
        let input_path = get_arg_value(&args, "--base64-file").unwrap_or_default();
        let key_b64 = get_arg_value(&args, "--key").unwrap_or_default();
        if input_path.is_empty() || key_b64.is_empty() {
            usage_and_exit(exe);
        }

        let key = base64::engine::general_purpose::STANDARD
            .decode(key_b64.trim())
            .unwrap_or_else(|e| {
                eprintln!("invalid --key: {e}");
                std::process::exit(2);
            });

        let base45 = DigitalGreenCertificateAccess::new()
            .convert_base64_to_base45(&read(&input_path), &key)
            .unwrap_or_else(|e| fail(&e));
        println!("{}{base45}", hcert::HC1_PREFIX);
        return;
    }

    usage_and_exit(exe);
}

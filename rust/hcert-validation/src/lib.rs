// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Schema validation for decoded digital green certificates.
//!
//! The validator walks a typed [`hcert_common::DigitalGreenCertificate`] and
//! reports every schema violation it finds, each with a JSON-pointer style
//! path and a stable description.

pub mod schema;
pub mod validation_error;
pub mod validator;

pub use schema::{CertificateSchema, Pattern};
pub use validation_error::ValidationError;
pub use validator::CertificateValidator;

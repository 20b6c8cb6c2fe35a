// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Schema violation records.
//!
//! A violation is where it happened plus a stable human-readable
//! description. Callers compare and report on the description.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// JSON-pointer style location, e.g. `#/v/0/dt`.
    pub path: String,
    pub description: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.description)
    }
}

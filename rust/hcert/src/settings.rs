// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use hcert_common::DEFAULT_MAX_INFLATED_LEN;

/// Prefix every HC1 scan carries in front of its base45 text.
pub const HC1_PREFIX: &str = "HC1:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Case-sensitive prefix stripped before base45 decoding.
    pub(crate) prefix: String,

    /// Upper bound on the inflated COSE message; larger payloads are rejected.
    pub(crate) max_inflated_len: usize,
}

impl DecodeSettings {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_max_inflated_len(mut self, max_len: usize) -> Self {
        self.max_inflated_len = max_len;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn max_inflated_len(&self) -> usize {
        self.max_inflated_len
    }
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            prefix: HC1_PREFIX.to_string(),
            max_inflated_len: DEFAULT_MAX_INFLATED_LEN,
        }
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! AES-256-CBC decryption of test certificate payloads.
//!
//! The test-result service encrypts the COSE payload with a per-certificate
//! data encryption key, a zero IV and PKCS#7 padding.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};

use crate::error::DecryptError;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub const KEY_LEN: usize = 32;
const BLOCK_LEN: usize = 16;
const ZERO_IV: [u8; BLOCK_LEN] = [0; BLOCK_LEN];

pub fn decrypt_aes256_cbc(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, DecryptError> {
    if key.len() != KEY_LEN {
        return Err(DecryptError::InvalidKeyLength(key.len()));
    }
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(DecryptError::MalformedCiphertext(ciphertext.len()));
    }

    let cipher = Aes256CbcDec::new_from_slices(key, &ZERO_IV)
        .map_err(|_| DecryptError::InvalidKeyLength(key.len()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| DecryptError::InvalidPadding)
}

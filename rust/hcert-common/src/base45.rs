// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Base45 text encoding (RFC 9285).
//!
//! QR codes store the alphanumeric character set more densely than bytes, so
//! HC1 payloads are carried as base45 text. Every two input bytes become three
//! characters; a trailing single byte becomes two characters:
//!
//! ```text
//! [a, b]  -> n = a * 256 + b -> c0 + c1 * 45 + c2 * 45^2
//! [a]     -> n = a           -> c0 + c1 * 45
//! ```

/// The 45 symbols, indexed by value.
pub const BASE45_ALPHABET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const BASE: u32 = 45;
const BASE_SQUARED: u32 = BASE * BASE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base45Error {
    #[error("base45 input length {0} leaves a dangling single character")]
    InvalidLength(usize),

    #[error("invalid base45 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("base45 group at index {index} decodes to {value}, which exceeds {max}")]
    ValueOutOfRange { index: usize, value: u32, max: u32 },
}

/// Encode bytes as base45 text.
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(2) * 3);

    let pairs = input.chunks_exact(2);
    let remainder = pairs.remainder();

    for pair in pairs {
        let n = u32::from(pair[0]) * 256 + u32::from(pair[1]);
        push_symbol(&mut out, n % BASE);
        push_symbol(&mut out, (n / BASE) % BASE);
        push_symbol(&mut out, n / BASE_SQUARED);
    }

    if let [a] = *remainder {
        let n = u32::from(a);
        push_symbol(&mut out, n % BASE);
        push_symbol(&mut out, n / BASE);
    }

    out
}

/// Decode base45 text into bytes.
///
/// Fails on a dangling single trailing character, on any character outside
/// [`BASE45_ALPHABET`], and on groups whose value does not fit the bytes they
/// decode to.
///
/// Input is grouped by byte, not by `char`. A non-ASCII character is rejected
/// at the byte index where it starts, and the error carries that character.
pub fn decode(input: &str) -> Result<Vec<u8>, Base45Error> {
    let symbols = input.as_bytes();
    if symbols.len() % 3 == 1 {
        return Err(Base45Error::InvalidLength(symbols.len()));
    }

    let mut out = Vec::with_capacity(symbols.len() / 3 * 2 + 1);

    for (group_index, group) in symbols.chunks(3).enumerate() {
        let offset = group_index * 3;
        let mut n = 0u32;
        let mut weight = 1u32;
        for (i, symbol) in group.iter().enumerate() {
            n += symbol_value(input, offset + i, *symbol)? * weight;
            weight *= BASE;
        }

        if group.len() == 3 {
            if n > 0xFFFF {
                return Err(Base45Error::ValueOutOfRange { index: offset, value: n, max: 0xFFFF });
            }
            out.extend_from_slice(&(n as u16).to_be_bytes());
        } else {
            if n > 0xFF {
                return Err(Base45Error::ValueOutOfRange { index: offset, value: n, max: 0xFF });
            }
            out.push(n as u8);
        }
    }

    Ok(out)
}

fn push_symbol(out: &mut String, value: u32) {
    out.push(char::from(BASE45_ALPHABET[value as usize]));
}

fn symbol_value(input: &str, index: usize, symbol: u8) -> Result<u32, Base45Error> {
    BASE45_ALPHABET
        .iter()
        .position(|s| *s == symbol)
        .map(|v| v as u32)
        .ok_or_else(|| Base45Error::InvalidCharacter {
            // Non-ASCII input lands here on its first byte; report the char that starts there.
            character: input
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        })
}

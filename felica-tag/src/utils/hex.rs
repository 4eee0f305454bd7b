//! Hexadecimal helpers used for logging IDm/PMm values and packet dumps, and
//! for parsing identifiers typed by a user.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! never fails writing to a String
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Same as [`bytes_to_hex`] with a single space between bytes.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes, ignoring ASCII whitespace and `:` separators.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();

    if let Some(&bad) = digits.iter().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidArgument(format!(
            "invalid hex digit {:?}",
            char::from(bad)
        )));
    }

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidArgument("hex string has odd length".into()));
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| Error::InvalidArgument("non-ascii hex digit".into()))?;
            u8::from_str_radix(pair, 16)
                .map_err(|e| Error::InvalidArgument(format!("invalid hex pair '{}': {}", pair, e)))
        })
        .collect()
}

// felica-tag/src/protocol/responses/search.rs

use crate::constants::{RESPONSE_HEADER_LEN, SEARCH_SERVICE_END};
use crate::protocol::CommandCode;
use crate::types::ServiceCode;
use crate::utils::bytes_to_hex;

/// Extract the SearchServiceCode payload (bytes 10.. of the reply).
///
/// A reply that is too short or carries any response code other than 0x0B
/// is reported as an empty payload rather than an error.
pub fn search_payload(raw: &[u8]) -> Vec<u8> {
    let expected = CommandCode::SearchServiceCode.response_code();
    match raw.get(1) {
        Some(&code) if code == expected => {}
        Some(&code) => {
            log::warn!(
                "search service code: response code {:#04x}, expected {:#04x}",
                code,
                expected
            );
            return Vec::new();
        }
        None => {
            log::warn!("search service code: short reply [{}]", bytes_to_hex(raw));
            return Vec::new();
        }
    }
    raw.get(RESPONSE_HEADER_LEN..)
        .map(<[u8]>::to_vec)
        .unwrap_or_default()
}

/// One SearchServiceCode result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEntry {
    /// 2-byte payload: a service code (little endian on the wire).
    Service(ServiceCode),
    /// 4-byte payload: an area code followed by its end service code.
    Area { code: u16, end: u16 },
    /// `FF FF`: no more nodes.
    End,
    /// Any other payload length, empty included.
    Unrecognized(usize),
}

impl SearchEntry {
    pub fn classify(payload: &[u8]) -> Self {
        match *payload {
            [a, b] if [a, b] == SEARCH_SERVICE_END => Self::End,
            [a, b] => Self::Service(ServiceCode::from_le_bytes([a, b])),
            [a, b, c, d] => Self::Area {
                code: u16::from_le_bytes([a, b]),
                end: u16::from_le_bytes([c, d]),
            },
            _ => Self::Unrecognized(payload.len()),
        }
    }
}

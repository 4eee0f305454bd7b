// felica-tag/src/protocol/responses/system.rs

use super::CommandResponse;
use crate::protocol::parser;
use crate::types::SystemCode;
use crate::Result;

/// Decode a RequestSystemCode reply (response code = 0x0D)
/// Layout: len(1) + response_code(1) + idm(8) + count(1) + system_codes(N*2, big endian)
///
/// An empty reply or an empty payload is a card exposing no systems.
pub fn decode_system_code_list(raw: &[u8]) -> Result<Vec<SystemCode>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let response = CommandResponse::decode(raw)?;
    let data = response.data();
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let count = parser::byte_at(data, 0)? as usize;
    parser::ensure_len(data, 1 + count * 2)?;

    let mut codes = Vec::with_capacity(count);
    for i in 0..count {
        codes.push(SystemCode::new(parser::be_u16_at(data, 1 + i * 2)?));
    }
    Ok(codes)
}

// felica-tag/src/protocol/commands/search.rs

use crate::Result;
use crate::protocol::{CommandCode, CommandPacket};
use crate::types::Idm;

/// Encode SearchServiceCode command (FeliCa command code 0x0A)
/// Layout: len(1) + command_code(1) + idm(8) + index(2, little endian)
pub fn encode_search_service_code(idm: Idm, index: u16) -> Result<CommandPacket> {
    CommandPacket::new(
        CommandCode::SearchServiceCode.code(),
        Some(idm),
        &index.to_le_bytes(),
    )
}

// felica-tag/src/protocol/commands/read.rs

use crate::constants::BLOCK_ELEMENT_2BYTE;
use crate::protocol::{CommandCode, CommandPacket};
use crate::types::{Idm, ServiceCode};
use crate::{Error, Result};

/// Encode ReadWithoutEncryption command (FeliCa command code 0x06) for one
/// service and one or more 2-byte block list elements.
/// Layout: len(1) + command_code(1) + idm(8) + service_count(1)=1
///         + service_code(2, little endian) + block_count(1) + (0x80, block_number)*N
pub fn encode_read(idm: Idm, service: ServiceCode, blocks: &[u8]) -> Result<CommandPacket> {
    if blocks.is_empty() || blocks.len() > u8::MAX as usize {
        return Err(Error::InvalidArgument(format!(
            "block count must be 1..=255, got {}",
            blocks.len()
        )));
    }

    let mut buf = Vec::with_capacity(4 + blocks.len() * 2);
    buf.push(1); // one service
    buf.extend_from_slice(&service.to_le_bytes());
    buf.push(blocks.len() as u8);
    for &block in blocks {
        buf.push(BLOCK_ELEMENT_2BYTE);
        buf.push(block);
    }

    CommandPacket::new(CommandCode::ReadWithoutEncryption.code(), Some(idm), &buf)
}

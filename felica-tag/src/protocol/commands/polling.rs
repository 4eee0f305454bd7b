// felica-tag/src/protocol/commands/polling.rs

use crate::Result;
use crate::protocol::{CommandCode, CommandPacket};
use crate::types::SystemCode;

/// Encode Polling command (FeliCa command code 0x00)
/// Layout: len(1) + command_code(1) + system_code(2, big endian) + request_code(1) + time_slot(1)
pub fn encode_polling(
    system_code: SystemCode,
    request_code: u8,
    time_slot: u8,
) -> Result<CommandPacket> {
    let sc = system_code.to_be_bytes();
    CommandPacket::new(
        CommandCode::Polling.code(),
        None,
        &[sc[0], sc[1], request_code, time_slot],
    )
}

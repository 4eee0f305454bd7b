// felica-tag/src/protocol/commands/system.rs

use crate::Result;
use crate::protocol::{CommandCode, CommandPacket};
use crate::types::Idm;

/// Encode RequestSystemCode command (FeliCa command code 0x0C)
/// Layout: len(1) + command_code(1) + idm(8)
pub fn encode_request_system_code(idm: Idm) -> Result<CommandPacket> {
    CommandPacket::new(CommandCode::RequestSystemCode.code(), Some(idm), &[])
}

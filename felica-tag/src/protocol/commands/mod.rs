// felica-tag/src/protocol/commands/mod.rs

pub mod polling;
pub mod read;
pub mod search;
pub mod system;

pub use polling::encode_polling;
pub use read::encode_read;
pub use search::encode_search_service_code;
pub use system::encode_request_system_code;

use super::{CommandCode, CommandPacket};
use crate::Result;
use crate::types::{Idm, ServiceCode, SystemCode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Polling {
        system_code: SystemCode,
        request_code: u8,
        time_slot: u8,
    },
    RequestSystemCode {
        idm: Idm,
    },
    SearchServiceCode {
        idm: Idm,
        index: u16,
    },
    ReadWithoutEncryption {
        idm: Idm,
        service: ServiceCode,
        blocks: Vec<u8>,
    },
}

impl Command {
    pub fn code(&self) -> CommandCode {
        match self {
            Self::Polling { .. } => CommandCode::Polling,
            Self::RequestSystemCode { .. } => CommandCode::RequestSystemCode,
            Self::SearchServiceCode { .. } => CommandCode::SearchServiceCode,
            Self::ReadWithoutEncryption { .. } => CommandCode::ReadWithoutEncryption,
        }
    }

    /// Command code byte sent on the wire.
    pub fn command_code(&self) -> u8 {
        self.code().code()
    }

    /// Response code a well-behaved card answers this command with.
    pub fn response_code(&self) -> u8 {
        self.code().response_code()
    }

    /// Build the outbound packet for this command.
    pub fn to_packet(&self) -> Result<CommandPacket> {
        match self {
            Self::Polling {
                system_code,
                request_code,
                time_slot,
            } => encode_polling(*system_code, *request_code, *time_slot),
            Self::RequestSystemCode { idm } => encode_request_system_code(*idm),
            Self::SearchServiceCode { idm, index } => encode_search_service_code(*idm, *index),
            Self::ReadWithoutEncryption {
                idm,
                service,
                blocks,
            } => encode_read(*idm, *service, blocks),
        }
    }

    /// Encode the command into wire bytes (length byte included).
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_packet()?.encode())
    }
}

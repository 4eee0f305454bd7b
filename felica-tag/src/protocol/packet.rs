// felica-tag/src/protocol/packet.rs

use crate::constants::{IDM_LEN, MAX_PACKET_LEN};
use crate::types::Idm;
use crate::{Error, Result};

/// Outbound FeliCa command packet.
/// Format: [Len(1)] [CommandCode(1)] [IDm(8), optional] [Data(n)]
/// Len counts every byte of the packet, itself included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPacket {
    length: u8,
    command_code: u8,
    idm: Option<Idm>,
    data: Vec<u8>,
}

impl CommandPacket {
    /// Build a packet, failing with `PacketTooLarge` above 255 bytes.
    pub fn new(command_code: u8, idm: Option<Idm>, data: &[u8]) -> Result<Self> {
        let length = 2 + idm.map_or(0, |_| IDM_LEN) + data.len();
        if length > MAX_PACKET_LEN {
            return Err(Error::PacketTooLarge { length });
        }

        Ok(Self {
            length: length as u8,
            command_code,
            idm,
            data: data.to_vec(),
        })
    }

    /// Build a packet from a flat blob. When the blob holds at least 8 bytes
    /// the first 8 are taken as the IDm and the rest as command data.
    pub fn from_flat(command_code: u8, data: &[u8]) -> Result<Self> {
        if data.len() >= IDM_LEN {
            let idm = Idm::try_from(&data[..IDM_LEN])?;
            Self::new(command_code, Some(idm), &data[IDM_LEN..])
        } else {
            Self::new(command_code, None, data)
        }
    }

    /// Total encoded length, length byte included.
    pub fn length(&self) -> usize {
        self.length as usize
    }

    pub fn command_code(&self) -> u8 {
        self.command_code
    }

    pub fn idm(&self) -> Option<&Idm> {
        self.idm.as_ref()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.length());
        out.push(self.length);
        out.push(self.command_code);
        if let Some(idm) = &self.idm {
            out.extend_from_slice(idm.as_bytes());
        }
        out.extend_from_slice(&self.data);
        out
    }
}

// felica-tag/src/protocol/responses/read.rs

use super::CommandResponse;
use crate::constants::READ_STATUS_UNKNOWN;
use crate::protocol::parser;
use crate::types::BlockData;
use crate::Result;

/// ReadWithoutEncryption response (response code = 0x07)
/// Layout: len(1) + response_code(1) + idm(8) + status1(1) + status2(1)
///         + block_count(1) + blocks(N*16)
///
/// A non-zero `status_flag1` is the card refusing the read; block count and
/// data are then absent. A reply without payload reports both flags as
/// `0xFFFF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResponse {
    response: Option<CommandResponse>,
    status_flag1: u16,
    status_flag2: u16,
    block_count: u8,
    block_data: Option<Vec<u8>>,
}

impl ReadResponse {
    /// Decode raw reply bytes. An empty reply is not an error; it yields the
    /// unknown-status sentinel.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::unknown(None));
        }
        Self::from_response(CommandResponse::decode(raw)?)
    }

    pub fn from_response(response: CommandResponse) -> Result<Self> {
        let data = response.data();
        if data.len() < 2 {
            return Ok(Self::unknown(Some(response)));
        }

        let status1 = parser::byte_at(data, 0)?;
        let status2 = parser::byte_at(data, 1)?;
        let (block_count, block_data) = if status1 == 0 {
            (parser::byte_at(data, 2)?, Some(data[3..].to_vec()))
        } else {
            (0, None)
        };

        Ok(Self {
            response: Some(response),
            status_flag1: status1 as u16,
            status_flag2: status2 as u16,
            block_count,
            block_data,
        })
    }

    fn unknown(response: Option<CommandResponse>) -> Self {
        Self {
            response,
            status_flag1: READ_STATUS_UNKNOWN,
            status_flag2: READ_STATUS_UNKNOWN,
            block_count: 0,
            block_data: None,
        }
    }

    pub fn status_flag1(&self) -> u16 {
        self.status_flag1
    }

    pub fn status_flag2(&self) -> u16 {
        self.status_flag2
    }

    pub fn is_success(&self) -> bool {
        self.status_flag1 == 0
    }

    pub fn block_count(&self) -> u8 {
        self.block_count
    }

    pub fn block_data(&self) -> Option<&[u8]> {
        self.block_data.as_deref()
    }

    /// Split block data into 16-byte blocks, up to `block_count`.
    pub fn blocks(&self) -> Vec<BlockData> {
        self.block_data
            .as_deref()
            .unwrap_or_default()
            .chunks_exact(BlockData::LEN)
            .take(self.block_count as usize)
            .filter_map(|chunk| BlockData::try_from(chunk).ok())
            .collect()
    }

    pub fn response(&self) -> Option<&CommandResponse> {
        self.response.as_ref()
    }
}

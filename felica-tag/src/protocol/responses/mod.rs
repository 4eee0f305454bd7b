// felica-tag/src/protocol/responses/mod.rs

pub mod polling;
pub mod read;
pub mod search;
pub mod system;

pub use polling::PollingResponse;
pub use read::ReadResponse;
pub use search::{SearchEntry, search_payload};
pub use system::decode_system_code_list;

use crate::constants::RESPONSE_HEADER_LEN;
use crate::protocol::parser;
use crate::types::Idm;
use crate::Result;

/// Generic FeliCa response. Per-command views (`PollingResponse`,
/// `ReadResponse`, ...) live in `protocol::responses::<name>.rs` and are
/// built on top of this.
///
/// Layout: length(1) + response_code(1) + idm(8) + data(rest)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    raw: Vec<u8>,
    length: u8,
    response_code: u8,
    idm: Idm,
    data: Vec<u8>,
}

impl CommandResponse {
    /// Parse raw response bytes. Fails with `MalformedResponse` when the
    /// buffer cannot hold the 10-byte header. The response code is not
    /// checked here; see [`CommandResponse::expect_code`].
    pub fn decode(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, RESPONSE_HEADER_LEN)?;

        Ok(Self {
            raw: raw.to_vec(),
            length: parser::byte_at(raw, 0)?,
            response_code: parser::byte_at(raw, 1)?,
            idm: parser::idm_at(raw, 2)?,
            data: raw[RESPONSE_HEADER_LEN..].to_vec(),
        })
    }

    /// Length byte as reported by the card.
    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn response_code(&self) -> u8 {
        self.response_code
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// Payload following the header; may be empty.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Check the response code against the one the caller expects.
    pub fn expect_code(&self, expected: u8) -> Result<()> {
        parser::expect_response_code(self.response_code, expected)
    }
}

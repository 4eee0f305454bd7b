// felica-tag/src/protocol/responses/polling.rs

use super::CommandResponse;
use crate::constants::IDM_LEN;
use crate::protocol::parser;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Polling response (response code = 0x01)
/// Layout: len(1) + response_code(1) + idm(8) + pmm(8) + request_data(rest)
///
/// PMm and request data are only present when the payload holds at least
/// 8 bytes; some cards answer with the bare header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingResponse {
    response: CommandResponse,
    pmm: Option<Pmm>,
    request_data: Option<Vec<u8>>,
}

impl PollingResponse {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        Self::from_response(CommandResponse::decode(raw)?)
    }

    pub fn from_response(response: CommandResponse) -> Result<Self> {
        let data = response.data();
        let (pmm, request_data) = if data.len() >= IDM_LEN {
            (
                Some(parser::pmm_at(data, 0)?),
                Some(data[IDM_LEN..].to_vec()),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            response,
            pmm,
            request_data,
        })
    }

    pub fn idm(&self) -> &Idm {
        self.response.idm()
    }

    pub fn pmm(&self) -> Option<&Pmm> {
        self.pmm.as_ref()
    }

    pub fn request_data(&self) -> Option<&[u8]> {
        self.request_data.as_deref()
    }

    /// System code echoed back when the poll used request code 0x01.
    pub fn system_code(&self) -> Option<SystemCode> {
        match self.request_data() {
            Some(&[hi, lo]) => Some(SystemCode::from_be_bytes([hi, lo])),
            _ => None,
        }
    }

    pub fn response(&self) -> &CommandResponse {
        &self.response
    }
}

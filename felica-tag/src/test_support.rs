//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build raw card replies so tests across the crate and the
//! tests/ directory script a `MockTransceiver` the same way.
#![allow(dead_code)]

use crate::protocol::CommandCode;
use crate::transport::MockTransceiver;
use crate::types::{Idm, Pmm, SystemCode};

/// Build a raw reply `[len, code, idm(8), data...]` with a correct length byte.
#[doc(hidden)]
pub fn response(code: u8, idm: &Idm, data: &[u8]) -> Vec<u8> {
    let length = u8::try_from(10 + data.len()).expect("response fixture longer than 255 bytes");
    let mut raw = Vec::with_capacity(length as usize);
    raw.push(length);
    raw.push(code);
    raw.extend_from_slice(idm.as_bytes());
    raw.extend_from_slice(data);
    raw
}

/// Polling reply carrying PMm and request data.
#[doc(hidden)]
pub fn polling_response(idm: &Idm, pmm: &Pmm, request_data: &[u8]) -> Vec<u8> {
    let mut data = pmm.as_bytes().to_vec();
    data.extend_from_slice(request_data);
    response(CommandCode::Polling.response_code(), idm, &data)
}

/// RequestSystemCode reply listing `codes`.
#[doc(hidden)]
pub fn system_code_response(idm: &Idm, codes: &[SystemCode]) -> Vec<u8> {
    let count = u8::try_from(codes.len()).expect("more than 255 system codes in fixture");
    let mut data = vec![count];
    for code in codes {
        data.extend_from_slice(&code.to_be_bytes());
    }
    response(CommandCode::RequestSystemCode.response_code(), idm, &data)
}

/// SearchServiceCode reply with the given payload.
#[doc(hidden)]
pub fn search_response(idm: &Idm, payload: &[u8]) -> Vec<u8> {
    response(CommandCode::SearchServiceCode.response_code(), idm, payload)
}

/// Successful ReadWithoutEncryption reply carrying `blocks`.
#[doc(hidden)]
pub fn read_response(idm: &Idm, blocks: &[[u8; 16]]) -> Vec<u8> {
    let count = u8::try_from(blocks.len()).expect("more than 255 blocks in fixture");
    let mut data = vec![0x00, 0x00, count];
    for block in blocks {
        data.extend_from_slice(block);
    }
    response(CommandCode::ReadWithoutEncryption.response_code(), idm, &data)
}

/// Failed ReadWithoutEncryption reply with the given status flags.
#[doc(hidden)]
pub fn read_status_response(idm: &Idm, status1: u8, status2: u8) -> Vec<u8> {
    response(
        CommandCode::ReadWithoutEncryption.response_code(),
        idm,
        &[status1, status2],
    )
}

/// MockTransceiver pre-seeded with a polling reply followed by `frames`.
#[doc(hidden)]
pub fn mock_after_polling(idm: &Idm, pmm: &Pmm, frames: Vec<Vec<u8>>) -> MockTransceiver {
    let mut mock = MockTransceiver::new();
    mock.push_response(polling_response(idm, pmm, &[]));
    for f in frames {
        mock.push_response(f);
    }
    mock
}

// fixtures.rs — provides commonly used raw card replies

use felica_tag::test_support;
use felica_tag::types::{Idm, Pmm, ServiceCode, SystemCode};

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    [0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17]
}

pub fn sample_system_code() -> SystemCode {
    SystemCode::COMMON
}

pub fn sample_service_code() -> ServiceCode {
    ServiceCode::new(0x090f)
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes(sample_pmm_bytes())
}

/// `[len, 0x01, idm(01..08), pmm(10..17)]`
pub fn polling_raw() -> Vec<u8> {
    hex::decode("120101020304050607081011121314151617").unwrap()
}

pub fn read_raw_with_block(block: &[u8; 16]) -> Vec<u8> {
    test_support::read_response(&sample_idm(), &[*block])
}

pub fn read_raw_status(status1: u8, status2: u8) -> Vec<u8> {
    test_support::read_status_response(&sample_idm(), status1, status2)
}

pub fn search_raw(payload: &[u8]) -> Vec<u8> {
    test_support::search_response(&sample_idm(), payload)
}

pub fn sample_block(fill: u8) -> [u8; 16] {
    [fill; 16]
}

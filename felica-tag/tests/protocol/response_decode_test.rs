#[path = "../common/mod.rs"]
mod common;

use felica_tag::protocol::{
    CommandResponse, PollingResponse, ReadResponse, SearchEntry, decode_system_code_list,
    search_payload,
};
use felica_tag::{Error, SystemCode};

#[test]
fn polling_response_decodes_idm_and_pmm() {
    let pr = PollingResponse::decode(&common::fixtures::polling_raw()).unwrap();
    assert_eq!(pr.idm(), &common::fixtures::sample_idm());
    assert_eq!(pr.pmm(), Some(&common::fixtures::sample_pmm()));
    assert_eq!(pr.request_data(), Some(&[][..]));
}

#[test]
fn header_only_response_has_empty_data() {
    let raw = hex::decode("0a0b0102030405060708").unwrap();
    let resp = CommandResponse::decode(&raw).unwrap();
    assert!(resp.data().is_empty());
    assert!(matches!(
        CommandResponse::decode(&raw[..9]),
        Err(Error::MalformedResponse { .. })
    ));
}

#[test]
fn read_response_decodes_block() {
    let block = common::fixtures::sample_block(0xaa);
    let rr = ReadResponse::decode(&common::fixtures::read_raw_with_block(&block)).unwrap();
    assert!(rr.is_success());
    assert_eq!(rr.block_count(), 1);
    assert_eq!(rr.block_data(), Some(&block[..]));
    assert_eq!(rr.blocks()[0].as_bytes(), &block);
}

#[test]
fn read_response_with_error_status() {
    let rr = ReadResponse::decode(&common::fixtures::read_raw_status(0xff, 0xa1)).unwrap();
    assert_eq!((rr.status_flag1(), rr.status_flag2()), (0xff, 0xa1));
    assert_eq!(rr.block_count(), 0);
    assert!(rr.block_data().is_none());
}

#[test]
fn system_code_list_is_big_endian() {
    let raw = hex::decode("0f0d0102030405060708020003fe00").unwrap();
    assert_eq!(
        decode_system_code_list(&raw).unwrap(),
        vec![SystemCode::new(0x0003), SystemCode::new(0xfe00)]
    );
}

#[test]
fn search_payload_classification() {
    let payload = search_payload(&common::fixtures::search_raw(&[0x8b, 0x1a]));
    match SearchEntry::classify(&payload) {
        SearchEntry::Service(code) => assert_eq!(code.as_u16(), 0x1a8b),
        other => panic!("expected service, got {:?}", other),
    }
}

#[path = "../common/mod.rs"]
mod common;

use felica_tag::protocol::{Command, CommandCode, CommandPacket};
use felica_tag::{Error, ErrorKind, ServiceCode};

#[test]
fn polling_and_read_encode() -> anyhow::Result<()> {
    let polling = Command::Polling {
        system_code: common::fixtures::sample_system_code(),
        request_code: 1,
        time_slot: 0,
    };
    assert_eq!(polling.encode()?, hex::decode("0600fe000100")?);

    let read = Command::ReadWithoutEncryption {
        idm: common::fixtures::sample_idm(),
        service: common::fixtures::sample_service_code(),
        blocks: vec![0x00],
    };
    assert_eq!(
        read.encode()?,
        hex::decode("10060102030405060708010f09018000")?
    );
    Ok(())
}

#[test]
fn flat_blob_matches_explicit_idm() -> anyhow::Result<()> {
    let idm = common::fixtures::sample_idm();
    let explicit = CommandPacket::new(CommandCode::SearchServiceCode.code(), Some(idm), &[1, 0])?;

    let mut flat = idm.as_bytes().to_vec();
    flat.extend_from_slice(&[1, 0]);
    let split = CommandPacket::from_flat(CommandCode::SearchServiceCode.code(), &flat)?;

    assert_eq!(explicit, split);
    assert_eq!(split.encode()[..2], [12, 0x0a]);
    Ok(())
}

#[test]
fn header_bytes_recover_code_and_idm() {
    let idm = common::fixtures::sample_idm();
    let bytes = Command::SearchServiceCode { idm, index: 0x0102 }
        .encode()
        .unwrap();
    assert_eq!(bytes[0] as usize, bytes.len());
    assert_eq!(CommandCode::try_from(bytes[1]).unwrap(), CommandCode::SearchServiceCode);
    assert_eq!(&bytes[2..10], idm.as_bytes());
}

#[test]
fn oversized_read_is_a_protocol_error() {
    let err = Command::ReadWithoutEncryption {
        idm: common::fixtures::sample_idm(),
        service: ServiceCode::new(0x090f),
        blocks: vec![0; 200],
    }
    .encode()
    .unwrap_err();
    assert!(matches!(err, Error::PacketTooLarge { length: 414 }));
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

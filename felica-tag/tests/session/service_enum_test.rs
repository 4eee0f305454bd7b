#[path = "../common/mod.rs"]
mod common;

use felica_tag::prelude::*;

#[test]
fn area_then_service_then_end() -> anyhow::Result<()> {
    common::init_logging();
    let mut mock = common::mock_with_polling(vec![
        common::fixtures::search_raw(&[0x00, 0x00, 0xfe, 0xff]),
        common::fixtures::search_raw(&[0x01, 0x02]),
        common::fixtures::search_raw(&[0xff, 0xff]),
    ]);

    let mut session = CardSession::new(&mut mock);
    common::poll(&mut session);
    let services = session.get_service_code_list()?;
    assert_eq!(services, vec![ServiceCode::new(0x0201)]);
    assert_eq!(services[0].to_le_bytes(), [0x01, 0x02]);
    drop(session);

    // polling + three searches, indices 1..=3 little endian
    assert_eq!(mock.sent.len(), 4);
    for (i, packet) in mock.sent[1..].iter().enumerate() {
        assert_eq!(packet[1], 0x0a);
        assert_eq!(&packet[10..], &[(i + 1) as u8, 0x00]);
    }
    Ok(())
}

#[test]
fn foreign_response_code_ends_enumeration() -> anyhow::Result<()> {
    let idm = common::fixtures::sample_idm();
    let mut mock = common::mock_with_polling(vec![
        common::fixtures::search_raw(&[0x0f, 0x09]),
        felica_tag::test_support::response(0x07, &idm, &[0x8b, 0x1a]),
    ]);

    let mut session = CardSession::new(&mut mock);
    common::poll(&mut session);
    assert_eq!(
        session.get_service_code_list()?,
        vec![ServiceCode::new(0x090f)]
    );
    Ok(())
}

#[test]
fn lazy_iteration_sends_only_what_is_consumed() {
    let mut mock = common::mock_with_polling(vec![
        common::fixtures::search_raw(&[0x0f, 0x09]),
        common::fixtures::search_raw(&[0x8b, 0x1a]),
    ]);

    let mut session = CardSession::new(&mut mock);
    common::poll(&mut session);
    let first = session.services().unwrap().next().unwrap().unwrap();
    assert_eq!(first, ServiceCode::new(0x090f));
    drop(session);

    assert_eq!(mock.sent.len(), 2);
    assert_eq!(mock.remaining(), 1);
}

/// Card that answers every search with an area node.
struct EndlessAreas {
    idm: Idm,
    searches: u32,
    last_index: Option<[u8; 2]>,
}

impl Transceiver for EndlessAreas {
    fn transceive(&mut self, data: &[u8]) -> felica_tag::Result<Vec<u8>> {
        self.searches += 1;
        self.last_index = Some([data[10], data[11]]);
        Ok(felica_tag::test_support::search_response(
            &self.idm,
            &[0x00, 0x00, 0xfe, 0xff],
        ))
    }
}

#[test]
fn enumeration_stops_at_index_limit() {
    let idm = common::fixtures::sample_idm();
    let mut card = EndlessAreas {
        idm,
        searches: 0,
        last_index: None,
    };

    let mut session = CardSession::builder().transceiver(&mut card).idm(idm).build();
    assert!(session.get_service_code_list().unwrap().is_empty());
    drop(session);

    assert_eq!(card.searches, 0xffff);
    assert_eq!(card.last_index, Some([0xff, 0xff]));
}

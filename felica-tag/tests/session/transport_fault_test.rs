#[path = "../common/mod.rs"]
mod common;

use felica_tag::prelude::*;

#[test]
fn tag_lost_mid_enumeration_discards_partial_list() {
    common::init_logging();
    let mut mock = common::mock_with_polling(vec![
        common::fixtures::search_raw(&[0x0f, 0x09]),
        common::fixtures::search_raw(&[0x8b, 0x1a]),
    ]);
    mock.push_error(Error::TagLost);

    let mut session = CardSession::new(&mut mock);
    common::poll(&mut session);
    let err = session.get_service_code_list().unwrap_err();
    assert!(matches!(err, Error::TagLost));
    assert!(err.is_transport());
    // cached identity survives the failure
    assert_eq!(session.idm(), Some(common::fixtures::sample_idm()));
    drop(session);

    assert_eq!(mock.connects, 4);
    assert_eq!(mock.closes, 4);
}

#[test]
fn iterator_yields_error_once() {
    let mut mock = common::mock_with_polling(vec![common::fixtures::search_raw(&[0x0f, 0x09])]);
    mock.push_error(Error::Transport("reader unplugged".into()));

    let mut session = CardSession::new(&mut mock);
    common::poll(&mut session);
    let results: Vec<_> = session.services().unwrap().collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::Transport(_))));
}

#[test]
fn failed_connect_skips_transceive() {
    let mut mock = common::mock_with_polling(vec![]);

    let mut session = CardSession::new(&mut mock);
    common::poll(&mut session);
    drop(session);

    mock.set_connect_failures(1);
    let mut session = CardSession::builder()
        .transceiver(&mut mock)
        .idm(common::fixtures::sample_idm())
        .build();
    assert!(matches!(session.get_system_code_list(), Err(Error::Timeout)));
    drop(session);

    assert_eq!(mock.sent.len(), 1);
    assert_eq!(mock.connects, mock.closes);
}

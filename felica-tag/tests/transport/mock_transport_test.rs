#[path = "../common/mod.rs"]
mod common;

use felica_tag::Error;
use felica_tag::transport::{MockTransceiver, Transceiver, exchange};

#[test]
fn mock_records_sent_packets_in_order() {
    let mut m = MockTransceiver::with_responses(vec![vec![0x01], vec![0x02]]);
    m.transceive(&[0xaa]).unwrap();
    assert_eq!(m.remaining(), 1);
    m.transceive(&[0xbb, 0xcc]).unwrap();
    assert_eq!(m.remaining(), 0);

    assert_eq!(m.pop_sent(), Some(vec![0xbb, 0xcc]));
    assert_eq!(m.pop_sent(), Some(vec![0xaa]));
    assert_eq!(m.pop_sent(), None);
}

#[test]
fn exchange_releases_link_on_every_path() {
    let mut m = MockTransceiver::new();
    m.push_response(common::fixtures::polling_raw());
    m.push_error(Error::TagLost);
    m.push_error(Error::Transport("rf field off".into()));

    assert!(exchange(&mut m, &[0x06, 0x00, 0xff, 0xff, 0x01, 0x00]).is_ok());
    assert!(matches!(exchange(&mut m, &[0x00]), Err(Error::TagLost)));
    let err = exchange(&mut m, &[0x00]).unwrap_err();
    assert!(err.is_transport());

    assert_eq!(m.connects, 3);
    assert_eq!(m.closes, 3);
}

#[test]
fn connect_failure_and_recovery() {
    let mut m = MockTransceiver::new();
    m.push_response(vec![0xaa]);
    m.set_connect_failures(1);

    assert!(matches!(exchange(&mut m, &[0x00]), Err(Error::Timeout)));
    assert_eq!(exchange(&mut m, &[0x00]).unwrap(), vec![0xaa]);
}

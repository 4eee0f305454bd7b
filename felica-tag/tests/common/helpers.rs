use felica_tag::card::CardSession;
use felica_tag::transport::MockTransceiver;

use super::fixtures;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mock transceiver whose first reply answers the polling handshake.
pub fn mock_with_polling(frames: Vec<Vec<u8>>) -> MockTransceiver {
    let mut mock = MockTransceiver::new();
    mock.push_response(fixtures::polling_raw());
    for f in frames {
        mock.push_response(f);
    }
    mock
}

/// Poll through `session` and check the handshake cached the fixture IDm.
pub fn poll(session: &mut CardSession<'_>) {
    let idm = session
        .polling_and_get_idm(fixtures::sample_system_code())
        .expect("polling");
    assert_eq!(idm, fixtures::sample_idm());
}

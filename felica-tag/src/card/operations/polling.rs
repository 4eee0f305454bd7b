use crate::Result;
use crate::card::CardSession;
use crate::constants::{POLLING_REQUEST_SYSTEM_CODE, POLLING_TIME_SLOT};
use crate::protocol::{Command, PollingResponse};
use crate::types::SystemCode;

/// Poll for a card of `system_code` and cache the IDm/PMm it answers with.
///
/// The cache is only touched once the reply has been parsed, so a transport
/// fault or malformed reply leaves the previous identity in place.
pub fn polling(session: &mut CardSession<'_>, system_code: SystemCode) -> Result<PollingResponse> {
    let cmd = Command::Polling {
        system_code,
        request_code: POLLING_REQUEST_SYSTEM_CODE,
        time_slot: POLLING_TIME_SLOT,
    };

    let raw = session.transceive(&cmd)?;
    let response = PollingResponse::decode(&raw)?;

    let code = response.response().response_code();
    if code != cmd.response_code() {
        log::warn!(
            "polling: response code {:#04x}, expected {:#04x}",
            code,
            cmd.response_code()
        );
    }

    session.set_identity(*response.idm(), response.pmm().copied());
    log::debug!(
        "polling {}: idm={} pmm={}",
        system_code,
        response.idm().to_hex(),
        response.pmm().map(|p| p.to_hex()).unwrap_or_else(|| "-".into())
    );

    Ok(response)
}

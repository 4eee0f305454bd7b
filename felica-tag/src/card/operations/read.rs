use crate::Result;
use crate::card::CardSession;
use crate::protocol::{Command, ReadResponse};
use crate::types::{ServiceCode, TransitHistory};

/// Read one block of a service that needs no authentication.
pub fn read_without_encryption(
    session: &mut CardSession<'_>,
    service: ServiceCode,
    block: u8,
) -> Result<ReadResponse> {
    read_blocks(session, service, &[block])
}

/// Read several blocks of one service in a single command.
///
/// A non-zero status flag is returned as data; it is never retried.
pub fn read_blocks(
    session: &mut CardSession<'_>,
    service: ServiceCode,
    blocks: &[u8],
) -> Result<ReadResponse> {
    let idm = session.require_idm()?;
    let cmd = Command::ReadWithoutEncryption {
        idm,
        service,
        blocks: blocks.to_vec(),
    };

    let raw = session.transceive(&cmd)?;
    let response = ReadResponse::decode(&raw)?;

    if !response.is_success() {
        log::warn!(
            "read service {}: status=({:#06x}, {:#06x})",
            service,
            response.status_flag1(),
            response.status_flag2()
        );
    }
    Ok(response)
}

/// Read the first `count` usage-history records of an ICOCA / PiTaPa card.
///
/// The card must have been polled on system 0xFE00. A refused read yields
/// no records.
pub fn read_transit_history(
    session: &mut CardSession<'_>,
    count: u8,
) -> Result<Vec<TransitHistory>> {
    let blocks: Vec<u8> = (0..count).collect();
    let response = read_blocks(session, ServiceCode::TRANSIT_HISTORY, &blocks)?;
    let history: Vec<TransitHistory> = response
        .blocks()
        .iter()
        .map(TransitHistory::from_block)
        .collect();
    log::debug!("transit history: {} record(s)", history.len());
    Ok(history)
}

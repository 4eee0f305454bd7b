use crate::Result;
use crate::card::CardSession;
use crate::protocol::{Command, decode_system_code_list};
use crate::types::SystemCode;

/// List the system codes the polled card exposes.
pub fn get_system_code_list(session: &mut CardSession<'_>) -> Result<Vec<SystemCode>> {
    let idm = session.require_idm()?;
    let raw = session.transceive(&Command::RequestSystemCode { idm })?;
    let codes = decode_system_code_list(&raw)?;
    log::debug!("request system code: {} system(s)", codes.len());
    Ok(codes)
}

use crate::Result;
use crate::card::CardSession;
use crate::constants::MAX_SERVICE_INDEX;
use crate::protocol::{Command, SearchEntry, search_payload};
use crate::types::{Idm, ServiceCode};

/// Issue one SearchServiceCode request and return the payload after the
/// response header. Replies with an unexpected response code come back empty.
pub fn search_service_code(session: &mut CardSession<'_>, index: u16) -> Result<Vec<u8>> {
    let idm = session.require_idm()?;
    search_with(session, idm, index)
}

fn search_with(session: &mut CardSession<'_>, idm: Idm, index: u16) -> Result<Vec<u8>> {
    let raw = session.transceive(&Command::SearchServiceCode { idm, index })?;
    Ok(search_payload(&raw))
}

/// Iterator over service codes found by SearchServiceCode.
///
/// Starts at index 1 (index 0 is the root area). Areas are skipped. Stops
/// at the `FF FF` marker, at any payload that is neither 2 nor 4 bytes long,
/// or after index 0xFFFF. Transport and protocol errors are yielded once and
/// end the iteration.
pub struct ServiceIterator<'a, 't> {
    session: &'a mut CardSession<'t>,
    idm: Idm,
    current_index: u32,
    finished: bool,
}

impl<'a, 't> ServiceIterator<'a, 't> {
    pub fn new(session: &'a mut CardSession<'t>) -> Result<Self> {
        let idm = session.require_idm()?;
        Ok(Self {
            session,
            idm,
            current_index: 1,
            finished: false,
        })
    }

    /// Next index that will be searched.
    pub fn current_index(&self) -> u32 {
        self.current_index
    }
}

impl Iterator for ServiceIterator<'_, '_> {
    type Item = Result<ServiceCode>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if self.current_index > MAX_SERVICE_INDEX {
                log::debug!("search service code: index limit reached");
                self.finished = true;
                break;
            }

            let index = self.current_index as u16;
            let payload = match search_with(self.session, self.idm, index) {
                Ok(payload) => payload,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            self.current_index += 1;

            match SearchEntry::classify(&payload) {
                SearchEntry::Service(code) => return Some(Ok(code)),
                SearchEntry::Area { code, end } => {
                    log::trace!("search service code #{}: area {:04x}..{:04x}", index, code, end);
                }
                SearchEntry::End => {
                    log::debug!("search service code: end marker at index {}", index);
                    self.finished = true;
                }
                SearchEntry::Unrecognized(len) => {
                    log::debug!(
                        "search service code: stopping at index {} on {}-byte payload",
                        index,
                        len
                    );
                    self.finished = true;
                }
            }
        }
        None
    }
}

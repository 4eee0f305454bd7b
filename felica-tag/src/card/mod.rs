// felica-tag/src/card/mod.rs

use crate::protocol::{Command, PollingResponse, ReadResponse};
use crate::transport::{Transceiver, exchange};
use crate::types::{Idm, Pmm, ServiceCode, SystemCode, TransitHistory};
use crate::{Error, Result};

mod info;
pub use info::CardInfo;

pub mod builder;
pub mod operations;

pub use builder::CardSessionBuilder;
pub use operations::ServiceIterator;

/// Conversation with one physically present FeliCa card.
///
/// The session borrows the host's transceiver and caches the IDm/PMm of the
/// last successful Polling. Commands are strictly one at a time. When the
/// transceiver reports `TagLost` the card has left the field; drop the
/// session and start a new one on the next presentation.
pub struct CardSession<'t> {
    transceiver: Option<&'t mut dyn Transceiver>,
    idm: Option<Idm>,
    pmm: Option<Pmm>,
}

impl<'t> CardSession<'t> {
    pub fn new(transceiver: &'t mut dyn Transceiver) -> Self {
        Self::from_parts(Some(transceiver), None, None)
    }

    /// A session with no transceiver bound; every exchange fails with
    /// `NoTransport`.
    pub fn detached() -> Self {
        Self::from_parts(None, None, None)
    }

    pub fn builder() -> CardSessionBuilder<'t> {
        CardSessionBuilder::new()
    }

    pub(crate) fn from_parts(
        transceiver: Option<&'t mut dyn Transceiver>,
        idm: Option<Idm>,
        pmm: Option<Pmm>,
    ) -> Self {
        Self {
            transceiver,
            idm,
            pmm,
        }
    }

    pub fn idm(&self) -> Option<Idm> {
        self.idm
    }

    pub fn pmm(&self) -> Option<Pmm> {
        self.pmm
    }

    pub fn has_transport(&self) -> bool {
        self.transceiver.is_some()
    }

    /// Snapshot of the cached identity, if Polling has succeeded.
    pub fn info(&self) -> Option<CardInfo> {
        CardInfo::try_from(self).ok()
    }

    pub(crate) fn require_idm(&self) -> Result<Idm> {
        self.idm.ok_or(Error::NoIdm)
    }

    pub(crate) fn set_identity(&mut self, idm: Idm, pmm: Option<Pmm>) {
        self.idm = Some(idm);
        self.pmm = pmm;
    }

    /// Encode `cmd`, run one bracketed exchange and return the raw reply.
    pub(crate) fn transceive(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let transceiver = self.transceiver.as_deref_mut().ok_or(Error::NoTransport)?;
        let packet = cmd.encode()?;
        exchange(transceiver, &packet)
    }

    /// Poll with request code 0x01 (system code) and a single time slot.
    pub fn polling(&mut self, system_code: SystemCode) -> Result<PollingResponse> {
        operations::polling(self, system_code)
    }

    pub fn polling_and_get_idm(&mut self, system_code: SystemCode) -> Result<Idm> {
        self.polling(system_code)?;
        self.require_idm()
    }

    pub fn get_system_code_list(&mut self) -> Result<Vec<SystemCode>> {
        operations::get_system_code_list(self)
    }

    /// Enumerate every service code of the polled system.
    ///
    /// A failure part-way through discards what was found so far.
    pub fn get_service_code_list(&mut self) -> Result<Vec<ServiceCode>> {
        self.services()?.collect()
    }

    /// Lazily enumerate service codes, one SearchServiceCode per step.
    pub fn services(&mut self) -> Result<ServiceIterator<'_, 't>> {
        ServiceIterator::new(self)
    }

    /// Single SearchServiceCode step; see [`operations::search_service_code`].
    pub fn search_service_code(&mut self, index: u16) -> Result<Vec<u8>> {
        operations::search_service_code(self, index)
    }

    pub fn read_without_encryption(
        &mut self,
        service: ServiceCode,
        block: u8,
    ) -> Result<ReadResponse> {
        operations::read_without_encryption(self, service, block)
    }

    pub fn read_blocks(&mut self, service: ServiceCode, blocks: &[u8]) -> Result<ReadResponse> {
        operations::read_blocks(self, service, blocks)
    }

    /// Usage history of an ICOCA / PiTaPa card, read from block 0 on.
    pub fn read_transit_history(&mut self, count: u8) -> Result<Vec<TransitHistory>> {
        operations::read_transit_history(self, count)
    }
}

use crate::card::CardSession;
use crate::transport::Transceiver;
use crate::types::{Idm, Pmm};

/// Builder for a `CardSession`, mainly to resume talking to a card whose
/// IDm is already known without polling again.
#[derive(Default)]
pub struct CardSessionBuilder<'t> {
    transceiver: Option<&'t mut dyn Transceiver>,
    idm: Option<Idm>,
    pmm: Option<Pmm>,
}

impl<'t> CardSessionBuilder<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transceiver(mut self, transceiver: &'t mut dyn Transceiver) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    pub fn idm(mut self, idm: Idm) -> Self {
        self.idm = Some(idm);
        self
    }

    pub fn pmm(mut self, pmm: Pmm) -> Self {
        self.pmm = Some(pmm);
        self
    }

    /// A missing transceiver is not an error here; operations on the built
    /// session fail with `NoTransport` instead.
    pub fn build(self) -> CardSession<'t> {
        CardSession::from_parts(self.transceiver, self.idm, self.pmm)
    }
}

use crate::types::{Idm, Pmm};

/// Compact snapshot of a polled FeliCa card (IDm/PMm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    pub idm: Idm,
    pub pmm: Option<Pmm>,
}

impl CardInfo {
    pub fn new(idm: Idm, pmm: Option<Pmm>) -> Self {
        Self { idm, pmm }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> Option<&Pmm> {
        self.pmm.as_ref()
    }
}

impl TryFrom<&crate::card::CardSession<'_>> for CardInfo {
    type Error = crate::Error;

    fn try_from(session: &crate::card::CardSession<'_>) -> crate::Result<Self> {
        let idm = session.idm().ok_or(crate::Error::NoIdm)?;
        Ok(CardInfo::new(idm, session.pmm()))
    }
}

// felica-tag/src/prelude.rs

pub use crate::card::{CardInfo, CardSession, CardSessionBuilder};
pub use crate::protocol::{
    Command, CommandCode, CommandPacket, CommandResponse, PollingResponse, ReadResponse,
};
pub use crate::transport::{MockTransceiver, Transceiver};
pub use crate::{
    BlockData, Error, ErrorKind, Idm, Pmm, Result, ServiceCode, SystemCode,
    TransitHistory,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};

// felica-tag/src/constants.rs
//! Common protocol constants used across the crate

/// Length of an IDm or PMm in bytes
pub const IDM_LEN: usize = 8;

/// Fixed response header: length(1) + response code(1) + IDm(8)
pub const RESPONSE_HEADER_LEN: usize = 2 + IDM_LEN;

/// Maximum total length of a command packet, length byte included
pub const MAX_PACKET_LEN: usize = 255;

/// Polling request code asking the card to report its system code
pub const POLLING_REQUEST_SYSTEM_CODE: u8 = 0x01;

/// Polling time slot count (0 = a single slot)
pub const POLLING_TIME_SLOT: u8 = 0x00;

/// Block list element high byte: 2-byte element, first service, no extension
pub const BLOCK_ELEMENT_2BYTE: u8 = 0x80;

/// End-of-list marker returned by Search Service Code
pub const SEARCH_SERVICE_END: [u8; 2] = [0xff, 0xff];

/// Highest Search Service Code index tried before giving up
pub const MAX_SERVICE_INDEX: u32 = 0xffff;

/// Status flag value reported when a read reply carried no payload
pub const READ_STATUS_UNKNOWN: u16 = 0xffff;

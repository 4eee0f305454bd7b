// felica-tag/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;
use std::str::FromStr;

fn array8(bytes: &[u8]) -> Result<[u8; 8], Error> {
    if bytes.len() != 8 {
        return Err(Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; 8];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

/// IDm - Newtype Pattern (8 バイト)
///
/// 2-byte manufacturer code followed by a 6-byte card identification number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn manufacturer_code(&self) -> [u8; 2] {
        [self.0[0], self.0[1]]
    }

    pub fn card_identification(&self) -> [u8; 6] {
        [self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7]]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        array8(bytes).map(Self)
    }
}

impl FromStr for Idm {
    type Err = Error;

    /// Parse 16 hex digits, e.g. `"0101 0a10 8e1b ad39"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(&crate::utils::parse_hex(s)?[..])
    }
}

/// PMm - Newtype Pattern (8 バイト)
///
/// 2-byte IC code (ROM type, IC type) followed by 6 bytes of maximum
/// response time parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pmm([u8; 8]);

impl Pmm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn ic_code(&self) -> [u8; 2] {
        [self.0[0], self.0[1]]
    }

    pub fn maximum_response_time(&self) -> [u8; 6] {
        [self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7]]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        array8(bytes).map(Self)
    }
}

/// SystemCode (u16, big endian canonical value)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    pub const ANY: Self = Self(0xffff);
    pub const COMMON: Self = Self(0xfe00);
    /// サイバネ領域 (Suica, ICOCA and other transit cards)
    pub const CYBERNE: Self = Self(0x0003);
    pub const FELICA_LITE: Self = Self(0x88b4);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<u16> for SystemCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// ServiceCode (u16, big endian canonical value)
///
/// Service codes travel little endian on the wire.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    pub const FELICA_LITE_READ_ONLY: Self = Self(0x0b00);
    pub const FELICA_LITE_READ_WRITE: Self = Self(0x0900);
    /// ICOCA / PiTaPa usage history (system 0xFE00), readable without keys.
    pub const TRANSIT_HISTORY: Self = Self(0x1a8b);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<u16> for ServiceCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub const LEN: usize = 16;

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// One usage-history record of an ICOCA / PiTaPa transit card.
///
/// Each record is one 16-byte block of [`ServiceCode::TRANSIT_HISTORY`].
/// Bytes 10..12 hold the remaining balance in yen, little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitHistory {
    block: BlockData,
}

impl TransitHistory {
    const BALANCE_OFFSET: usize = 10;

    pub fn from_block(block: &BlockData) -> Self {
        Self { block: *block }
    }

    /// Remaining balance after this record, in yen.
    pub fn balance(&self) -> u16 {
        let b = self.block.as_bytes();
        u16::from_le_bytes([b[Self::BALANCE_OFFSET], b[Self::BALANCE_OFFSET + 1]])
    }

    pub fn block(&self) -> &BlockData {
        &self.block
    }
}

impl From<BlockData> for TransitHistory {
    fn from(block: BlockData) -> Self {
        Self { block }
    }
}

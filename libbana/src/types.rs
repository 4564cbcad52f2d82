// libbana/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Card technology tag. Discriminants match the wire encoding used by the
/// PollCard response.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// Nothing in the field.
    #[display(fmt = "NONE")]
    None = 0,
    /// ISO14443A / MIFARE family.
    #[display(fmt = "MIFARE")]
    Mifare = 1,
    /// FeliCa (Type F).
    #[display(fmt = "FeliCa")]
    Felica = 2,
    /// ISO15693 vicinity tag.
    #[display(fmt = "15693")]
    Vicinity = 3,
}

impl CardType {
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Mifare),
            2 => Some(Self::Felica),
            3 => Some(Self::Vicinity),
            _ => None,
        }
    }
}

/// Card identifier bytes - Newtype Pattern. Length-tagged over 8 bytes of
/// storage; valid lengths are 4 and 7 (MIFARE-family UIDs) and 8
/// (vicinity UIDs). Triple-size 10-byte UIDs do not fit the record and are
/// not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; 8],
    len: u8,
}

impl Uid {
    /// Number of semantically valid identifier bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The valid identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// First four identifier bytes, as consumed by MIFARE authentication.
    pub fn prefix4(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.bytes[..4]);
        out
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 | 8 => {
                let mut arr = [0u8; 8];
                arr[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: arr,
                    len: bytes.len() as u8,
                })
            }
            len => Err(Error::InvalidUid { len }),
        }
    }
}

impl From<[u8; 4]> for Uid {
    fn from(bytes: [u8; 4]) -> Self {
        let mut arr = [0u8; 8];
        arr[..4].copy_from_slice(&bytes);
        Self { bytes: arr, len: 4 }
    }
}

impl From<[u8; 7]> for Uid {
    fn from(bytes: [u8; 7]) -> Self {
        let mut arr = [0u8; 8];
        arr[..7].copy_from_slice(&bytes);
        Self { bytes: arr, len: 7 }
    }
}

impl From<[u8; 8]> for Uid {
    fn from(bytes: [u8; 8]) -> Self {
        Self { bytes, len: 8 }
    }
}

/// IDm - Newtype Pattern (8 bytes, FeliCa manufacture ID).
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

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// PMm - Newtype Pattern (8 bytes, FeliCa manufacture parameters).
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
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// SystemCode (u16, FeliCa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard system code used when polling for any FeliCa card.
    pub const ANY: Self = Self(0xffff);
    /// Common area system code.
    pub const COMMON: Self = Self(0xfe00);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// FeliCa-native byte order, as carried in the PollCard response.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// MIFARE key slot. The wire byte selects between the two standard key
/// roles (0 = key A, 1 = key B).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeySlot {
    /// Key A (slot 0).
    A = 0,
    /// Key B (slot 1).
    B = 1,
}

impl KeySlot {
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::A),
            1 => Some(Self::B),
            _ => None,
        }
    }
}

/// MIFARE sector key (6 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Transport-configuration key most blank tags ship with.
    pub const FACTORY: Self = Self([0xFF; 6]);

    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidLength {
                expected: 6,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&bytes[..6]);
        Ok(Self(arr))
    }
}

/// BlockData (16 bytes, one MIFARE block).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
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

/// Packed RGB LED color (0x00RRGGBB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedColor(u32);

impl LedColor {
    /// All channels off; the power-on default.
    pub const OFF: Self = Self(0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn new(packed: u32) -> Self {
        Self(packed & 0x00ff_ffff)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }
}

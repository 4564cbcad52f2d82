// libbana/src/protocol/commands/mod.rs

pub mod led;
pub mod mifare;
pub mod polling;
pub mod system;

pub use led::decode_set_led;
pub use mifare::{decode_mifare_auth, decode_mifare_read};
pub use polling::{decode_poll_card, decode_poll_end, decode_poll_start};
pub use system::{decode_get_version, decode_reset};

use crate::types::{KeySlot, LedColor, MifareKey};
use crate::{Error, Result};

/// Wire command codes of the Bana host protocol. The numeric values are
/// an external contract; see `constants.rs` for the framing constants
/// they travel in.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCode {
    /// Begin a polling session; the reader becomes active.
    PollStart = 0x40,
    /// End the polling session.
    PollEnd = 0x41,
    /// Detect the card currently in the field and return its identity.
    PollCard = 0x42,
    /// MIFARE sector authentication.
    MifareAuth = 0x43,
    /// Read one authenticated MIFARE block.
    MifareRead = 0x44,
    /// Liveness check; also drops any session state.
    Reset = 0x62,
    /// Report the firmware version.
    GetVersion = 0x63,
    /// Set the indicator LED color.
    SetLed = 0x81,
}

impl CommandCode {
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x40 => Some(Self::PollStart),
            0x41 => Some(Self::PollEnd),
            0x42 => Some(Self::PollCard),
            0x43 => Some(Self::MifareAuth),
            0x44 => Some(Self::MifareRead),
            0x62 => Some(Self::Reset),
            0x63 => Some(Self::GetVersion),
            0x81 => Some(Self::SetLed),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Parsed host request. New commands are added here with their parser in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Request {
    Reset,
    GetVersion,
    PollStart,
    PollEnd,
    PollCard,
    MifareAuth {
        uid: [u8; 4],
        block: u8,
        key_slot: KeySlot,
        key: MifareKey,
    },
    MifareRead {
        block: u8,
    },
    SetLed {
        color: LedColor,
    },
}

impl Request {
    /// Return the wire command code this request arrived as.
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::Reset => CommandCode::Reset,
            Self::GetVersion => CommandCode::GetVersion,
            Self::PollStart => CommandCode::PollStart,
            Self::PollEnd => CommandCode::PollEnd,
            Self::PollCard => CommandCode::PollCard,
            Self::MifareAuth { .. } => CommandCode::MifareAuth,
            Self::MifareRead { .. } => CommandCode::MifareRead,
            Self::SetLed { .. } => CommandCode::SetLed,
        }
    }

    /// Decode a validated frame's command and payload into a request.
    ///
    /// `Error::UnknownCommand` marks a command code outside the known set;
    /// any other error means the command is known but its parameters are
    /// unusable.
    pub fn decode(command: u8, payload: &[u8]) -> Result<Self> {
        let code = CommandCode::from_u8(command).ok_or(Error::UnknownCommand { command })?;
        match code {
            CommandCode::Reset => decode_reset(payload),
            CommandCode::GetVersion => decode_get_version(payload),
            CommandCode::PollStart => decode_poll_start(payload),
            CommandCode::PollEnd => decode_poll_end(payload),
            CommandCode::PollCard => decode_poll_card(payload),
            CommandCode::MifareAuth => decode_mifare_auth(payload),
            CommandCode::MifareRead => decode_mifare_read(payload),
            CommandCode::SetLed => decode_set_led(payload),
        }
    }
}

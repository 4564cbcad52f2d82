// libbana/src/protocol/responses/mod.rs

pub mod mifare;
pub mod polling;
pub mod system;

pub use mifare::encode_block;
pub use polling::encode_card;
pub use system::{encode_status, encode_version};

use super::commands::CommandCode;
use crate::nfc::Card;
use crate::types::BlockData;

/// Status byte leading every response payload.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Command executed.
    Ok = 0x00,
    /// PollCard found nothing in the field.
    NoCard = 0x01,
    /// MIFARE authentication was rejected or had no session to run in.
    AuthFailed = 0x02,
    /// MIFARE block read failed (unauthenticated session or tag removed).
    ReadFailed = 0x03,
    /// Known command with unusable parameters.
    InvalidParam = 0x04,
}

impl Status {
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Ok),
            0x01 => Some(Self::NoCard),
            0x02 => Some(Self::AuthFailed),
            0x03 => Some(Self::ReadFailed),
            0x04 => Some(Self::InvalidParam),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// High-level response enum. Per-response payload builders live in
/// `protocol::responses::<name>.rs` and are dispatched here. The response
/// frame echoes the request's command code.
#[derive(Debug, Clone)]
pub enum Response {
    /// Bare status acknowledgment for `command`.
    Status {
        command: CommandCode,
        status: Status,
    },
    /// GetVersion reply.
    Version { major: u8, minor: u8 },
    /// PollCard reply carrying a found card's identity.
    Card { card: Card },
    /// MifareRead reply carrying one block.
    Block { data: BlockData },
}

impl Response {
    /// The command code echoed in the response frame header.
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::Status { command, .. } => *command,
            Self::Version { .. } => CommandCode::GetVersion,
            Self::Card { .. } => CommandCode::PollCard,
            Self::Block { .. } => CommandCode::MifareRead,
        }
    }

    /// Encode the response payload (status byte first).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Status { status, .. } => encode_status(*status),
            Self::Version { major, minor } => encode_version(*major, *minor),
            Self::Card { card } => encode_card(card),
            Self::Block { data } => encode_block(data),
        }
    }
}

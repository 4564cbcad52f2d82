// libbana/src/protocol/commands/mifare.rs

use super::Request;
use crate::protocol::parser;
use crate::types::KeySlot;
use crate::{Error, Result};

/// Decode a MifareAuth request (0x43).
/// Payload layout: [uid(4)] [block(1)] [key_slot(1)] [key(6)]
pub fn decode_mifare_auth(payload: &[u8]) -> Result<Request> {
    let uid = parser::uid4_at(payload, 0)?;
    let block = parser::byte_at(payload, 4)?;
    let slot_raw = parser::byte_at(payload, 5)?;
    let key_slot = KeySlot::from_u8(slot_raw)
        .ok_or_else(|| Error::FrameFormat(format!("bad key slot {:#04x}", slot_raw)))?;
    let key = parser::mifare_key_at(payload, 6)?;
    Ok(Request::MifareAuth {
        uid,
        block,
        key_slot,
        key,
    })
}

/// Decode a MifareRead request (0x44).
/// Payload layout: [block(1)]
pub fn decode_mifare_read(payload: &[u8]) -> Result<Request> {
    let block = parser::byte_at(payload, 0)?;
    Ok(Request::MifareRead { block })
}

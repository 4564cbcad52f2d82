// libbana/src/protocol/responses/mifare.rs

use super::Status;
use crate::types::BlockData;

/// Encode a MifareRead success payload.
/// Layout: [status] [data(16)]
pub fn encode_block(data: &BlockData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 16);
    buf.push(Status::Ok.as_u8());
    buf.extend_from_slice(data.as_bytes());
    buf
}

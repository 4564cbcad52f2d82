// libbana/src/protocol/commands/polling.rs

use super::Request;
use crate::Result;

/// Decode a PollStart request (0x40). Carries no parameters; payload
/// bytes, if any, are ignored.
pub fn decode_poll_start(_payload: &[u8]) -> Result<Request> {
    Ok(Request::PollStart)
}

/// Decode a PollEnd request (0x41). No parameters.
pub fn decode_poll_end(_payload: &[u8]) -> Result<Request> {
    Ok(Request::PollEnd)
}

/// Decode a PollCard request (0x42). No parameters.
pub fn decode_poll_card(_payload: &[u8]) -> Result<Request> {
    Ok(Request::PollCard)
}

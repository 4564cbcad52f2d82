// libbana/src/protocol/commands/system.rs

use super::Request;
use crate::Result;

/// Decode a Reset request (0x62). No parameters.
pub fn decode_reset(_payload: &[u8]) -> Result<Request> {
    Ok(Request::Reset)
}

/// Decode a GetVersion request (0x63). No parameters.
pub fn decode_get_version(_payload: &[u8]) -> Result<Request> {
    Ok(Request::GetVersion)
}

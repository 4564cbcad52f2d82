// libbana/src/protocol/responses/system.rs

use super::Status;

/// Encode a bare status acknowledgment payload.
pub fn encode_status(status: Status) -> Vec<u8> {
    vec![status.as_u8()]
}

/// Encode a GetVersion payload.
/// Layout: [status] [major] [minor]
pub fn encode_version(major: u8, minor: u8) -> Vec<u8> {
    vec![Status::Ok.as_u8(), major, minor]
}

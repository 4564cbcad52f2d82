// libbana/src/protocol/commands/led.rs

use super::Request;
use crate::protocol::parser;
use crate::types::LedColor;
use crate::Result;

/// Decode a SetLed request (0x81).
/// Payload layout: [r(1)] [g(1)] [b(1)]; trailing bytes are ignored.
pub fn decode_set_led(payload: &[u8]) -> Result<Request> {
    parser::ensure_len(payload, 3)?;
    Ok(Request::SetLed {
        color: LedColor::from_rgb(payload[0], payload[1], payload[2]),
    })
}

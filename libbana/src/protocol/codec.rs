// libbana/src/protocol/codec.rs

use crate::Result;

use super::commands::Request;
use super::frame::Frame;
use super::responses::Response;

/// Encode a Response into a full wire frame (sync + command echo + length
/// + payload + checksum).
pub fn encode_response_frame(response: &Response) -> Result<Vec<u8>> {
    let frame = Frame::new(response.command_code().as_u8(), response.encode())?;
    Ok(frame.encode())
}

/// Parse the Request contained in a validated frame.
pub fn decode_request_frame(frame: &Frame) -> Result<Request> {
    Request::decode(frame.command, &frame.payload)
}

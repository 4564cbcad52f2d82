// libbana/src/protocol/frame.rs

use crate::constants::{BANA_MAX_PAYLOAD_LEN, BANA_MIN_FRAME_LEN, BANA_SYNC};
use crate::protocol::checksum::frame_checksum;
use crate::{Error, Result};

/// Bana frame helper. Provides encode/decode of the wire frame.
/// Format: [Sync(1)] [Command(1)] [Len(1)] [Payload(n)] [Checksum(1)]
/// Sync: 0xE0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command code (request) or command echo (response).
    pub command: u8,
    /// Opaque payload bytes.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Build a frame, validating the payload length against the wire limit.
    pub fn new(command: u8, payload: Vec<u8>) -> Result<Self> {
        if payload.len() > BANA_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: BANA_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        Ok(Self { command, payload })
    }

    /// Encode into a full wire frame.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BANA_MIN_FRAME_LEN + self.payload.len());
        out.push(BANA_SYNC);
        out.push(self.command);
        out.push(self.payload.len() as u8);
        out.extend_from_slice(&self.payload);
        out.push(frame_checksum(self.command, &self.payload));
        out
    }

    /// Decode a complete wire frame buffer.
    pub fn decode(raw: &[u8]) -> Result<Frame> {
        if raw.len() < BANA_MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: BANA_MIN_FRAME_LEN,
                actual: raw.len(),
            });
        }

        if raw[0] != BANA_SYNC {
            return Err(Error::FrameFormat("invalid sync marker".into()));
        }

        let command = raw[1];
        let len = raw[2] as usize;
        if len > BANA_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: BANA_MAX_PAYLOAD_LEN,
                actual: len,
            });
        }

        let required_len = BANA_MIN_FRAME_LEN + len;
        if raw.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: raw.len(),
            });
        }

        let payload = &raw[3..3 + len];
        let expected = frame_checksum(command, payload);
        let actual = raw[3 + len];
        if actual != expected {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        Ok(Frame {
            command,
            payload: payload.to_vec(),
        })
    }
}

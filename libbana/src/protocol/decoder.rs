// libbana/src/protocol/decoder.rs

//! Byte-at-a-time frame reassembly.
//!
//! The host link is a raw serial stream: bytes may arrive partial,
//! corrupted, or interleaved with another protocol's traffic. The decoder
//! consumes one byte per call and never fails hard; anything that does not
//! fit the frame grammar drops it back to idle, resynchronizing on the
//! next sync marker.

use crate::constants::{BANA_MAX_PAYLOAD_LEN, BANA_SYNC};
use crate::protocol::checksum::frame_checksum;
use crate::protocol::frame::Frame;

/// Outcome of feeding one byte into the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Push {
    /// Byte is not part of a recognizable frame; decoder stays idle.
    Rejected,
    /// Byte consumed, frame still in progress.
    Consumed,
    /// Byte completed a frame that validated.
    Complete(Frame),
    /// Byte completed a frame whose checksum did not validate; the frame
    /// is dropped.
    Invalid {
        /// Checksum computed over the received frame body.
        expected: u8,
        /// Checksum byte received on the wire.
        actual: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Command,
    Length,
    Payload,
    Checksum,
}

/// Frame reassembly state machine. One instance per host link; owned by
/// the dispatcher, never shared.
#[derive(Debug)]
pub struct FrameDecoder {
    phase: Phase,
    command: u8,
    expected_len: usize,
    payload: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            command: 0,
            expected_len: 0,
            payload: Vec::with_capacity(BANA_MAX_PAYLOAD_LEN),
        }
    }

    /// Drop any in-progress frame and return to idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.command = 0;
        self.expected_len = 0;
        self.payload.clear();
    }

    /// Whether the decoder is between frames.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Feed one byte. See [`Push`] for the possible outcomes.
    pub fn push(&mut self, byte: u8) -> Push {
        match self.phase {
            Phase::Idle => {
                if byte == BANA_SYNC {
                    self.phase = Phase::Command;
                    Push::Consumed
                } else {
                    Push::Rejected
                }
            }
            Phase::Command => {
                self.command = byte;
                self.phase = Phase::Length;
                Push::Consumed
            }
            Phase::Length => {
                let len = byte as usize;
                if len > BANA_MAX_PAYLOAD_LEN {
                    // Malformed length: no partial recovery, drop the frame.
                    self.reset();
                    return Push::Rejected;
                }
                self.expected_len = len;
                self.payload.clear();
                self.phase = if len == 0 {
                    Phase::Checksum
                } else {
                    Phase::Payload
                };
                Push::Consumed
            }
            Phase::Payload => {
                // Any byte value is valid payload, sync marker included.
                self.payload.push(byte);
                if self.payload.len() == self.expected_len {
                    self.phase = Phase::Checksum;
                }
                Push::Consumed
            }
            Phase::Checksum => {
                let expected = frame_checksum(self.command, &self.payload);
                let frame = Frame {
                    command: self.command,
                    payload: std::mem::take(&mut self.payload),
                };
                self.reset();
                if byte == expected {
                    Push::Complete(frame)
                } else {
                    Push::Invalid {
                        expected,
                        actual: byte,
                    }
                }
            }
        }
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

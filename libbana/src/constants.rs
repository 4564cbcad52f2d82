// libbana/src/constants.rs
//! Protocol and timing constants used across the crate.
//!
//! The wire constants are an external contract with the host software and
//! must be kept bit-exact; they live here as the single point of change.

/// Bana wire frame sync marker.
pub const BANA_SYNC: u8 = 0xE0;

/// Maximum payload length a frame may declare. A length byte above this
/// aborts the frame.
pub const BANA_MAX_PAYLOAD_LEN: usize = 64;

/// Fixed per-frame overhead in bytes: sync + command + length + checksum.
pub const BANA_FRAME_OVERHEAD: usize = 4;

/// Minimal wire frame length (empty payload).
pub const BANA_MIN_FRAME_LEN: usize = BANA_FRAME_OVERHEAD;

/// Firmware version reported by GetVersion.
pub const FIRMWARE_VERSION_MAJOR: u8 = 1;
/// Firmware version reported by GetVersion.
pub const FIRMWARE_VERSION_MINOR: u8 = 0;

/// Per-technology detection windows in milliseconds. Detection polls each
/// technology once per attempt, so a full empty-field sweep is bounded by
/// the sum of these.
pub const MIFARE_POLL_TIMEOUT_MS: u64 = 200;
/// FeliCa detection window.
pub const FELICA_POLL_TIMEOUT_MS: u64 = 200;
/// ISO15693 inventory window.
pub const VICINITY_POLL_TIMEOUT_MS: u64 = 200;

// libbana/src/transport/traits.rs

use crate::transport::config::BusConfig;
use crate::types::{BlockData, Idm, KeySlot, MifareKey, Pmm, SystemCode, Uid};
use crate::Result;

/// Result of a successful FeliCa probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FelicaTarget {
    pub idm: Idm,
    pub pmm: Pmm,
    pub system_code: SystemCode,
}

/// RfTransport abstracts the RF front-end away from the card layer. One
/// implementation per module family (PN532 over I2C, PN5180 over SPI,
/// mock for tests); all probes are bounded by the caller-supplied timeout
/// and must not block past it.
pub trait RfTransport {
    /// Bind the bus handle and pin assignment before first use. Default
    /// implementation accepts any configuration so transports with a
    /// fixed attachment keep working.
    fn bind(&mut self, config: &BusConfig) -> Result<()> {
        let _ = config;
        Ok(())
    }

    /// Turn the RF field on or off.
    fn set_field(&mut self, on: bool) -> Result<()>;

    /// Probe for an ISO14443A (MIFARE-family) tag and return its UID.
    /// `Ok(None)` means nothing answered inside the window.
    fn poll_mifare(&mut self, timeout_ms: u64) -> Result<Option<Uid>>;

    /// Probe for a FeliCa tag under the given system code.
    fn poll_felica(
        &mut self,
        system_code: SystemCode,
        timeout_ms: u64,
    ) -> Result<Option<FelicaTarget>>;

    /// Inventory an ISO15693 vicinity tag and return its UID.
    fn poll_vicinity(&mut self, timeout_ms: u64) -> Result<Option<Uid>>;

    /// MIFARE sector authentication for `block`. `Ok(false)` means the
    /// key was rejected by the tag; `Err` is a bus-level fault.
    fn mifare_auth(
        &mut self,
        uid: &[u8; 4],
        block: u8,
        key_slot: KeySlot,
        key: &MifareKey,
    ) -> Result<bool>;

    /// Read one 16-byte block from the currently authenticated sector.
    fn mifare_read(&mut self, block: u8) -> Result<BlockData>;

    /// Name of the RF module behind this transport.
    fn module_name(&self) -> &'static str {
        "UNKNOWN"
    }
}

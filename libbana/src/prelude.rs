// libbana/src/prelude.rs

pub use crate::bana::{Bana, ByteSink, ReaderState};
pub use crate::nfc::{Card, Nfc};
pub use crate::protocol::{CommandCode, Frame, FrameDecoder, Push, Request, Response, Status};
pub use crate::transport::{BusConfig, FelicaTarget, I2cConfig, MockRf, RfTransport, SpiConfig};
pub use crate::{
    BlockData, CardType, Error, Idm, KeySlot, LedColor, MifareKey, Pmm, Result, SystemCode, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};

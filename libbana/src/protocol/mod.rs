// libbana/src/protocol/mod.rs

//! Bana host protocol: wire framing, byte-fed decoding, request parsing
//! and response encoding. The encode and decode paths share the checksum
//! algorithm and field layout in [`checksum`] and [`frame`].

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod decoder;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::{CommandCode, Request};
pub use decoder::{FrameDecoder, Push};
pub use frame::Frame;
pub use responses::{Response, Status};

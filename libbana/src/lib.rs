// libbana/src/lib.rs

//! libbana
//!
//! Pure Rust core for Bandai Namco contactless card reader emulation.
//!
//! The crate implements the "Bana" host protocol (a byte-oriented framed
//! serial protocol) on top of a multi-technology card abstraction layer
//! (MIFARE, FeliCa, ISO15693 vicinity tags). Host bytes are fed one at a
//! time into [`bana::Bana::feed`]; responses are emitted synchronously
//! through an injected [`bana::ByteSink`].
#![warn(missing_docs)]

pub mod bana;
pub mod constants;
pub mod error;
pub mod nfc;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

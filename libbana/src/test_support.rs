//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock wiring so tests across the crate
//! and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::bana::{Bana, ByteSink};
use crate::nfc::Nfc;
use crate::transport::config::BusConfig;
use crate::transport::mock::MockRf;
use crate::transport::traits::{FelicaTarget, RfTransport};
use crate::types::{BlockData, KeySlot, MifareKey, SystemCode, Uid};
use crate::Result;

/// Shared handle over a [`MockRf`] so a test keeps access to the mock
/// after a `Bana`/`Nfc` instance has taken ownership of the transport.
#[derive(Clone, Default)]
pub struct SharedRf(pub Rc<RefCell<MockRf>>);

impl SharedRf {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RfTransport for SharedRf {
    fn bind(&mut self, config: &BusConfig) -> Result<()> {
        self.0.borrow_mut().bind(config)
    }

    fn set_field(&mut self, on: bool) -> Result<()> {
        self.0.borrow_mut().set_field(on)
    }

    fn poll_mifare(&mut self, timeout_ms: u64) -> Result<Option<Uid>> {
        self.0.borrow_mut().poll_mifare(timeout_ms)
    }

    fn poll_felica(
        &mut self,
        system_code: SystemCode,
        timeout_ms: u64,
    ) -> Result<Option<FelicaTarget>> {
        self.0.borrow_mut().poll_felica(system_code, timeout_ms)
    }

    fn poll_vicinity(&mut self, timeout_ms: u64) -> Result<Option<Uid>> {
        self.0.borrow_mut().poll_vicinity(timeout_ms)
    }

    fn mifare_auth(
        &mut self,
        uid: &[u8; 4],
        block: u8,
        key_slot: KeySlot,
        key: &MifareKey,
    ) -> Result<bool> {
        self.0.borrow_mut().mifare_auth(uid, block, key_slot, key)
    }

    fn mifare_read(&mut self, block: u8) -> Result<BlockData> {
        self.0.borrow_mut().mifare_read(block)
    }

    fn module_name(&self) -> &'static str {
        "MOCK"
    }
}

/// Shared byte buffer collecting everything a `Bana` instance emits.
pub type SinkBuf = Rc<RefCell<Vec<u8>>>;

/// Build a sink backed by a shared buffer; the returned handle stays
/// readable after the closure is moved into `Bana`.
pub fn vec_sink() -> (SinkBuf, impl FnMut(u8)) {
    let buf: SinkBuf = Rc::new(RefCell::new(Vec::new()));
    let handle = buf.clone();
    (buf, move |byte| handle.borrow_mut().push(byte))
}

/// A `Bana` instance wired to a shared mock front-end and a byte buffer
/// sink, with handles on both.
pub fn bana_with_mock() -> (Bana<impl ByteSink>, SharedRf, SinkBuf) {
    let rf = SharedRf::new();
    let (buf, sink) = vec_sink();
    let bana = Bana::new(Nfc::new(Box::new(rf.clone())), sink);
    (bana, rf, buf)
}

/// Feed every byte and return how many were accepted.
pub fn feed_all<S: ByteSink>(bana: &mut Bana<S>, bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| bana.feed(b)).count()
}

// libbana/src/transport/mock.rs

use crate::transport::config::BusConfig;
use crate::transport::traits::{FelicaTarget, RfTransport};
use crate::types::{BlockData, KeySlot, MifareKey, SystemCode, Uid};
use crate::{Error, Result};

/// Scriptable MIFARE tag for the mock front-end.
#[derive(Debug, Clone)]
pub struct MockMifare {
    pub uid: Uid,
    pub key_a: MifareKey,
    pub key_b: MifareKey,
    /// Readable blocks as (block id, data) pairs.
    pub blocks: Vec<(u8, BlockData)>,
}

impl MockMifare {
    /// Tag with factory keys in both slots and no readable blocks.
    pub fn with_factory_keys(uid: Uid) -> Self {
        Self {
            uid,
            key_a: MifareKey::FACTORY,
            key_b: MifareKey::FACTORY,
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: u8, data: BlockData) -> Self {
        self.blocks.push((block, data));
        self
    }

    fn key_for(&self, slot: KeySlot) -> &MifareKey {
        match slot {
            KeySlot::A => &self.key_a,
            KeySlot::B => &self.key_b,
        }
    }
}

/// One tag sitting in the mock's field.
#[derive(Debug, Clone)]
pub enum MockTag {
    Mifare(MockMifare),
    Felica(FelicaTarget),
    Vicinity(Uid),
}

/// Mock RF front-end for unit tests. It records every operation and
/// serves probes from the single tag currently placed in the field.
#[derive(Debug, Default)]
pub struct MockRf {
    /// Tag currently in the field, if any.
    pub tag: Option<MockTag>,
    /// RF field state as last commanded.
    pub field_on: bool,
    /// Bound bus configuration, if any.
    pub bound: Option<BusConfig>,
    /// Recorded operation names for assertions.
    pub ops: Vec<String>,
    /// Testing hook: number of upcoming calls that should fail with a bus
    /// error.
    pub bus_failures: usize,
}

impl MockRf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a tag in the field.
    pub fn insert(&mut self, tag: MockTag) {
        self.tag = Some(tag);
    }

    /// Remove whatever tag is in the field.
    pub fn remove(&mut self) {
        self.tag = None;
    }

    /// Set how many subsequent operations should fail (for tests).
    pub fn set_bus_failures(&mut self, n: usize) {
        self.bus_failures = n;
    }

    fn touch(&mut self, op: &str) -> Result<()> {
        self.ops.push(op.to_string());
        if self.bus_failures > 0 {
            self.bus_failures -= 1;
            return Err(Error::Bus(format!("injected failure in {}", op)));
        }
        Ok(())
    }
}

impl RfTransport for MockRf {
    fn bind(&mut self, config: &BusConfig) -> Result<()> {
        self.touch("bind")?;
        self.bound = Some(*config);
        Ok(())
    }

    fn set_field(&mut self, on: bool) -> Result<()> {
        self.touch(if on { "field_on" } else { "field_off" })?;
        self.field_on = on;
        Ok(())
    }

    fn poll_mifare(&mut self, _timeout_ms: u64) -> Result<Option<Uid>> {
        self.touch("poll_mifare")?;
        match &self.tag {
            Some(MockTag::Mifare(m)) => Ok(Some(m.uid)),
            _ => Ok(None),
        }
    }

    fn poll_felica(
        &mut self,
        system_code: SystemCode,
        _timeout_ms: u64,
    ) -> Result<Option<FelicaTarget>> {
        self.touch("poll_felica")?;
        match &self.tag {
            Some(MockTag::Felica(t))
                if system_code == SystemCode::ANY || system_code == t.system_code =>
            {
                Ok(Some(*t))
            }
            _ => Ok(None),
        }
    }

    fn poll_vicinity(&mut self, _timeout_ms: u64) -> Result<Option<Uid>> {
        self.touch("poll_vicinity")?;
        match &self.tag {
            Some(MockTag::Vicinity(uid)) => Ok(Some(*uid)),
            _ => Ok(None),
        }
    }

    fn mifare_auth(
        &mut self,
        uid: &[u8; 4],
        _block: u8,
        key_slot: KeySlot,
        key: &MifareKey,
    ) -> Result<bool> {
        self.touch("mifare_auth")?;
        match &self.tag {
            Some(MockTag::Mifare(m)) => {
                Ok(m.uid.prefix4() == *uid && m.key_for(key_slot) == key)
            }
            _ => Ok(false),
        }
    }

    fn mifare_read(&mut self, block: u8) -> Result<BlockData> {
        self.touch("mifare_read")?;
        match &self.tag {
            Some(MockTag::Mifare(m)) => m
                .blocks
                .iter()
                .find(|(id, _)| *id == block)
                .map(|(_, data)| *data)
                .ok_or_else(|| Error::Bus(format!("no data scripted for block {}", block))),
            _ => Err(Error::NoCard),
        }
    }

    fn module_name(&self) -> &'static str {
        "MOCK"
    }
}

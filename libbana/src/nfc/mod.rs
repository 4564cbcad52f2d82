// libbana/src/nfc/mod.rs

//! Card abstraction layer: one bounded detection sweep across all
//! supported technologies, normalized into a [`Card`] record, plus
//! MIFARE block operations tied to a detection session.

mod card;
pub use card::Card;

use log::{debug, warn};

use crate::constants::{
    FELICA_POLL_TIMEOUT_MS, MIFARE_POLL_TIMEOUT_MS, VICINITY_POLL_TIMEOUT_MS,
};
use crate::transport::RfTransport;
use crate::types::{BlockData, KeySlot, MifareKey, SystemCode, Uid};
use crate::{Error, Result};

/// MIFARE session opened by detection, keyed by the tag's UID. Block
/// operations only run inside an authenticated session.
#[derive(Debug, Clone, Copy)]
struct MifareSession {
    uid: Uid,
    authenticated: bool,
}

/// Multi-technology card layer over one RF front-end. There is exactly
/// one execution context, so the front-end is owned rather than locked.
pub struct Nfc {
    rf: Box<dyn RfTransport>,
    session: Option<MifareSession>,
}

impl Nfc {
    pub fn new(rf: Box<dyn RfTransport>) -> Self {
        Self { rf, session: None }
    }

    /// Name of the RF module behind the transport.
    pub fn module_name(&self) -> &'static str {
        self.rf.module_name()
    }

    /// Turn the RF field on or off. Logically infallible; a transport
    /// fault is logged and swallowed. Field off drops any MIFARE session.
    pub fn rf_field(&mut self, on: bool) {
        if let Err(e) = self.rf.set_field(on) {
            warn!("rf field {}: {}", if on { "on" } else { "off" }, e);
        }
        if !on {
            self.session = None;
        }
    }

    /// One detection attempt across all supported technologies, in the
    /// fixed order MIFARE, FeliCa, vicinity. Returns the first responder
    /// or [`Card::None`]; each probe is bounded by its technology's
    /// timeout, so the whole sweep is bounded too.
    pub fn detect_card(&mut self) -> Card {
        let card = self.probe();
        self.session = match card {
            // Re-detecting the same tag keeps its authentication state.
            Card::Mifare { uid } => match self.session {
                Some(s) if s.uid == uid => Some(s),
                _ => Some(MifareSession {
                    uid,
                    authenticated: false,
                }),
            },
            _ => None,
        };
        card
    }

    fn probe(&mut self) -> Card {
        // A probe that fails mid-exchange is transient RF noise, not an
        // error: fall through to the next technology.
        match self.rf.poll_mifare(MIFARE_POLL_TIMEOUT_MS) {
            Ok(Some(uid)) => return Card::Mifare { uid },
            Ok(None) => {}
            Err(e) => debug!("mifare probe: {}", e),
        }
        match self.rf.poll_felica(SystemCode::ANY, FELICA_POLL_TIMEOUT_MS) {
            Ok(Some(t)) => {
                return Card::Felica {
                    idm: t.idm,
                    pmm: t.pmm,
                    system_code: t.system_code,
                };
            }
            Ok(None) => {}
            Err(e) => debug!("felica probe: {}", e),
        }
        match self.rf.poll_vicinity(VICINITY_POLL_TIMEOUT_MS) {
            Ok(Some(uid)) => return Card::Vicinity { uid },
            Ok(None) => {}
            Err(e) => debug!("vicinity probe: {}", e),
        }
        Card::None
    }

    /// MIFARE sector authentication against the tag found by the last
    /// `detect_card`. A stale or mismatched `uid` fails without touching
    /// the transport; a bus fault reads as an authentication failure.
    pub fn mifare_auth(&mut self, uid: [u8; 4], block: u8, key_slot: KeySlot, key: &MifareKey) -> bool {
        let Some(session) = self.session.as_mut() else {
            debug!("mifare auth without a detected tag");
            return false;
        };
        if session.uid.prefix4() != uid {
            debug!("mifare auth uid does not match the detected tag");
            return false;
        }
        match self.rf.mifare_auth(&uid, block, key_slot, key) {
            Ok(true) => {
                session.authenticated = true;
                true
            }
            Ok(false) => {
                session.authenticated = false;
                false
            }
            Err(e) => {
                debug!("mifare auth: {}", e);
                session.authenticated = false;
                false
            }
        }
    }

    /// Read one 16-byte block. Requires a prior successful `mifare_auth`
    /// in the current detection session.
    pub fn mifare_read(&mut self, block: u8) -> Result<BlockData> {
        match self.session {
            Some(s) if s.authenticated => self.rf.mifare_read(block),
            Some(_) => Err(Error::NotAuthenticated),
            None => Err(Error::NoCard),
        }
    }
}

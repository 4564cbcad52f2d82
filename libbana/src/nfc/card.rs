// libbana/src/nfc/card.rs

use std::fmt;

use crate::types::{CardType, Idm, Pmm, SystemCode, Uid};

/// One detected card, normalized across technologies. Produced fresh on
/// every detection poll; owned transiently by the caller.
///
/// The identifier bytes mean different things per variant (UID for
/// MIFARE/vicinity, IDm for FeliCa); [`Card::id_bytes`] exposes them
/// uniformly without committing to either name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    /// Nothing responded within the detection window.
    None,
    Mifare {
        uid: Uid,
    },
    Felica {
        idm: Idm,
        pmm: Pmm,
        system_code: SystemCode,
    },
    Vicinity {
        uid: Uid,
    },
}

impl Card {
    pub fn card_type(&self) -> CardType {
        match self {
            Self::None => CardType::None,
            Self::Mifare { .. } => CardType::Mifare,
            Self::Felica { .. } => CardType::Felica,
            Self::Vicinity { .. } => CardType::Vicinity,
        }
    }

    /// Identifier bytes; meaning is technology-dependent. Empty for
    /// `Card::None`.
    pub fn id_bytes(&self) -> &[u8] {
        match self {
            Self::None => &[],
            Self::Mifare { uid } | Self::Vicinity { uid } => uid.as_bytes(),
            Self::Felica { idm, .. } => idm.as_bytes(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no card"),
            Self::Mifare { uid } => write!(f, "{} uid={}", self.card_type(), uid.to_hex()),
            Self::Felica {
                idm, system_code, ..
            } => write!(
                f,
                "{} idm={} sys={:04x}",
                self.card_type(),
                idm.to_hex(),
                system_code.as_u16()
            ),
            Self::Vicinity { uid } => write!(f, "{} uid={}", self.card_type(), uid.to_hex()),
        }
    }
}

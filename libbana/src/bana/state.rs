// libbana/src/bana/state.rs

use crate::types::LedColor;

/// Externally observable reader state. Mutated only by command dispatch;
/// external collaborators (LED driver, activity indicator) only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderState {
    /// Whether the host currently has a polling session open.
    pub active: bool,
    /// Last commanded indicator color.
    pub led_color: LedColor,
}

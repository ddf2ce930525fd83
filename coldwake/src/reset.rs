//! Reset classification.

use crate::consts::RESETREAS_OFF_WAKE;
use crate::icd::ResetCause;

/// Reduce a raw reset-reason word to the one distinction the sequencer
/// cares about.
///
/// Total by construction: any bit pattern without the shutdown-wake bit
/// is `Other`, never an error. The register itself is read exactly once
/// at boot, by the hardware layer, and the word is passed in here.
pub fn classify(raw: u32) -> ResetCause {
    if raw & RESETREAS_OFF_WAKE != 0 {
        ResetCause::WokeFromShutdown
    } else {
        ResetCause::Other
    }
}

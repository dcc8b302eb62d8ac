//! Advisory per-cell hints strategies attach to a proposed shot.
//!
//! Hints exist for external rendering only and never feed back into shot
//! selection.

use alloc::collections::BTreeMap;

use crate::coords::Coords;
use crate::grid::Score;

/// Hint payload for one cell. The flags say which fields carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintData {
    pub has_number: bool,
    pub has_color: bool,
    pub number: Score,
    pub color: u8,
}

impl HintData {
    pub fn colored(color: u8) -> Self {
        Self {
            has_color: true,
            color,
            ..Self::default()
        }
    }

    pub fn numbered(number: Score) -> Self {
        Self {
            has_number: true,
            number,
            ..Self::default()
        }
    }

    pub fn colored_and_numbered(color: u8, number: Score) -> Self {
        Self {
            has_number: true,
            has_color: true,
            number,
            color,
        }
    }
}

/// Per-turn hint map keyed by cell.
pub type ShotHints = BTreeMap<Coords, HintData>;

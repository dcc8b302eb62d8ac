//! Deterministic tiered sieve probing.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::StepError;
use crate::config::FIELD_SIZE;
use crate::coords::Coords;
use crate::game::TurnState;
use crate::hints::{HintData, ShotHints};
use crate::strategy::ShotPolicy;
use crate::tracker::{TargetCell, TargetField};

/// Offsets between the sieve diagonals.
const DIAGONAL_STRIDE: usize = 3;

/// Probes the cells of a diagonal sieve before anything else gets a say.
///
/// The sieve walks both diagonals at offsets 0, 3, 6, 9; sieve cells where
/// `(x + y + offset) % 4 == 0` form the first tier and the rest the second,
/// so together the tiers cross every ship placement of size two and up early
/// in the game. The tier lists are built once per game; entries resolved
/// through other policies are discarded lazily when drawn. Cells off the
/// sieve are never enrolled — once the tiers run dry the policy abstains and
/// leaves them to the rest of the chain.
pub struct FieldMaskPolicy {
    tiers: [Vec<Coords>; 3],
}

impl FieldMaskPolicy {
    pub fn new() -> Self {
        // the stride-3/mod-4 sieve fills only the first two tiers; the third
        // slot exists for sieves that split coarser
        let mut tiers: [Vec<Coords>; 3] = Default::default();
        let mut offset = 0;
        while offset < FIELD_SIZE {
            for x in offset..FIELD_SIZE {
                Self::enroll(&mut tiers, Coords::at(x, x - offset), offset);
                if offset != 0 {
                    Self::enroll(&mut tiers, Coords::at(x - offset, x), offset);
                }
            }
            offset += DIAGONAL_STRIDE;
        }
        Self { tiers }
    }

    fn enroll(tiers: &mut [Vec<Coords>; 3], coords: Coords, offset: usize) {
        if (coords.x() + coords.y() + offset) % 4 == 0 {
            tiers[0].push(coords);
        } else {
            tiers[1].push(coords);
        }
    }

    /// Remaining entries per tier, stale ones included.
    pub fn tier_sizes(&self) -> [usize; 3] {
        [self.tiers[0].len(), self.tiers[1].len(), self.tiers[2].len()]
    }
}

impl Default for FieldMaskPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotPolicy for FieldMaskPolicy {
    fn name(&self) -> &'static str {
        "field-mask"
    }

    fn propose(
        &mut self,
        _state: &TurnState,
        target: &TargetField,
        rng: &mut SmallRng,
        mut hints: Option<&mut ShotHints>,
    ) -> Result<Option<Coords>, StepError> {
        loop {
            let Some(ti) = self.tiers.iter().position(|tier| !tier.is_empty()) else {
                return Ok(None);
            };
            let tier = &mut self.tiers[ti];
            let i = rng.random_range(0..tier.len());
            let coords = tier[i];
            if target.grid().get(coords) == TargetCell::Unknown {
                if let Some(hints) = hints.as_deref_mut() {
                    for &c in tier.iter() {
                        hints.insert(c, HintData::colored(ti as u8 + 1));
                    }
                }
                return Ok(Some(coords));
            }
            // stale entry: the cell was resolved through another path
            tier.swap_remove(i);
        }
    }

    fn fresh(&self) -> Box<dyn ShotPolicy> {
        Box::new(FieldMaskPolicy::new())
    }
}

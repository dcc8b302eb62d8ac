//! Random probing with a dense/sparse crossover.

use alloc::boxed::Box;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::StepError;
use crate::config::FIELD_SIZE;
use crate::coords::Coords;
use crate::game::TurnState;
use crate::hints::ShotHints;
use crate::strategy::ShotPolicy;
use crate::tracker::{TargetCell, TargetField};

/// While Unknown cells are plentiful, sampling a random cell and rejecting
/// resolved ones beats scanning the whole grid; once they thin out, the
/// policy enumerates them instead, so neither phase can spin unboundedly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ShotPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn propose(
        &mut self,
        state: &TurnState,
        target: &TargetField,
        rng: &mut SmallRng,
        _hints: Option<&mut ShotHints>,
    ) -> Result<Option<Coords>, StepError> {
        if (state.turn as usize) < FIELD_SIZE * FIELD_SIZE / 2 {
            let max_tries = 5 * FIELD_SIZE * FIELD_SIZE;
            for _ in 0..max_tries {
                let coords = Coords::at(
                    rng.random_range(0..FIELD_SIZE),
                    rng.random_range(0..FIELD_SIZE),
                );
                if target.grid().get(coords) == TargetCell::Unknown {
                    return Ok(Some(coords));
                }
            }
            // could not hit an Unknown cell within the bound; hand over to
            // the next stage instead of spinning
            return Ok(None);
        }

        let unknown = target.unknown_cells();
        if unknown.is_empty() {
            return Err(StepError::failure("no unknown cells remain on the field"));
        }
        Ok(Some(unknown[rng.random_range(0..unknown.len())]))
    }

    fn fresh(&self) -> Box<dyn ShotPolicy> {
        Box::new(*self)
    }
}

//! Baseline policy: the first Unknown cell in scan order.

use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::common::StepError;
use crate::coords::Coords;
use crate::game::TurnState;
use crate::hints::ShotHints;
use crate::strategy::ShotPolicy;
use crate::tracker::TargetField;

/// The chain terminus. A field with no Unknown cells left means the caller
/// kept shooting after the fleet was gone, which is a Failure rather than an
/// abstention.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyPolicy;

impl DummyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ShotPolicy for DummyPolicy {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn propose(
        &mut self,
        _state: &TurnState,
        target: &TargetField,
        _rng: &mut SmallRng,
        _hints: Option<&mut ShotHints>,
    ) -> Result<Option<Coords>, StepError> {
        match target.first_unknown() {
            Some(coords) => Ok(Some(coords)),
            None => Err(StepError::failure("no unknown cells remain on the field")),
        }
    }

    fn fresh(&self) -> Box<dyn ShotPolicy> {
        Box::new(*self)
    }
}

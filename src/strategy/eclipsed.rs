//! Density-driven probing over the eclipse score map.

use alloc::boxed::Box;
use alloc::vec::Vec;

use libm::ceilf;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::StepError;
use crate::config::FIELD_SIZE;
use crate::coords::Coords;
use crate::game::TurnState;
use crate::grid::{Score, ScoreMap};
use crate::hints::{HintData, ShotHints};
use crate::params::{CustomParams, ParamsError};
use crate::score::combined_scores;
use crate::strategy::ShotPolicy;
use crate::tracker::TargetField;

/// Default fraction of the score range treated as "good enough".
pub const DEFAULT_DEVIATION: f32 = 0.02;

/// Probes within a small deviation band of the best crowding score instead
/// of always taking the single best cell, so play does not become fully
/// predictable. Abstains when no cell scores above zero.
#[derive(Debug, Clone, Copy)]
pub struct EclipsedPolicy {
    deviation: f32,
}

impl EclipsedPolicy {
    pub fn new() -> Self {
        Self {
            deviation: DEFAULT_DEVIATION,
        }
    }

    /// Recognizes `score_deviation=<f32>` in `[0, 1]`.
    pub fn with_params(params: &mut CustomParams) -> Result<Self, ParamsError> {
        let mut policy = Self::new();
        if let Some(deviation) = params.take::<f32>("score_deviation")? {
            if !(0.0..=1.0).contains(&deviation) {
                return Err(ParamsError::BadValue {
                    key: "score_deviation".into(),
                    value: alloc::format!("{}", deviation),
                });
            }
            policy.deviation = deviation;
        }
        Ok(policy)
    }
}

impl Default for EclipsedPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_hints(score_map: &ScoreMap, good_shots: &[Coords], hints: &mut ShotHints) {
    for x in 0..FIELD_SIZE {
        for y in 0..FIELD_SIZE {
            let coords = Coords::at(x, y);
            let score = score_map.get(coords);
            if score > 0 {
                let data = if good_shots.contains(&coords) {
                    HintData::colored_and_numbered(1, score)
                } else {
                    HintData::numbered(score)
                };
                hints.insert(coords, data);
            }
        }
    }
}

impl ShotPolicy for EclipsedPolicy {
    fn name(&self) -> &'static str {
        "eclipsed"
    }

    fn propose(
        &mut self,
        state: &TurnState,
        _target: &TargetField,
        rng: &mut SmallRng,
        mut hints: Option<&mut ShotHints>,
    ) -> Result<Option<Coords>, StepError> {
        let (score_map, min, max) = combined_scores(&state.field, &state.killed_of_size)?;
        if max <= 0 {
            log::debug!("eclipsed: no eclipse profit anywhere");
            return Ok(None);
        }

        // score threshold just below the maximum; never below 1, so cells
        // with no legal placement stay unreachable however wide the band is
        let threshold = (ceilf((max - min) as f32 * (1.0 - self.deviation)) as Score + min).max(1);

        let mut good_shots = Vec::new();
        for x in 0..FIELD_SIZE {
            for y in 0..FIELD_SIZE {
                let coords = Coords::at(x, y);
                if score_map.get(coords) >= threshold {
                    good_shots.push(coords);
                }
            }
        }
        if good_shots.is_empty() {
            // the maximum cell itself always clears the threshold
            return Err(StepError::internal("deviation band selected no cells"));
        }

        if let Some(hints) = hints.as_deref_mut() {
            fill_hints(&score_map, &good_shots, hints);
        }

        let coords = good_shots[rng.random_range(0..good_shots.len())];
        log::debug!(
            "eclipsed: min={} max={} threshold={} candidates={} chose {}",
            min,
            max,
            threshold,
            good_shots.len(),
            coords
        );
        Ok(Some(coords))
    }

    fn fresh(&self) -> Box<dyn ShotPolicy> {
        Box::new(*self)
    }
}

//! Density-biased placement: cluster the fleet by eclipse score.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::{ships_of_size, FIELD_SIZE, MAX_SHIP_SIZE};
use crate::coords::{Coords, CoordsSeq, Orientation};
use crate::grid::{Grid, Score};
use crate::params::{CustomParams, ParamsError};
use crate::placement::{PlacementError, PlacementStrategy};
use crate::score::placement_scores;

/// Default score window below the best eclipse still accepted.
pub const DEFAULT_TRADEOFF: Score = 2;

/// Places ships at high-crowding anchors. The best anchor alone would make
/// boards repeat, so anything within `max_eclipse_tradeoff` of the maximum
/// competes. With `min_eclipse_trick`, the very last size-1 ship goes to a
/// minimum-score anchor instead: an opponent tuned to the clustering bias
/// has to sweep the open water for it.
#[derive(Debug, Clone, Copy)]
pub struct EclipsedPlacement {
    max_eclipse_tradeoff: Score,
    min_eclipse_trick: bool,
}

impl EclipsedPlacement {
    pub fn new() -> Self {
        Self {
            max_eclipse_tradeoff: DEFAULT_TRADEOFF,
            min_eclipse_trick: true,
        }
    }

    /// Recognizes `max_eclipse_tradeoff=<u16>` and `min_eclipse_trick=<bool>`.
    pub fn with_params(params: &mut CustomParams) -> Result<Self, ParamsError> {
        let mut placement = Self::new();
        if let Some(tradeoff) = params.take::<u16>("max_eclipse_tradeoff")? {
            placement.max_eclipse_tradeoff = tradeoff as Score;
        }
        if let Some(trick) = params.take::<bool>("min_eclipse_trick")? {
            placement.min_eclipse_trick = trick;
        }
        Ok(placement)
    }

    fn put_ship(
        &self,
        field: &mut Grid<bool>,
        rng: &mut SmallRng,
        size: usize,
        use_max: bool,
    ) -> Result<(), PlacementError> {
        let scores = placement_scores(field, size);

        let mut best: Vec<(Coords, Orientation)> = Vec::new();
        if use_max {
            let tradeoff = scores.max.min(self.max_eclipse_tradeoff);
            let cut = scores.max - tradeoff;
            for y in 0..FIELD_SIZE {
                for x in 0..FIELD_SIZE {
                    let anchor = Coords::at(x, y);
                    if x + size <= FIELD_SIZE && scores.horizontal.get(anchor) >= cut {
                        best.push((anchor, Orientation::Horizontal));
                    }
                    if let Some(vertical) = &scores.vertical {
                        if y + size <= FIELD_SIZE && vertical.get(anchor) >= cut {
                            best.push((anchor, Orientation::Vertical));
                        }
                    }
                }
            }
        } else {
            // minimum-score trick; size-1 ships only, where one map covers
            // both orientations
            debug_assert!(size == 1);
            for y in 0..FIELD_SIZE {
                for x in 0..FIELD_SIZE {
                    let anchor = Coords::at(x, y);
                    if scores.horizontal.get(anchor) == scores.min_horizontal {
                        best.push((anchor, Orientation::Horizontal));
                    }
                }
            }
        }

        if best.is_empty() {
            return Err(PlacementError::UnableToPlaceShip { size });
        }

        let (anchor, orientation) = best[rng.random_range(0..best.len())];
        let run = CoordsSeq::new(anchor, orientation, size)
            .map_err(|_| PlacementError::UnableToPlaceShip { size })?;
        for c in run.cells() {
            field.set(c, true);
        }
        log::trace!(
            "eclipsed placement: size={} anchors={} chose {} {:?}",
            size,
            best.len(),
            anchor,
            orientation
        );
        Ok(())
    }
}

impl Default for EclipsedPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementStrategy for EclipsedPlacement {
    fn name(&self) -> &'static str {
        "eclipsed"
    }

    fn place_fleet(
        &self,
        rng: &mut SmallRng,
        field: &mut Grid<bool>,
    ) -> Result<(), PlacementError> {
        for size in (1..=MAX_SHIP_SIZE).rev() {
            let count = ships_of_size(size);
            for i in 0..count {
                // the unpredictability trick applies to the very last ship only
                let use_min = self.min_eclipse_trick && size == 1 && i == count - 1;
                self.put_ship(field, rng, size, !use_min)?;
            }
        }
        Ok(())
    }

    fn fresh(&self) -> Box<dyn PlacementStrategy> {
        Box::new(*self)
    }
}

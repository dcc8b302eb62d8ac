//! Margined view of the opponent board and the harmed-ship state machine.

use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{ShotResult, StepError};
use crate::config::FIELD_SIZE;
use crate::coords::{Coords, CoordsSeq, Orientation};
use crate::grid::Grid;
use crate::hints::{HintData, ShotHints};

/// Cell state as the targeting layer tracks it: the plain states plus cells
/// proven empty by the margin rule around killed ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetCell {
    #[default]
    Unknown,
    Missed,
    Harmed,
    Killed,
    /// Provably empty; shooting here is forbidden by inference.
    Margin,
}

/// The margined grid plus the state machine that finishes a partially-hit
/// ship before anything else is tried.
///
/// The harm counter doubles as the machine state: 0 = idle, 1 = a single hit
/// with unknown orientation, 2 or more = a confirmed straight run between
/// `head` and `tail`. The counter resets to 0 exactly when a ship is killed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetField {
    grid: Grid<TargetCell>,
    harm_count: u32,
    head: Coords,
    tail: Coords,
}

impl TargetField {
    pub fn new() -> Self {
        Self {
            grid: Grid::default(),
            harm_count: 0,
            head: Coords::default(),
            tail: Coords::default(),
        }
    }

    pub fn grid(&self) -> &Grid<TargetCell> {
        &self.grid
    }

    pub fn harm_count(&self) -> u32 {
        self.harm_count
    }

    /// True while a hit ship is still afloat.
    pub fn has_harmed_ship(&self) -> bool {
        self.harm_count > 0
    }

    /// First Unknown cell in row-major scan order, if any.
    pub fn first_unknown(&self) -> Option<Coords> {
        for y in 0..FIELD_SIZE {
            for x in 0..FIELD_SIZE {
                if self.grid.at(x, y) == TargetCell::Unknown {
                    return Some(Coords::at(x, y));
                }
            }
        }
        None
    }

    /// All Unknown cells in scan order.
    pub fn unknown_cells(&self) -> Vec<Coords> {
        let mut out = Vec::new();
        for y in 0..FIELD_SIZE {
            for x in 0..FIELD_SIZE {
                if self.grid.at(x, y) == TargetCell::Unknown {
                    out.push(Coords::at(x, y));
                }
            }
        }
        out
    }

    /// The shifted cell when it is on the board and still Unknown.
    fn shootable(&self, base: Coords, dx: i32, dy: i32) -> Option<Coords> {
        let dst = base.offset(dx, dy)?;
        (self.grid.get(dst) == TargetCell::Unknown).then_some(dst)
    }

    /// Legal continuations of the harmed ship.
    ///
    /// With one hit the orientation is open and up to four neighbours
    /// qualify; from the second hit on, only the cells past the two run ends
    /// do. An empty set is a Failure: the ship had to have room to continue
    /// or be dead already. A size-1 ship is killed by its first hit, so the
    /// four-neighbour branch never runs on behalf of one.
    pub fn finishing_candidates(&self) -> Result<Vec<Coords>, StepError> {
        debug_assert!(self.harm_count > 0);

        let mut out = Vec::new();
        if self.harm_count == 1 {
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(c) = self.shootable(self.head, dx, dy) {
                    out.push(c);
                }
            }
        } else {
            let run = CoordsSeq::from_endpoints(self.head, self.tail)
                .map_err(|_| StepError::internal("tracked run endpoints are not aligned"))?;
            let (head, tail) = (run.head(), run.tail());
            let ((hdx, hdy), (tdx, tdy)) = match run.orientation() {
                Orientation::Horizontal => ((-1, 0), (1, 0)),
                Orientation::Vertical => ((0, -1), (0, 1)),
            };
            if let Some(c) = self.shootable(head, hdx, hdy) {
                out.push(c);
            }
            if let Some(c) = self.shootable(tail, tdx, tdy) {
                out.push(c);
            }
        }

        if out.is_empty() {
            return Err(StepError::failure("harmed ship has no legal continuation"));
        }
        Ok(out)
    }

    /// Pick the next shot to finish the harmed ship, uniformly among the
    /// legal continuations. Every candidate is reported through `hints`, not
    /// just the chosen one.
    pub fn finishing_shot(
        &self,
        rng: &mut SmallRng,
        mut hints: Option<&mut ShotHints>,
    ) -> Result<Coords, StepError> {
        let candidates = self.finishing_candidates()?;
        if let Some(hints) = hints.as_deref_mut() {
            for &c in &candidates {
                hints.insert(c, HintData::colored(1));
            }
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Record a shot result at `coords`.
    ///
    /// The cell must still be Unknown; anything else means the caller shot a
    /// resolved cell and the game cannot be trusted further. On a kill, the
    /// whole run becomes Killed, its margin rectangle becomes Margin and the
    /// killed run is returned.
    pub fn apply_shot_result(
        &mut self,
        coords: Coords,
        res: ShotResult,
    ) -> Result<Option<CoordsSeq>, StepError> {
        if self.grid.get(coords) != TargetCell::Unknown {
            log::error!("shot result for already-resolved cell {}", coords);
            return Err(StepError::failure("shot applied to a non-Unknown cell"));
        }

        match res {
            ShotResult::Missed => {
                self.grid.set(coords, TargetCell::Missed);
                Ok(None)
            }
            ShotResult::Harmed => {
                self.extend_run(coords)?;
                self.harm_count += 1;
                self.grid.set(coords, TargetCell::Harmed);
                Ok(None)
            }
            ShotResult::Killed => {
                self.extend_run(coords)?;
                self.harm_count = 0;
                let run = self.mark_killed()?;
                Ok(Some(run))
            }
        }
    }

    /// Grow the tracked run towards `coords`, or start it there.
    fn extend_run(&mut self, coords: Coords) -> Result<(), StepError> {
        if self.harm_count == 0 {
            self.head = coords;
            self.tail = coords;
        } else if coords.is_hv_adjacent(self.head) {
            self.head = coords;
        } else if coords.is_hv_adjacent(self.tail) {
            self.tail = coords;
        } else {
            return Err(StepError::internal(
                "harmed cell is not adjacent to the tracked run",
            ));
        }
        Ok(())
    }

    /// Mark the dead run Killed and its margin rectangle Margin.
    fn mark_killed(&mut self) -> Result<CoordsSeq, StepError> {
        let run = CoordsSeq::from_endpoints(self.head, self.tail)
            .map_err(|_| StepError::internal("tracked run endpoints are not aligned"))?;

        let (m1, m2) = run.margin();
        for x in m1.x()..=m2.x() {
            for y in m1.y()..=m2.y() {
                self.grid.put(x, y, TargetCell::Margin);
            }
        }
        for c in run.cells() {
            self.grid.set(c, TargetCell::Killed);
        }
        Ok(run)
    }
}

impl Default for TargetField {
    fn default() -> Self {
        Self::new()
    }
}

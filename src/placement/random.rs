//! Uniform random placement with bounded retries.

use alloc::boxed::Box;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::{ships_of_size, FIELD_SIZE, MAX_SHIP_SIZE};
use crate::coords::{Coords, CoordsSeq, Orientation};
use crate::grid::Grid;
use crate::placement::{PlacementError, PlacementStrategy};

const MAX_TRIES_PER_SHIP: usize = 1000;

/// Draws anchors and orientations uniformly until a ship fits with a free
/// margin rectangle, bounded per ship so a wedged board reports failure
/// instead of looping.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlacement;

impl RandomPlacement {
    pub fn new() -> Self {
        Self
    }
}

/// True when the run's whole margin rectangle holds no ship cell.
fn placement_available(field: &Grid<bool>, run: &CoordsSeq) -> bool {
    let (a, b) = run.margin();
    for x in a.x()..=b.x() {
        for y in a.y()..=b.y() {
            if field.at(x, y) {
                return false;
            }
        }
    }
    true
}

fn put_ship(field: &mut Grid<bool>, rng: &mut SmallRng, size: usize) -> Result<(), PlacementError> {
    for _ in 0..MAX_TRIES_PER_SHIP {
        let mut x = rng.random_range(0..FIELD_SIZE - size + 1);
        let mut y = rng.random_range(0..FIELD_SIZE);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if orientation == Orientation::Vertical {
            core::mem::swap(&mut x, &mut y);
        }
        let Ok(run) = CoordsSeq::new(Coords::at(x, y), orientation, size) else {
            continue;
        };
        if !placement_available(field, &run) {
            continue;
        }
        for c in run.cells() {
            field.set(c, true);
        }
        return Ok(());
    }
    Err(PlacementError::UnableToPlaceShip { size })
}

impl PlacementStrategy for RandomPlacement {
    fn name(&self) -> &'static str {
        "random"
    }

    fn place_fleet(
        &self,
        rng: &mut SmallRng,
        field: &mut Grid<bool>,
    ) -> Result<(), PlacementError> {
        for size in (1..=MAX_SHIP_SIZE).rev() {
            for _ in 0..ships_of_size(size) {
                put_ship(field, rng, size)?;
            }
        }
        Ok(())
    }

    fn fresh(&self) -> Box<dyn PlacementStrategy> {
        Box::new(*self)
    }
}

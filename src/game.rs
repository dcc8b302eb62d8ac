//! Game-side collaborators: per-game turn state, the hidden-fleet referee and
//! a simulation driver wiring placement, selection and resolution together.

use alloc::vec::Vec;
use core::fmt;

use rand::rngs::SmallRng;

use crate::common::{ShotApplied, ShotResult, StepError};
use crate::config::{ships_of_size, FIELD_SIZE, MAX_SHIP_SIZE, MAX_SHOTS_PER_GAME};
use crate::coords::{Coords, CoordsSeq, Orientation};
use crate::grid::{CellState, Grid};
use crate::placement::{PlacementError, PlacementStrategy};
use crate::strategy::ShotSelector;

/// Cumulative per-game state owned by the game loop. Strategies read it
/// before every shot; only the revealed grid is written back by the core,
/// through [`ShotSelector::apply_shot_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    /// 1-based turn number, bumped after every non-winning shot.
    pub turn: u32,
    /// Revealed cells as plain states; margin inference lives in the
    /// strategy's own view, not here.
    pub field: Grid<CellState>,
    /// Ships killed so far.
    pub killed_ships: u32,
    /// Ships killed per size, indexed by `size - 1`.
    pub killed_of_size: [u32; MAX_SHIP_SIZE],
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            turn: 1,
            field: Grid::default(),
            killed_ships: 0,
            killed_of_size: [0; MAX_SHIP_SIZE],
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by the referee or the simulation driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The occupancy grid does not describe a legal fleet.
    BadFleet { reason: &'static str },
    /// The same cell was shot twice.
    DuplicateShot { coords: Coords },
    /// A per-size kill counter exceeded the fleet total.
    KillCountCorrupt { size: usize },
    /// Placement kept failing across whole-board restarts.
    PlacementFailed(PlacementError),
    /// The shot cap was reached without a win.
    ShotCapReached,
    /// A strategy error ended the game.
    Strategy(StepError),
}

impl From<StepError> for GameError {
    fn from(err: StepError) -> Self {
        GameError::Strategy(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BadFleet { reason } => write!(f, "bad fleet: {}", reason),
            GameError::DuplicateShot { coords } => {
                write!(f, "cell {} was shot twice", coords)
            }
            GameError::KillCountCorrupt { size } => {
                write!(f, "kill counter for size {} exceeds the fleet", size)
            }
            GameError::PlacementFailed(err) => write!(f, "placement failed: {}", err),
            GameError::ShotCapReached => write!(f, "shot cap reached without a win"),
            GameError::Strategy(err) => write!(f, "{}", err),
        }
    }
}

#[derive(Debug, Clone)]
struct FleetShip {
    run: CoordsSeq,
    hits: u32,
    sunk: bool,
}

/// The hidden true layout, answering probes with Missed/Harmed/Killed.
#[derive(Debug, Clone)]
pub struct Fleet {
    ships: Vec<FleetShip>,
    shot: Grid<bool>,
}

impl Fleet {
    /// Extract ships from an occupancy grid, validating that every ship is a
    /// straight run and that the fleet composition is exact.
    pub fn from_grid(field: &Grid<bool>) -> Result<Self, GameError> {
        let mut ships = Vec::new();
        for y in 0..FIELD_SIZE {
            for x in 0..FIELD_SIZE {
                if !field.at(x, y) {
                    continue;
                }
                // only start a run at its top/left end
                let continues_left = x > 0 && field.at(x - 1, y);
                let continues_up = y > 0 && field.at(x, y - 1);
                if continues_left || continues_up {
                    continue;
                }

                let grows_right = x + 1 < FIELD_SIZE && field.at(x + 1, y);
                let grows_down = y + 1 < FIELD_SIZE && field.at(x, y + 1);
                if grows_right && grows_down {
                    return Err(GameError::BadFleet {
                        reason: "ship cells form a bend",
                    });
                }

                let orientation = if grows_down {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                let mut len = 1;
                loop {
                    let (nx, ny) = match orientation {
                        Orientation::Horizontal => (x + len, y),
                        Orientation::Vertical => (x, y + len),
                    };
                    if nx < FIELD_SIZE && ny < FIELD_SIZE && field.at(nx, ny) {
                        len += 1;
                    } else {
                        break;
                    }
                }
                if len > MAX_SHIP_SIZE {
                    return Err(GameError::BadFleet {
                        reason: "ship is longer than the largest fleet size",
                    });
                }
                let run = CoordsSeq::new(Coords::at(x, y), orientation, len)
                    .map_err(|_| GameError::BadFleet {
                        reason: "ship run leaves the board",
                    })?;
                ships.push(FleetShip {
                    run,
                    hits: 0,
                    sunk: false,
                });
            }
        }

        let mut counts = [0u32; MAX_SHIP_SIZE];
        let mut run_cells = 0;
        for ship in &ships {
            counts[ship.run.len() - 1] += 1;
            run_cells += ship.run.len();
        }

        let mut occupied = 0;
        for y in 0..FIELD_SIZE {
            for x in 0..FIELD_SIZE {
                if field.at(x, y) {
                    occupied += 1;
                }
            }
        }
        if run_cells != occupied {
            return Err(GameError::BadFleet {
                reason: "ship cells do not form straight runs",
            });
        }
        for size in 1..=MAX_SHIP_SIZE {
            if counts[size - 1] != ships_of_size(size) {
                return Err(GameError::BadFleet {
                    reason: "fleet composition is wrong",
                });
            }
        }

        Ok(Self {
            ships,
            shot: Grid::default(),
        })
    }

    pub fn ships_remaining(&self) -> u32 {
        self.ships.iter().filter(|ship| !ship.sunk).count() as u32
    }

    /// Resolve a probe. On a kill the size of the sunk ship is reported too.
    pub fn resolve(&mut self, coords: Coords) -> Result<(ShotResult, Option<usize>), GameError> {
        if self.shot.get(coords) {
            return Err(GameError::DuplicateShot { coords });
        }
        self.shot.set(coords, true);

        for ship in self.ships.iter_mut() {
            if !ship.run.cells().any(|c| c == coords) {
                continue;
            }
            ship.hits += 1;
            if ship.hits as usize == ship.run.len() {
                ship.sunk = true;
                return Ok((ShotResult::Killed, Some(ship.run.len())));
            }
            return Ok((ShotResult::Harmed, None));
        }
        Ok((ShotResult::Missed, None))
    }
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// Shots fired; equals the turn counter at the winning shot.
    pub shots: u32,
}

/// Whole-board placement attempts before giving up entirely.
const MAX_PLACEMENT_RESTARTS: u32 = 100;

/// Generate a fleet layout, regenerating from scratch on placement failure.
pub fn place_fleet(
    placement: &dyn PlacementStrategy,
    rng: &mut SmallRng,
) -> Result<Grid<bool>, GameError> {
    let mut attempt = 0;
    loop {
        let mut field = Grid::default();
        match placement.place_fleet(rng, &mut field) {
            Ok(()) => return Ok(field),
            Err(err) => {
                attempt += 1;
                log::debug!("placement attempt {} failed ({}), restarting", attempt, err);
                if attempt >= MAX_PLACEMENT_RESTARTS {
                    return Err(GameError::PlacementFailed(err));
                }
            }
        }
    }
}

/// Play one full game: place a fleet, then probe until every ship is sunk.
pub fn run_game(
    selector: &mut ShotSelector,
    placement: &dyn PlacementStrategy,
    rng: &mut SmallRng,
) -> Result<GameReport, GameError> {
    let layout = place_fleet(placement, rng)?;
    let mut fleet = Fleet::from_grid(&layout)?;
    let mut state = TurnState::new();

    loop {
        let coords = selector.get_next_shot(&state, rng, None)?;
        let (result, killed_size) = fleet.resolve(coords)?;

        if let Some(size) = killed_size {
            state.killed_ships += 1;
            state.killed_of_size[size - 1] += 1;
            if state.killed_of_size[size - 1] > ships_of_size(size) {
                // bookkeeping went off the rails; abort loudly
                return Err(GameError::KillCountCorrupt { size });
            }
        }

        match selector.apply_shot_result(&mut state, coords, result)? {
            ShotApplied::Won => {
                log::debug!("won with {} shots", state.turn);
                return Ok(GameReport { shots: state.turn });
            }
            ShotApplied::Continue => {
                state.turn += 1;
                if state.turn > MAX_SHOTS_PER_GAME {
                    return Err(GameError::ShotCapReached);
                }
            }
        }
    }
}

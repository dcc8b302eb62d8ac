//! Fleet placement strategies.

pub mod eclipsed;
pub mod random;

use alloc::boxed::Box;
use core::fmt;

use rand::rngs::SmallRng;

use crate::grid::Grid;
use crate::params::{CustomParams, ParamsError};

pub use eclipsed::EclipsedPlacement;
pub use random::RandomPlacement;

/// Errors from placing a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No legal position found for a ship of `size` within the retry budget.
    /// The caller should discard the board and restart with fresh randomness;
    /// partial boards are never patched.
    UnableToPlaceShip { size: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::UnableToPlaceShip { size } => {
                write!(f, "unable to place a ship of size {}", size)
            }
        }
    }
}

/// A fleet placement policy writing into an occupancy grid.
pub trait PlacementStrategy: Send {
    fn name(&self) -> &'static str;

    /// Place the full fleet, largest ships first.
    fn place_fleet(&self, rng: &mut SmallRng, field: &mut Grid<bool>)
        -> Result<(), PlacementError>;

    /// Independent copy with the same configuration.
    fn fresh(&self) -> Box<dyn PlacementStrategy>;
}

/// Selectable placement families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    Random,
    Eclipsed,
}

impl PlacementKind {
    pub const ALL: [PlacementKind; 2] = [PlacementKind::Random, PlacementKind::Eclipsed];

    pub fn name(self) -> &'static str {
        match self {
            PlacementKind::Random => "random",
            PlacementKind::Eclipsed => "eclipsed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Build a placement strategy from its kind and a custom parameter string.
pub fn build_placement(
    kind: PlacementKind,
    params: &str,
) -> Result<Box<dyn PlacementStrategy>, ParamsError> {
    let mut params = CustomParams::parse(params)?;
    let strategy: Box<dyn PlacementStrategy> = match kind {
        PlacementKind::Random => Box::new(RandomPlacement::new()),
        PlacementKind::Eclipsed => Box::new(EclipsedPlacement::with_params(&mut params)?),
    };
    params.finish()?;
    Ok(strategy)
}

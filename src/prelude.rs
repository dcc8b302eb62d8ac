//! Commonly used types and utilities for ease of import.

pub use crate::{
    build_placement, run_game, Coords, GameReport, PlacementKind, ShotResult, ShotSelector,
    StrategyKind, TurnState,
};

#[cfg(feature = "std")]
pub use crate::init_logging;

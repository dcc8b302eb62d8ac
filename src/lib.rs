#![cfg_attr(not(feature = "std"), no_std)]

//! Automated hidden-ship search on a fixed 10×10 board: a bit-packed density
//! scoring engine, a harmed-ship tracker and a family of shot-selection and
//! placement strategies composed into explicit fallback chains.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitmap;
mod common;
mod config;
mod coords;
mod game;
mod grid;
mod hints;
#[cfg(feature = "std")]
mod logging;
mod params;
mod placement;
pub mod prelude;
mod score;
mod strategy;
mod tracker;

pub use bitmap::{FieldBitmap, FieldRow, PADDED_ROWS, PAD_MAX, PAD_MIN};
pub use common::{ShotApplied, ShotResult, StepError};
pub use config::*;
pub use coords::{Coords, CoordsError, CoordsSeq, Orientation};
pub use game::{place_fleet, run_game, Fleet, GameError, GameReport, TurnState};
pub use grid::{CellState, Grid, Score, ScoreMap, ShipCell};
pub use hints::{HintData, ShotHints};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use params::{CustomParams, ParamsError};
pub use placement::{
    build_placement, EclipsedPlacement, PlacementError, PlacementKind, PlacementStrategy,
    RandomPlacement,
};
pub use score::{combined_scores, placement_scores, AnchorScores};
pub use strategy::{
    DummyPolicy, EclipsedPolicy, FieldMaskPolicy, RandomPolicy, ShotPolicy, ShotSelector,
    StrategyKind,
};
pub use tracker::{TargetCell, TargetField};

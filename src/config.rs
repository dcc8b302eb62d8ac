//! Board and fleet constants. The board size is fixed at compile time.

/// Width and height of the square board.
pub const FIELD_SIZE: usize = 10;

/// Largest ship size in the fleet.
pub const MAX_SHIP_SIZE: usize = 4;

/// Halo cells kept past each border so masks for the largest ship never need
/// bounds checks.
pub const BORDER_EXTRA: usize = MAX_SHIP_SIZE - 1;

/// Total number of ships on the board (1x4 + 2x3 + 3x2 + 4x1).
pub const ALL_SHIPS_COUNT: u32 = 10;

/// Shots a game may take before the driver declares it stuck.
pub const MAX_SHOTS_PER_GAME: u32 = (FIELD_SIZE * FIELD_SIZE) as u32 + 1;

/// Number of ships of `size` cells in a full fleet.
pub const fn ships_of_size(size: usize) -> u32 {
    (MAX_SHIP_SIZE + 1 - size) as u32
}

//! Generic per-cell board containers and the cell states stored in them.

use crate::config::FIELD_SIZE;
use crate::coords::Coords;

/// State of a probed cell as the plain (unmargined) game state records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Unknown,
    Missed,
    Harmed,
    Killed,
}

/// Classification of grid elements for eclipse building. The revealed-state
/// grid and the placement occupancy grid both feed the bitmap layer; this
/// trait gives them a common vocabulary.
pub trait ShipCell: Copy {
    fn is_ship(self) -> bool;
    fn is_missed(self) -> bool;
}

impl ShipCell for CellState {
    fn is_ship(self) -> bool {
        matches!(self, CellState::Harmed | CellState::Killed)
    }

    fn is_missed(self) -> bool {
        self == CellState::Missed
    }
}

impl ShipCell for bool {
    fn is_ship(self) -> bool {
        self
    }

    fn is_missed(self) -> bool {
        false
    }
}

/// A `FIELD_SIZE` × `FIELD_SIZE` array of per-cell values, indexed
/// column-major: `x` selects the column, `y` the row within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid<T> {
    cells: [[T; FIELD_SIZE]; FIELD_SIZE],
}

impl<T: Copy> Grid<T> {
    /// Grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            cells: [[value; FIELD_SIZE]; FIELD_SIZE],
        }
    }

    pub fn get(&self, c: Coords) -> T {
        self.cells[c.x()][c.y()]
    }

    pub fn set(&mut self, c: Coords, value: T) {
        self.cells[c.x()][c.y()] = value;
    }

    /// Raw-index accessor for scan loops; `x` and `y` must be in range.
    pub fn at(&self, x: usize, y: usize) -> T {
        self.cells[x][y]
    }

    /// Raw-index setter for scan loops; `x` and `y` must be in range.
    pub fn put(&mut self, x: usize, y: usize, value: T) {
        self.cells[x][y] = value;
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

/// Score value accumulated by the density engine.
pub type Score = i16;

/// Signed per-cell score accumulator.
pub type ScoreMap = Grid<Score>;

impl Grid<Score> {
    /// Add `src * factor` cell-wise, folding the running minimum and maximum
    /// of every updated value.
    pub fn add_scaled(&mut self, src: &ScoreMap, factor: Score, min: &mut Score, max: &mut Score) {
        for x in 0..FIELD_SIZE {
            for y in 0..FIELD_SIZE {
                let d = &mut self.cells[x][y];
                *d += src.cells[x][y] * factor;
                if *min > *d {
                    *min = *d;
                }
                if *max < *d {
                    *max = *d;
                }
            }
        }
    }
}

//! Density ("eclipse") scoring shared by the eclipsed strategy and the
//! eclipsed placement.
//!
//! For each ship size the engine slides the size's footprint mask across
//! every row of the native and the transposed bitmap. Legal positions get a
//! crowding score: the number of eclipse bits in the three rows under the
//! margin mask. Illegal positions contribute nothing.

use crate::bitmap::{FieldBitmap, FieldRow};
use crate::common::StepError;
use crate::config::{ships_of_size, FIELD_SIZE, MAX_SHIP_SIZE};
use crate::grid::{CellState, Grid, Score, ScoreMap};

type Bitmap = FieldBitmap<FieldRow>;

/// Add, for every legal placement of a `size`-cell ship, the crowding score
/// of its margin halo to every cell the ship would cover. `denied` vetoes
/// footprints; `eclipse` is read under the margin mask. With `transposed`,
/// both bitmaps are row/column-swapped and the scores land transposed too.
fn accumulate_candidates(
    eclipse: &Bitmap,
    denied: &Bitmap,
    size: usize,
    score_map: &mut ScoreMap,
    transposed: bool,
) {
    let mut ship_mask = Bitmap::ship_initial_mask(size);
    let mut margin_mask = Bitmap::margin_initial_mask(size);

    for x in 0..=FIELD_SIZE - size {
        for y in 0..FIELD_SIZE {
            if denied.is_intersected(y as i32, ship_mask) {
                continue;
            }
            let score = eclipse.popcount3(y as i32, margin_mask) as Score;
            for i in 0..size {
                if transposed {
                    score_map.put(y, x + i, score_map.at(y, x + i) + score);
                } else {
                    score_map.put(x + i, y, score_map.at(x + i, y) + score);
                }
            }
        }
        ship_mask <<= 1;
        margin_mask <<= 1;
    }
}

/// Combined score map across every ship size still afloat, each size weighted
/// by how many of that size remain. Returns the map together with the
/// running (min, max) folded during accumulation.
pub fn combined_scores(
    field: &Grid<CellState>,
    killed_of_size: &[u32; MAX_SHIP_SIZE],
) -> Result<(ScoreMap, Score, Score), StepError> {
    let mut eclipse = Bitmap::new();
    eclipse.set_border();
    eclipse.add_eclipse(field, false);
    let mut denied = Bitmap::new();
    denied.add_eclipse(field, true);

    let eclipse_t = eclipse.transposed();
    let denied_t = denied.transposed();

    let mut combined = ScoreMap::default();
    let mut min = Score::MAX;
    let mut max: Score = 0;

    for size in (1..=MAX_SHIP_SIZE).rev() {
        let total = ships_of_size(size);
        let killed = killed_of_size[size - 1];
        if killed > total {
            return Err(StepError::internal("killed-ship count exceeds the fleet"));
        }
        let remaining = (total - killed) as Score;
        if remaining == 0 {
            continue;
        }

        let mut map = ScoreMap::default();
        accumulate_candidates(&eclipse, &denied, size, &mut map, false);
        if size > 1 {
            // size-1 footprints look the same transposed
            accumulate_candidates(&eclipse_t, &denied_t, size, &mut map, true);
        }
        combined.add_scaled(&map, remaining, &mut min, &mut max);
    }

    Ok((combined, min, max))
}

/// Anchor-indexed score maps for placing one ship size.
#[derive(Debug, Clone)]
pub struct AnchorScores {
    /// Score per horizontal anchor; illegal anchors stay at -1.
    pub horizontal: ScoreMap,
    /// Score per vertical anchor; absent for size-1 ships.
    pub vertical: Option<ScoreMap>,
    /// Best score across both orientations.
    pub max: Score,
    /// Worst legal horizontal score (`Score::MAX` when nothing is legal).
    pub min_horizontal: Score,
}

fn scan_anchors(
    eclipse: &Bitmap,
    size: usize,
    map: &mut ScoreMap,
    transposed: bool,
) -> (Score, Score) {
    let mut ship_mask = Bitmap::ship_initial_mask(size);
    let mut margin_mask = Bitmap::margin_initial_mask(size);

    let mut min = Score::MAX;
    let mut max: Score = 0;
    for x in 0..=FIELD_SIZE - size {
        for y in 0..FIELD_SIZE {
            // during placement the eclipse itself is the legality test:
            // ships may not touch, not even diagonally
            if !eclipse.is_intersected(y as i32, ship_mask) {
                let score = eclipse.popcount3(y as i32, margin_mask) as Score;
                if transposed {
                    map.put(y, x, score);
                } else {
                    map.put(x, y, score);
                }
                if score > max {
                    max = score;
                }
                if score < min {
                    min = score;
                }
            }
        }
        ship_mask <<= 1;
        margin_mask <<= 1;
    }
    (min, max)
}

/// Anchor scores for one ship size against the board under construction.
pub fn placement_scores(occupied: &Grid<bool>, size: usize) -> AnchorScores {
    let mut eclipse = Bitmap::new();
    eclipse.set_border();
    eclipse.add_eclipse(occupied, false);

    let mut horizontal = ScoreMap::filled(-1);
    let (min_horizontal, max_h) = scan_anchors(&eclipse, size, &mut horizontal, false);

    let mut max = max_h;
    let mut vertical = None;
    if size > 1 {
        let eclipse_t = eclipse.transposed();
        let mut map = ScoreMap::filled(-1);
        let (_, max_v) = scan_anchors(&eclipse_t, size, &mut map, true);
        if max_v > max {
            max = max_v;
        }
        vertical = Some(map);
    }

    AnchorScores {
        horizontal,
        vertical,
        max,
        min_horizontal,
    }
}

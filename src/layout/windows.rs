// windows.rs - Per-layer window generation
//
// Each building exposes a grid of candidate slots derived from its
// width/height. A slot is kept when the mixed seed lands under the
// layer's density threshold; kept FG slots under the rare threshold
// additionally pulse. Coordinates are closed-form from the building
// geometry plus the slot indices.

use crate::math::percentile;
use crate::scene::{Building, H};

use super::delay_order;

/// Mix constants, one per layer. FG_MIX also drives the delay shuffle.
pub const FG_MIX: u32 = 2_654_435_761;
pub const MID_MIX: u32 = 2_246_822_519;
pub const THIN_MIX: u32 = 1_597_334_677;

// Density thresholds, percent
const FG_KEEP: u32 = 30;
const FG_PULSE: u32 = 8;
const MID_KEEP: u32 = 28;
const THIN_KEEP: u32 = 15;

// FG grid: margins and steps in canvas units
const FG_MARGIN_W: f32 = 8.0;
const FG_MARGIN_H: f32 = 10.0;
const FG_STEP_X: f32 = 10.0;
const FG_STEP_Y: f32 = 12.0;
const FG_INSET_X: f32 = 6.0;
const FG_INSET_Y: f32 = 8.0;

// MID grid
const MID_MARGIN_W: f32 = 6.0;
const MID_MARGIN_H: f32 = 8.0;
const MID_STEP_X: f32 = 8.0;
const MID_STEP_Y: f32 = 10.0;
const MID_INSET_X: f32 = 4.0;
const MID_INSET_Y: f32 = 6.0;

// Thin spires: single centered column
const THIN_MARGIN_H: f32 = 6.0;
const THIN_STEP_Y: f32 = 10.0;
const THIN_INSET_Y: f32 = 5.0;

// Power-up stagger, seconds
const DELAY_BASE_S: f32 = 0.5;
const DELAY_PER_RANK_S: f32 = 0.25;
const DELAY_PER_ROW_S: f32 = 0.05;

/// FG window with animation metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FgWindow {
    pub x: f32,
    pub y: f32,
    pub pulse: bool,
    pub delay: f32,
}

/// Small unanimated window on the MID layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmallWindow {
    pub x: f32,
    pub y: f32,
}

/// Candidate grid size for a building. Buildings smaller than the
/// margins yield zero rows or columns, never an error.
#[inline]
fn grid(b: &Building, margin_w: f32, margin_h: f32, step_x: f32, step_y: f32) -> (i32, i32) {
    let cols = ((b.w - margin_w) / step_x).floor() as i32;
    let rows = ((b.h - margin_h) / step_y).floor() as i32;
    (cols.max(0), rows.max(0))
}

/// Generate FG windows with pulse flags and staggered delays.
pub fn fg_windows(buildings: &[Building]) -> Vec<FgWindow> {
    let order = delay_order(buildings.len());
    let mut wins = Vec::new();

    for (b_idx, b) in buildings.iter().enumerate() {
        let (cols, rows) = grid(b, FG_MARGIN_W, FG_MARGIN_H, FG_STEP_X, FG_STEP_Y);
        let base_delay = DELAY_BASE_S + order[b_idx] as f32 * DELAY_PER_RANK_S;

        for r in 0..rows {
            for c in 0..cols {
                let seed = b_idx as u32 * 100 + r as u32 * 10 + c as u32;
                let p = percentile(seed, FG_MIX);
                if p > FG_KEEP {
                    continue;
                }
                wins.push(FgWindow {
                    x: b.x + FG_INSET_X + c as f32 * FG_STEP_X,
                    y: H - b.h + FG_INSET_Y + r as f32 * FG_STEP_Y,
                    pulse: p < FG_PULSE,
                    delay: base_delay + r as f32 * DELAY_PER_ROW_S,
                });
            }
        }
    }
    wins
}

/// Generate the faded windows on wide MID blocks.
pub fn mid_windows(buildings: &[Building]) -> Vec<SmallWindow> {
    let mut wins = Vec::new();

    for (b_idx, b) in buildings.iter().enumerate() {
        let (cols, rows) = grid(b, MID_MARGIN_W, MID_MARGIN_H, MID_STEP_X, MID_STEP_Y);

        for r in 0..rows {
            for c in 0..cols {
                let seed = b_idx as u32 * 77 + r as u32 * 13 + c as u32;
                if percentile(seed, MID_MIX) > MID_KEEP {
                    continue;
                }
                wins.push(SmallWindow {
                    x: b.x + MID_INSET_X + c as f32 * MID_STEP_X,
                    y: H - b.h + MID_INSET_Y + r as f32 * MID_STEP_Y,
                });
            }
        }
    }
    wins
}

/// Generate the sparse single-column windows on thin MID spires,
/// roughly one or two per building.
pub fn mid_thin_windows(buildings: &[Building]) -> Vec<SmallWindow> {
    let mut wins = Vec::new();

    for (b_idx, b) in buildings.iter().enumerate() {
        let rows = (((b.h - THIN_MARGIN_H) / THIN_STEP_Y).floor() as i32).max(0);

        for r in 0..rows {
            let seed = b_idx as u32 * 53 + r as u32 * 17;
            if percentile(seed, THIN_MIX) > THIN_KEEP {
                continue;
            }
            wins.push(SmallWindow {
                x: b.x + (b.w / 2.0).floor() - 1.0,
                y: H - b.h + THIN_INSET_Y + r as f32 * THIN_STEP_Y,
            });
        }
    }
    wins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{FG_BUILDINGS, MID_THIN_SOURCES, MID_WIN_SOURCES, W};

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(fg_windows(&FG_BUILDINGS), fg_windows(&FG_BUILDINGS));
        assert_eq!(mid_windows(&MID_WIN_SOURCES), mid_windows(&MID_WIN_SOURCES));
        assert_eq!(
            mid_thin_windows(&MID_THIN_SOURCES),
            mid_thin_windows(&MID_THIN_SOURCES)
        );
    }

    #[test]
    fn fg_windows_stay_inside_their_building() {
        for win in fg_windows(&FG_BUILDINGS) {
            let b = FG_BUILDINGS
                .iter()
                .find(|b| win.x >= b.x && win.x <= b.x + b.w)
                .expect("window outside every building");
            assert!(win.y >= H - b.h);
            assert!(win.y <= H);
            assert!(win.x >= 0.0 && win.x <= W);
        }
    }

    #[test]
    fn mid_windows_stay_inside_canvas() {
        for win in mid_windows(&MID_WIN_SOURCES)
            .into_iter()
            .chain(mid_thin_windows(&MID_THIN_SOURCES))
        {
            assert!(win.x >= 0.0 && win.x <= W);
            assert!(win.y >= 0.0 && win.y <= H);
        }
    }

    #[test]
    fn empty_table_yields_empty_layer() {
        assert!(fg_windows(&[]).is_empty());
        assert!(mid_windows(&[]).is_empty());
        assert!(mid_thin_windows(&[]).is_empty());
    }

    #[test]
    fn degenerate_building_yields_no_windows() {
        // narrower and shorter than the grid margins
        let tiny = [Building { x: 10.0, w: 4.0, h: 6.0 }];
        assert!(fg_windows(&tiny).is_empty());
        assert!(mid_windows(&tiny).is_empty());

        // wide enough for columns but too short for a row
        let flat = [Building { x: 0.0, w: 60.0, h: 9.0 }];
        assert!(fg_windows(&flat).is_empty());
    }

    #[test]
    fn fg_layer_has_pulse_and_static_windows() {
        let wins = fg_windows(&FG_BUILDINGS);
        assert!(!wins.is_empty());
        assert!(wins.iter().any(|w| w.pulse));
        assert!(wins.iter().any(|w| !w.pulse));
    }

    #[test]
    fn delays_grow_with_row() {
        let b = [Building { x: 0.0, w: 48.0, h: 100.0 }];
        let wins = fg_windows(&b);
        for pair in wins.windows(2) {
            if pair[1].y > pair[0].y {
                assert!(pair[1].delay >= pair[0].delay);
            }
        }
    }
}

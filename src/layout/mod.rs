// layout/ - Deterministic window generation
//
// No RNG anywhere. Every decision hashes small (building, row, col)
// indices through a fixed odd constant, so a given set of tables always
// produces the same skyline - across runs, platforms, and the
// wasm/native builds.

mod delay;
mod windows;

pub use delay::delay_order;
pub use windows::*;

use crate::scene::{FG_BUILDINGS, MID_THIN_SOURCES, MID_WIN_SOURCES};
use std::sync::OnceLock;

/// Generated FG windows, computed once per process and immutable after.
pub fn fg_layer() -> &'static [FgWindow] {
    static CACHE: OnceLock<Vec<FgWindow>> = OnceLock::new();
    CACHE.get_or_init(|| fg_windows(&FG_BUILDINGS))
}

/// Generated windows for the wide MID blocks.
pub fn mid_layer() -> &'static [SmallWindow] {
    static CACHE: OnceLock<Vec<SmallWindow>> = OnceLock::new();
    CACHE.get_or_init(|| mid_windows(&MID_WIN_SOURCES))
}

/// Generated single-column windows for the thin MID spires.
pub fn mid_thin_layer() -> &'static [SmallWindow] {
    static CACHE: OnceLock<Vec<SmallWindow>> = OnceLock::new();
    CACHE.get_or_init(|| mid_thin_windows(&MID_THIN_SOURCES))
}

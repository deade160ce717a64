// data.rs - Layer tables
//
// Ordered back to front: MID (thin spires + wide low blocks), FG (main
// windowed buildings), FRONT (low silhouettes). Coordinates were tuned
// by eye against the 800x160 viewBox and are load-bearing: the window
// generator hashes table indices, so reordering entries reshuffles
// every generated window.

use super::{Building, Star};

const fn b(x: f32, w: f32, h: f32) -> Building {
    Building { x, w, h }
}

const fn s(cx: f32, cy: f32, r: f32) -> Star {
    Star { cx, cy, r }
}

/// MID layer, distinct skyline rhythm from FG.
pub const MID_BUILDINGS: [Building; 13] = [
    b(10.0, 12.0, 65.0),
    b(55.0, 10.0, 52.0),
    b(90.0, 70.0, 28.0),
    b(195.0, 14.0, 70.0),
    b(240.0, 55.0, 22.0),
    b(330.0, 11.0, 58.0),
    b(355.0, 13.0, 38.0),
    b(400.0, 65.0, 25.0),
    b(500.0, 12.0, 62.0),
    b(545.0, 60.0, 20.0),
    b(640.0, 14.0, 55.0),
    b(685.0, 50.0, 24.0),
    b(760.0, 11.0, 60.0),
];

/// Only the wide MID blocks get faded cyan windows.
pub const MID_WIN_SOURCES: [Building; 5] = [
    b(90.0, 70.0, 28.0),
    b(240.0, 55.0, 22.0),
    b(400.0, 65.0, 25.0),
    b(545.0, 60.0, 20.0),
    b(685.0, 50.0, 24.0),
];

/// Thin MID spires get a single column of small dark windows for texture.
pub const MID_THIN_SOURCES: [Building; 8] = [
    b(10.0, 12.0, 65.0),
    b(55.0, 10.0, 52.0),
    b(195.0, 14.0, 70.0),
    b(330.0, 11.0, 58.0),
    b(355.0, 13.0, 38.0),
    b(500.0, 12.0, 62.0),
    b(640.0, 14.0, 55.0),
    b(760.0, 11.0, 60.0),
];

/// FG layer, the main windowed buildings.
pub const FG_BUILDINGS: [Building; 11] = [
    b(30.0, 40.0, 80.0),
    b(95.0, 48.0, 100.0),
    b(168.0, 36.0, 70.0),
    b(228.0, 44.0, 105.0),
    b(300.0, 40.0, 82.0),
    b(370.0, 52.0, 115.0),
    b(450.0, 42.0, 90.0),
    b(520.0, 50.0, 108.0),
    b(600.0, 38.0, 75.0),
    b(660.0, 48.0, 95.0),
    b(735.0, 44.0, 68.0),
];

/// Indices into FG_BUILDINGS that carry a rooftop antenna.
pub const ANTENNA_INDICES: [usize; 5] = [1, 3, 5, 7, 9];

/// Antenna geometry relative to the carrying building's roof center.
pub const ANTENNA_W: f32 = 1.6;
pub const ANTENNA_H: f32 = 12.0;
pub const ANTENNA_TIP_R: f32 = 1.2;

/// FRONT layer silhouettes as closed polygons, left to right. Shapes
/// with stacked roof boxes contribute several polygons.
pub const FRONT_SILHOUETTES: &[&[[f32; 2]]] = &[
    // gabled warehouse running off the left edge
    &[
        [-5.0, 160.0],
        [-5.0, 138.0],
        [10.0, 138.0],
        [10.0, 132.0],
        [22.0, 125.0],
        [34.0, 132.0],
        [34.0, 138.0],
        [48.0, 138.0],
        [48.0, 160.0],
    ],
    // flat block with a raised vent box
    &[
        [95.0, 160.0],
        [95.0, 140.0],
        [110.0, 140.0],
        [110.0, 135.0],
        [114.0, 135.0],
        [114.0, 140.0],
        [155.0, 140.0],
        [155.0, 160.0],
    ],
    // stepped pair
    &[
        [205.0, 160.0],
        [205.0, 142.0],
        [230.0, 142.0],
        [230.0, 148.0],
        [255.0, 148.0],
        [255.0, 160.0],
    ],
    // ziggurat: base + two shrinking tiers
    &[[308.0, 160.0], [308.0, 144.0], [328.0, 144.0], [328.0, 160.0]],
    &[[311.0, 144.0], [311.0, 136.0], [325.0, 136.0], [325.0, 144.0]],
    &[[314.0, 136.0], [314.0, 131.0], [322.0, 131.0], [322.0, 136.0]],
    // staircase roofline
    &[
        [390.0, 160.0],
        [390.0, 145.0],
        [405.0, 145.0],
        [405.0, 140.0],
        [418.0, 140.0],
        [418.0, 135.0],
        [432.0, 135.0],
        [432.0, 140.0],
        [445.0, 140.0],
        [445.0, 160.0],
    ],
    // low block with a chimney
    &[[505.0, 160.0], [505.0, 148.0], [540.0, 148.0], [540.0, 160.0]],
    &[[518.0, 148.0], [518.0, 138.0], [524.0, 138.0], [524.0, 148.0]],
    // peaked roof
    &[
        [595.0, 160.0],
        [595.0, 140.0],
        [615.0, 130.0],
        [635.0, 140.0],
        [635.0, 160.0],
    ],
    // two detached sheds
    &[[695.0, 160.0], [695.0, 146.0], [720.0, 146.0], [720.0, 160.0]],
    &[[732.0, 160.0], [732.0, 142.0], [752.0, 142.0], [752.0, 160.0]],
    // right-edge block with vent
    &[
        [790.0, 160.0],
        [790.0, 144.0],
        [808.0, 144.0],
        [808.0, 138.0],
        [815.0, 138.0],
        [815.0, 144.0],
        [830.0, 144.0],
        [830.0, 160.0],
    ],
];

/// Star field above the skyline.
pub const STARS: [Star; 25] = [
    s(25.0, 42.0, 0.7),
    s(80.0, 58.0, 0.4),
    s(130.0, 35.0, 0.5),
    s(175.0, 50.0, 0.9),
    s(220.0, 40.0, 0.4),
    s(270.0, 55.0, 1.0),
    s(315.0, 38.0, 0.6),
    s(370.0, 48.0, 1.2),
    s(420.0, 36.0, 0.5),
    s(465.0, 52.0, 0.8),
    s(510.0, 42.0, 0.3),
    s(555.0, 60.0, 0.6),
    s(595.0, 37.0, 1.1),
    s(640.0, 50.0, 0.4),
    s(680.0, 44.0, 0.7),
    s(720.0, 56.0, 0.5),
    s(755.0, 39.0, 0.9),
    s(50.0, 62.0, 0.3),
    s(350.0, 63.0, 0.3),
    s(620.0, 64.0, 0.4),
    s(160.0, 72.0, 0.4),
    s(390.0, 78.0, 0.3),
    s(540.0, 68.0, 0.5),
    s(700.0, 75.0, 0.3),
    s(440.0, 82.0, 0.4),
];

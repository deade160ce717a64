// fan.rs - Screenshot fan interpolation engine
//
// Three tracked phone targets, each with compact / rest / spread poses.
// One scalar drives every parameter: scroll progress on constrained
// viewports, a spring-smoothed hover value on pointer layouts. The
// drive mode is fixed at construction; the pose tables are shared.

use crate::math::{clamp, lerp, remap01};
use crate::spring::Spring;

pub const TARGET_COUNT: usize = 3;

// Hover spring, critically damped for unit mass
const SPRING_STIFFNESS: f32 = 200.0;
const SPRING_DAMPING: f32 = 28.0;

// Side phone offsets, mirrored left/right
const SIDE_ROTATE: f32 = 10.0;
const SIDE_X_PCT: f32 = 34.0;
const SIDE_Z: f32 = -30.0;
const SIDE_SCALE: f32 = 0.88;
const SIDE_SPREAD_ROTATE: f32 = 16.0;
const SIDE_SPREAD_X_PCT: f32 = 72.0;
const SIDE_SPREAD_Z: f32 = -40.0;
const SIDE_SPREAD_SCALE: f32 = 0.92;

// Stacking order
const Z_INDEX_SIDE: i32 = 10;
const Z_INDEX_CENTER: i32 = 20;

// Compact state, the 0-progress endpoint on constrained viewports
const COMPACT_Z_SIDE: f32 = -10.0;
const COMPACT_Z_CENTER: f32 = 10.0;
const COMPACT_SCALE_SIDE: f32 = 0.92;
const CENTER_REST_Z: f32 = 10.0;
const CENTER_SPREAD_Z: f32 = 40.0;

// Staggered reveal: center first, sides trailing
const OPACITY_RANGE_CENTER: (f32, f32) = (0.0, 0.2);
const OPACITY_RANGE_SIDE: (f32, f32) = (0.15, 0.35);

// Entry slide
const REVEAL_Y_PX: f32 = 40.0;
const REVEAL_Y_FRACTION: f32 = 0.3;

/// Scroll window, viewport-relative: progress runs 0 -> 1 while the
/// container top travels from 85% down to 35% of the viewport height.
pub const SCROLL_WINDOW_START: f32 = 0.85;
pub const SCROLL_WINDOW_END: f32 = 0.35;

// Glow behind the fan
const GLOW_REST_OPACITY: f32 = 0.4;
const GLOW_REST_SCALE: f32 = 0.9;
const GLOW_SPREAD_OPACITY: f32 = 1.0;
const GLOW_SPREAD_SCALE: f32 = 1.2;
const GLOW_SCROLL_SCALE: (f32, f32) = (0.8, 1.2);

/// Edge fade on the side phones, pointing outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    Left,
    None,
    Right,
}

/// One interpolation endpoint for a tracked phone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub rotate: f32,
    pub x_pct: f32,
    pub z: f32,
    pub scale: f32,
}

const fn pose(rotate: f32, x_pct: f32, z: f32, scale: f32) -> Pose {
    Pose { rotate, x_pct, z, scale }
}

/// Static configuration for one phone: left, center, right.
#[derive(Clone, Copy, Debug)]
pub struct PhoneConfig {
    pub rest: Pose,
    pub spread: Pose,
    pub compact: Pose,
    pub z_index: i32,
    pub fade: FadeDirection,
    pub opacity_range: (f32, f32),
}

pub const PHONE_CONFIG: [PhoneConfig; TARGET_COUNT] = [
    PhoneConfig {
        rest: pose(-SIDE_ROTATE, -SIDE_X_PCT, SIDE_Z, SIDE_SCALE),
        spread: pose(
            -SIDE_SPREAD_ROTATE,
            -SIDE_SPREAD_X_PCT,
            SIDE_SPREAD_Z,
            SIDE_SPREAD_SCALE,
        ),
        compact: pose(0.0, 0.0, COMPACT_Z_SIDE, COMPACT_SCALE_SIDE),
        z_index: Z_INDEX_SIDE,
        fade: FadeDirection::Left,
        opacity_range: OPACITY_RANGE_SIDE,
    },
    PhoneConfig {
        rest: pose(0.0, 0.0, CENTER_REST_Z, 1.0),
        spread: pose(0.0, 0.0, CENTER_SPREAD_Z, 1.0),
        compact: pose(0.0, 0.0, COMPACT_Z_CENTER, 1.0),
        z_index: Z_INDEX_CENTER,
        fade: FadeDirection::None,
        opacity_range: OPACITY_RANGE_CENTER,
    },
    PhoneConfig {
        rest: pose(SIDE_ROTATE, SIDE_X_PCT, SIDE_Z, SIDE_SCALE),
        spread: pose(
            SIDE_SPREAD_ROTATE,
            SIDE_SPREAD_X_PCT,
            SIDE_SPREAD_Z,
            SIDE_SPREAD_SCALE,
        ),
        compact: pose(0.0, 0.0, COMPACT_Z_SIDE, COMPACT_SCALE_SIDE),
        z_index: Z_INDEX_SIDE,
        fade: FadeDirection::Right,
        opacity_range: OPACITY_RANGE_SIDE,
    },
];

/// Progress through the scroll window given the container top as a
/// fraction of viewport height (0 = viewport top, 1 = bottom).
pub fn scroll_progress(container_top_frac: f32) -> f32 {
    1.0 - remap01(container_top_frac, SCROLL_WINDOW_END, SCROLL_WINDOW_START)
}

/// Which signal feeds the pose pairs. Chosen once at construction from
/// the injected viewport capability, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveMode {
    ScrollLinked,
    PointerSpring,
}

/// Per-frame derived style for one phone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhoneStyle {
    pub rotate: f32,
    pub x_pct: f32,
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub y_px: f32,
}

/// Full frame handed to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FanFrame {
    pub phones: [PhoneStyle; TARGET_COUNT],
    pub glow_opacity: f32,
    pub glow_scale: f32,
    pub fade_opacity: f32,
}

pub struct FanEngine {
    mode: DriveMode,
    reduced_motion: bool,
    progress: f32,
    hover: Spring,
}

impl FanEngine {
    /// The composition holds exactly TARGET_COUNT screenshots; any
    /// other count renders nothing.
    pub fn new(image_count: usize, small_viewport: bool, reduced_motion: bool) -> Option<Self> {
        if image_count != TARGET_COUNT {
            return None;
        }
        let mode = if small_viewport {
            DriveMode::ScrollLinked
        } else {
            DriveMode::PointerSpring
        };
        Some(Self {
            mode,
            reduced_motion,
            progress: 0.0,
            hover: Spring::new(0.0, SPRING_STIFFNESS, SPRING_DAMPING),
        })
    }

    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    /// Scroll-linked input, clamped to [0, 1]. Ignored in pointer mode.
    pub fn set_progress(&mut self, v: f32) {
        self.progress = clamp(v, 0.0, 1.0);
    }

    /// Hover input. Retargets the spring; ignored in scroll mode.
    pub fn set_hover(&mut self, hover: bool) {
        self.hover.set_target(if hover { 1.0 } else { 0.0 });
    }

    /// Advance the hover spring. Scroll mode has no internal motion.
    pub fn tick(&mut self, dt: f32) {
        if self.mode == DriveMode::PointerSpring {
            self.hover.step(dt);
        }
    }

    pub fn frame(&self) -> FanFrame {
        match self.mode {
            DriveMode::ScrollLinked => self.scroll_frame(),
            DriveMode::PointerSpring => self.pointer_frame(),
        }
    }

    fn scroll_frame(&self) -> FanFrame {
        let v = self.progress;
        let mut frame = FanFrame {
            glow_opacity: v,
            glow_scale: lerp(GLOW_SCROLL_SCALE.0, GLOW_SCROLL_SCALE.1, v),
            fade_opacity: 1.0 - v,
            ..FanFrame::default()
        };
        for (style, config) in frame.phones.iter_mut().zip(&PHONE_CONFIG) {
            let (from, to) = (&config.compact, &config.spread);
            let (start, end) = config.opacity_range;
            *style = PhoneStyle {
                rotate: lerp(from.rotate, to.rotate, v),
                x_pct: lerp(from.x_pct, to.x_pct, v),
                z: lerp(from.z, to.z, v),
                scale: lerp(from.scale, to.scale, v),
                opacity: remap01(v, start, end),
                y_px: lerp(REVEAL_Y_PX, 0.0, clamp(v / REVEAL_Y_FRACTION, 0.0, 1.0)),
            };
        }
        frame
    }

    fn pointer_frame(&self) -> FanFrame {
        let s = clamp(self.hover.position(), 0.0, 1.0);
        let mut frame = FanFrame {
            glow_opacity: lerp(GLOW_REST_OPACITY, GLOW_SPREAD_OPACITY, s),
            glow_scale: lerp(GLOW_REST_SCALE, GLOW_SPREAD_SCALE, s),
            fade_opacity: 1.0 - s,
            ..FanFrame::default()
        };
        for (style, config) in frame.phones.iter_mut().zip(&PHONE_CONFIG) {
            // reduced motion pins the pose and leaves only the
            // glow/fade switches animating
            let to = if self.reduced_motion {
                &config.rest
            } else {
                &config.spread
            };
            let from = &config.rest;
            *style = PhoneStyle {
                rotate: lerp(from.rotate, to.rotate, s),
                x_pct: lerp(from.x_pct, to.x_pct, s),
                z: lerp(from.z, to.z, s),
                scale: lerp(from.scale, to.scale, s),
                opacity: 1.0,
                y_px: 0.0,
            };
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_guard_rejects_anything_but_three() {
        assert!(FanEngine::new(2, true, false).is_none());
        assert!(FanEngine::new(4, true, false).is_none());
        assert!(FanEngine::new(0, false, false).is_none());
        assert!(FanEngine::new(3, true, false).is_some());
    }

    #[test]
    fn drive_mode_follows_viewport_flag() {
        let small = FanEngine::new(3, true, false).unwrap();
        let wide = FanEngine::new(3, false, false).unwrap();
        assert_eq!(small.mode(), DriveMode::ScrollLinked);
        assert_eq!(wide.mode(), DriveMode::PointerSpring);
    }

    #[test]
    fn scroll_endpoints_hit_compact_and_spread() {
        let mut fan = FanEngine::new(3, true, false).unwrap();

        fan.set_progress(0.0);
        for (style, config) in fan.frame().phones.iter().zip(&PHONE_CONFIG) {
            assert_eq!(style.rotate, config.compact.rotate);
            assert_eq!(style.x_pct, config.compact.x_pct);
            assert_eq!(style.z, config.compact.z);
            assert_eq!(style.scale, config.compact.scale);
        }

        fan.set_progress(1.0);
        for (style, config) in fan.frame().phones.iter().zip(&PHONE_CONFIG) {
            assert_eq!(style.rotate, config.spread.rotate);
            assert_eq!(style.x_pct, config.spread.x_pct);
            assert_eq!(style.z, config.spread.z);
            assert_eq!(style.scale, config.spread.scale);
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.y_px, 0.0);
        }
    }

    #[test]
    fn scroll_window_maps_viewport_fractions() {
        assert_eq!(scroll_progress(0.95), 0.0);
        assert_eq!(scroll_progress(SCROLL_WINDOW_START), 0.0);
        assert_eq!(scroll_progress(SCROLL_WINDOW_END), 1.0);
        assert_eq!(scroll_progress(0.1), 1.0);
        let mid = scroll_progress(0.6);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        let mut fan = FanEngine::new(3, true, false).unwrap();
        fan.set_progress(4.2);
        assert_eq!(fan.frame().glow_opacity, 1.0);
        fan.set_progress(-1.0);
        assert_eq!(fan.frame().glow_opacity, 0.0);
    }

    #[test]
    fn center_reveals_before_the_sides() {
        let mut fan = FanEngine::new(3, true, false).unwrap();
        fan.set_progress(0.2);
        let frame = fan.frame();
        assert_eq!(frame.phones[1].opacity, 1.0);
        assert!(frame.phones[0].opacity < 1.0);
        assert!(frame.phones[0].opacity > 0.0);
        assert_eq!(frame.phones[0].opacity, frame.phones[2].opacity);
    }

    #[test]
    fn hover_spring_settles_on_spread() {
        let mut fan = FanEngine::new(3, false, false).unwrap();
        fan.set_hover(true);
        for _ in 0..600 {
            fan.tick(1.0 / 60.0);
        }
        for (style, config) in fan.frame().phones.iter().zip(&PHONE_CONFIG) {
            assert!((style.rotate - config.spread.rotate).abs() < 1e-3);
            assert!((style.x_pct - config.spread.x_pct).abs() < 1e-3);
        }
        assert!((fan.frame().glow_opacity - GLOW_SPREAD_OPACITY).abs() < 1e-3);
    }

    #[test]
    fn reduced_motion_pins_pointer_poses_to_rest() {
        let mut fan = FanEngine::new(3, false, true).unwrap();
        fan.set_hover(true);
        for _ in 0..600 {
            fan.tick(1.0 / 60.0);
        }
        for (style, config) in fan.frame().phones.iter().zip(&PHONE_CONFIG) {
            assert_eq!(style.rotate, config.rest.rotate);
            assert_eq!(style.x_pct, config.rest.x_pct);
        }
        // the glow still switches
        assert!((fan.frame().glow_opacity - GLOW_SPREAD_OPACITY).abs() < 1e-3);
    }

    #[test]
    fn hover_release_returns_to_rest() {
        let mut fan = FanEngine::new(3, false, false).unwrap();
        fan.set_hover(true);
        for _ in 0..60 {
            fan.tick(1.0 / 60.0);
        }
        fan.set_hover(false);
        for _ in 0..600 {
            fan.tick(1.0 / 60.0);
        }
        for (style, config) in fan.frame().phones.iter().zip(&PHONE_CONFIG) {
            assert!((style.rotate - config.rest.rotate).abs() < 1e-3);
        }
    }
}

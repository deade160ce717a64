// parallax.rs - Multi-layer skyline composition
//
// Three scrolling layers, back to front, each drawn twice side by side
// by the renderer. A translation of exactly -W lands on the duplicate
// copy, so the loop is seamless. Depth is encoded through loop period
// alone: near layers loop faster.
//
// The reveal clock starts at the first visibility notification and
// never re-arms. Under reduced motion every output sits at its terminal
// state with zero translation.

use crate::layout;
use crate::math::{clamp, ease_in_out, ease_out, lerp};
use crate::reveal::Reveal;
use crate::scene::{LOOP_FG_S, LOOP_FRONT_S, LOOP_MID_S, STARS, W};

pub const LAYER_COUNT: usize = 3;

// Layer fade-in, seconds after reveal
const FADE_MID_DELAY_S: f32 = 0.2;
const FADE_FG_DELAY_S: f32 = 0.4;
const FADE_DURATION_S: f32 = 0.8;

// Moon fade
const MOON_DELAY_S: f32 = 0.8;
const MOON_DURATION_S: f32 = 1.2;

// Star twinkle: staggered start, then a mirrored keyframe loop
const STAR_DELAY_BASE_S: f32 = 0.3;
const STAR_DELAY_STEP_S: f32 = 0.12;
const STAR_PERIOD_BASE_S: f32 = 2.5;
const STAR_KEYFRAMES: [f32; 4] = [0.0, 0.9, 0.25, 0.9];
const STAR_STATIC_OPACITY: f32 = 0.7;

// FG windows
const WINDOW_LIT_OPACITY: f32 = 0.6;
const WINDOW_RAMP_S: f32 = 0.4;
const PULSE_EXTRA_DELAY_S: f32 = 0.5;
const PULSE_PERIOD_BASE_S: f32 = 2.5;
const PULSE_PERIOD_STEP_S: f32 = 0.8;
const PULSE_KEYFRAMES: [f32; 3] = [0.2, 0.85, 0.2];

/// Back-to-front layer order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Mid,
    Fg,
    Front,
}

impl Layer {
    pub const ALL: [Layer; LAYER_COUNT] = [Layer::Mid, Layer::Fg, Layer::Front];

    pub fn loop_period(self) -> f32 {
        match self {
            Layer::Mid => LOOP_MID_S,
            Layer::Fg => LOOP_FG_S,
            Layer::Front => LOOP_FRONT_S,
        }
    }

    /// Fade-in (delay, duration). The front layer never fades: it is
    /// opaque from mount and only its translation waits for the reveal.
    fn fade(self) -> Option<(f32, f32)> {
        match self {
            Layer::Mid => Some((FADE_MID_DELAY_S, FADE_DURATION_S)),
            Layer::Fg => Some((FADE_FG_DELAY_S, FADE_DURATION_S)),
            Layer::Front => None,
        }
    }
}

/// Per-frame derived style for one layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerState {
    pub offset_x: f32,
    pub opacity: f32,
}

/// Loop translation at time t: 0 at every period boundary, approaching
/// -W just before it.
#[inline]
pub fn loop_offset(t: f32, period: f32) -> f32 {
    -W * (t / period).fract()
}

pub struct CityEngine {
    reveal: Reveal,
    layers: [LayerState; LAYER_COUNT],
    window_opacity: Vec<f32>,
    star_opacity: Vec<f32>,
    moon_opacity: f32,
}

impl CityEngine {
    pub fn new(reduced_motion: bool) -> Self {
        let mut engine = Self {
            reveal: Reveal::new(0.0, reduced_motion),
            layers: [LayerState::default(); LAYER_COUNT],
            window_opacity: vec![0.0; layout::fg_layer().len()],
            star_opacity: vec![0.0; STARS.len()],
            moon_opacity: 0.0,
        };
        engine.recompute();
        engine
    }

    /// Visibility observer callback. Fires the reveal at most once per
    /// engine instance.
    pub fn set_visible(&mut self) {
        self.reveal.set_visible();
        self.recompute();
    }

    pub fn visible(&self) -> bool {
        self.reveal.visible()
    }

    /// Advance the clock and refresh every derived style.
    pub fn tick(&mut self, dt: f32) {
        self.reveal.tick(dt);
        self.recompute();
    }

    pub fn layers(&self) -> &[LayerState; LAYER_COUNT] {
        &self.layers
    }

    pub fn layer(&self, layer: Layer) -> LayerState {
        self.layers[layer as usize]
    }

    /// One opacity per generated FG window, in layout order.
    pub fn window_opacity(&self) -> &[f32] {
        &self.window_opacity
    }

    /// One opacity per star, in table order.
    pub fn star_opacity(&self) -> &[f32] {
        &self.star_opacity
    }

    pub fn moon_opacity(&self) -> f32 {
        self.moon_opacity
    }

    fn recompute(&mut self) {
        let t = self.reveal.elapsed();
        let reduced = self.reveal.reduced_motion();
        let visible = self.reveal.visible();
        let animate = visible && !reduced;

        for layer in Layer::ALL {
            let offset_x = if animate {
                loop_offset(t, layer.loop_period())
            } else {
                0.0
            };
            let opacity = match layer.fade() {
                None => 1.0,
                Some(_) if reduced => 1.0,
                Some((delay, duration)) if visible => clamp((t - delay) / duration, 0.0, 1.0),
                Some(_) => 0.0,
            };
            self.layers[layer as usize] = LayerState { offset_x, opacity };
        }

        for (i, win) in layout::fg_layer().iter().enumerate() {
            self.window_opacity[i] = if reduced {
                WINDOW_LIT_OPACITY
            } else if !visible {
                0.0
            } else if win.pulse {
                let start = win.delay + PULSE_EXTRA_DELAY_S;
                let period = PULSE_PERIOD_BASE_S + (i % 3) as f32 * PULSE_PERIOD_STEP_S;
                if t < start {
                    0.0
                } else {
                    keyframes_loop(t - start, period, &PULSE_KEYFRAMES)
                }
            } else {
                WINDOW_LIT_OPACITY * clamp((t - win.delay) / WINDOW_RAMP_S, 0.0, 1.0)
            };
        }

        for (i, _star) in STARS.iter().enumerate() {
            self.star_opacity[i] = if reduced {
                STAR_STATIC_OPACITY
            } else if !visible {
                0.0
            } else {
                let delay = STAR_DELAY_BASE_S + i as f32 * STAR_DELAY_STEP_S;
                let period = STAR_PERIOD_BASE_S + (i % 4) as f32;
                if t < delay {
                    0.0
                } else {
                    keyframes_mirror(t - delay, period, &STAR_KEYFRAMES)
                }
            };
        }

        self.moon_opacity = if reduced {
            1.0
        } else if visible {
            ease_out(clamp((t - MOON_DELAY_S) / MOON_DURATION_S, 0.0, 1.0))
        } else {
            0.0
        };
    }
}

/// One pass over `values` per `period`, then repeat from the first value.
fn keyframes_loop(t: f32, period: f32, values: &[f32]) -> f32 {
    keyframes_at(values, (t / period).fract())
}

/// One pass over `values` per `period`, reversing direction each pass.
fn keyframes_mirror(t: f32, period: f32, values: &[f32]) -> f32 {
    let cycle = t / period;
    let mut phase = cycle.fract();
    if cycle.floor() as i64 % 2 == 1 {
        phase = 1.0 - phase;
    }
    keyframes_at(values, phase)
}

fn keyframes_at(values: &[f32], phase: f32) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let pos = phase * (values.len() - 1) as f32;
            let idx = (pos.floor() as usize).min(values.len() - 2);
            lerp(values[idx], values[idx + 1], ease_in_out(pos - idx as f32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn loop_is_seamless_at_period_boundaries() {
        for layer in Layer::ALL {
            let period = layer.loop_period();
            assert_eq!(loop_offset(0.0, period), 0.0);
            assert!(loop_offset(period, period).abs() < EPS);
            // just before the boundary the layer sits a full width left
            assert!((loop_offset(period - 0.001, period) + W).abs() < 0.1);
            assert!((loop_offset(period / 2.0, period) + W / 2.0).abs() < 0.1);
        }
    }

    #[test]
    fn hidden_engine_shows_nothing_but_the_front_layer() {
        let engine = CityEngine::new(false);
        assert_eq!(engine.layer(Layer::Mid).opacity, 0.0);
        assert_eq!(engine.layer(Layer::Fg).opacity, 0.0);
        assert_eq!(engine.layer(Layer::Front).opacity, 1.0);
        assert!(engine.window_opacity().iter().all(|&o| o == 0.0));
        assert!(engine.star_opacity().iter().all(|&o| o == 0.0));
        assert_eq!(engine.moon_opacity(), 0.0);
        for layer in Layer::ALL {
            assert_eq!(engine.layer(layer).offset_x, 0.0);
        }
    }

    #[test]
    fn layers_fade_in_back_to_front() {
        let mut engine = CityEngine::new(false);
        engine.set_visible();
        engine.tick(0.3);
        assert!(engine.layer(Layer::Mid).opacity > 0.0);
        assert_eq!(engine.layer(Layer::Fg).opacity, 0.0);

        engine.tick(1.0);
        assert_eq!(engine.layer(Layer::Mid).opacity, 1.0);
        assert_eq!(engine.layer(Layer::Fg).opacity, 1.0);
    }

    #[test]
    fn reveal_fires_once() {
        let mut engine = CityEngine::new(false);
        engine.set_visible();
        engine.tick(2.0);
        let mid = engine.layer(Layer::Mid);
        engine.set_visible();
        assert_eq!(engine.layer(Layer::Mid), mid);
    }

    #[test]
    fn reduced_motion_is_a_static_snapshot() {
        let engine = CityEngine::new(true);
        for layer in Layer::ALL {
            assert_eq!(engine.layer(layer).offset_x, 0.0);
            assert_eq!(engine.layer(layer).opacity, 1.0);
        }
        assert!(engine
            .window_opacity()
            .iter()
            .all(|&o| o == WINDOW_LIT_OPACITY));
        assert!(engine
            .star_opacity()
            .iter()
            .all(|&o| o == STAR_STATIC_OPACITY));
        assert_eq!(engine.moon_opacity(), 1.0);
    }

    #[test]
    fn reduced_motion_never_translates() {
        let mut engine = CityEngine::new(true);
        engine.set_visible();
        engine.tick(100.0);
        for layer in Layer::ALL {
            assert_eq!(engine.layer(layer).offset_x, 0.0);
        }
    }

    #[test]
    fn windows_settle_lit_and_pulses_stay_in_band() {
        let mut engine = CityEngine::new(false);
        engine.set_visible();
        engine.tick(60.0);
        for (o, win) in engine.window_opacity().iter().zip(layout::fg_layer()) {
            if win.pulse {
                assert!(*o >= PULSE_KEYFRAMES[0] - EPS && *o <= PULSE_KEYFRAMES[1] + EPS);
            } else {
                assert_eq!(*o, WINDOW_LIT_OPACITY);
            }
        }
    }

    #[test]
    fn mirror_keyframes_reverse_each_pass() {
        let kf = [0.0, 1.0];
        assert!(keyframes_mirror(0.0, 1.0, &kf).abs() < EPS);
        assert!((keyframes_mirror(1.0, 1.0, &kf) - 1.0).abs() < EPS);
        assert!(keyframes_mirror(2.0, 1.0, &kf).abs() < EPS);
    }
}

// skyline-engine - Deterministic layout + scroll interpolation core
//
// ============================================================================
// Pure computation core for the portfolio's decorative visuals. The JS
// side owns the DOM, event listeners and drawing; this crate owns every
// number: procedural window layout, parallax loop offsets, fan poses,
// scroll-spy state. Static layout is handed over once as typed arrays;
// per-frame state is read straight out of wasm memory via ptr/len.
// ============================================================================

pub mod fan;
pub mod layout;
pub mod math;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod spring;
pub mod spy;

use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::prelude::*;

// ============================================================================
// CityScene - parallax skyline
// ============================================================================

/// Per-frame layer record: [offset_x, opacity]
const LAYER_STRIDE: usize = 2;
/// Static FG window record: [x, y, pulse, delay]
const FG_WINDOW_STRIDE: usize = 4;
/// Static small-window record: [x, y]
const SMALL_WINDOW_STRIDE: usize = 2;
/// Static star record: [cx, cy, r]
const STAR_STRIDE: usize = 3;
/// Static building record: [x, w, h]
const BUILDING_STRIDE: usize = 3;

#[wasm_bindgen]
pub struct CityScene {
    engine: parallax::CityEngine,
    layer_frame: Vec<f32>,
}

#[wasm_bindgen]
impl CityScene {
    #[wasm_bindgen(constructor)]
    pub fn new(reduced_motion: bool) -> Self {
        let mut scene = Self {
            engine: parallax::CityEngine::new(reduced_motion),
            layer_frame: vec![0.0; parallax::LAYER_COUNT * LAYER_STRIDE],
        };
        scene.refresh_layers();
        scene
    }

    /// Visibility observer callback; reveals at most once.
    pub fn set_visible(&mut self) {
        self.engine.set_visible();
        self.refresh_layers();
    }

    /// Advance the scene clock by dt seconds and refresh all buffers.
    pub fn tick(&mut self, dt: f32) {
        self.engine.tick(dt);
        self.refresh_layers();
    }

    // Per-frame state, zero-copy

    pub fn layers_ptr(&self) -> *const f32 {
        self.layer_frame.as_ptr()
    }

    pub fn layers_len(&self) -> usize {
        self.layer_frame.len()
    }

    pub fn window_opacity_ptr(&self) -> *const f32 {
        self.engine.window_opacity().as_ptr()
    }

    pub fn window_opacity_len(&self) -> usize {
        self.engine.window_opacity().len()
    }

    pub fn star_opacity_ptr(&self) -> *const f32 {
        self.engine.star_opacity().as_ptr()
    }

    pub fn star_opacity_len(&self) -> usize {
        self.engine.star_opacity().len()
    }

    pub fn moon_opacity(&self) -> f32 {
        self.engine.moon_opacity()
    }

    // Static layout, copied out once at mount

    pub fn canvas_width(&self) -> f32 {
        scene::W
    }

    pub fn canvas_height(&self) -> f32 {
        scene::H
    }

    pub fn fg_windows(&self) -> Float32Array {
        let mut flat = Vec::with_capacity(layout::fg_layer().len() * FG_WINDOW_STRIDE);
        for win in layout::fg_layer() {
            flat.extend_from_slice(&[win.x, win.y, win.pulse as u8 as f32, win.delay]);
        }
        Float32Array::from(flat.as_slice())
    }

    pub fn mid_windows(&self) -> Float32Array {
        small_windows_array(layout::mid_layer())
    }

    pub fn mid_thin_windows(&self) -> Float32Array {
        small_windows_array(layout::mid_thin_layer())
    }

    pub fn mid_buildings(&self) -> Float32Array {
        buildings_array(&scene::MID_BUILDINGS)
    }

    pub fn fg_buildings(&self) -> Float32Array {
        buildings_array(&scene::FG_BUILDINGS)
    }

    pub fn antenna_indices(&self) -> Uint32Array {
        let flat: Vec<u32> = scene::ANTENNA_INDICES.iter().map(|&i| i as u32).collect();
        Uint32Array::from(flat.as_slice())
    }

    pub fn stars(&self) -> Float32Array {
        let mut flat = Vec::with_capacity(scene::STARS.len() * STAR_STRIDE);
        for star in &scene::STARS {
            flat.extend_from_slice(&[star.cx, star.cy, star.r]);
        }
        Float32Array::from(flat.as_slice())
    }

    pub fn front_silhouette_count(&self) -> usize {
        scene::FRONT_SILHOUETTES.len()
    }

    /// Flattened [x, y] pairs of one silhouette polygon.
    pub fn front_silhouette(&self, index: usize) -> Float32Array {
        match scene::FRONT_SILHOUETTES.get(index) {
            Some(points) => {
                let mut flat = Vec::with_capacity(points.len() * 2);
                for p in *points {
                    flat.extend_from_slice(p);
                }
                Float32Array::from(flat.as_slice())
            }
            None => Float32Array::new_with_length(0),
        }
    }

    fn refresh_layers(&mut self) {
        for (chunk, state) in self
            .layer_frame
            .chunks_exact_mut(LAYER_STRIDE)
            .zip(self.engine.layers())
        {
            chunk[0] = state.offset_x;
            chunk[1] = state.opacity;
        }
    }
}

fn small_windows_array(wins: &[layout::SmallWindow]) -> Float32Array {
    let mut flat = Vec::with_capacity(wins.len() * SMALL_WINDOW_STRIDE);
    for win in wins {
        flat.extend_from_slice(&[win.x, win.y]);
    }
    Float32Array::from(flat.as_slice())
}

fn buildings_array(buildings: &[scene::Building]) -> Float32Array {
    let mut flat = Vec::with_capacity(buildings.len() * BUILDING_STRIDE);
    for b in buildings {
        flat.extend_from_slice(&[b.x, b.w, b.h]);
    }
    Float32Array::from(flat.as_slice())
}

// ============================================================================
// ScreenshotFan - phone fan interpolation
// ============================================================================

/// Per-frame phone record: [rotate, x_pct, z, scale, opacity, y_px]
const PHONE_STRIDE: usize = 6;

#[wasm_bindgen]
pub struct ScreenshotFan {
    engine: Option<fan::FanEngine>,
    frame: Vec<f32>,
    glow: [f32; 3],
}

#[wasm_bindgen]
impl ScreenshotFan {
    /// The fan only forms for exactly three screenshots; any other
    /// count yields an engine that renders nothing.
    #[wasm_bindgen(constructor)]
    pub fn new(image_count: usize, small_viewport: bool, reduced_motion: bool) -> Self {
        let engine = fan::FanEngine::new(image_count, small_viewport, reduced_motion);
        let mut out = Self {
            engine,
            frame: vec![0.0; fan::TARGET_COUNT * PHONE_STRIDE],
            glow: [0.0; 3],
        };
        out.refresh();
        out
    }

    /// False when the count guard tripped: render nothing.
    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    pub fn is_scroll_linked(&self) -> bool {
        matches!(
            self.engine.as_ref().map(fan::FanEngine::mode),
            Some(fan::DriveMode::ScrollLinked)
        )
    }

    pub fn set_progress(&mut self, v: f32) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_progress(v);
        }
        self.refresh();
    }

    /// Feed the container top as a viewport-height fraction; maps
    /// through the scroll window before clamping.
    pub fn set_container_top(&mut self, frac: f32) {
        self.set_progress(fan::scroll_progress(frac));
    }

    pub fn set_hover(&mut self, hover: bool) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_hover(hover);
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(engine) = self.engine.as_mut() {
            engine.tick(dt);
        }
        self.refresh();
    }

    pub fn phones_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn phones_len(&self) -> usize {
        if self.engine.is_some() {
            self.frame.len()
        } else {
            0
        }
    }

    pub fn glow_opacity(&self) -> f32 {
        self.glow[0]
    }

    pub fn glow_scale(&self) -> f32 {
        self.glow[1]
    }

    pub fn fade_opacity(&self) -> f32 {
        self.glow[2]
    }

    pub fn z_index(&self, phone: usize) -> i32 {
        fan::PHONE_CONFIG.get(phone).map(|c| c.z_index).unwrap_or(0)
    }

    /// -1 left, 0 none, 1 right.
    pub fn fade_direction(&self, phone: usize) -> i32 {
        match fan::PHONE_CONFIG.get(phone).map(|c| c.fade) {
            Some(fan::FadeDirection::Left) => -1,
            Some(fan::FadeDirection::Right) => 1,
            _ => 0,
        }
    }

    fn refresh(&mut self) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let frame = engine.frame();
        for (chunk, style) in self.frame.chunks_exact_mut(PHONE_STRIDE).zip(&frame.phones) {
            chunk.copy_from_slice(&[
                style.rotate,
                style.x_pct,
                style.z,
                style.scale,
                style.opacity,
                style.y_px,
            ]);
        }
        self.glow = [frame.glow_opacity, frame.glow_scale, frame.fade_opacity];
    }
}

// ============================================================================
// ScrollSpy - navigation state
// ============================================================================

#[wasm_bindgen(js_name = ScrollSpy)]
pub struct ScrollSpyBinding {
    inner: spy::ScrollSpy,
}

#[wasm_bindgen(js_class = ScrollSpy)]
impl ScrollSpyBinding {
    #[wasm_bindgen(constructor)]
    pub fn new(section_count: usize) -> Self {
        Self {
            inner: spy::ScrollSpy::new(section_count),
        }
    }

    /// Scroll/resize handler. `tops` holds one viewport-relative top
    /// per section; NaN marks a section the host could not measure.
    pub fn request(
        &mut self,
        scroll_y: f32,
        viewport_h: f32,
        document_h: f32,
        tops: &Float32Array,
    ) {
        let mut raw = vec![0.0f32; tops.length() as usize];
        tops.copy_to(&mut raw);
        let tops: Vec<Option<f32>> = raw
            .into_iter()
            .map(|t| if t.is_nan() { None } else { Some(t) })
            .collect();
        self.inner.request(
            spy::Viewport {
                scroll_y,
                viewport_h,
                document_h,
            },
            &tops,
        );
    }

    /// Animation-frame callback; at most one recompute per frame.
    pub fn on_frame(&mut self, now_ms: f64) {
        self.inner.on_frame(now_ms);
    }

    /// Explicit navigation; holds the selection for the cooldown.
    pub fn select(&mut self, index: usize, now_ms: f64) {
        self.inner.select(index, now_ms);
    }

    pub fn active(&self) -> usize {
        self.inner.active()
    }
}

// ============================================================================
// Pointer effects
// ============================================================================

#[wasm_bindgen(js_name = CursorTrail)]
pub struct CursorTrailBinding {
    inner: pointer::CursorTrail,
}

#[wasm_bindgen(js_class = CursorTrail)]
impl CursorTrailBinding {
    #[wasm_bindgen(constructor)]
    pub fn new(small_viewport: bool, reduced_motion: bool) -> Self {
        Self {
            inner: pointer::CursorTrail::new(small_viewport, reduced_motion),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.active()
    }

    pub fn on_pointer(&mut self, x: f32, y: f32) {
        self.inner.on_pointer(x, y);
    }

    pub fn tick(&mut self, dt: f32) {
        self.inner.tick(dt);
    }

    pub fn dot_x(&self) -> f32 {
        self.inner.dot().0
    }

    pub fn dot_y(&self) -> f32 {
        self.inner.dot().1
    }

    pub fn ring_x(&self) -> f32 {
        self.inner.ring().0
    }

    pub fn ring_y(&self) -> f32 {
        self.inner.ring().1
    }
}

#[wasm_bindgen(js_name = SpotlightCard)]
pub struct SpotlightBinding {
    inner: pointer::Spotlight,
}

#[wasm_bindgen(js_class = SpotlightCard)]
impl SpotlightBinding {
    #[wasm_bindgen(constructor)]
    pub fn new(small_viewport: bool) -> Self {
        Self {
            inner: pointer::Spotlight::new(small_viewport),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.active()
    }

    pub fn on_pointer(&mut self, client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) {
        self.inner.on_pointer(client_x, client_y, rect_left, rect_top);
    }

    pub fn center_x(&self) -> f32 {
        self.inner.center().0
    }

    pub fn center_y(&self) -> f32 {
        self.inner.center().1
    }

    pub fn spotlight_radius(&self) -> f32 {
        pointer::SPOTLIGHT_RADIUS_PX
    }

    pub fn border_glow_radius(&self) -> f32 {
        pointer::BORDER_GLOW_RADIUS_PX
    }
}

// math.rs - Interpolation and integer-mix primitives
//
// Everything here is closed-form. mix() is the only source of
// pseudo-randomness in the crate: a wrapping multiply by a large odd
// constant, so identical seed expressions always give identical output
// on every platform and on both the wasm and native builds.

/// Linear interpolation between a and b by factor t.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value to [lo, hi].
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Remap v from [start, end] to [0, 1], clamped.
/// A degenerate range (end <= start) collapses to a step at start.
#[inline]
pub fn remap01(v: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if v < start { 0.0 } else { 1.0 };
    }
    clamp((v - start) / (end - start), 0.0, 1.0)
}

/// Scramble a small seed with a layer-specific odd constant.
#[inline]
pub fn mix(seed: u32, constant: u32) -> u32 {
    seed.wrapping_mul(constant)
}

/// Percentile in [0, 100) of a mixed seed. Layout decisions compare
/// this against per-layer density thresholds.
#[inline]
pub fn percentile(seed: u32, constant: u32) -> u32 {
    mix(seed, constant) % 100
}

/// Cosine ease-in-out over [0, 1].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = clamp(t, 0.0, 1.0);
    0.5 - 0.5 * (t * std::f32::consts::PI).cos()
}

/// Quadratic ease-out over [0, 1].
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = clamp(t, 0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

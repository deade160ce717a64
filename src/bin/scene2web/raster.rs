// raster.rs - PNG preview
//
// Terminal-state render at an integer scale. Gradients are approximated
// with linear alpha ramps; close enough to eyeball layout changes
// without loading the site.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

use skyline_engine::layout;
use skyline_engine::scene::*;

const STAR_STATIC_OPACITY: f32 = 0.7;
const WINDOW_LIT_OPACITY: f32 = 0.6;
const ANTENNA_TIP_OPACITY: f32 = 0.6;
const MOON_OPACITY: f32 = 0.85;
const HORIZON_GLOW_ALPHA: f32 = 0.06;

pub fn write_png(path: &Path, scale: u32) -> Result<()> {
    let canvas = render(scale.max(1));
    canvas
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn render(scale: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(
        W as u32 * scale,
        H as u32 * scale,
        Rgb(SKY_CLR),
    );
    let s = scale as f32;

    for star in &STARS {
        fill_circle(&mut img, star.cx * s, star.cy * s, star.r * s, STAR_CLR, STAR_STATIC_OPACITY);
    }
    fill_crescent(&mut img, s);

    for b in &MID_BUILDINGS {
        fill_rect(&mut img, b.x * s, (H - b.h) * s, b.w * s, b.h * s, MID_CLR, 1.0);
    }
    for w in layout::mid_layer().iter().chain(layout::mid_thin_layer()) {
        fill_rect(
            &mut img,
            w.x * s,
            w.y * s,
            MID_WIN_W * s,
            MID_WIN_H * s,
            CYAN_CLR,
            MID_WIN_OPACITY,
        );
    }

    for b in &FG_BUILDINGS {
        fill_rect(&mut img, b.x * s, (H - b.h) * s, b.w * s, b.h * s, FG_CLR, 1.0);
    }
    for &idx in &ANTENNA_INDICES {
        let b = &FG_BUILDINGS[idx];
        let cx = b.x + b.w / 2.0;
        let top = H - b.h;
        fill_rect(
            &mut img,
            (cx - ANTENNA_W / 2.0) * s,
            (top - ANTENNA_H) * s,
            ANTENNA_W * s,
            ANTENNA_H * s,
            FG_CLR,
            1.0,
        );
        fill_circle(
            &mut img,
            cx * s,
            (top - ANTENNA_H - 1.0) * s,
            ANTENNA_TIP_R * s,
            CYAN_CLR,
            ANTENNA_TIP_OPACITY,
        );
    }
    for w in layout::fg_layer() {
        fill_rect(
            &mut img,
            w.x * s,
            w.y * s,
            FG_WIN_W * s,
            FG_WIN_H * s,
            CYAN_CLR,
            WINDOW_LIT_OPACITY,
        );
    }

    for poly in FRONT_SILHOUETTES {
        fill_polygon(&mut img, poly, s, FRONT_CLR);
    }

    fill_rect(&mut img, 0.0, GROUND_Y * s, W * s, GROUND_H * s, FRONT_CLR, 1.0);
    horizon_glow(&mut img, s);

    img
}

#[inline]
fn blend(px: &mut Rgb<u8>, color: [u8; 3], alpha: f32) {
    let a = alpha.clamp(0.0, 1.0);
    for (dst, src) in px.0.iter_mut().zip(color) {
        *dst = (*dst as f32 * (1.0 - a) + src as f32 * a) as u8;
    }
}

fn fill_rect(img: &mut RgbImage, x: f32, y: f32, w: f32, h: f32, color: [u8; 3], alpha: f32) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + w).max(0.0) as u32).min(img.width());
    let y1 = ((y + h).max(0.0) as u32).min(img.height());
    for py in y0..y1 {
        for px in x0..x1 {
            blend(img.get_pixel_mut(px, py), color, alpha);
        }
    }
}

fn fill_circle(img: &mut RgbImage, cx: f32, cy: f32, r: f32, color: [u8; 3], alpha: f32) {
    let r = r.max(0.5);
    let x0 = (cx - r).floor().max(0.0) as u32;
    let y0 = (cy - r).floor().max(0.0) as u32;
    let x1 = ((cx + r).ceil() as u32 + 1).min(img.width());
    let y1 = ((cy + r).ceil() as u32 + 1).min(img.height());
    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                blend(img.get_pixel_mut(px, py), color, alpha);
            }
        }
    }
}

/// Moon disc minus the offset mask circle.
fn fill_crescent(img: &mut RgbImage, s: f32) {
    let (cx, cy, r) = (MOON_CX * s, MOON_CY * s, MOON_R * s);
    let (mx, my, mr) = (MOON_MASK_CX * s, MOON_MASK_CY * s, MOON_MASK_R * s);
    let x0 = (cx - r).floor().max(0.0) as u32;
    let y0 = (cy - r).floor().max(0.0) as u32;
    let x1 = ((cx + r).ceil() as u32 + 1).min(img.width());
    let y1 = ((cy + r).ceil() as u32 + 1).min(img.height());
    for py in y0..y1 {
        for px in x0..x1 {
            let fx = px as f32 + 0.5;
            let fy = py as f32 + 0.5;
            let inside = (fx - cx).powi(2) + (fy - cy).powi(2) <= r * r;
            let masked = (fx - mx).powi(2) + (fy - my).powi(2) <= mr * mr;
            if inside && !masked {
                blend(img.get_pixel_mut(px, py), STAR_CLR, MOON_OPACITY);
            }
        }
    }
}

/// Even-odd scanline fill. The silhouettes are small closed polygons,
/// so a per-row intersection sort is plenty.
fn fill_polygon(img: &mut RgbImage, poly: &[[f32; 2]], s: f32, color: [u8; 3]) {
    if poly.len() < 3 {
        return;
    }
    let ys = poly.iter().map(|p| p[1] * s);
    let y_min = ys.clone().fold(f32::MAX, f32::min).max(0.0) as u32;
    let y_max = (ys.fold(f32::MIN, f32::max).ceil() as u32).min(img.height());

    for py in y_min..y_max {
        let line = py as f32 + 0.5;
        let mut crossings = Vec::new();
        for i in 0..poly.len() {
            let [x0, y0] = [poly[i][0] * s, poly[i][1] * s];
            let j = (i + 1) % poly.len();
            let [x1, y1] = [poly[j][0] * s, poly[j][1] * s];
            if (y0 <= line) != (y1 <= line) {
                crossings.push(x0 + (line - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].max(0.0) as u32;
            let x1 = (pair[1].max(0.0) as u32).min(img.width());
            for px in x0..x1 {
                blend(img.get_pixel_mut(px, py), color, 1.0);
            }
        }
    }
}

/// Cyan wash fading upward from the ground line.
fn horizon_glow(img: &mut RgbImage, s: f32) {
    let band_h = HORIZON_GLOW_H * s;
    let y0 = ((H - HORIZON_GLOW_H) * s).max(0.0) as u32;
    let y1 = img.height();
    let w = img.width();
    for py in y0..y1 {
        let depth = (py as f32 - y0 as f32) / band_h;
        let alpha = HORIZON_GLOW_ALPHA * depth;
        for px in 0..w {
            blend(img.get_pixel_mut(px, py), CYAN_CLR, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_covers_the_canvas() {
        let img = render(1);
        assert_eq!(img.width(), W as u32);
        assert_eq!(img.height(), H as u32);
        assert_eq!(img.get_pixel(0, 0).0, SKY_CLR);
        // ground strip color, modulo the horizon glow wash
        let px = img.get_pixel(0, GROUND_Y as u32 + 1).0;
        for (c, e) in px.iter().zip(FRONT_CLR) {
            assert!((*c as i16 - e as i16).abs() <= 12);
        }
    }

    #[test]
    fn buildings_land_where_the_tables_say() {
        let img = render(1);
        let b = &FG_BUILDINGS[0];
        let px = img.get_pixel((b.x + 1.0) as u32, (H - b.h + 1.0) as u32);
        assert_eq!(px.0, FG_CLR);
    }

    #[test]
    fn polygon_fill_handles_degenerate_input() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb(SKY_CLR));
        fill_polygon(&mut img, &[[1.0, 1.0], [2.0, 2.0]], 1.0, FRONT_CLR);
        assert_eq!(img.get_pixel(1, 1).0, SKY_CLR);
    }
}

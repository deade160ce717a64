// svg.rs - Static SVG snapshot
//
// The reduced-motion terminal state as a standalone file: every layer
// fully revealed, zero translation. The site inlines this for no-JS
// visitors; it must stay visually identical to the live scene at rest.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use skyline_engine::scene::*;
use skyline_engine::{layout, scene};

use crate::export::hex;

const STAR_STATIC_OPACITY: f32 = 0.7;
const WINDOW_LIT_OPACITY: f32 = 0.6;
const ANTENNA_TIP_OPACITY: f32 = 0.6;
const MOON_OPACITY: f32 = 0.85;

pub fn write_svg(path: &Path) -> Result<()> {
    let svg = render();
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))
}

fn render() -> String {
    let cyan = hex(CYAN_CLR);
    let star = hex(STAR_CLR);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {W} {H}\" \
         preserveAspectRatio=\"xMidYMax slice\" aria-hidden=\"true\">"
    );

    // gradients and the crescent mask
    let _ = writeln!(out, "  <defs>");
    let _ = writeln!(
        out,
        "    <radialGradient id=\"moon-halo\" cx=\"50%\" cy=\"50%\" r=\"50%\">\
         <stop offset=\"0%\" stop-color=\"{cyan}\" stop-opacity=\"0.12\"/>\
         <stop offset=\"60%\" stop-color=\"{cyan}\" stop-opacity=\"0.04\"/>\
         <stop offset=\"100%\" stop-color=\"{cyan}\" stop-opacity=\"0\"/>\
         </radialGradient>"
    );
    let _ = writeln!(
        out,
        "    <radialGradient id=\"moon-outer-halo\" cx=\"50%\" cy=\"50%\" r=\"50%\">\
         <stop offset=\"0%\" stop-color=\"{cyan}\" stop-opacity=\"0.04\"/>\
         <stop offset=\"100%\" stop-color=\"{cyan}\" stop-opacity=\"0\"/>\
         </radialGradient>"
    );
    let _ = writeln!(
        out,
        "    <linearGradient id=\"mid-fog\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"0%\" stop-color=\"{sky}\" stop-opacity=\"0\"/>\
         <stop offset=\"40%\" stop-color=\"{sky}\" stop-opacity=\"0.2\"/>\
         <stop offset=\"100%\" stop-color=\"{sky}\" stop-opacity=\"0\"/>\
         </linearGradient>",
        sky = hex(SKY_CLR)
    );
    let _ = writeln!(
        out,
        "    <linearGradient id=\"horizon-glow\" x1=\"0\" y1=\"1\" x2=\"0\" y2=\"0\">\
         <stop offset=\"0%\" stop-color=\"{cyan}\" stop-opacity=\"0.06\"/>\
         <stop offset=\"100%\" stop-color=\"{cyan}\" stop-opacity=\"0\"/>\
         </linearGradient>"
    );
    let _ = writeln!(
        out,
        "    <mask id=\"crescent-mask\">\
         <circle cx=\"{MOON_CX}\" cy=\"{MOON_CY}\" r=\"{MOON_R}\" fill=\"white\"/>\
         <circle cx=\"{MOON_MASK_CX}\" cy=\"{MOON_MASK_CY}\" r=\"{MOON_MASK_R}\" fill=\"black\"/>\
         </mask>"
    );
    let _ = writeln!(out, "  </defs>");

    // sky
    let _ = writeln!(
        out,
        "  <rect width=\"{W}\" height=\"{H}\" fill=\"{}\"/>",
        hex(SKY_CLR)
    );

    // stars and moon
    for s in &STARS {
        let _ = writeln!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{star}\" opacity=\"{STAR_STATIC_OPACITY}\"/>",
            s.cx, s.cy, s.r
        );
    }
    let _ = writeln!(
        out,
        "  <circle cx=\"{MOON_CX}\" cy=\"{MOON_CY}\" r=\"{MOON_OUTER_HALO_R}\" fill=\"url(#moon-outer-halo)\"/>"
    );
    let _ = writeln!(
        out,
        "  <circle cx=\"{MOON_CX}\" cy=\"{MOON_CY}\" r=\"{MOON_HALO_R}\" fill=\"url(#moon-halo)\"/>"
    );
    let _ = writeln!(
        out,
        "  <circle cx=\"{MOON_CX}\" cy=\"{MOON_CY}\" r=\"{MOON_R}\" fill=\"{star}\" \
         opacity=\"{MOON_OPACITY}\" mask=\"url(#crescent-mask)\"/>"
    );

    // mid layer
    for b in &MID_BUILDINGS {
        rect(&mut out, b, hex(MID_CLR));
    }
    for w in layout::mid_layer() {
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"{}\" width=\"{MID_WIN_W}\" height=\"{MID_WIN_H}\" rx=\"0.3\" \
             fill=\"{cyan}\" opacity=\"{MID_WIN_OPACITY}\"/>",
            w.x, w.y
        );
    }
    for w in layout::mid_thin_layer() {
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"{}\" width=\"{MID_WIN_W}\" height=\"{MID_WIN_H}\" rx=\"0.3\" \
             fill=\"{cyan}\" opacity=\"{MID_WIN_OPACITY}\"/>",
            w.x, w.y
        );
    }

    // fog band between mid and fg
    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"{FOG_Y}\" width=\"{W}\" height=\"{FOG_H}\" fill=\"url(#mid-fog)\"/>"
    );

    // fg layer with antennas and lit windows
    for b in &FG_BUILDINGS {
        rect(&mut out, b, hex(FG_CLR));
    }
    for &idx in &ANTENNA_INDICES {
        let b = &FG_BUILDINGS[idx];
        let cx = b.x + b.w / 2.0;
        let top = H - b.h;
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"{}\" width=\"{ANTENNA_W}\" height=\"{ANTENNA_H}\" fill=\"{}\"/>",
            cx - ANTENNA_W / 2.0,
            top - ANTENNA_H,
            hex(FG_CLR)
        );
        let _ = writeln!(
            out,
            "  <circle cx=\"{cx}\" cy=\"{}\" r=\"{ANTENNA_TIP_R}\" fill=\"{cyan}\" \
             opacity=\"{ANTENNA_TIP_OPACITY}\"/>",
            top - ANTENNA_H - 1.0
        );
    }
    for w in layout::fg_layer() {
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"{}\" width=\"{FG_WIN_W}\" height=\"{FG_WIN_H}\" rx=\"0.5\" \
             fill=\"{cyan}\" opacity=\"{WINDOW_LIT_OPACITY}\"/>",
            w.x, w.y
        );
    }

    // front silhouettes
    for poly in FRONT_SILHOUETTES {
        let mut d = String::new();
        for (i, [x, y]) in poly.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x},{y} ");
        }
        let _ = writeln!(out, "  <path d=\"{}Z\" fill=\"{}\"/>", d, hex(FRONT_CLR));
    }

    // ground strip and horizon glow
    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"{GROUND_Y}\" width=\"{W}\" height=\"{GROUND_H}\" fill=\"{}\"/>",
        hex(FRONT_CLR)
    );
    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"{}\" width=\"{W}\" height=\"{HORIZON_GLOW_H}\" fill=\"url(#horizon-glow)\"/>",
        H - HORIZON_GLOW_H
    );

    out.push_str("</svg>\n");
    out
}

fn rect(out: &mut String, b: &scene::Building, fill: String) {
    let _ = writeln!(
        out,
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"/>",
        b.x,
        H - b.h,
        b.w,
        b.h
    );
}

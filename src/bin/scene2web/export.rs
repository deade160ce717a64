// export.rs - JSON / TS layout export
//
// One Skyline document carrying the static tables plus every generated
// collection, shaped the way the JS renderer consumes it.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use skyline_engine::{layout, scene};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Skyline {
    canvas: Canvas,
    loop_seconds: Loops,
    palette: Palette,
    mid_buildings: Vec<[f32; 3]>,
    fg_buildings: Vec<[f32; 3]>,
    antenna_indices: Vec<usize>,
    fg_windows: Vec<FgWindow>,
    mid_windows: Vec<[f32; 2]>,
    mid_thin_windows: Vec<[f32; 2]>,
    stars: Vec<[f32; 3]>,
    front_silhouettes: Vec<Vec<[f32; 2]>>,
}

#[derive(Serialize)]
struct Canvas {
    w: f32,
    h: f32,
}

#[derive(Serialize)]
struct Loops {
    mid: f32,
    fg: f32,
    front: f32,
}

#[derive(Serialize)]
struct Palette {
    sky: String,
    mid: String,
    fg: String,
    front: String,
    cyan: String,
    star: String,
}

#[derive(Serialize)]
struct FgWindow {
    x: f32,
    y: f32,
    pulse: bool,
    delay: f32,
}

pub(crate) fn hex(c: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

fn collect() -> Skyline {
    Skyline {
        canvas: Canvas {
            w: scene::W,
            h: scene::H,
        },
        loop_seconds: Loops {
            mid: scene::LOOP_MID_S,
            fg: scene::LOOP_FG_S,
            front: scene::LOOP_FRONT_S,
        },
        palette: Palette {
            sky: hex(scene::SKY_CLR),
            mid: hex(scene::MID_CLR),
            fg: hex(scene::FG_CLR),
            front: hex(scene::FRONT_CLR),
            cyan: hex(scene::CYAN_CLR),
            star: hex(scene::STAR_CLR),
        },
        mid_buildings: scene::MID_BUILDINGS.iter().map(|b| [b.x, b.w, b.h]).collect(),
        fg_buildings: scene::FG_BUILDINGS.iter().map(|b| [b.x, b.w, b.h]).collect(),
        antenna_indices: scene::ANTENNA_INDICES.to_vec(),
        fg_windows: layout::fg_layer()
            .iter()
            .map(|w| FgWindow {
                x: w.x,
                y: w.y,
                pulse: w.pulse,
                delay: w.delay,
            })
            .collect(),
        mid_windows: layout::mid_layer().iter().map(|w| [w.x, w.y]).collect(),
        mid_thin_windows: layout::mid_thin_layer().iter().map(|w| [w.x, w.y]).collect(),
        stars: scene::STARS.iter().map(|s| [s.cx, s.cy, s.r]).collect(),
        front_silhouettes: scene::FRONT_SILHOUETTES
            .iter()
            .map(|poly| poly.to_vec())
            .collect(),
    }
}

pub fn write_json(path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&collect())?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

pub fn write_ts(path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&collect())?;
    let ts = format!("// Generated by scene2web - do not edit\n\nexport const SKYLINE = {json} as const;\n");
    std::fs::write(path, ts).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_as_json() {
        let json = serde_json::to_string(&collect()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["canvas"]["w"], 800.0);
        assert_eq!(value["antennaIndices"].as_array().unwrap().len(), 5);
        assert!(!value["fgWindows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn hex_formats_palette_colors() {
        assert_eq!(hex([0x0c, 0x12, 0x22]), "#0c1222");
        assert_eq!(hex([0x22, 0xd3, 0xee]), "#22d3ee");
    }
}

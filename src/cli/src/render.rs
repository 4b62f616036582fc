//! Terminal rendering of a cube as a flattened net:
//!
//! ```text
//!        U U U
//!        U U U
//!        U U U
//! L L L  F F F  R R R  B B B
//! L L L  F F F  R R R  B B B
//! L L L  F F F  R R R  B B B
//!        D D D
//!        D D D
//!        D D D
//! ```

use bitcube_core::{Color, CubeState, Face, LaneOutOfRange};
use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::config::Config;

/// Where lane `k` sits in a face's row-major 3x3 grid. Index 4 is the center.
const LANE_TO_GRID: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

const MIDDLE_ROW: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

const FACE_GAP: &str = "  ";

/// The colors of `face` row by row, center included.
pub fn face_grid(cube: &CubeState, face: Face) -> Result<[[Color; 3]; 3], LaneOutOfRange> {
    let mut grid = [face.canonical_color(); 9];
    for (lane, &cell) in (1..).zip(LANE_TO_GRID.iter()) {
        grid[cell] = cube.color_at(face, lane)?;
    }
    Ok([
        [grid[0], grid[1], grid[2]],
        [grid[3], grid[4], grid[5]],
        [grid[6], grid[7], grid[8]],
    ])
}

fn facelet(color: Color, config: &Config) -> String {
    if config.display.color {
        let [r, g, b] = config.palette.rgb(color);
        config.display.glyph.truecolor(r, g, b).to_string()
    } else {
        color.letter().to_string()
    }
}

fn row(colors: [Color; 3], config: &Config) -> String {
    colors.iter().map(|&color| facelet(color, config)).join(" ")
}

/// Render the whole cube as a net, one line per facelet row.
pub fn net(cube: &CubeState, config: &Config) -> Result<String, LaneOutOfRange> {
    // Every facelet is one column wide
    let indent = " ".repeat(5 + FACE_GAP.len());
    let up = face_grid(cube, Face::Up)?;
    let middle = MIDDLE_ROW
        .iter()
        .map(|&face| face_grid(cube, face))
        .collect::<Result<Vec<_>, _>>()?;
    let down = face_grid(cube, Face::Down)?;

    let mut out = String::new();
    for colors in up {
        out.push_str(&format!("{indent}{}\n", row(colors, config)));
    }
    for i in 0..3 {
        let line = middle.iter().map(|grid| row(grid[i], config)).join(FACE_GAP);
        out.push_str(&format!("{line}\n"));
    }
    for colors in down {
        out.push_str(&format!("{indent}{}\n", row(colors, config)));
    }
    Ok(out)
}

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};

use crate::color::ColorRecord;
use crate::pipeline::collect::ColorSet;

const SWATCHES_PER_ROW: usize = 8;

fn to_color(c: ColorRecord) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Print `set` as rows of truecolor swatches, each followed by its hex code.
pub fn write_swatches<W: Write>(set: &ColorSet, name: &str, out: &mut W) -> std::io::Result<()> {
    queue!(out, Print(format!("{name} ({} colors)\n", set.len())))?;
    let colors: Vec<ColorRecord> = set.iter().collect();
    for row in colors.chunks(SWATCHES_PER_ROW) {
        queue!(out, Print("  "))?;
        for &color in row {
            queue!(
                out,
                PrintStyledContent("    ".on(to_color(color))),
                Print(format!(" {} ", color.to_hex())),
            )?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

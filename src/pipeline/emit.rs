use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use crate::catalog::{Catalog, MergeOutcome};
use crate::error::{PaletteError, Result};
use crate::pipeline::collect::ColorSet;

/// The three views of one palette. Entry `i` of each describes the same color.
#[derive(Debug, Clone)]
pub struct PaletteArtifacts {
    /// Comma-joined 4-field blocks.
    pub text: String,
    /// Newline-joined `#RRGGBB` codes.
    pub hex: String,
    /// 1-pixel-tall strip, one pixel per color.
    pub strip: RgbaImage,
}

impl PaletteArtifacts {
    /// Render all three views in a single pass over `set`.
    pub fn build(set: &ColorSet) -> Self {
        let mut text = String::new();
        let mut hex = String::new();
        let mut strip = RgbaImage::new(set.len() as u32, 1);

        for (i, color) in set.iter().enumerate() {
            if i > 0 {
                text.push(',');
                hex.push('\n');
            }
            text.push_str(&color.to_block());
            hex.push_str(&color.to_hex());
            strip.put_pixel(i as u32, 0, color.into());
        }

        Self { text, hex, strip }
    }
}

/// What `emit` wrote.
#[derive(Debug, Clone)]
pub struct Emitted {
    pub dir: PathBuf,
    /// `None` when no catalog is loaded.
    pub merge: Option<MergeOutcome>,
}

/// Output name without its extension. Everything after the first `.` goes.
pub fn output_stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Create `output_root/<stem>/`, merge `set` into the catalog, then write
/// `<stem>.txt`, `<stem>_hex.txt` and `<stem>.png` there.
///
/// An empty set writes nothing and returns `Ok(None)`.
pub fn emit(
    set: &ColorSet,
    output_name: &str,
    output_root: &Path,
    catalog: Option<&mut Catalog>,
) -> Result<Option<Emitted>> {
    if set.is_empty() {
        debug!("{output_name}: no colors, nothing to write");
        return Ok(None);
    }

    let stem = output_stem(output_name);
    let dir = output_root.join(stem);
    std::fs::create_dir_all(&dir).map_err(|e| PaletteError::io(&dir, e))?;

    let artifacts = PaletteArtifacts::build(set);
    let merge = catalog.map(|catalog| catalog.merge(output_name, set));

    let text_path = dir.join(format!("{stem}.txt"));
    std::fs::write(&text_path, &artifacts.text).map_err(|e| PaletteError::io(&text_path, e))?;

    let hex_path = dir.join(format!("{stem}_hex.txt"));
    std::fs::write(&hex_path, &artifacts.hex).map_err(|e| PaletteError::io(&hex_path, e))?;

    let png_path = dir.join(format!("{stem}.png"));
    artifacts
        .strip
        .save(&png_path)
        .map_err(|source| PaletteError::StripUnwritable {
            path: png_path.clone(),
            source,
        })?;

    Ok(Some(Emitted { dir, merge }))
}

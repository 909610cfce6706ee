//! Flattened layouts for the two catalog fields that hand-authored catalogs
//! write differently from plain pretty JSON.
//!
//! The catalog is serialized with tab indentation, so every field lives at a
//! fixed depth: `texture-names` entries sit 4 tabs deep and `colors` rows 6.
//! The renderers emit finished JSON fragments which the serializer splices in
//! verbatim through `RawValue`.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

const TEXTURE_NAME_DEPTH: usize = 4;
const COLOR_ROW_DEPTH: usize = 6;

fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}

fn bracketed(rows: Vec<String>, depth: usize) -> String {
    if rows.is_empty() {
        return "[]".to_string();
    }
    let indent = tabs(depth);
    let body = rows
        .iter()
        .map(|row| format!("{indent}{row}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n{body}\n{}]", tabs(depth - 1))
}

/// One quoted string per line.
pub fn render_string_list(items: &[String], depth: usize) -> serde_json::Result<String> {
    let rows = items
        .iter()
        .map(serde_json::to_string)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(bracketed(rows, depth))
}

/// One `[R,G,B,A]` row per line.
pub fn render_color_rows(colors: &[[u8; 4]], depth: usize) -> String {
    let rows = colors
        .iter()
        .map(|[r, g, b, a]| format!("[{r},{g},{b},{a}]"))
        .collect();
    bracketed(rows, depth)
}

fn splice<S: Serializer>(fragment: String, serializer: S) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(fragment).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}

pub(crate) fn texture_names<S: Serializer>(
    items: &[String],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let fragment = render_string_list(items, TEXTURE_NAME_DEPTH).map_err(S::Error::custom)?;
    splice(fragment, serializer)
}

pub(crate) fn color_rows<S: Serializer>(
    colors: &[[u8; 4]],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    splice(render_color_rows(colors, COLOR_ROW_DEPTH), serializer)
}

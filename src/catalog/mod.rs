pub mod format;
pub mod merge;

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::{PaletteError, Result};

pub use merge::{texture_file_name, MergeOutcome};

/// Default catalog file name, looked up in the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "palettes.json";

/// The persisted palette catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "palette-groups")]
    pub palette_groups: Vec<PaletteGroup>,
}

/// Palettes shared by a set of textures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteGroup {
    pub name: String,
    #[serde(rename = "texture-names", serialize_with = "format::texture_names")]
    pub texture_names: Vec<String>,
    pub palettes: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    #[serde(serialize_with = "format::color_rows")]
    pub colors: Vec<[u8; 4]>,
}

impl Catalog {
    /// Load the catalog at `path`.
    ///
    /// A missing file is not an error: catalog merging is simply skipped
    /// for the run and `Ok(None)` is returned.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            info!(
                "No catalog at {}, palettes will not be merged",
                path.display()
            );
            return Ok(None);
        }
        info!("Loading {}", path.display());
        let bytes = std::fs::read(path).map_err(|e| PaletteError::io(path, e))?;
        let catalog = Self::from_json(&bytes).map_err(|source| PaletteError::CatalogMalformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(catalog))
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Tab-indented JSON with flattened name lists and color rows.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut data_bytes = vec![];
        let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
        self.serialize(&mut ser)?;
        Ok(data_bytes)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        info!("Saving {}", path.display());
        let data_bytes = self
            .to_json_bytes()
            .map_err(|source| PaletteError::CatalogUnwritable {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PaletteError::io(parent, e))?;
        }
        std::fs::write(path, &data_bytes).map_err(|e| PaletteError::io(path, e))?;
        Ok(())
    }
}

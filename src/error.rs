use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the palette pipeline and the catalog.
///
/// A missing catalog is not an error (see `Catalog::load`), and a texture
/// with no catalog entry is reported through `MergeOutcome::NoMatch`.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("unsupported or corrupt image: {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("malformed palette entry: {}", path.display())]
    EntryMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed palette catalog: {}", path.display())]
    CatalogMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize palette catalog: {}", path.display())]
    CatalogUnwritable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode palette strip: {}", path.display())]
    StripUnwritable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PaletteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;

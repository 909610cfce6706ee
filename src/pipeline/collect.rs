use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::catalog::PaletteEntry;
use crate::color::ColorRecord;
use crate::error::{PaletteError, Result};

/// Where a palette's colors come from.
#[derive(Debug, Clone)]
pub enum ColorSource {
    /// A decoded sprite.
    Image(RgbaImage),
    /// A palette taken verbatim from a catalog entry.
    CatalogEntry(Vec<[u8; 4]>),
}

impl ColorSource {
    /// Classify and load an input file. `.json` files hold a single catalog
    /// palette entry; anything else goes through the image decoder.
    pub fn open(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let bytes = std::fs::read(path).map_err(|e| PaletteError::io(path, e))?;
            let entry: PaletteEntry =
                serde_json::from_slice(&bytes).map_err(|source| PaletteError::EntryMalformed {
                    path: path.to_path_buf(),
                    source,
                })?;
            debug!(
                "{}: palette entry '{}' with {} colors",
                path.display(),
                entry.name,
                entry.colors.len()
            );
            return Ok(Self::CatalogEntry(entry.colors));
        }

        let img = image::open(path).map_err(|source| PaletteError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::Image(img.to_rgba8()))
    }

    /// True when the source is a 1-pixel-tall image, i.e. an authored palette strip.
    pub fn is_single_row(&self) -> bool {
        matches!(self, Self::Image(img) if img.height() == 1)
    }

    /// The order a palette built from this source alone should keep.
    pub fn natural_order(&self) -> SetOrder {
        match self {
            Self::Image(_) if self.is_single_row() => SetOrder::Insertion,
            Self::Image(_) => SetOrder::Sorted,
            Self::CatalogEntry(_) => SetOrder::Insertion,
        }
    }
}

/// How a `ColorSet` orders its members. Fixed for the life of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOrder {
    /// First-seen order.
    Insertion,
    /// Ascending (R, G, B, A).
    Sorted,
}

#[derive(Debug, Clone)]
enum Members {
    Insertion {
        order: Vec<ColorRecord>,
        seen: HashSet<ColorRecord>,
    },
    Sorted(BTreeSet<ColorRecord>),
}

/// A deduplicated, ordered collection of colors.
#[derive(Debug, Clone)]
pub struct ColorSet {
    members: Members,
}

impl ColorSet {
    pub fn new(order: SetOrder) -> Self {
        let members = match order {
            SetOrder::Insertion => Members::Insertion {
                order: Vec::new(),
                seen: HashSet::new(),
            },
            SetOrder::Sorted => Members::Sorted(BTreeSet::new()),
        };
        Self { members }
    }

    pub fn order(&self) -> SetOrder {
        match self.members {
            Members::Insertion { .. } => SetOrder::Insertion,
            Members::Sorted(_) => SetOrder::Sorted,
        }
    }

    /// Add `color` unless an equal color is already present.
    /// Returns whether the set changed.
    pub fn insert(&mut self, color: ColorRecord) -> bool {
        match &mut self.members {
            Members::Insertion { order, seen } => {
                if seen.insert(color) {
                    order.push(color);
                    true
                } else {
                    false
                }
            }
            Members::Sorted(set) => set.insert(color),
        }
    }

    /// Append catalog colors as-is. Insertion sets keep duplicates the
    /// catalog may contain; sorted sets cannot hold them.
    pub fn append_trusted(&mut self, colors: impl IntoIterator<Item = ColorRecord>) {
        match &mut self.members {
            Members::Insertion { order, seen } => {
                for color in colors {
                    seen.insert(color);
                    order.push(color);
                }
            }
            Members::Sorted(set) => set.extend(colors),
        }
    }

    pub fn len(&self) -> usize {
        match &self.members {
            Members::Insertion { order, .. } => order.len(),
            Members::Sorted(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = ColorRecord> + '_> {
        match &self.members {
            Members::Insertion { order, .. } => Box::new(order.iter().copied()),
            Members::Sorted(set) => Box::new(set.iter().copied()),
        }
    }

    /// Catalog representation, in the set's current order.
    pub fn to_tuples(&self) -> Vec<[u8; 4]> {
        self.iter().map(ColorRecord::channels).collect()
    }
}

/// Add every color of `source` to `set`.
///
/// Image pixels are visited in row-major order with alpha forced to 255.
/// Returns true iff the source is a single-row image.
pub fn collect(source: &ColorSource, set: &mut ColorSet) -> bool {
    match source {
        ColorSource::Image(img) => {
            for pixel in img.pixels() {
                let [r, g, b, _] = pixel.0;
                set.insert(ColorRecord::opaque(r, g, b));
            }
        }
        ColorSource::CatalogEntry(tuples) => {
            set.append_trusted(tuples.iter().copied().map(ColorRecord::from));
        }
    }
    source.is_single_row()
}

/// Build the palette of a single input file.
pub fn collect_file(path: &Path) -> Result<ColorSet> {
    let source = ColorSource::open(path)?;
    let mut set = ColorSet::new(source.natural_order());
    let single_row = collect(&source, &mut set);
    debug!(
        "{}: {} colors, single row: {single_row}",
        path.display(),
        set.len()
    );
    Ok(set)
}

/// Build one sorted palette out of several input files.
pub fn collect_directory<P: AsRef<Path>>(paths: &[P]) -> Result<ColorSet> {
    let mut set = ColorSet::new(SetOrder::Sorted);
    for path in paths {
        let source = ColorSource::open(path.as_ref())?;
        collect(&source, &mut set);
    }
    Ok(set)
}

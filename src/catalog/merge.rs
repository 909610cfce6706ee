use std::sync::OnceLock;

use regex::Regex;

use super::Catalog;
use crate::pipeline::collect::ColorSet;

/// Result of merging one texture's palette into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The first palette of group `group` (by index) was replaced.
    Updated { group: usize },
    /// Group `group` lists the texture but holds no palette to rewrite.
    NoPalette { group: usize },
    /// No group lists this texture. The catalog is unchanged.
    NoMatch,
}

fn texture_file_regex() -> &'static Regex {
    static TEXTURE_FILE: OnceLock<Regex> = OnceLock::new();
    TEXTURE_FILE.get_or_init(|| Regex::new(r"(?i)\w*\.png$").unwrap())
}

/// The trailing `name.png` of a texture-name candidate, if it has one.
pub fn texture_file_name(candidate: &str) -> Option<&str> {
    texture_file_regex().find(candidate).map(|m| m.as_str())
}

impl Catalog {
    /// Replace the colors of the first palette in the first group that lists
    /// `texture_name`. Groups and their candidates are scanned in order and
    /// the first match ends the search.
    pub fn merge(&mut self, texture_name: &str, colors: &ColorSet) -> MergeOutcome {
        let found = self.palette_groups.iter().position(|group| {
            group
                .texture_names
                .iter()
                .any(|candidate| texture_file_name(candidate) == Some(texture_name))
        });

        let Some(index) = found else {
            return MergeOutcome::NoMatch;
        };
        match self.palette_groups[index].palettes.first_mut() {
            Some(entry) => {
                entry.colors = colors.to_tuples();
                MergeOutcome::Updated { group: index }
            }
            None => MergeOutcome::NoPalette { group: index },
        }
    }
}

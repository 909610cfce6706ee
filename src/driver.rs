use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info};

use crate::catalog::{Catalog, MergeOutcome};
use crate::pipeline::collect::{collect_directory, collect_file, ColorSet};
use crate::pipeline::emit::{emit, output_stem, Emitted};
use crate::preview;

/// Everything a run needs to know, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Catalog to merge into. `None` disables merging.
    pub catalog: Option<PathBuf>,
    pub preview: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub palettes_written: usize,
    pub catalog_updates: usize,
}

/// Runs the extraction over an input directory, one input at a time.
///
/// The driver owns the loaded catalog for the whole run: it is read once in
/// `new`, handed to each merge by `&mut`, and written back once by `run`.
pub struct Driver {
    config: RunConfig,
    catalog: Option<Catalog>,
    summary: RunSummary,
}

impl Driver {
    pub fn new(config: RunConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(path) => Catalog::load(path)?,
            None => None,
        };
        Ok(Self {
            config,
            catalog,
            summary: RunSummary::default(),
        })
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Process every file, then every subdirectory, of the input directory.
    /// The first failure aborts the run.
    pub fn run(mut self) -> Result<RunSummary> {
        let output = &self.config.output;
        std::fs::create_dir_all(output)
            .with_context(|| format!("failed to create output directory: {}", output.display()))?;

        let (files, dirs) = list_entries(&self.config.input)?;
        for file in &files {
            self.process_file(file)?;
        }
        for dir in &dirs {
            self.process_directory(dir)?;
        }

        if let (Some(catalog), Some(path)) = (&self.catalog, &self.config.catalog) {
            catalog.save(path)?;
        }

        info!(
            "Done: {} palettes written, {} catalog entries updated",
            self.summary.palettes_written, self.summary.catalog_updates
        );
        Ok(self.summary)
    }

    fn process_file(&mut self, path: &Path) -> Result<()> {
        info!("Starting file: {}", path.display());
        let set = collect_file(path)?;
        self.finish(&set, &file_name(path)?, path)
    }

    fn process_directory(&mut self, path: &Path) -> Result<()> {
        info!("Starting directory: {}", path.display());
        let (files, _) = list_entries(path)?;
        for file in &files {
            info!("    - File: {}", file.display());
        }
        let set = collect_directory(&files)?;
        self.finish(&set, &file_name(path)?, path)
    }

    fn finish(&mut self, set: &ColorSet, name: &str, source: &Path) -> Result<()> {
        let emitted = emit(set, name, &self.config.output, self.catalog.as_mut())?;
        let Some(Emitted { dir, merge }) = emitted else {
            info!("No colors in {}, nothing generated", source.display());
            return Ok(());
        };

        self.summary.palettes_written += 1;
        match merge {
            Some(MergeOutcome::Updated { group }) => {
                self.summary.catalog_updates += 1;
                debug!("{name}: updated catalog group #{group}");
            }
            Some(MergeOutcome::NoPalette { group }) => {
                debug!("{name}: catalog group #{group} has no palette to update");
            }
            Some(MergeOutcome::NoMatch) => debug!("{name}: no catalog entry"),
            None => {}
        }

        if self.config.preview {
            let mut stdout = std::io::stdout().lock();
            preview::write_swatches(set, output_stem(name), &mut stdout)?;
        }

        info!("Generated {}", dir.display());
        Ok(())
    }
}

fn file_name(path: &Path) -> Result<String> {
    Ok(path
        .file_name()
        .with_context(|| format!("no file name in {}", path.display()))?
        .to_string_lossy()
        .into_owned())
}

/// Files and subdirectories directly inside `dir`, each in lexicographic order.
fn list_entries(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    if !dir.is_dir() {
        bail!("input directory not found: {}", dir.display());
    }
    let pattern = format!(
        "{}/*",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut files = vec![];
    let mut dirs = vec![];
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_dir() {
            dirs.push(path);
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok((files, dirs))
}

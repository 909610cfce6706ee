use std::path::PathBuf;

use clap::Parser;

use crate::catalog::DEFAULT_CATALOG_FILE;
use crate::driver::RunConfig;

/// Extract the palettes of sprite images and merge them into a palette catalog.
///
/// Every image directly under the input directory gets its own palette.
/// Every subdirectory gets one palette covering all of its images.
#[derive(Parser, Debug)]
#[command(name = "spritepal", version, about)]
pub struct Args {
    /// Directory holding the sprites to scan
    #[arg(short, long, default_value = "input")]
    pub input: PathBuf,

    /// Directory the palettes are written to
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Palette catalog to update, if it exists
    #[arg(short, long, default_value = DEFAULT_CATALOG_FILE)]
    pub catalog: PathBuf,

    /// Leave the palette catalog alone even if it exists
    #[arg(long, conflicts_with = "catalog")]
    pub no_catalog: bool,

    /// Print a colored terminal preview of each palette
    #[arg(long)]
    pub preview: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            catalog: (!self.no_catalog).then(|| self.catalog.clone()),
            preview: self.preview,
        }
    }
}

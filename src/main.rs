use anyhow::Result;
use clap::Parser;

use spritepal::cli::Args;
use spritepal::driver::Driver;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    Driver::new(args.run_config())?.run()?;
    Ok(())
}

mod cli;

use anyhow::Result;

use crate::cli::{CliArgs, USAGE};

fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = args.into_config()?;
    common::log_setup::setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let summary = despeckle::process(&config)?;

    println!(
        "Median filter applied with {} workers: {} ({}x{}) -> {}",
        summary.num_workers,
        config.input_path.display(),
        summary.width,
        summary.height,
        config.output_path.display()
    );
    Ok(())
}

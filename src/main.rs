use anyhow::{Context, Result};
use decode_bench::app::App;
use decode_bench::cli::{self, Cli};
use decode_bench::config::BenchConfig;
use decode_bench::logger;
use log::*;
use std::io;

fn main() -> Result<()> {
    let matches = cli::build().get_matches();
    let cli = Cli::from_matches(&matches)?;

    logger::init(logger::cli_level(cli.verbose))?;

    debug!("Starting decode-bench...");
    let config = match cli.config_dir.as_deref() {
        Some(dir) => BenchConfig::load(Some(dir)),
        None => BenchConfig::from_env(),
    }
    .context("Failed to load configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    App::new(config).run(&cli.command, &mut out)?;

    debug!("Exiting decode-bench...");
    Ok(())
}

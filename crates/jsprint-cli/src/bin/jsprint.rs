use anyhow::{Context, Result};
use clap::Parser;

use jsprint_cli::args::CliArgs;
use jsprint_cli::driver;

fn main() -> Result<()> {
    // No-op unless JSPRINT_LOG or RUST_LOG is set.
    jsprint_cli::tracing_config::init_tracing()
        .context("failed to install tracing subscriber")?;

    let args = CliArgs::parse();
    let printed = driver::run(&args, std::io::stdin().lock())?;
    println!("{printed}");
    Ok(())
}

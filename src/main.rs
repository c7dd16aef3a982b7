use anyhow::Result;
use clap::Parser;

use zheat::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    zheat::run(&cli)
}

mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use newcal::Input;
use newcal::calendar::fmt;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = Input::from_args(cli.gregorian.as_deref(), cli.unix.as_deref(), &cli.extra)
        .context("cannot determine the date to convert")?;
    let date = input.resolve();
    info!(?input, %date, "converted");

    println!("{}", fmt::summary(&input.label(), &date));
    if let Some(grid) = fmt::calendar(&date) {
        print!("{grid}");
    }
    Ok(())
}

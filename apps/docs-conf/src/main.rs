//! docs-conf — print the resolved documentation build configuration.
//!
//! Layers the A1 Policy Management Service settings (branches, intersphinx
//! targets, extra HTML paths) over the shared base configuration and emits the
//! merged result for the documentation build.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(&cli)
}

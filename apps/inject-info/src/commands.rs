//! Argument handling, tracing setup, and the injection run.

use std::path::PathBuf;

use a1docs_openapi::{InjectRequest, KeyOrder, inject};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

/// Printed to stdout whenever the arguments are not exactly three paths.
pub(crate) const USAGE: &str = "Usage: inject-info <input.yaml> <output.yaml> <oas-info.yaml>";

/// Replace the `info:` block of an OpenAPI YAML document.
#[derive(Parser)]
#[command(
    name = "inject-info",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// OpenAPI document to read.
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Path to write the rewritten document to.
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// YAML file with the replacement `info` contents.
    #[arg(allow_hyphen_values = true)]
    pub info: PathBuf,
}

/// Parse the command line, exiting with status 1 and the usage line on stdout
/// unless exactly three arguments were given.
pub(crate) fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    }
}

/// Initialize the tracing subscriber on stderr. Quiet unless `RUST_LOG` asks for more.
pub(crate) fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the injection described by the parsed arguments.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    let req = InjectRequest {
        input: cli.input.clone(),
        output: cli.output.clone(),
        info: cli.info.clone(),
    };

    inject(&req, KeyOrder::Sorted)
        .wrap_err_with(|| format!("failed to inject info into {}", req.output.display()))?;
    Ok(())
}

//! CLI definition, tracing setup, and rendering.

use std::path::PathBuf;

use a1docs_shared::{DEFAULT_BASE_CONFIG, RenderFormat, load_docs_config};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

/// Print the documentation build configuration layered over the shared base.
#[derive(Parser)]
#[command(name = "docs-conf", version, long_about = None)]
pub(crate) struct Cli {
    /// Shared base configuration (TOML).
    #[arg(long, default_value = DEFAULT_BASE_CONFIG)]
    pub base: PathBuf,

    /// Output format.
    #[arg(long, default_value = "toml")]
    pub format: Format,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Rendered configuration format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum Format {
    Toml,
    Json,
}

impl From<Format> for RenderFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Toml => RenderFormat::Toml,
            Format::Json => RenderFormat::Json,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Initialize the tracing subscriber on stderr based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "warn",
        1 => "a1docs_shared=debug,docs_conf=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Load, merge and emit the configuration.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    let config = load_docs_config(&cli.base)
        .wrap_err_with(|| format!("failed to load base configuration {}", cli.base.display()))?;
    let rendered = config.render(cli.format.into())?;

    match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &rendered)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote documentation configuration");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

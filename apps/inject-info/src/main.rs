//! inject-info — replace the `info:` block of an OpenAPI YAML document.
//!
//! Used by the docs build to stamp the published API description with the
//! project's own title, version and licence metadata.

mod commands;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = commands::parse_args();
    commands::init_tracing();
    commands::run(&cli)
}

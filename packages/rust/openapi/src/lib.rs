//! OpenAPI `info` block injection.
//!
//! Replaces the top-level `info:` block of an OpenAPI YAML document with a
//! block rendered from a separate info-source file. The document is handled as
//! text: only the `info:` span changes, everything else is written back byte
//! for byte.

mod block;
mod payload;

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use a1docs_shared::{A1DocsError, Result};

pub use block::{Substitution, find_info_blocks, replace_info_blocks};
pub use payload::{InfoPayload, KeyOrder, load_info};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The three files an injection works on.
#[derive(Debug, Clone)]
pub struct InjectRequest {
    /// OpenAPI document to read.
    pub input: PathBuf,
    /// Where the rewritten document goes. Parent directories are created.
    pub output: PathBuf,
    /// YAML file holding the new `info` contents.
    pub info: PathBuf,
}

/// Summary of a completed injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectReport {
    /// Number of `info:` blocks replaced. Zero means the input was copied unchanged.
    pub replaced: usize,
    /// Bytes written to the output file.
    pub bytes_written: usize,
}

// ---------------------------------------------------------------------------
// Injection
// ---------------------------------------------------------------------------

/// Run a full injection:
/// 1. Load and render the info payload
/// 2. Read the input document
/// 3. Replace its `info:` block(s)
/// 4. Write the result, creating parent directories as needed
#[instrument(skip_all, fields(input = ?req.input, output = ?req.output))]
pub fn inject(req: &InjectRequest, order: KeyOrder) -> Result<InjectReport> {
    let rendered = load_info(&req.info)?.render(order)?;

    let original =
        std::fs::read_to_string(&req.input).map_err(|e| A1DocsError::io(&req.input, e))?;

    let Substitution { text, replaced } = replace_info_blocks(&original, &rendered);
    match replaced {
        0 => warn!("no top-level info block found, output is a copy of the input"),
        1 => {}
        n => warn!(blocks = n, "replaced more than one top-level info block"),
    }

    if let Some(parent) = req.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| A1DocsError::io(parent, e))?;
    }
    std::fs::write(&req.output, &text).map_err(|e| A1DocsError::io(&req.output, e))?;

    info!(replaced, bytes = text.len(), "wrote OpenAPI document");

    Ok(InjectReport {
        replaced,
        bytes_written: text.len(),
    })
}

//! Documentation build configuration for the A1 Policy Management Service docs.
//!
//! The docs build layers a small set of project settings over a shared base
//! configuration (`docs/docs_conf.toml` by default). Keys defined here replace
//! base keys of the same name; every other base key is carried through as-is.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{A1DocsError, Result};

/// Default location of the shared base configuration.
pub const DEFAULT_BASE_CONFIG: &str = "docs/docs_conf.toml";

/// Branch the O-RAN SC documentation links point at.
pub const BRANCH: &str = "latest";

/// Branch the ONAP documentation links point at.
pub const ONAP_BRANCH: &str = "latest";

/// Directory of generated OpenAPI pages copied verbatim into the HTML output.
const OPENAPI_TOOLGEN_PATH: &str = "offeredapis/openapitoolgen";

const NONRTRIC_URL: &str = "https://docs.o-ran-sc.org/projects/o-ran-sc-nonrtric/en/";
const ONAP_CCSDK_ORAN_URL: &str = "https://docs.onap.org/projects/onap-ccsdk-oran/en/";

/// Project identifier to cross-reference target.
pub type IntersphinxMapping = BTreeMap<String, IntersphinxTarget>;

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// One cross-referenced documentation project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersphinxTarget {
    /// Root URL of the project's published documentation.
    pub base_url: Url,
    /// Inventory file location; `None` means `<base_url>/objects.inv`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,
}

impl IntersphinxTarget {
    /// Build a target from a URL prefix and a branch name, with no inventory override.
    fn for_branch(prefix: &str, branch: &str) -> Result<Self> {
        let raw = format!("{prefix}{branch}");
        let base_url = Url::parse(&raw)
            .map_err(|e| A1DocsError::config(format!("invalid intersphinx url {raw:?}: {e}")))?;
        Ok(Self {
            base_url,
            inventory: None,
        })
    }

    /// The `(base-URL, inventory)` pair the cross-referencing engine consumes.
    pub fn as_pair(&self) -> (&str, Option<&str>) {
        (self.base_url.as_str(), self.inventory.as_deref())
    }
}

/// The project-level documentation settings, layered over a base table.
#[derive(Debug, Clone, Serialize)]
pub struct DocsConfig {
    pub branch: String,

    #[serde(rename = "onapbranch")]
    pub onap_branch: String,

    /// URL patterns the link checker skips.
    pub linkcheck_ignore: Vec<String>,

    /// Documentation engine extensions to enable.
    pub extensions: Vec<String>,

    /// Extra static paths copied into the HTML output.
    pub html_extra_path: Vec<String>,

    /// Cross-project references.
    pub intersphinx_mapping: IntersphinxMapping,

    /// The shared base configuration this config was layered over.
    #[serde(skip)]
    pub base: toml::Table,
}

/// Output format for [`DocsConfig::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Toml,
    Json,
}

impl DocsConfig {
    /// Build the project configuration over an already-loaded base table.
    pub fn over_base(base: toml::Table) -> Result<Self> {
        let mut intersphinx_mapping = IntersphinxMapping::new();
        intersphinx_mapping.insert(
            "nonrtric".into(),
            IntersphinxTarget::for_branch(NONRTRIC_URL, BRANCH)?,
        );
        intersphinx_mapping.insert(
            "onapa1policymanagementservice".into(),
            IntersphinxTarget::for_branch(ONAP_CCSDK_ORAN_URL, ONAP_BRANCH)?,
        );

        Ok(Self {
            branch: BRANCH.into(),
            onap_branch: ONAP_BRANCH.into(),
            linkcheck_ignore: vec![
                "http://localhost.*".into(),
                "http://127.0.0.1.*".into(),
                "https://gerrit.o-ran-sc.org.*".into(),
            ],
            extensions: vec!["sphinx.ext.intersphinx".into()],
            html_extra_path: vec![OPENAPI_TOOLGEN_PATH.into()],
            intersphinx_mapping,
            base,
        })
    }

    /// The merged view handed to the documentation engine: base keys first,
    /// then this config's keys replacing any base key of the same name.
    pub fn to_table(&self) -> Result<toml::Table> {
        let own = match toml::Value::try_from(self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(other) => {
                return Err(A1DocsError::Serialize(format!(
                    "expected a table, got {}",
                    other.type_str()
                )));
            }
            Err(e) => return Err(A1DocsError::Serialize(e.to_string())),
        };

        let mut merged = self.base.clone();
        for (key, value) in own {
            if merged.contains_key(&key) {
                tracing::debug!(%key, "project setting overrides base configuration");
            }
            merged.insert(key, value);
        }
        Ok(merged)
    }

    /// Render the merged configuration as text.
    pub fn render(&self, format: RenderFormat) -> Result<String> {
        let table = self.to_table()?;
        match format {
            RenderFormat::Toml => {
                toml::to_string_pretty(&table).map_err(|e| A1DocsError::Serialize(e.to_string()))
            }
            RenderFormat::Json => serde_json::to_string_pretty(&table)
                .map_err(|e| A1DocsError::Serialize(e.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the shared base configuration table from a TOML file.
pub fn load_base_config(path: &Path) -> Result<toml::Table> {
    let content = std::fs::read_to_string(path).map_err(|e| A1DocsError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| A1DocsError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Load the base configuration at `base_path` and layer the project settings over it.
pub fn load_docs_config(base_path: &Path) -> Result<DocsConfig> {
    let base = load_base_config(base_path)?;
    tracing::debug!(path = ?base_path, keys = base.len(), "loaded base configuration");
    DocsConfig::over_base(base)
}

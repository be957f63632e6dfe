//! Loading and rendering of the `info` payload.

use std::path::Path;

use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use a1docs_shared::{A1DocsError, Result};

/// Key order used when rendering the payload back to YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Mapping keys sorted at every level, so the output does not depend on
    /// how the info file happens to be ordered.
    #[default]
    Sorted,
    /// Keys in the order they appear in the info file.
    Source,
}

/// The contents of an info-source file, held as an opaque YAML value.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPayload(pub Value);

impl InfoPayload {
    /// Parse a payload from YAML text. `origin` only labels errors.
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        let value: Value =
            serde_yaml_ng::from_str(yaml).map_err(|e| A1DocsError::yaml(origin, e.to_string()))?;
        Ok(Self(value))
    }

    /// Render the payload as a YAML document whose single top-level key is `info`.
    pub fn render(&self, order: KeyOrder) -> Result<String> {
        let value = match order {
            KeyOrder::Sorted => sort_keys(self.0.clone()),
            KeyOrder::Source => self.0.clone(),
        };

        let mut wrapper = Mapping::new();
        wrapper.insert(Value::String("info".into()), value);

        serde_yaml_ng::to_string(&Value::Mapping(wrapper))
            .map_err(|e| A1DocsError::Serialize(format!("failed to render info block: {e}")))
    }
}

/// Read and parse the info-source file at `path`.
pub fn load_info(path: &Path) -> Result<InfoPayload> {
    let content = std::fs::read_to_string(path).map_err(|e| A1DocsError::io(path, e))?;
    let payload = InfoPayload::from_yaml(&content, path)?;
    debug!(?path, "loaded info payload");
    Ok(payload)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = mapping
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            entries.sort_by_cached_key(|(k, _)| key_text(k));
            Value::Mapping(entries.into_iter().collect())
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(sort_keys).collect()),
        Value::Tagged(mut tagged) => {
            tagged.value = sort_keys(std::mem::replace(&mut tagged.value, Value::Null));
            Value::Tagged(tagged)
        }
        other => other,
    }
}

/// Sort key for a mapping key: plain strings compare by their text, anything
/// else by its YAML rendering.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(yaml: &str) -> InfoPayload {
        InfoPayload::from_yaml(yaml, Path::new("oas-info.yaml")).expect("parse payload")
    }

    #[test]
    fn render_wraps_under_info() {
        let rendered = payload("title: New\nversion: \"1.0\"\n")
            .render(KeyOrder::Sorted)
            .expect("render");
        assert_eq!(rendered, "info:\n  title: New\n  version: '1.0'\n");
    }

    #[test]
    fn sorted_order_is_recursive() {
        let p = payload("version: 1.1.0\ntitle: A1 Policy Management\ncontact:\n  url: https://o-ran-sc.org\n  name: O-RAN SC\n");
        let rendered = p.render(KeyOrder::Sorted).expect("render");
        assert_eq!(
            rendered,
            "info:\n  contact:\n    name: O-RAN SC\n    url: https://o-ran-sc.org\n  title: A1 Policy Management\n  version: 1.1.0\n"
        );
    }

    #[test]
    fn source_order_is_kept_on_request() {
        let rendered = payload("version: 1.1.0\ntitle: A1\n")
            .render(KeyOrder::Source)
            .expect("render");
        assert_eq!(rendered, "info:\n  version: 1.1.0\n  title: A1\n");
    }

    #[test]
    fn rendered_block_parses_back_to_payload() {
        let p = payload(
            "title: A1 Policy Management Service\ndescription: |\n  Multi-line\n  text\nlicense:\n  name: Apache 2.0\n  url: http://www.apache.org/licenses/LICENSE-2.0\nx-audience: external-public\n",
        );
        let rendered = p.render(KeyOrder::Sorted).expect("render");
        let parsed: Value = serde_yaml_ng::from_str(&rendered).expect("reparse");
        assert_eq!(parsed.get("info"), Some(&p.0));
    }

    #[test]
    fn invalid_yaml_is_reported_with_path() {
        let err = InfoPayload::from_yaml("title: [unclosed", Path::new("bad-info.yaml")).unwrap_err();
        assert!(matches!(err, A1DocsError::Yaml { .. }));
        assert!(err.to_string().contains("bad-info.yaml"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_info(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }
}

use serde_yaml::{Mapping, Value};

use crate::constants::{PROXIES_KEY, PROXY_GROUPS_KEY};
use crate::error::MergeError;

/// The template document as a key-ordered YAML tree.
///
/// `serde_yaml::Mapping` keeps insertion order, so a parse/serialize cycle
/// leaves the template's key order intact. The root is always a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTree {
    root: Mapping,
}

impl ConfigTree {
    /// Create an empty tree
    pub fn new() -> Self {
        ConfigTree {
            root: Mapping::new(),
        }
    }

    pub fn from_mapping(root: Mapping) -> Self {
        ConfigTree { root }
    }

    /// Parse a template document. An empty document yields an empty tree.
    pub fn from_str(content: &str) -> Result<Self, MergeError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| MergeError::TemplateUnavailable(format!("invalid YAML: {}", e)))?;
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(root) => Ok(Self::from_mapping(root)),
            _ => Err(MergeError::TemplateUnavailable(
                "template root is not a mapping".to_string(),
            )),
        }
    }

    /// Render the tree as block-style YAML
    pub fn to_yaml_string(&self) -> Result<String, MergeError> {
        serde_yaml::to_string(&self.root).map_err(|e| MergeError::Serialize(e.to_string()))
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Mapping {
        &mut self.root
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> Vec<String> {
        self.root
            .keys()
            .map(|k| match k {
                Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Get a value from a dotted path, e.g. `proxy-groups.0.name`
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.').filter(|p| !p.is_empty());
        let first = parts.next()?;
        let mut current = self.root.get(first)?;

        for part in parts {
            match current {
                Value::Mapping(map) => {
                    current = map.get(part)?;
                }
                Value::Sequence(seq) => {
                    let index = part.parse::<usize>().ok()?;
                    current = seq.get(index)?;
                }
                _ => return None,
            }
        }

        Some(current)
    }

    /// The `proxies` list of the named group, as strings
    pub fn group_proxies(&self, group_name: &str) -> Option<Vec<String>> {
        let groups = self.root.get(PROXY_GROUPS_KEY)?.as_sequence()?;
        let group = groups
            .iter()
            .find(|g| g.get("name").and_then(Value::as_str) == Some(group_name))?;
        let proxies = group.get(PROXIES_KEY)?.as_sequence()?;
        Some(
            proxies
                .iter()
                .filter_map(|p| p.as_str().map(|s| s.to_string()))
                .collect(),
        )
    }
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}

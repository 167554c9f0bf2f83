//! Canonical node model
//!
//! Every source format is normalized into a sequence of [`Node`]s. A node is
//! identified by its display name and carries its original definition
//! untouched so it can be written back into the template as-is.

use serde_yaml::{Mapping, Value as YamlValue};

/// The original definition of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodePayload {
    /// A Clash-style mapping (`name`, `type`, `server`, ...)
    Structured(Mapping),
    /// A raw share link such as `vless://...#name`
    Link(String),
}

impl NodePayload {
    pub fn is_link(&self) -> bool {
        matches!(self, NodePayload::Link(_))
    }

    /// The payload as it is inserted into the template's `proxies` sequence
    pub fn to_yaml(&self) -> YamlValue {
        match self {
            NodePayload::Structured(map) => YamlValue::Mapping(map.clone()),
            NodePayload::Link(link) => YamlValue::String(link.clone()),
        }
    }
}

/// A canonical proxy descriptor. Immutable once built by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    identity: String,
    payload: NodePayload,
}

impl Node {
    pub fn new(identity: impl Into<String>, payload: NodePayload) -> Self {
        Node {
            identity: identity.into(),
            payload,
        }
    }

    pub fn structured(identity: impl Into<String>, map: Mapping) -> Self {
        Self::new(identity, NodePayload::Structured(map))
    }

    pub fn link(identity: impl Into<String>, link: impl Into<String>) -> Self {
        Self::new(identity, NodePayload::Link(link.into()))
    }

    /// Display name used for deduplication and group references
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn payload(&self) -> &NodePayload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_payload_to_yaml() {
        let node = Node::link("HK", "ss://abc#HK");
        assert_eq!(node.identity(), "HK");
        assert!(node.payload().is_link());
        assert_eq!(node.payload().to_yaml(), YamlValue::String("ss://abc#HK".into()));
    }

    #[test]
    fn test_structured_payload_to_yaml() {
        let mut map = Mapping::new();
        map.insert("name".into(), "JP".into());
        map.insert("type".into(), "ss".into());
        let node = Node::structured("JP", map.clone());
        assert!(!node.payload().is_link());
        assert_eq!(node.payload().to_yaml(), YamlValue::Mapping(map));
    }
}

use std::collections::HashSet;

use log::{debug, info};
use serde_yaml::{Mapping, Sequence, Value};

use super::explodes::{explode_clash_entries, explode_sub, RawNode};
use super::{ParseSettings, SourceFormat};
use crate::constants::{PROXIES_KEY, SYNTHETIC_NAME_PREFIX};
use crate::models::{Node, NodePayload};

/// Normalize raw source text into canonical nodes using default settings
///
/// See [`normalize_with`].
pub fn normalize(content: &str) -> Vec<Node> {
    normalize_with(content, &ParseSettings::default())
}

/// Normalize raw source text into canonical nodes
///
/// The result keeps the order in which identities first appear; a later
/// entry sharing an identity with an earlier one is dropped. An empty
/// result means the source held no usable entries.
pub fn normalize_with(content: &str, settings: &ParseSettings) -> Vec<Node> {
    let format = SourceFormat::detect(content);
    let raw_nodes = match &format {
        SourceFormat::Structured(entries) => explode_clash_entries(entries),
        SourceFormat::LineList(text) => explode_sub(text, settings),
    };

    let total = raw_nodes.len();
    let nodes = assign_identities(raw_nodes);
    info!(
        "Normalized {} node(s) from {} source ({} duplicate(s) dropped)",
        nodes.len(),
        if format.is_structured() { "structured" } else { "line-list" },
        total - nodes.len()
    );
    nodes
}

/// Name unnamed entries and drop duplicates, first occurrence wins.
///
/// Unnamed entries are called `Node-<k>`, `k` counting unnamed entries so
/// far; if that name is already taken `k` is advanced until it is free.
fn assign_identities(raw_nodes: Vec<RawNode>) -> Vec<Node> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut nodes = Vec::with_capacity(raw_nodes.len());
    let mut unnamed = 0usize;

    for raw in raw_nodes {
        let identity = match raw.name {
            Some(name) => name,
            None => {
                unnamed += 1;
                while seen.contains(&synthetic_name(unnamed)) {
                    unnamed += 1;
                }
                synthetic_name(unnamed)
            }
        };

        if !seen.insert(identity.clone()) {
            debug!("Dropping duplicate node: {}", identity);
            continue;
        }
        nodes.push(Node::new(identity, raw.payload));
    }

    nodes
}

fn synthetic_name(k: usize) -> String {
    format!("{}{}", SYNTHETIC_NAME_PREFIX, k)
}

/// Render nodes back into source text
///
/// Link-only node sets become a line list; anything else becomes a YAML
/// document with a `proxies` sequence. Normalizing the output yields the
/// same identities again.
pub fn render_nodes(nodes: &[Node]) -> String {
    if nodes.iter().all(|node| node.payload().is_link()) {
        let mut output = String::new();
        for node in nodes {
            if let NodePayload::Link(link) = node.payload() {
                output.push_str(link);
                output.push('\n');
            }
        }
        return output;
    }

    let proxies: Sequence = nodes.iter().map(|node| node.payload().to_yaml()).collect();
    let mut doc = Mapping::new();
    doc.insert(Value::String(PROXIES_KEY.to_string()), Value::Sequence(proxies));
    serde_yaml::to_string(&doc).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identities(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::identity).collect()
    }

    #[test]
    fn test_synthetic_names_count_unnamed_only() {
        let nodes = normalize("ss://a\nvless://b#Named\nss://c\n");
        assert_eq!(identities(&nodes), vec!["Node-1", "Named", "Node-2"]);
    }

    #[test]
    fn test_synthetic_name_skips_taken_identity() {
        let nodes = normalize("ss://x#Node-1\nss://a\nss://b\n");
        assert_eq!(identities(&nodes), vec!["Node-1", "Node-2", "Node-3"]);
    }

    #[test]
    fn test_render_link_nodes() {
        let nodes = vec![Node::link("A", "ss://a#A"), Node::link("Node-1", "ss://b")];
        assert_eq!(render_nodes(&nodes), "ss://a#A\nss://b\n");
    }

    #[test]
    fn test_render_mixed_nodes_as_yaml() {
        let mut map = Mapping::new();
        map.insert("name".into(), "S".into());
        map.insert("type".into(), "ss".into());
        let nodes = vec![Node::structured("S", map), Node::link("L", "ss://b#L")];
        let text = render_nodes(&nodes);
        assert!(text.starts_with("proxies:"));
        assert_eq!(identities(&normalize(&text)), vec!["S", "L"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n\n# only a comment\n   \n").is_empty());
    }
}

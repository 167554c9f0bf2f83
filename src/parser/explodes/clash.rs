use log::warn;
use serde_yaml::Value;

use super::common::explode_link;
use super::RawNode;
use crate::models::NodePayload;

/// Explode the entries of a Clash `proxies` sequence.
///
/// Mapping entries keep their whole definition as payload and are named by
/// their `name` field; entries without a usable `name` are skipped. String
/// entries are treated as share links. Anything else is skipped.
pub fn explode_clash_entries(entries: &[Value]) -> Vec<RawNode> {
    let mut nodes = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::Mapping(map) => {
                let name = match map.get("name") {
                    Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => {
                        warn!("Skipping proxy entry #{} without a name", index + 1);
                        continue;
                    }
                };
                nodes.push(RawNode {
                    name: Some(name),
                    payload: NodePayload::Structured(map.clone()),
                });
            }
            Value::String(link) => {
                let link = link.trim();
                if !link.is_empty() {
                    nodes.push(explode_link(link));
                }
            }
            other => {
                warn!(
                    "Skipping proxy entry #{} of unsupported kind: {:?}",
                    index + 1,
                    other
                );
            }
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(yaml: &str) -> Vec<Value> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_mapping_entries() {
        let seq = entries(
            r#"
- name: "Test SS"
  type: ss
  server: example.com
  port: 8388
- name: JP
  type: vmess
"#,
        );
        let nodes = explode_clash_entries(&seq);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name.as_deref(), Some("Test SS"));
        match &nodes[0].payload {
            NodePayload::Structured(map) => {
                assert_eq!(map.get("port").and_then(Value::as_u64), Some(8388));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_unnamed_entry_skipped() {
        let seq = entries(
            r#"
- type: ss
  server: example.com
- name: ""
  type: ss
- name: Kept
  type: ss
"#,
        );
        let nodes = explode_clash_entries(&seq);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_numeric_name_and_link_entries() {
        let seq = entries(
            r#"
- name: 42
  type: ss
- "vless://abc#Linked"
- 17
"#,
        );
        let nodes = explode_clash_entries(&seq);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name.as_deref(), Some("42"));
        assert_eq!(nodes[1].name.as_deref(), Some("Linked"));
        assert!(nodes[1].payload.is_link());
    }
}

use std::collections::HashSet;

use submerge::models::{Node, NodePayload};
use submerge::parser::{normalize, normalize_with, render_nodes, ParseSettings};
use submerge::utils::base64::base64_encode;

fn identities(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(|n| n.identity().to_string()).collect()
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_uri_name_extraction() {
        let nodes = normalize("vless://abc123#My%20Node");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].identity(), "My Node");
        assert_eq!(
            nodes[0].payload(),
            &NodePayload::Link("vless://abc123#My%20Node".to_string())
        );
    }

    #[test]
    fn test_first_occurrence_wins_line_list() {
        let content = "ss://first#A\nss://b#B\nss://second#A\nss://c#C\n";
        let nodes = normalize(content);
        assert_eq!(identities(&nodes), vec!["A", "B", "C"]);
        assert_eq!(
            nodes[0].payload(),
            &NodePayload::Link("ss://first#A".to_string())
        );
    }

    #[test]
    fn test_first_occurrence_wins_structured() {
        let content = r#"
proxies:
  - name: A
    type: ss
    server: first.example.com
    port: 1
  - name: B
    type: ss
    server: b.example.com
    port: 2
  - name: A
    type: ss
    server: second.example.com
    port: 3
  - name: C
    type: vmess
    server: c.example.com
    port: 4
"#;
        let nodes = normalize(content);
        assert_eq!(identities(&nodes), vec!["A", "B", "C"]);
        match nodes[0].payload() {
            NodePayload::Structured(map) => {
                assert_eq!(
                    map.get("server").and_then(|v| v.as_str()),
                    Some("first.example.com")
                );
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_structured_payload_keeps_all_fields() {
        let content = r#"
proxies:
  - name: "Test SS"
    type: ss
    server: example.com
    port: 8388
    cipher: aes-256-gcm
    password: password
    udp: true
"#;
        let nodes = normalize(content);
        match nodes[0].payload() {
            NodePayload::Structured(map) => {
                let keys: Vec<_> = map.keys().filter_map(|k| k.as_str()).collect();
                assert_eq!(
                    keys,
                    vec!["name", "type", "server", "port", "cipher", "password", "udp"]
                );
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_yields_no_nodes() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n   \n# comment one\n#comment two\n\n").is_empty());
        assert!(normalize("proxies: []\n").is_empty());
    }

    #[test]
    fn test_edge_whitespace_names_stay_distinct() {
        let nodes = normalize("ss://a#A\nss://b#A%20\n");
        assert_eq!(identities(&nodes), vec!["A", "A "]);
        assert_eq!(
            nodes[1].payload(),
            &NodePayload::Link("ss://b#A%20".to_string())
        );
    }

    #[test]
    fn test_unnamed_links_get_synthetic_names() {
        let nodes = normalize("ss://one\nvless://two#Named\nvless://three\n");
        assert_eq!(identities(&nodes), vec!["Node-1", "Named", "Node-2"]);
    }

    #[test]
    fn test_scheme_filter() {
        let content = "vless://a#A\ntrojan://b#B\nss://c#C\nhysteria2://d#D\nvmess://e#E\n";
        let nodes = normalize_with(content, &ParseSettings::common_schemes());
        assert_eq!(identities(&nodes), vec!["A", "C", "E"]);

        let all = normalize(content);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_base64_subscription() {
        let plain = "vless://a#Alpha\nss://b#Beta\n";
        let nodes = normalize(&base64_encode(plain));
        assert_eq!(identities(&nodes), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_vmess_remark_used_as_name() {
        let json = r#"{"v":"2","ps":"SG 01","add":"sg.example.com","port":"443","id":"uuid"}"#;
        let link = format!("vmess://{}", base64_encode(json));
        let nodes = normalize(&link);
        assert_eq!(identities(&nodes), vec!["SG 01"]);
        assert_eq!(nodes[0].payload(), &NodePayload::Link(link));
    }

    #[test]
    fn test_comment_with_marker_does_not_switch_format() {
        let content = "# proxies: exported list\nss://a#A\n";
        assert_eq!(identities(&normalize(content)), vec!["A"]);
    }

    #[test]
    fn test_dedup_idempotence() {
        let sources = [
            "ss://a#A\nss://b\nss://a2#A\nss://c#Node-2\nss://d\nss://e\n",
            "proxies:\n  - name: X\n    type: ss\n  - name: X\n    type: vmess\n  - vless://y#Y\n  - vless://z\n",
            "vless://a#Node-1\nvless://b\nvless://c\n",
        ];

        for source in sources {
            let first = normalize(source);
            let second = normalize(&render_nodes(&first));
            assert_eq!(identities(&first), identities(&second), "source: {}", source);

            let unique: HashSet<_> = identities(&second).into_iter().collect();
            assert_eq!(unique.len(), second.len());
        }
    }
}

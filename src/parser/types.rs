use serde_yaml::{Sequence, Value};

use crate::constants::{LEGACY_PROXIES_KEY, PROXIES_KEY};
use crate::utils::base64::base64_decode_any;

/// Shape of a node source, chosen by trying to parse it as YAML first
#[derive(Debug, Clone, PartialEq)]
pub enum SourceFormat {
    /// A YAML document with a `proxies` sequence
    Structured(Sequence),
    /// Newline-delimited share links
    LineList(String),
}

impl SourceFormat {
    /// Detect the format of raw source text.
    ///
    /// A document parsing to a mapping with a `proxies` (or legacy `Proxy`)
    /// sequence is structured. Everything else is a line list; a body that is
    /// entirely Base64 is decoded first.
    pub fn detect(content: &str) -> Self {
        if let Ok(Value::Mapping(map)) = serde_yaml::from_str::<Value>(content) {
            for key in [PROXIES_KEY, LEGACY_PROXIES_KEY] {
                if let Some(Value::Sequence(seq)) = map.get(key) {
                    return SourceFormat::Structured(seq.clone());
                }
            }
        }

        SourceFormat::LineList(decode_line_list(content))
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, SourceFormat::Structured(_))
    }
}

fn decode_line_list(content: &str) -> String {
    let compact: String = content.split_whitespace().collect();
    if compact.is_empty() || compact.contains("://") {
        return content.to_string();
    }

    match base64_decode_any(&compact) {
        Some(decoded) if decoded.contains("://") => decoded,
        _ => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::base64_encode;

    #[test]
    fn test_detect_structured() {
        let content = "proxies:\n  - name: A\n    type: ss\n";
        match SourceFormat::detect(content) {
            SourceFormat::Structured(seq) => assert_eq!(seq.len(), 1),
            other => panic!("unexpected format: {:?}", other),
        }
    }

    #[test]
    fn test_detect_legacy_key() {
        let content = "Proxy:\n  - name: A\n    type: ss\n";
        assert!(SourceFormat::detect(content).is_structured());
    }

    #[test]
    fn test_comment_mentioning_proxies_is_line_list() {
        let content = "# proxies: exported from panel\nvless://abc#A\n";
        assert_eq!(
            SourceFormat::detect(content),
            SourceFormat::LineList(content.to_string())
        );
    }

    #[test]
    fn test_proxies_key_that_is_not_a_sequence_is_line_list() {
        let content = "proxies: none\n";
        assert!(!SourceFormat::detect(content).is_structured());
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let plain = "vless://abc#A\nss://def#B\n";
        let encoded = base64_encode(plain);
        assert_eq!(
            SourceFormat::detect(&encoded),
            SourceFormat::LineList(plain.to_string())
        );
    }

    #[test]
    fn test_base64_without_links_is_kept() {
        // "hello world" in Base64 decodes fine but is not a link list
        let content = "aGVsbG8gd29ybGQ=";
        assert_eq!(
            SourceFormat::detect(content),
            SourceFormat::LineList(content.to_string())
        );
    }
}

/// Used for controlling the behavior of the normalizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSettings {
    /// Scheme prefixes a link line must start with to be kept, e.g.
    /// `vless://`. Empty means every non-comment line is kept.
    pub allowed_schemes: Vec<String>,
}

impl ParseSettings {
    /// Settings restricted to the share-link schemes most subscriptions use
    pub fn common_schemes() -> Self {
        ParseSettings {
            allowed_schemes: vec![
                "vless://".to_string(),
                "ss://".to_string(),
                "vmess://".to_string(),
            ],
        }
    }

    /// Whether a trimmed, non-comment line passes the scheme filter
    pub fn accepts_link(&self, line: &str) -> bool {
        self.allowed_schemes.is_empty()
            || self
                .allowed_schemes
                .iter()
                .any(|scheme| line.starts_with(scheme.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_accepts_everything() {
        let settings = ParseSettings::default();
        assert!(settings.accepts_link("trojan://pass@host:443#T"));
        assert!(settings.accepts_link("anything"));
    }

    #[test]
    fn test_common_schemes_filter() {
        let settings = ParseSettings::common_schemes();
        assert!(settings.accepts_link("vless://abc#A"));
        assert!(settings.accepts_link("ss://abc#B"));
        assert!(settings.accepts_link("vmess://abc"));
        assert!(!settings.accepts_link("trojan://abc#C"));
        assert!(!settings.accepts_link("ssr://abc"));
    }
}

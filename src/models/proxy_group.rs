/// Type of proxy group, as written in the `type` field of a template group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyGroupType {
    Select,
    URLTest,
    Fallback,
    LoadBalance,
    Relay,
    /// Any type this crate does not know about, kept verbatim
    Other(String),
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
            ProxyGroupType::LoadBalance => "load-balance",
            ProxyGroupType::Fallback => "fallback",
            ProxyGroupType::Relay => "relay",
            ProxyGroupType::Other(s) => s.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "select" => ProxyGroupType::Select,
            "url-test" => ProxyGroupType::URLTest,
            "load-balance" => ProxyGroupType::LoadBalance,
            "fallback" => ProxyGroupType::Fallback,
            "relay" => ProxyGroupType::Relay,
            other => ProxyGroupType::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_round_trip() {
        for name in ["select", "url-test", "load-balance", "fallback", "relay"] {
            assert_eq!(ProxyGroupType::from_str(name).as_str(), name);
        }
    }

    #[test]
    fn test_unknown_type_kept() {
        let group_type = ProxyGroupType::from_str("smart");
        assert_eq!(group_type, ProxyGroupType::Other("smart".to_string()));
        assert_eq!(group_type.as_str(), "smart");
    }

    #[test]
    fn test_type_is_case_sensitive() {
        assert_eq!(
            ProxyGroupType::from_str("URL-TEST"),
            ProxyGroupType::Other("URL-TEST".to_string())
        );
    }
}

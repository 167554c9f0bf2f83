use std::fmt;

use super::ProxyGroupType;

/// Decides which template groups get their node list rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Every group with a `proxies` key is refreshed
    Always,
    /// Only groups containing the `all` placeholder, or the primary selector
    /// group, are refreshed
    Placeholder { primary_group: Option<String> },
    /// Groups that already list concrete nodes, auto-selection groups and
    /// empty groups are refreshed; groups made only of reserved tokens and
    /// group references are left alone
    ContentAware { auto_group_type: ProxyGroupType },
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        RefreshPolicy::ContentAware {
            auto_group_type: ProxyGroupType::URLTest,
        }
    }
}

impl RefreshPolicy {
    /// Builds a policy from its name.
    ///
    /// Accepted names are `always`, `placeholder` and `content-aware`
    /// (case-insensitive, `_` may replace `-`). The extra arguments are only
    /// used by the policies that need them.
    pub fn parse(name: &str, primary_group: Option<&str>, auto_group_type: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "always" | "always-refresh" => Some(RefreshPolicy::Always),
            "placeholder" | "placeholder-gated" => Some(RefreshPolicy::Placeholder {
                primary_group: primary_group
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string()),
            }),
            "content-aware" | "content" => Some(RefreshPolicy::ContentAware {
                auto_group_type: ProxyGroupType::from_str(auto_group_type),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RefreshPolicy::Always => "always",
            RefreshPolicy::Placeholder { .. } => "placeholder",
            RefreshPolicy::ContentAware { .. } => "content-aware",
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

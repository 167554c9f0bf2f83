//! Group refresh decisions
//!
//! This module decides, per template group, whether its `proxies` list is
//! rewritten with the new node identities and what the rewritten list is.

use std::collections::HashSet;

use serde_yaml::{Mapping, Sequence, Value};

use crate::constants::{ALL_PLACEHOLDER, DIRECT, RESERVED_TOKENS};
use crate::models::{ProxyGroupType, RefreshPolicy};

/// Tokens of a group list that never refer to a node
///
/// Built once per merge from the built-in tokens and every group name in
/// the template, before any group is touched.
#[derive(Debug, Clone, Default)]
pub struct ReservedSet {
    tokens: HashSet<String>,
}

impl ReservedSet {
    pub fn from_groups(groups: Option<&Sequence>) -> Self {
        let mut tokens: HashSet<String> = RESERVED_TOKENS.iter().map(|t| t.to_string()).collect();
        for group in groups.into_iter().flatten() {
            if let Some(name) = group.get("name").and_then(Value::as_str) {
                tokens.insert(name.to_string());
            }
        }
        ReservedSet { tokens }
    }

    /// Exact, case-sensitive membership. Non-string tokens are never reserved.
    pub fn contains(&self, token: &Value) -> bool {
        token.as_str().is_some_and(|s| self.tokens.contains(s))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Computes the new `proxies` list of a group
///
/// # Arguments
///
/// * `group` - The group mapping (`name`, `type`, ...)
/// * `original` - The group's current `proxies` list
/// * `reserved` - Snapshot of reserved tokens
/// * `identities` - Node identities in normalizer order
/// * `policy` - Refresh policy in effect
///
/// # Returns
///
/// `Some(list)` when the group is refreshed, `None` when it stays unchanged
pub fn group_generate(
    group: &Mapping,
    original: &Sequence,
    reserved: &ReservedSet,
    identities: &[Value],
    policy: &RefreshPolicy,
) -> Option<Sequence> {
    let name = group.get("name").and_then(Value::as_str);
    let mut drop_direct = false;

    let refresh = match policy {
        RefreshPolicy::Always => true,
        RefreshPolicy::Placeholder { primary_group } => {
            original
                .iter()
                .any(|token| token.as_str() == Some(ALL_PLACEHOLDER))
                || (primary_group.is_some() && name == primary_group.as_deref())
        }
        RefreshPolicy::ContentAware { auto_group_type } => {
            let is_auto = group
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|t| ProxyGroupType::from_str(t) == *auto_group_type);
            drop_direct = is_auto;

            original.is_empty() || is_auto || original.iter().any(|token| !reserved.contains(token))
        }
    };

    if !refresh {
        return None;
    }

    let mut proxies: Sequence = original
        .iter()
        .filter(|token| reserved.contains(token))
        .filter(|token| !(drop_direct && token.as_str() == Some(DIRECT)))
        .cloned()
        .collect();
    proxies.extend(identities.iter().cloned());
    Some(proxies)
}

use log::{debug, info, warn};
use serde_yaml::{Sequence, Value};

use crate::constants::{PROXIES_KEY, PROXY_GROUPS_KEY};
use crate::error::MergeError;
use crate::generator::config::group::{group_generate, ReservedSet};
use crate::models::{ConfigTree, Node, RefreshPolicy};

/// Merge nodes into a template tree
///
/// The template is not modified; the merged tree is a new value. Its
/// `proxies` sequence is replaced by the node payloads and each group with a
/// `proxies` key is refreshed or left alone according to `policy`.
///
/// # Arguments
/// * `template` - Parsed template document
/// * `nodes` - Normalized nodes, in output order
/// * `policy` - Which groups get the new node identities
///
/// # Errors
/// Returns [`MergeError::EmptyNodeSet`] without doing any work when `nodes`
/// is empty. Otherwise the merge always succeeds.
pub fn merge_nodes(
    template: &ConfigTree,
    nodes: &[Node],
    policy: &RefreshPolicy,
) -> Result<ConfigTree, MergeError> {
    if nodes.is_empty() {
        return Err(MergeError::EmptyNodeSet);
    }

    let mut merged = template.clone();
    let root = merged.root_mut();

    let reserved = ReservedSet::from_groups(root.get(PROXY_GROUPS_KEY).and_then(Value::as_sequence));

    let payloads: Sequence = nodes.iter().map(|node| node.payload().to_yaml()).collect();
    root.insert(
        Value::String(PROXIES_KEY.to_string()),
        Value::Sequence(payloads),
    );

    let identities: Vec<Value> = nodes
        .iter()
        .map(|node| Value::String(node.identity().to_string()))
        .collect();

    let mut refreshed = 0usize;
    let mut total = 0usize;
    if let Some(Value::Sequence(groups)) = root.get_mut(PROXY_GROUPS_KEY) {
        for (index, group) in groups.iter_mut().enumerate() {
            let Value::Mapping(group_map) = group else {
                warn!("Skipping proxy group #{} that is not a mapping", index + 1);
                continue;
            };

            let original = match group_map.get(PROXIES_KEY) {
                None => continue,
                Some(Value::Sequence(seq)) => seq.clone(),
                Some(Value::Null) => Sequence::new(),
                Some(other) => {
                    warn!(
                        "Leaving proxy group #{} untouched: `proxies` is not a list ({:?})",
                        index + 1,
                        other
                    );
                    continue;
                }
            };
            total += 1;

            let group_name = group_map
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string();
            match group_generate(group_map, &original, &reserved, &identities, policy) {
                Some(proxies) => {
                    debug!("Refreshing group {} with {} entries", group_name, proxies.len());
                    group_map.insert(
                        Value::String(PROXIES_KEY.to_string()),
                        Value::Sequence(proxies),
                    );
                    refreshed += 1;
                }
                None => debug!("Keeping group {} unchanged", group_name),
            }
        }
    }

    info!(
        "Merged {} node(s); refreshed {} of {} group(s) with policy {}",
        nodes.len(),
        refreshed,
        total,
        policy
    );
    Ok(merged)
}

/// Merge nodes into a template and render the result as YAML text
pub fn proxy_to_clash(
    template: &ConfigTree,
    nodes: &[Node],
    policy: &RefreshPolicy,
) -> Result<String, MergeError> {
    merge_nodes(template, nodes, policy)?.to_yaml_string()
}

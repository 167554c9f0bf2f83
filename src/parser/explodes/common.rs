use log::debug;

use super::vmess::vmess_remark;
use super::RawNode;
use crate::models::NodePayload;
use crate::parser::ParseSettings;
use crate::utils::url::url_decode;

/// Explode a single share link.
///
/// The name is the text after the first `#`, percent-decoded and otherwise
/// kept as is. A blank name counts as no name. A vmess link without a
/// usable fragment falls back to the remark embedded in its JSON body.
pub fn explode_link(link: &str) -> RawNode {
    let fragment = link
        .split_once('#')
        .map(|(_, fragment)| url_decode(fragment))
        .filter(|name| !name.trim().is_empty());
    let name = match fragment {
        Some(name) => Some(name),
        None if link.starts_with("vmess://") => vmess_remark(link),
        None => None,
    };

    RawNode {
        name,
        payload: NodePayload::Link(link.to_string()),
    }
}

/// Explode a line-oriented subscription into raw nodes
///
/// Blank lines and lines starting with `#` are skipped, as are lines
/// rejected by the scheme filter in `settings`.
pub fn explode_sub(content: &str, settings: &ParseSettings) -> Vec<RawNode> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| {
            let accepted = settings.accepts_link(line);
            if !accepted {
                debug!("Skipping link with unsupported scheme: {}", line);
            }
            accepted
        })
        .map(explode_link)
        .collect()
}

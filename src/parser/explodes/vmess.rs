use serde_json::Value;

use crate::utils::base64::base64_decode_any;

/// Extract the remark (`ps` field) of a Base64-JSON `vmess://` link.
///
/// Returns `None` for links in any other vmess flavour, or when the remark
/// is missing or blank. A remark is returned as written.
pub fn vmess_remark(link: &str) -> Option<String> {
    let encoded = link.strip_prefix("vmess://")?;
    let encoded = encoded.split('#').next().unwrap_or(encoded).trim();
    let decoded = base64_decode_any(encoded)?;

    let json: Value = serde_json::from_str(&decoded).ok()?;
    json.get("ps")
        .and_then(Value::as_str)
        .filter(|ps| !ps.trim().is_empty())
        .map(|ps| ps.to_string())
}

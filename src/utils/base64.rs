use base64::{engine::general_purpose, Engine as _};

/// Decodes a Base64 string to its original form.
///
/// # Arguments
/// * `input` - The Base64 encoded string.
/// * `accept_urlsafe` - Whether the URL-safe alphabet should be used.
///
/// # Returns
/// The decoded bytes as UTF-8 text, or `None` if the input is not valid
/// Base64 or does not decode to UTF-8.
pub fn base64_decode(input: &str, accept_urlsafe: bool) -> Option<String> {
    let engine = if accept_urlsafe {
        general_purpose::URL_SAFE
    } else {
        general_purpose::STANDARD
    };

    let padded = pad_base64(input);
    engine
        .decode(padded.as_bytes())
        .ok()
        .and_then(|decoded| String::from_utf8(decoded).ok())
}

/// Decodes a Base64 string, trying the standard alphabet first and the
/// URL-safe one second.
pub fn base64_decode_any(input: &str) -> Option<String> {
    base64_decode(input, false).or_else(|| base64_decode(input, true))
}

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

// Subscriptions frequently strip the trailing '=' padding.
fn pad_base64(input: &str) -> String {
    let mut padded = input.trim_end_matches('=').to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_standard() {
        assert_eq!(
            base64_decode("aGVsbG8gd29ybGQ=", false).as_deref(),
            Some("hello world")
        );
    }

    #[test]
    fn test_decode_without_padding() {
        assert_eq!(base64_decode("aGVsbG8gd29ybGQ", false).as_deref(), Some("hello world"));
    }

    #[test]
    fn test_decode_urlsafe_fallback() {
        // "??>" encodes to "Pz8+" in standard and "Pz8-" in URL-safe form
        assert_eq!(base64_decode_any("Pz8-").as_deref(), Some("??>"));
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(base64_decode_any("vless://abc#name"), None);
    }

    #[test]
    fn test_encode() {
        assert_eq!(base64_encode("hello world"), "aGVsbG8gd29ybGQ=");
    }
}

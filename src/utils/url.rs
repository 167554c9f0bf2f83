//! URL encoding/decoding utilities

/// Decodes a URL-encoded string
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
///
/// # Examples
/// ```
/// use submerge::utils::url::url_decode;
///
/// let decoded = url_decode("My%20Node");
/// assert_eq!(decoded, "My Node");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Checks whether the string looks like an http(s) link
pub fn is_link(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

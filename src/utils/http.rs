use std::time::Duration;

use log::debug;
use reqwest::{Client, Proxy};

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "submerge";

/// Options applied to every outgoing fetch
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Upstream proxy, e.g. `http://127.0.0.1:7890`
    pub proxy: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        HttpOptions {
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Parses an upstream proxy setting. `NONE` and the empty string disable it.
pub fn parse_proxy(proxy_str: &str) -> Option<String> {
    let proxy_str = proxy_str.trim();
    if proxy_str.is_empty() || proxy_str.eq_ignore_ascii_case("NONE") {
        None
    } else {
        Some(proxy_str.to_string())
    }
}

/// Makes an HTTP GET request to the specified URL
///
/// # Arguments
/// * `url` - The URL to request
/// * `options` - Proxy, timeout and user agent to use
///
/// # Returns
/// * `Ok(String)` - The response body as a string
/// * `Err(String)` - Error message if the request failed
pub async fn web_get_async(url: &str, options: &HttpOptions) -> Result<String, String> {
    let mut client_builder = Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str());

    if let Some(proxy) = &options.proxy {
        match Proxy::all(proxy) {
            Ok(proxy) => {
                client_builder = client_builder.proxy(proxy);
            }
            Err(e) => {
                return Err(format!("Failed to set proxy: {}", e));
            }
        }
    }

    let client = client_builder
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    debug!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_proxy() {
        assert_eq!(parse_proxy(""), None);
        assert_eq!(parse_proxy("NONE"), None);
        assert_eq!(
            parse_proxy(" http://127.0.0.1:7890 "),
            Some("http://127.0.0.1:7890".to_string())
        );
    }

    #[test]
    fn test_default_options() {
        let options = HttpOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(DEFAULT_TIMEOUT));
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
        assert!(options.proxy.is_none());
    }
}

pub mod base64;
pub mod file;
pub mod http;
pub mod url;

// Re-export common utilities
pub use file::file_get_async;
pub use http::{web_get_async, HttpOptions};
pub use url::{is_link, url_decode};

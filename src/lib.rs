//! Merge a proxy subscription into a Clash template configuration.
//!
//! The pipeline normalizes the subscription into [`Node`]s
//! ([`parser::normalize`]), merges them into the template tree
//! ([`generator::merge_nodes`]) under an explicit [`RefreshPolicy`], and
//! renders the result back to YAML.

pub mod constants;
pub mod error;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;
#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the main types for easier access
pub use error::MergeError;
pub use generator::merge_nodes;
pub use interfaces::{merge_content, merge_subscription};
pub use models::{ConfigTree, Node, NodePayload, RefreshPolicy};
pub use parser::{normalize, normalize_with, ParseSettings};
pub use settings::Settings;

//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use submerge::models::{Node, NodePayload};
//!
//! let node = Node::link("My Node", "vless://abc123#My%20Node");
//! assert_eq!(node.identity(), "My Node");
//! assert!(matches!(node.payload(), NodePayload::Link(_)));
//! ```

pub mod app_state;
pub mod config_tree;
pub mod node;
pub mod proxy_group;
pub mod refresh_policy;

pub use app_state::AppState;
pub use config_tree::ConfigTree;
pub use node::{Node, NodePayload};
pub use proxy_group::ProxyGroupType;
pub use refresh_policy::RefreshPolicy;

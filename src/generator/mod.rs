pub mod config;
pub mod exports;

pub use config::group::{group_generate, ReservedSet};
pub use exports::clash::{merge_nodes, proxy_to_clash};

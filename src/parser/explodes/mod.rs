//! Per-format entry parsers.
//!
//! Each parser turns one raw source entry into a [`RawNode`]: the payload
//! plus the name found in it, if any. Identity assignment and deduplication
//! happen afterwards in [`crate::parser::subparser`].

pub mod clash;
pub mod common;
pub mod vmess;

use crate::models::NodePayload;

/// A source entry before identity assignment
#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    pub name: Option<String>,
    pub payload: NodePayload,
}

pub use clash::explode_clash_entries;
pub use common::{explode_link, explode_sub};

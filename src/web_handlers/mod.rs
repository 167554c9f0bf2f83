pub mod interfaces;

pub use interfaces::{config, MergeQuery, MergeResponse};

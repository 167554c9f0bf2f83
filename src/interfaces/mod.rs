pub mod merger;

pub use merger::{
    merge_content, merge_subscription, ContentSource, MergeRequest, MergeRequestBuilder,
    MergeResult,
};

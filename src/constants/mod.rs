pub mod reserved;

pub use reserved::*;

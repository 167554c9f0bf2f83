pub mod explodes;
pub mod parse_settings;
pub mod subparser;
pub mod types;

pub use parse_settings::ParseSettings;
pub use subparser::{normalize, normalize_with, render_nodes};
pub use types::SourceFormat;

//! Literals shared with the template document. All comparisons are exact
//! and case-sensitive.

/// Built-in policy that connects without a proxy
pub const DIRECT: &str = "DIRECT";
/// Built-in policy that drops the connection
pub const REJECT: &str = "REJECT";
/// Built-in global selector
pub const GLOBAL: &str = "GLOBAL";

/// Tokens that always denote a control action, never a node
pub const RESERVED_TOKENS: [&str; 3] = [DIRECT, REJECT, GLOBAL];

/// Placeholder a template author puts in a group to request every node
pub const ALL_PLACEHOLDER: &str = "all";

/// Top-level key holding the node definitions
pub const PROXIES_KEY: &str = "proxies";
/// Top-level key holding the proxy groups
pub const PROXY_GROUPS_KEY: &str = "proxy-groups";
/// Legacy Clash key for node definitions, accepted in sources only
pub const LEGACY_PROXIES_KEY: &str = "Proxy";

/// Prefix of synthetic identities given to unnamed links
pub const SYNTHETIC_NAME_PREFIX: &str = "Node-";

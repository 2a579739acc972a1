use std::env;

/// Name of the environment variable that selects production mode.
pub const NODE_ENV: &str = "NODE_ENV";

/// Whether a value of [`NODE_ENV`] means production mode.
///
/// Only the exact string `production` does.
pub fn is_production_env(node_env: Option<&str>) -> bool {
    node_env == Some("production")
}

/// Whether the current process runs in production mode, according to [`NODE_ENV`].
pub fn is_production_mode() -> bool {
    let node_env = env::var(NODE_ENV).ok();
    is_production_env(node_env.as_deref())
}

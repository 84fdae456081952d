use std::env;

/// Hub configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub bind: String,
    pub port: u16,

    /// Fullnode REST endpoint.
    pub node_url: String,
    /// Account the prediction-market module is published under. Also the
    /// first source address of every fetch.
    pub module_address: String,
    pub module_name: String,
    /// Per-request fullnode timeout in seconds.
    pub chain_timeout_s: u64,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl HubConfig {
    pub fn from_env() -> Self {
        Self {
            bind: env_str("BONDHUB_BIND", "127.0.0.1"),
            port: env_u16("BONDHUB_PORT", 61040),
            node_url: env_str(
                "BONDHUB_NODE_URL",
                "https://fullnode.devnet.aptoslabs.com/v1",
            ),
            module_address: env_str("BONDHUB_MODULE_ADDRESS", ""),
            module_name: env_str("BONDHUB_MODULE_NAME", "prediction_market"),
            chain_timeout_s: env_u64("BONDHUB_CHAIN_TIMEOUT_S", 10),
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use chain_data::AptosReader;

use crate::config::HubConfig;

/// Shared application state, passed to route handlers via `axum::extract::State`.
pub struct AppState {
    pub config: HubConfig,
    pub chain: AptosReader,
}

impl AppState {
    pub fn new(config: HubConfig) -> Arc<Self> {
        let chain = AptosReader::new(
            &config.node_url,
            &config.module_address,
            &config.module_name,
            Duration::from_secs(config.chain_timeout_s),
        );
        Arc::new(Self { config, chain })
    }
}

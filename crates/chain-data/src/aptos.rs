use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};

use crate::error::ChainError;
use crate::ChainReader;

/// [`ChainReader`] over the Aptos fullnode REST API.
///
/// Two read-only calls: account resource listing to detect a bond store,
/// and the contract's `get_all_bonds` view. No internal retries; retry
/// policy belongs to the caller.
pub struct AptosReader {
    http: Client,
    node_url: String,
    module_address: String,
    module_name: String,
    timeout: Duration,
}

impl AptosReader {
    pub fn new(
        node_url: &str,
        module_address: &str,
        module_name: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            http: Client::new(),
            node_url: node_url.trim_end_matches('/').to_string(),
            module_address: module_address.to_string(),
            module_name: module_name.to_string(),
            timeout,
        }
    }

    /// Check status before decoding; fullnode error bodies carry an
    /// `error_code` string that classification keys off.
    async fn decode(resp: reqwest::Response) -> Result<Value, ChainError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ChainError::new(format!("body read failed: {e}")))?;
        if !status.is_success() {
            return Err(ChainError::new(format!("HTTP {status}: {body}")));
        }
        serde_json::from_str(&body).map_err(|e| ChainError::new(format!("bad JSON: {e}")))
    }
}

impl ChainReader for AptosReader {
    async fn has_bond_store(&self, address: &str) -> Result<bool, ChainError> {
        let url = format!("{}/accounts/{address}/resources", self.node_url);
        let resp = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ChainError::new(format!("request failed: {e}")))?;
        let resources = Self::decode(resp).await?;

        let found = resources
            .as_array()
            .map(|rs| {
                rs.iter().any(|r| {
                    r.get("type")
                        .and_then(|t| t.as_str())
                        .is_some_and(|t| t.contains("BondStore") || t.contains(&self.module_name))
                })
            })
            .unwrap_or(false);
        Ok(found)
    }

    async fn list_bonds(&self, address: &str) -> Result<Value, ChainError> {
        let url = format!("{}/view", self.node_url);
        let payload = json!({
            "function": format!(
                "{}::{}::get_all_bonds",
                self.module_address, self.module_name
            ),
            "type_arguments": [],
            "arguments": [address],
        });

        let resp = self
            .http
            .post(&url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ChainError::new(format!("request failed: {e}")))?;
        let body = Self::decode(resp).await?;

        // The view wraps its single return value in an array; the first
        // element is the record list. Anything else parses to zero records
        // downstream.
        Ok(body.get(0).cloned().unwrap_or(Value::Null))
    }
}

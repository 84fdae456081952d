use futures::future::join_all;
use market_core::BondRecord;

use crate::error::{ChainError, FetchFailed};
use crate::record::parse_bond_records;
use crate::ChainReader;

/// Fetch and merge bond records from every source address.
///
/// Per-address requests run concurrently, but the merged result follows
/// `source_addresses` order exactly regardless of completion order. An
/// address without a bond store, or one whose payload is malformed,
/// contributes zero records. Canceled bonds are dropped before returning.
///
/// Fails only when every address failed at the transport level; a partial
/// failure is absorbed as empty for that address and logged. Nothing is
/// spawned, so dropping the returned future abandons the whole fetch with
/// no partial state left behind.
pub async fn fetch_all<R: ChainReader>(
    reader: &R,
    source_addresses: &[String],
) -> Result<Vec<BondRecord>, FetchFailed> {
    let per_address = join_all(
        source_addresses
            .iter()
            .map(|addr| fetch_from_address(reader, addr)),
    )
    .await;

    let mut merged = Vec::new();
    let mut failures = Vec::new();
    let mut any_succeeded = false;

    for (addr, outcome) in source_addresses.iter().zip(per_address) {
        match outcome {
            Ok(records) => {
                any_succeeded = true;
                tracing::debug!("{} bond(s) from {addr}", records.len());
                merged.extend(records);
            }
            Err(e) => {
                tracing::debug!("bond fetch from {addr} failed: {e}");
                failures.push((addr.clone(), e));
            }
        }
    }

    if !any_succeeded && !failures.is_empty() {
        let failed = FetchFailed::new(failures);
        tracing::warn!("{failed}");
        return Err(failed);
    }

    merged.retain(|b| !b.canceled);
    Ok(merged)
}

/// Fetch one address. No store present is an ordinary empty answer.
async fn fetch_from_address<R: ChainReader>(
    reader: &R,
    address: &str,
) -> Result<Vec<BondRecord>, ChainError> {
    if !reader.has_bond_store(address).await? {
        tracing::debug!("no bond store at {address}");
        return Ok(Vec::new());
    }
    let payload = reader.list_bonds(address).await?;
    Ok(parse_bond_records(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::time::Duration;

    /// In-memory reader: a payload per address with a store, an error
    /// message per failing address, and optional per-address latency.
    #[derive(Default)]
    struct StubReader {
        stores: HashMap<String, Value>,
        errors: HashMap<String, String>,
        delays_ms: HashMap<String, u64>,
    }

    impl StubReader {
        fn with_store(mut self, addr: &str, payload: Value) -> Self {
            self.stores.insert(addr.to_string(), payload);
            self
        }

        fn with_error(mut self, addr: &str, message: &str) -> Self {
            self.errors.insert(addr.to_string(), message.to_string());
            self
        }

        fn with_delay(mut self, addr: &str, ms: u64) -> Self {
            self.delays_ms.insert(addr.to_string(), ms);
            self
        }
    }

    impl ChainReader for StubReader {
        async fn has_bond_store(&self, address: &str) -> Result<bool, ChainError> {
            if let Some(msg) = self.errors.get(address) {
                return Err(ChainError::new(msg.clone()));
            }
            Ok(self.stores.contains_key(address))
        }

        async fn list_bonds(&self, address: &str) -> Result<Value, ChainError> {
            if let Some(ms) = self.delays_ms.get(address) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            Ok(self.stores.get(address).cloned().unwrap_or(Value::Null))
        }
    }

    fn bond(id: u64, canceled: bool) -> Value {
        json!({
            "id": id.to_string(),
            "issuer": "0xabc",
            "total_raise": "1000000000",
            "raised": "100000000",
            "rate_bps": "500",
            "end_ts": "1800000000",
            "canceled": canceled,
            "company": format!("Company {id}"),
        })
    }

    #[tokio::test]
    async fn missing_store_is_skipped_and_canceled_excluded() {
        let reader = StubReader::default()
            .with_store("0xb", json!([bond(1, false), bond(2, true)]));
        let addrs = vec!["0xa".to_string(), "0xb".to_string()];

        let records = fetch_all(&reader, &addrs).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
    }

    #[tokio::test]
    async fn merge_order_follows_addresses_not_completion() {
        // The first address is slower; its records must still come first.
        let reader = StubReader::default()
            .with_store("0xslow", json!([bond(1, false)]))
            .with_delay("0xslow", 40)
            .with_store("0xfast", json!([bond(2, false)]));
        let addrs = vec!["0xslow".to_string(), "0xfast".to_string()];

        let records = fetch_all(&reader, &addrs).await.unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn duplicate_ids_across_addresses_are_kept() {
        let reader = StubReader::default()
            .with_store("0xa", json!([bond(7, false)]))
            .with_store("0xb", json!([bond(7, false)]));
        let addrs = vec!["0xa".to_string(), "0xb".to_string()];

        let records = fetch_all(&reader, &addrs).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn partial_failure_is_absorbed() {
        let reader = StubReader::default()
            .with_error("0xbad", "request failed: connection refused")
            .with_store("0xgood", json!([bond(3, false)]));
        let addrs = vec!["0xbad".to_string(), "0xgood".to_string()];

        let records = fetch_all(&reader, &addrs).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 3);
    }

    #[tokio::test]
    async fn all_failed_surfaces_classified_error() {
        let reader = StubReader::default()
            .with_error("0xa", "HTTP 404: resource_not_found")
            .with_error("0xb", "request failed: timeout");
        let addrs = vec!["0xa".to_string(), "0xb".to_string()];

        let err = fetch_all(&reader, &addrs).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ResourceNotFound);
        assert_eq!(err.failures.len(), 2);
    }

    #[tokio::test]
    async fn no_addresses_is_empty_success() {
        let reader = StubReader::default();
        let records = fetch_all(&reader, &[]).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn malformed_payload_counts_as_zero_records() {
        let reader = StubReader::default()
            .with_store("0xa", json!({"not": "an array"}))
            .with_store("0xb", json!([bond(5, false)]));
        let addrs = vec!["0xa".to_string(), "0xb".to_string()];

        let records = fetch_all(&reader, &addrs).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 5);
    }
}

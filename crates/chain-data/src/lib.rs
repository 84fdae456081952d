//! Chain-facing data layer: the [`ChainReader`] abstraction, the lenient
//! parse boundary turning untyped chain payloads into typed records, and
//! the multi-address aggregation behind the markets views.

mod agg;
mod aptos;
mod error;
mod record;
mod scope;

pub use agg::fetch_all;
pub use aptos::AptosReader;
pub use error::{ChainError, ErrorKind, FetchFailed};
pub use record::{parse_bond_record, parse_bond_records};
pub use scope::{resolve_addresses, SearchScope};

use std::future::Future;

use serde_json::Value;

/// Read-only view of on-chain bond storage.
///
/// Implementations are transport clients. Both calls are side-effect-free
/// from the caller's perspective and may fail with a transport-classified
/// [`ChainError`]. Payloads stay untyped until the validation boundary in
/// [`record`](crate::record) parses them.
pub trait ChainReader: Sync {
    /// Whether a bond store exists at `address`. Absence is an ordinary
    /// answer, not an error.
    fn has_bond_store(&self, address: &str) -> impl Future<Output = Result<bool, ChainError>> + Send;

    /// Raw record array from the contract's list-bonds view for `address`.
    fn list_bonds(&self, address: &str) -> impl Future<Output = Result<Value, ChainError>> + Send;
}

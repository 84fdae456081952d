use serde::Serialize;

/// One bond as stored on chain. Created by contract execution and
/// read-only from this workspace's perspective; amounts are base units.
///
/// `raised <= total_raise` and `end_ts > start_ts` hold while the market
/// is open; `canceled` permanently excludes the record from active views.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BondRecord {
    pub id: u64,
    pub issuer: String,
    pub total_raise: u64,
    pub min_invest: u64,
    pub raised: u64,
    /// Annualized rate in basis points, 1..=10_000.
    pub rate_bps: u32,
    pub start_ts: u64,
    pub end_ts: u64,
    pub canceled: bool,
    pub investor_count: u64,

    // Descriptive fields, no computed invariants.
    pub company: String,
    pub bond_id: String,
    pub question: String,
    pub description: String,
    pub deadline: String,
    pub category: String,
    pub coupon_rate: String,
    pub maturity_date: String,
    pub principal_amount: String,
    pub credit_rating: String,
}

use serde::Serialize;

use crate::money::format_display;
use crate::record::BondRecord;

/// Display-ready projection of one [`BondRecord`] at an evaluation
/// instant. Recomputed on every fetch and discarded, never persisted.
///
/// Money fields come in pairs: the formatted display string and the raw
/// base-unit magnitude (`*_raw`). Sorting always uses the raw numbers so
/// ordering stays exact and locale-independent.
#[derive(Debug, Clone, Serialize)]
pub struct MarketView {
    pub id: u64,
    pub company: String,
    pub bond_id: String,
    pub question: String,
    /// Lowercased for case-insensitive category filtering.
    pub category: String,
    pub coupon_rate: String,
    pub credit_rating: String,
    pub issuer: String,
    pub description: String,
    pub participants: u64,
    pub deadline: String,
    /// Unix seconds of the market close; the deadline sort key.
    pub deadline_ts: u64,
    pub total_raise: String,
    pub total_raise_raw: u64,
    pub raised: String,
    pub raised_raw: u64,
    pub min_invest: String,
    pub min_invest_raw: u64,
    /// Traded notional used for the volume sort. The raised amount is the
    /// only genuine volume figure available on chain.
    pub volume_raw: u64,
    pub is_active: bool,
}

impl MarketView {
    /// Project a record for display. Pure: `now` is unix seconds supplied
    /// by the caller, never read from a clock here.
    pub fn project(record: &BondRecord, now: u64) -> Self {
        Self {
            id: record.id,
            company: record.company.clone(),
            bond_id: record.bond_id.clone(),
            question: record.question.clone(),
            category: record.category.to_lowercase(),
            coupon_rate: record.coupon_rate.clone(),
            credit_rating: record.credit_rating.clone(),
            issuer: record.issuer.clone(),
            description: record.description.clone(),
            participants: record.investor_count,
            deadline: record.deadline.clone(),
            deadline_ts: record.end_ts,
            total_raise: format_display(record.total_raise),
            total_raise_raw: record.total_raise,
            raised: format_display(record.raised),
            raised_raw: record.raised,
            min_invest: format_display(record.min_invest),
            min_invest_raw: record.min_invest,
            volume_raw: record.raised,
            is_active: !record.canceled && record.end_ts > now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BondRecord {
        BondRecord {
            id: 7,
            issuer: "0xabc".into(),
            total_raise: 1_000_000_000,
            min_invest: 10_000_000,
            raised: 250_000_000,
            rate_bps: 500,
            start_ts: 1_700_000_000,
            end_ts: 1_800_000_000,
            canceled: false,
            investor_count: 42,
            company: "Acme Corp".into(),
            bond_id: "ACME-2030".into(),
            question: "Will Acme default before maturity?".into(),
            category: "Technology".into(),
            ..Default::default()
        }
    }

    #[test]
    fn projects_amounts_and_flags() {
        let view = MarketView::project(&record(), 1_750_000_000);
        assert_eq!(view.id, 7);
        assert_eq!(view.total_raise, "10.000000 APT");
        assert_eq!(view.total_raise_raw, 1_000_000_000);
        assert_eq!(view.raised, "2.500000 APT");
        assert_eq!(view.volume_raw, 250_000_000);
        assert_eq!(view.participants, 42);
        assert_eq!(view.category, "technology");
        assert_eq!(view.deadline_ts, 1_800_000_000);
        assert!(view.is_active);
    }

    #[test]
    fn inactive_once_deadline_passes() {
        // end_ts == now counts as expired.
        assert!(!MarketView::project(&record(), 1_800_000_000).is_active);
        assert!(!MarketView::project(&record(), 1_900_000_000).is_active);
    }

    #[test]
    fn canceled_is_never_active() {
        let mut r = record();
        r.canceled = true;
        assert!(!MarketView::project(&r, 0).is_active);
    }
}

use market_core::BondRecord;
use serde_json::{Map, Value};

/// Accept a JSON number or a decimal string; the fullnode serializes
/// Move u64s as strings.
fn parse_u64_value(v: &Value) -> Option<u64> {
    if let Some(u) = v.as_u64() {
        return Some(u);
    }
    v.as_str().and_then(|s| s.trim().parse::<u64>().ok())
}

fn parse_bool_value(v: &Value) -> Option<bool> {
    v.as_bool()
        .or_else(|| v.as_str().map(|s| s.trim().eq_ignore_ascii_case("true")))
}

fn u64_field(obj: &Map<String, Value>, key: &str) -> u64 {
    obj.get(key).and_then(parse_u64_value).unwrap_or(0)
}

fn str_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Parse one raw chain record.
///
/// `None` only when the element is not an object at all. A malformed
/// individual field falls back to its zero value instead of dropping the
/// record, so one bad optional field never loses a bond.
pub fn parse_bond_record(raw: &Value) -> Option<BondRecord> {
    let obj = raw.as_object()?;
    Some(BondRecord {
        id: u64_field(obj, "id"),
        issuer: str_field(obj, "issuer"),
        total_raise: u64_field(obj, "total_raise"),
        min_invest: u64_field(obj, "min_invest"),
        raised: u64_field(obj, "raised"),
        rate_bps: u32::try_from(u64_field(obj, "rate_bps")).unwrap_or(0),
        start_ts: u64_field(obj, "start_ts"),
        end_ts: u64_field(obj, "end_ts"),
        canceled: obj.get("canceled").and_then(parse_bool_value).unwrap_or(false),
        investor_count: u64_field(obj, "investor_count"),
        company: str_field(obj, "company"),
        bond_id: str_field(obj, "bondId"),
        question: str_field(obj, "question"),
        description: str_field(obj, "description"),
        deadline: str_field(obj, "deadline"),
        category: str_field(obj, "category"),
        coupon_rate: str_field(obj, "couponRate"),
        maturity_date: str_field(obj, "maturityDate"),
        principal_amount: str_field(obj, "principalAmount"),
        credit_rating: str_field(obj, "creditRating"),
    })
}

/// Parse a list-bonds payload. A non-array payload counts as zero
/// records, never an error.
pub fn parse_bond_records(payload: &Value) -> Vec<BondRecord> {
    match payload.as_array() {
        Some(rows) => rows.iter().filter_map(parse_bond_record).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_stringly_typed_u64s() {
        let raw = json!({
            "id": "3",
            "issuer": "0xabc",
            "total_raise": "1000000000",
            "min_invest": 10000000,
            "raised": "250000000",
            "rate_bps": "500",
            "start_ts": "1700000000",
            "end_ts": "1800000000",
            "canceled": false,
            "investor_count": "42",
            "company": "Acme Corp",
            "bondId": "ACME-2030",
            "question": "Will Acme default?",
            "category": "Technology",
            "couponRate": "5.0%",
            "creditRating": "BB+",
        });
        let record = parse_bond_record(&raw).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.total_raise, 1_000_000_000);
        assert_eq!(record.min_invest, 10_000_000);
        assert_eq!(record.rate_bps, 500);
        assert_eq!(record.investor_count, 42);
        assert_eq!(record.bond_id, "ACME-2030");
        assert_eq!(record.credit_rating, "BB+");
        assert!(!record.canceled);
    }

    #[test]
    fn malformed_optional_fields_default_instead_of_dropping() {
        let raw = json!({
            "id": "9",
            "company": "Globex",
            "investor_count": "not-a-number",
            "raised": null,
            "canceled": "TRUE",
        });
        let record = parse_bond_record(&raw).unwrap();
        assert_eq!(record.id, 9);
        assert_eq!(record.investor_count, 0);
        assert_eq!(record.raised, 0);
        assert!(record.canceled);
    }

    #[test]
    fn non_object_elements_contribute_nothing() {
        let payload = json!([{"id": "1"}, "garbage", 17, null, {"id": "2"}]);
        let records = parse_bond_records(&payload);
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn non_array_payload_is_zero_records() {
        assert!(parse_bond_records(&json!(null)).is_empty());
        assert!(parse_bond_records(&json!({"rows": []})).is_empty());
        assert!(parse_bond_records(&json!("oops")).is_empty());
    }
}

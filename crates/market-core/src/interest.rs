use crate::error::CoreError;

/// Seconds in the fixed 365-day contract year. Not calendar-aware.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOM: u64 = 10_000;

/// Maximum interest reserve a market creator must lock for a bond.
///
/// reserve = floor(total_raise * rate_bps * (end_ts - start_ts)
///                 / (SECONDS_PER_YEAR * BPS_DENOM))
///
/// The triple product can exceed 64 bits for realistic inputs, so the
/// whole multiply-then-divide runs in `u128` with a single truncating
/// division at the end. The quotient is cast back to the `u64` money
/// domain with saturation; amounts past `u64::MAX` octas cannot exist on
/// chain in the first place.
///
/// `rate_bps` range is the caller's responsibility; only window ordering
/// is checked here.
pub fn compute_interest_reserve(
    total_raise: u64,
    rate_bps: u32,
    start_ts: u64,
    end_ts: u64,
) -> Result<u64, CoreError> {
    if end_ts <= start_ts {
        return Err(CoreError::InvalidWindow { start_ts, end_ts });
    }
    let duration = (end_ts - start_ts) as u128;
    let num = total_raise as u128 * rate_bps as u128 * duration;
    let den = (SECONDS_PER_YEAR * BPS_DENOM) as u128;
    Ok(u64::try_from(num / den).unwrap_or(u64::MAX))
}

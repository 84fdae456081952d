/// Base units (octas) per display unit (APT).
pub const BASE_UNITS_PER_DISPLAY: u64 = 100_000_000;

/// Display strings show six decimal places, so the last two base-unit
/// digits are truncated away.
const DISPLAY_TRUNC: u64 = 100;

/// Format a base-unit amount as a six-decimal display string.
///
/// Integer division/modulo only; the sub-display remainder is truncated,
/// never rounded up, so a formatted amount can lose up to 99 base units
/// but can never gain value.
pub fn format_display(base_units: u64) -> String {
    let whole = base_units / BASE_UNITS_PER_DISPLAY;
    let frac = (base_units % BASE_UNITS_PER_DISPLAY) / DISPLAY_TRUNC;
    format!("{whole}.{frac:06} APT")
}

/// Truncate a base-unit amount to the precision a display string carries.
pub fn truncate_to_display(base_units: u64) -> u64 {
    base_units / DISPLAY_TRUNC * DISPLAY_TRUNC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fraction() {
        assert_eq!(format_display(0), "0.000000 APT");
        assert_eq!(format_display(100_000_000), "1.000000 APT");
        assert_eq!(format_display(1_234_567_890), "12.345678 APT");
        assert_eq!(format_display(50_000_000), "0.500000 APT");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 0.99999999 APT shows as 0.999999, not 1.000000.
        assert_eq!(format_display(99_999_999), "0.999999 APT");
    }

    #[test]
    fn display_round_trip_never_gains_value() {
        for base in [0u64, 1, 99, 100, 123_456_789, 99_999_999, 100_000_001, u64::MAX] {
            let s = format_display(base);
            let num = s.strip_suffix(" APT").unwrap();
            let (whole, frac) = num.split_once('.').unwrap();
            let rebuilt = whole.parse::<u64>().unwrap() * BASE_UNITS_PER_DISPLAY
                + frac.parse::<u64>().unwrap() * DISPLAY_TRUNC;
            assert_eq!(rebuilt, truncate_to_display(base));
            assert!(rebuilt <= base);
        }
    }
}

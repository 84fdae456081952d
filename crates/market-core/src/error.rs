use std::fmt;

/// Errors from the pure computation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Interest window where the end timestamp is not after the start.
    InvalidWindow { start_ts: u64, end_ts: u64 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindow { start_ts, end_ts } => write!(
                f,
                "invalid_window: end timestamp {end_ts} must be after start timestamp {start_ts}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

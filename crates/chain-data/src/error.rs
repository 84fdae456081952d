use std::fmt;

/// Transport/protocol failure classification.
///
/// Classification keys off the fullnode's error strings, the same
/// fragments the browser frontend matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ResourceNotFound,
    FunctionNotFound,
    ExecutionReverted,
    Unknown,
}

impl ErrorKind {
    /// Classify a transport error message by content.
    pub fn classify(message: &str) -> Self {
        let m = message.to_lowercase();
        if m.contains("resource_not_found") {
            Self::ResourceNotFound
        } else if m.contains("function_not_found") {
            Self::FunctionNotFound
        } else if m.contains("move abort") || m.contains("execution_reverted") || m.contains("aborted") {
            Self::ExecutionReverted
        } else {
            Self::Unknown
        }
    }

    /// Wire label used in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::FunctionNotFound => "FUNCTION_NOT_FOUND",
            Self::ExecutionReverted => "EXECUTION_REVERTED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Actionable hint for the UI, when the classification has one.
    pub fn user_hint(self) -> Option<&'static str> {
        match self {
            Self::ResourceNotFound => {
                Some("Bond store not found. Create a bond first to initialize the store.")
            }
            Self::FunctionNotFound => {
                Some("View function not found. Check that the contract is deployed at the configured address.")
            }
            Self::ExecutionReverted => {
                Some("Contract execution failed. The contract may not be properly initialized.")
            }
            Self::Unknown => None,
        }
    }
}

/// One failed reader call.
#[derive(Debug, Clone)]
pub struct ChainError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ChainError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self { kind: ErrorKind::classify(&message), message }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for ChainError {}

/// Every configured source address failed at the transport level.
///
/// Distinct from an empty-but-successful fetch, which is not an error.
#[derive(Debug, Clone)]
pub struct FetchFailed {
    /// Headline classification: the first specific per-address kind, or
    /// `Unknown` when no address produced a specific one.
    pub kind: ErrorKind,
    pub failures: Vec<(String, ChainError)>,
}

impl FetchFailed {
    pub(crate) fn new(failures: Vec<(String, ChainError)>) -> Self {
        let kind = failures
            .iter()
            .map(|(_, e)| e.kind)
            .find(|k| *k != ErrorKind::Unknown)
            .unwrap_or(ErrorKind::Unknown);
        Self { kind, failures }
    }
}

impl fmt::Display for FetchFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bond fetch failed for all {} source address(es) ({})",
            self.failures.len(),
            self.kind.as_str()
        )?;
        if let Some((addr, e)) = self.failures.first() {
            write!(f, ": {addr}: {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FetchFailed {}

/// Which accounts to search for bond stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only the configured contract account.
    Contract,
    /// Only the connected wallet.
    User,
    /// Contract first, then the wallet when one is connected.
    All,
}

impl SearchScope {
    /// Parse the wire value used by the frontend's scope selector.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contract" => Some(Self::Contract),
            "user" => Some(Self::User),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Resolve the ordered address list to query for a scope.
///
/// The contract address leads, the wallet follows; an empty resolution
/// (user scope with no wallet connected) falls back to the contract
/// address so a fetch always has at least one source.
pub fn resolve_addresses(
    scope: SearchScope,
    contract_address: &str,
    user_address: Option<&str>,
) -> Vec<String> {
    let mut addresses = Vec::new();

    if matches!(scope, SearchScope::Contract | SearchScope::All) {
        addresses.push(contract_address.to_string());
    }
    if matches!(scope, SearchScope::User | SearchScope::All) {
        if let Some(user) = user_address {
            addresses.push(user.to_string());
        }
    }

    if addresses.is_empty() {
        addresses.push(contract_address.to_string());
    }
    addresses
}

//! Hosts file entry type and field matching rules.

/// One resolvable address-to-hostname mapping.
///
/// The model enforces no uniqueness: duplicate pairs may coexist in a file
/// until removed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub address: String,
    pub hostname: String,
}

impl Entry {
    pub fn new(address: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            hostname: hostname.into(),
        }
    }

    /// Case-insensitive match on the address field.
    pub fn address_matches(&self, address: &str) -> bool {
        fields_match(&self.address, address)
    }

    /// Case-insensitive match on the hostname field.
    pub fn hostname_matches(&self, hostname: &str) -> bool {
        fields_match(&self.hostname, hostname)
    }

    /// Both fields must match.
    pub fn matches(&self, address: &str, hostname: &str) -> bool {
        self.address_matches(address) && self.hostname_matches(hostname)
    }
}

/// Exact string equality after uppercasing both sides.
fn fields_match(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

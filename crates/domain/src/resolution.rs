use std::net::Ipv4Addr;

/// Outcome of resolving one subdomain's A records.
///
/// A lookup error and a lookup that returned no addresses are both
/// [`ResolutionResult::Absent`]; they suppress notification the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    Resolved(Vec<Ipv4Addr>),
    Absent,
}

impl ResolutionResult {
    pub fn from_addresses(addresses: Vec<Ipv4Addr>) -> Self {
        if addresses.is_empty() {
            Self::Absent
        } else {
            Self::Resolved(addresses)
        }
    }

    pub fn addresses(&self) -> Option<&[Ipv4Addr]> {
        match self {
            Self::Resolved(addresses) => Some(addresses),
            Self::Absent => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

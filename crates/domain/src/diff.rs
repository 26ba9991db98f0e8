use crate::subdomain::SubdomainSet;

/// Names present in `discovered` but not yet in `baseline`.
///
/// Pure set subtraction; both sides are already normalized by
/// [`SubdomainName::new`](crate::SubdomainName::new).
pub fn diff(discovered: &SubdomainSet, baseline: &SubdomainSet) -> SubdomainSet {
    discovered.difference(baseline).cloned().collect()
}

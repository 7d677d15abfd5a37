//! Grouping port — maps a host name to the groups it belongs to.

use std::collections::BTreeSet;

use hcloud_inventory_domain::error::PolicyError;

/// A pluggable strategy resolving group membership for one host.
///
/// For a fixed policy and host name the returned set must be the same on
/// every call.
pub trait GroupingPolicy {
    /// Return every group `host` belongs to (possibly none).
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] when the host cannot be classified, e.g. its
    /// name does not follow the convention the policy relies on.
    fn groups_for_host(&self, host: &str) -> Result<BTreeSet<String>, PolicyError>;
}

impl<P: GroupingPolicy + ?Sized> GroupingPolicy for &P {
    fn groups_for_host(&self, host: &str) -> Result<BTreeSet<String>, PolicyError> {
        (**self).groups_for_host(host)
    }
}

impl<P: GroupingPolicy + ?Sized> GroupingPolicy for Box<P> {
    fn groups_for_host(&self, host: &str) -> Result<BTreeSet<String>, PolicyError> {
        (**self).groups_for_host(host)
    }
}

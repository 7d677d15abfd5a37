//! Static-table policy — literal host-name lookup.

use std::collections::BTreeSet;

use hcloud_inventory_domain::error::PolicyError;
use hcloud_inventory_domain::mapping::GroupMapping;

use crate::ports::GroupingPolicy;

/// Returns every group whose member list contains the exact host name.
#[derive(Debug, Clone)]
pub struct StaticTablePolicy {
    mapping: GroupMapping,
}

impl StaticTablePolicy {
    #[must_use]
    pub fn new(mapping: GroupMapping) -> Self {
        Self { mapping }
    }
}

impl GroupingPolicy for StaticTablePolicy {
    fn groups_for_host(&self, host: &str) -> Result<BTreeSet<String>, PolicyError> {
        Ok(self.mapping.groups_containing(host))
    }
}

//! Inventory builder — turns host records plus a grouping policy into an
//! [`Inventory`].
//!
//! Records are processed in input order. Any failure, from the record
//! stream or from the policy, aborts the build; no partial inventory is
//! ever returned.

use hcloud_inventory_domain::error::{InventoryError, ValidationError};
use hcloud_inventory_domain::host::HostRecord;
use hcloud_inventory_domain::inventory::Inventory;
use hcloud_inventory_domain::mapping::{ALL_GROUP, GroupMapping, META_KEY};

use crate::ports::GroupingPolicy;

/// Assembles one inventory per call; holds no per-run state itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryBuilder<'m> {
    mapping: Option<&'m GroupMapping>,
}

impl<'m> InventoryBuilder<'m> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also apply the variables and child links declared in `mapping`.
    ///
    /// Only groups declaring vars or children are materialized up front;
    /// plain member lists only produce groups once a host joins them.
    #[must_use]
    pub fn with_mapping(mapping: &'m GroupMapping) -> Self {
        Self {
            mapping: Some(mapping),
        }
    }

    /// Build from an already-fetched list of records.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Policy`] if the policy cannot classify a
    /// host, or [`InventoryError::Validation`] if it resolves a reserved
    /// group name.
    pub fn build<I, P>(&self, records: I, policy: &P) -> Result<Inventory, InventoryError>
    where
        I: IntoIterator<Item = HostRecord>,
        P: GroupingPolicy + ?Sized,
    {
        self.build_from(records.into_iter().map(Ok::<_, InventoryError>), policy)
    }

    /// Build from a fallible record stream.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), plus the first error yielded by
    /// `records`.
    pub fn build_from<I, E, P>(&self, records: I, policy: &P) -> Result<Inventory, InventoryError>
    where
        I: IntoIterator<Item = Result<HostRecord, E>>,
        E: Into<InventoryError>,
        P: GroupingPolicy + ?Sized,
    {
        let mut inventory = Inventory::new();

        if let Some(mapping) = self.mapping {
            for (name, definition) in mapping.iter() {
                if !definition.vars.is_empty() || !definition.children.is_empty() {
                    inventory.declare_group(name, definition);
                }
            }
        }

        for record in records {
            let record = record.map_err(Into::<InventoryError>::into)?;
            let groups = policy.groups_for_host(record.name())?;
            if let Some(reserved) = groups.iter().find(|g| *g == ALL_GROUP || *g == META_KEY) {
                return Err(ValidationError::ReservedGroupName(reserved.clone()).into());
            }
            tracing::debug!(host = %record.name(), ?groups, "resolved host groups");
            inventory.add_host(&record, groups);
        }

        inventory.recompute_all();
        tracing::debug!(
            hosts = inventory.hosts().len(),
            groups = inventory.groups().len(),
            "inventory assembled"
        );
        Ok(inventory)
    }
}

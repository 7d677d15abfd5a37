//! Inventory service — fetch host records and assemble the inventory.

use hcloud_inventory_domain::document::{InventoryDocument, render};
use hcloud_inventory_domain::error::InventoryError;
use hcloud_inventory_domain::inventory::Inventory;
use hcloud_inventory_domain::mapping::GroupMapping;

use crate::builder::InventoryBuilder;
use crate::ports::{GroupingPolicy, HostSource};

/// Application service running one conversion per call.
pub struct InventoryService<S, P> {
    source: S,
    policy: P,
    mapping: Option<GroupMapping>,
}

impl<S: HostSource, P: GroupingPolicy> InventoryService<S, P> {
    /// Create a new service backed by the given source and policy.
    pub fn new(source: S, policy: P) -> Self {
        Self {
            source,
            policy,
            mapping: None,
        }
    }

    /// Apply the group variables and child links declared in `mapping`.
    #[must_use]
    pub fn with_mapping(mut self, mapping: GroupMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Fetch every host and build a finalized inventory.
    ///
    /// # Errors
    ///
    /// Returns the source error if fetching fails, or a policy/validation
    /// error from the builder. Nothing partial is returned.
    #[tracing::instrument(skip(self))]
    pub async fn generate(&self) -> Result<Inventory, InventoryError> {
        let records = self.source.fetch_all().await?;
        tracing::debug!(count = records.len(), "fetched host records");
        let builder = match &self.mapping {
            Some(mapping) => InventoryBuilder::with_mapping(mapping),
            None => InventoryBuilder::new(),
        };
        builder.build(records, &self.policy)
    }

    /// Fetch, build and render in one step.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub async fn document(&self) -> Result<InventoryDocument, InventoryError> {
        let inventory = self.generate().await?;
        Ok(render(&inventory))
    }
}

//! Host source port — where the host records of one run come from.

use std::future::Future;

use hcloud_inventory_domain::error::InventoryError;
use hcloud_inventory_domain::host::HostRecord;

/// Yields the finite list of host records for one inventory run.
///
/// Implementations live in adapter crates (e.g. `adapter_hcloud`). Transport
/// and authorization failures are reported as [`InventoryError::Source`].
pub trait HostSource: Send + Sync {
    /// Fetch every host record, in provider order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<HostRecord>, InventoryError>> + Send;
}

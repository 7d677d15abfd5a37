//! # hcloud-inventory-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters or strategies implement:
//!   - `HostSource` — yields the host records of one run
//!   - `GroupingPolicy` — resolves the groups of one host
//! - Provide the two built-in grouping strategies:
//!   - `StaticTablePolicy` — literal lookup in the group mapping
//!   - `PatternPolicy` — extracts a role token from the host name first
//! - `InventoryBuilder` — assembles an `Inventory` from records + policy
//! - `InventoryService` — fetches from a source and builds, end to end
//!
//! ## Dependency rule
//! Depends on `hcloud-inventory-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod builder;
pub mod policies;
pub mod ports;
pub mod services;

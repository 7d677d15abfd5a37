//! # hcloud-inventory-domain
//!
//! Pure inventory model for the Hetzner Cloud dynamic inventory.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, typed group variables
//! - Define **Host records** (one compute instance) and their **host variables**
//! - Define **Groups** and the lazily-populated **group table**
//! - Define the **group mapping** loaded from configuration
//! - Define the **Inventory** aggregate and the implicit `all` group
//! - Render the inventory into the dynamic-inventory **document**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod value;

pub mod document;
pub mod group;
pub mod host;
pub mod inventory;
pub mod mapping;

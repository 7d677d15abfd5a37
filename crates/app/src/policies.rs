//! Built-in grouping strategies.
//!
//! Both strategies look members up in a [`GroupMapping`](hcloud_inventory_domain::mapping::GroupMapping);
//! they differ only in which identifier they look up.

pub mod pattern;
pub mod static_table;

pub use pattern::PatternPolicy;
pub use static_table::StaticTablePolicy;

//! # hcloud-inventory-adapter-groups-file
//!
//! Reads the group mapping from a YAML file. Each top-level key is a group;
//! its value is either a list of member identifiers or a table with
//! `hosts`, `vars` and `children`:
//!
//! ```yaml
//! webservers: [servername, otherserver]
//! swarm:
//!   hosts: [swarmmanager, swarmworker]
//!   vars:
//!     docker_swarm: true
//! ```
//!
//! ## Dependency rule
//!
//! Depends on `hcloud-inventory-domain` only.

mod error;
mod loader;

pub use error::GroupsFileError;
pub use loader::{load, load_or_default, parse};

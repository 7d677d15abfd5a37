//! Port definitions — traits that adapters and strategies implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod grouping;
pub mod host_source;

pub use grouping::GroupingPolicy;
pub use host_source::HostSource;

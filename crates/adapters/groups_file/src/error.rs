//! Group-mapping file error types.

use std::path::PathBuf;

use hcloud_inventory_domain::error::{InventoryError, ValidationError};

/// Errors raised while loading the group mapping.
#[derive(Debug, thiserror::Error)]
pub enum GroupsFileError {
    /// The file could not be read.
    #[error("failed to read group mapping {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid group mapping document.
    #[error("failed to parse group mapping")]
    Parse(#[from] serde_yaml::Error),

    /// The mapping parsed but breaks a naming rule.
    #[error("invalid group mapping")]
    Validation(#[from] ValidationError),
}

impl From<GroupsFileError> for InventoryError {
    fn from(err: GroupsFileError) -> Self {
        Self::Source(Box::new(err))
    }
}

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `#[from]` (adapters box theirs into
//! [`InventoryError::Source`]).

/// Top-level error for one inventory run.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The grouping policy could not resolve a host.
    #[error("grouping policy error")]
    Policy(#[from] PolicyError),

    /// The host-record or group-mapping source failed.
    #[error("source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Encoding the document failed.
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A host record was given an empty name.
    #[error("host name must not be empty")]
    EmptyHostName,

    /// A group definition was given an empty name.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// A group name collides with a key the document reserves.
    #[error("group name {0:?} is reserved")]
    ReservedGroupName(String),
}

/// Failures raised while resolving the groups of one host.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The host name does not follow the naming convention the policy expects.
    #[error("host {host:?} does not match naming pattern {pattern:?}")]
    NoMatch {
        /// Offending host name.
        host: String,
        /// Pattern the name was matched against.
        pattern: String,
    },

    /// The configured pattern cannot be used for token extraction.
    #[error("invalid naming pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// Pattern as configured.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl InventoryError {
    /// Box any source-layer error into [`InventoryError::Source`].
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_reserved_group_name() {
        let err = ValidationError::ReservedGroupName("all".to_string());
        assert_eq!(err.to_string(), "group name \"all\" is reserved");
    }

    #[test]
    fn should_display_no_match_with_host_and_pattern() {
        let err = PolicyError::NoMatch {
            host: "standalone".to_string(),
            pattern: "^x$".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "host \"standalone\" does not match naming pattern \"^x$\""
        );
    }

    #[test]
    fn should_convert_policy_error_into_inventory_error() {
        let err: InventoryError = PolicyError::NoMatch {
            host: "h".to_string(),
            pattern: "p".to_string(),
        }
        .into();
        assert!(matches!(err, InventoryError::Policy(_)));
    }

    #[test]
    fn should_box_foreign_error_as_source() {
        let io = std::io::Error::other("boom");
        let err = InventoryError::source(io);
        assert!(matches!(err, InventoryError::Source(_)));
        assert_eq!(err.to_string(), "source error");
    }
}

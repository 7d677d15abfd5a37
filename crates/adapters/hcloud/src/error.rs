//! Hetzner Cloud adapter error types.

use hcloud_inventory_domain::error::{InventoryError, ValidationError};

/// Errors specific to the Hetzner Cloud adapter.
#[derive(Debug, thiserror::Error)]
pub enum HcloudError {
    /// The adapter settings cannot be used.
    #[error("invalid hcloud configuration: {0}")]
    Config(String),

    /// The request could not be sent or the response not read.
    #[error("hcloud request failed")]
    Http(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("hcloud API returned {status} ({code}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// API error code (e.g. `unauthorized`).
        code: String,
        /// Human-readable message from the API.
        message: String,
    },

    /// The response body is not a valid server listing.
    #[error("failed to decode hcloud response")]
    Decode(#[source] serde_json::Error),

    /// A server could not be turned into a host record.
    #[error("invalid server record (id {id})")]
    Record {
        /// Hetzner server id.
        id: u64,
        #[source]
        source: ValidationError,
    },
}

impl From<HcloudError> for InventoryError {
    fn from(err: HcloudError) -> Self {
        Self::Source(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_api_error_with_status_and_message() {
        let err = HcloudError::Api {
            status: 401,
            code: "unauthorized".to_string(),
            message: "unable to authenticate".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "hcloud API returned 401 (unauthorized): unable to authenticate"
        );
    }

    #[test]
    fn should_convert_into_source_error() {
        let err: InventoryError = HcloudError::Config("missing token".to_string()).into();
        assert!(matches!(err, InventoryError::Source(_)));
    }

    #[test]
    fn should_display_server_id_on_record_error() {
        let err = HcloudError::Record {
            id: 4711,
            source: ValidationError::EmptyHostName,
        };
        assert_eq!(err.to_string(), "invalid server record (id 4711)");
    }

    #[test]
    fn should_display_decode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = HcloudError::Decode(json_err);
        assert_eq!(err.to_string(), "failed to decode hcloud response");
    }
}

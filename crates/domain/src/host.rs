//! Host — one compute instance and the variables published for it.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Normalized description of one compute instance from the upstream provider.
///
/// Every descriptive field is an empty string when the provider did not
/// report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    name: String,
    address: String,
    dns: String,
    location: String,
    datacenter: String,
    image: String,
}

impl HostRecord {
    /// Create a builder for constructing a [`HostRecord`].
    #[must_use]
    pub fn builder() -> HostRecordBuilder {
        HostRecordBuilder::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn dns(&self) -> &str {
        &self.dns
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn datacenter(&self) -> &str {
        &self.datacenter
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Variables published under `_meta.hostvars` for this host.
    #[must_use]
    pub fn variables(&self) -> HostVariables {
        HostVariables {
            ansible_host: self.address.clone(),
            hcloud_dns: self.dns.clone(),
            hcloud_location: self.location.clone(),
            hcloud_datacenter: self.datacenter.clone(),
            hcloud_image: self.image.clone(),
        }
    }
}

/// Step-by-step builder for [`HostRecord`].
#[derive(Debug, Default)]
pub struct HostRecordBuilder {
    name: Option<String>,
    address: Option<String>,
    dns: Option<String>,
    location: Option<String>,
    datacenter: Option<String>,
    image: Option<String>,
}

impl HostRecordBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn dns(mut self, dns: impl Into<String>) -> Self {
        self.dns = Some(dns.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn datacenter(mut self, datacenter: impl Into<String>) -> Self {
        self.datacenter = Some(datacenter.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Consume the builder and return a [`HostRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyHostName`] if `name` is missing or empty.
    pub fn build(self) -> Result<HostRecord, ValidationError> {
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::EmptyHostName);
        }
        Ok(HostRecord {
            name,
            address: self.address.unwrap_or_default(),
            dns: self.dns.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            datacenter: self.datacenter.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        })
    }
}

/// Per-host variables, keyed by host name in `_meta.hostvars`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVariables {
    pub ansible_host: String,
    pub hcloud_dns: String,
    pub hcloud_location: String,
    pub hcloud_datacenter: String,
    pub hcloud_image: String,
}

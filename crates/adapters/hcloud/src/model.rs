//! Wire types for the `GET /servers` endpoint.
//!
//! Only the fields that end up in a host record are decoded; everything else
//! in the payload is ignored.

use hcloud_inventory_domain::error::ValidationError;
use hcloud_inventory_domain::host::HostRecord;
use serde::Deserialize;

/// One page of `GET /servers`.
#[derive(Debug, Deserialize)]
pub struct ServersPage {
    pub servers: Vec<Server>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl ServersPage {
    /// Page number to request next, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.pagination.as_ref())
            .and_then(|pagination| pagination.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub public_net: Option<PublicNet>,
    #[serde(default)]
    pub datacenter: Option<Datacenter>,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Deserialize)]
pub struct PublicNet {
    #[serde(default)]
    pub ipv4: Option<Ipv4>,
}

#[derive(Debug, Deserialize)]
pub struct Ipv4 {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub dns_ptr: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Datacenter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub name: Option<String>,
}

/// Error payload returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl Server {
    /// Map this server onto a [`HostRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyHostName`] for a server without a name.
    pub fn into_record(self) -> Result<HostRecord, ValidationError> {
        let ipv4 = self.public_net.and_then(|net| net.ipv4);
        let (address, dns) = match ipv4 {
            Some(ipv4) => (ipv4.ip.unwrap_or_default(), ipv4.dns_ptr.unwrap_or_default()),
            None => (String::new(), String::new()),
        };
        let (datacenter, location) = match self.datacenter {
            Some(dc) => (
                dc.name.unwrap_or_default(),
                dc.location.and_then(|l| l.name).unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };
        let image = self.image.and_then(|i| i.name).unwrap_or_default();

        HostRecord::builder()
            .name(self.name)
            .address(address)
            .dns(dns)
            .location(location)
            .datacenter(datacenter)
            .image(image)
            .build()
    }
}

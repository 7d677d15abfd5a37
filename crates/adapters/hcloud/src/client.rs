//! Paginated `GET /servers` client implementing the [`HostSource`] port.

use std::future::Future;

use hcloud_inventory_app::ports::HostSource;
use hcloud_inventory_domain::error::InventoryError;
use hcloud_inventory_domain::host::HostRecord;

use crate::config::HcloudConfig;
use crate::error::HcloudError;
use crate::model::{ErrorBody, ServersPage};

/// Hetzner Cloud API client listing servers as host records.
#[derive(Debug, Clone)]
pub struct HcloudClient {
    http: reqwest::Client,
    config: HcloudConfig,
}

impl HcloudClient {
    /// Create a client after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HcloudError::Config`] if the configuration is unusable, or
    /// [`HcloudError::Http`] if the HTTP client cannot be initialised.
    pub fn new(config: HcloudConfig) -> Result<Self, HcloudError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("hcloud-inventory/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HcloudError::Http)?;
        Ok(Self { http, config })
    }

    /// List every server, following pagination until the last page.
    ///
    /// # Errors
    ///
    /// Returns the first transport, API, decode, or record error met; no
    /// partial list is returned.
    #[tracing::instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    pub async fn list_servers(&self) -> Result<Vec<HostRecord>, HcloudError> {
        let mut records = Vec::new();
        let mut page = 1;
        loop {
            let body = self.fetch_page(page).await?;
            let next = body.next_page();
            tracing::debug!(page, servers = body.servers.len(), "fetched server page");
            for server in body.servers {
                let id = server.id;
                let record = server
                    .into_record()
                    .map_err(|source| HcloudError::Record { id, source })?;
                records.push(record);
            }
            match next {
                Some(next) if next > page => page = next,
                Some(next) => {
                    tracing::warn!(page, next, "non-increasing next_page, stopping");
                    break;
                }
                None => break,
            }
        }
        Ok(records)
    }

    async fn fetch_page(&self, page: u32) -> Result<ServersPage, HcloudError> {
        let url = format!("{}/servers", self.config.endpoint.trim_end_matches('/'));
        let mut request = self
            .http
            .get(url)
            .bearer_auth(&self.config.token)
            .query(&[("page", page), ("per_page", self.config.per_page)]);
        if let Some(selector) = &self.config.label_selector {
            request = request.query(&[("label_selector", selector)]);
        }

        let response = request.send().await.map_err(HcloudError::Http)?;
        let status = response.status();
        let body = response.bytes().await.map_err(HcloudError::Http)?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(err) => (err.error.code, err.error.message),
                Err(_) => (
                    "unknown".to_string(),
                    String::from_utf8_lossy(&body).into_owned(),
                ),
            };
            return Err(HcloudError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        serde_json::from_slice(&body).map_err(HcloudError::Decode)
    }
}

impl HostSource for HcloudClient {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<HostRecord>, InventoryError>> + Send {
        async move { self.list_servers().await.map_err(InventoryError::from) }
    }
}

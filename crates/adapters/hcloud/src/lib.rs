//! # hcloud-inventory-adapter-hcloud
//!
//! Host source backed by the [Hetzner Cloud API](https://docs.hetzner.cloud/).
//!
//! ## How it works
//!
//! `GET /servers` is requested page by page (following
//! `meta.pagination.next_page`) with a bearer token, and every server is
//! mapped to a [`HostRecord`](hcloud_inventory_domain::host::HostRecord):
//!
//! | Host record field | API field |
//! |-------------------|-----------|
//! | name | `name` |
//! | address | `public_net.ipv4.ip` |
//! | dns | `public_net.ipv4.dns_ptr` |
//! | location | `datacenter.location.name` |
//! | datacenter | `datacenter.name` |
//! | image | `image.name` |
//!
//! Missing values become empty strings.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `hcloud-inventory-app` and
//! `hcloud-inventory-domain`.

mod client;
mod config;
mod error;
pub mod model;

pub use client::HcloudClient;
pub use config::HcloudConfig;
pub use error::HcloudError;

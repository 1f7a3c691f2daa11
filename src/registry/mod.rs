//! Registry access for latest-version lookups
//!
//! This module provides:
//! - The `VersionSource` seam the classifier depends on
//! - HTTP client shared foundation
//! - npms.io adapter

mod client;
mod npms;

pub use client::HttpClient;
pub use npms::{NpmsAdapter, DEFAULT_REGISTRY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// A source of the latest published version of a package
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Get the registry name, used in error messages
    fn registry_name(&self) -> &str;

    /// Look up the latest published version. Every call queries the source.
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError>;
}

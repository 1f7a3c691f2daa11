//! npms.io adapter
//!
//! Fetches the latest published version of a package from the npms.io API.
//! API endpoint: {base}/package/{name}, version at `collected.metadata.version`

use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// npms.io API base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://api.npms.io/v2";

/// npms.io adapter
pub struct NpmsAdapter {
    client: HttpClient,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct NpmsPackageResponse {
    collected: Collected,
}

#[derive(Debug, Deserialize)]
struct Collected {
    metadata: Metadata,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    version: String,
}

impl NpmsAdapter {
    /// Create a new adapter against `base_url`
    pub fn new(client: HttpClient, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Build the lookup URL for a package.
    ///
    /// The name is pushed as a single path segment, so scoped names like
    /// `@types/node` have their slash percent-encoded.
    fn build_url(&self, package: &str) -> Result<Url, RegistryError> {
        let mut url = self.base_url.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|_| RegistryError::InvalidRegistryUrl {
                        url: self.base_url.to_string(),
                    })?;
            segments.pop_if_empty().push("package").push(package);
        }
        Ok(url)
    }
}

#[async_trait]
impl VersionSource for NpmsAdapter {
    fn registry_name(&self) -> &str {
        "npms.io"
    }

    async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_url(package)?;
        tracing::debug!("GET {}", url);

        let response: NpmsPackageResponse = self
            .client
            .get_json(url.as_str(), package, self.registry_name())
            .await?;

        Ok(response.collected.metadata.version)
    }
}

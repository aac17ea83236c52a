//! Built-in skin providers.
//!
//! Each provider owns a [`JsonFetcher`] and a URL template containing
//! `{id}`. The response-shape differences between the three services are
//! absorbed here, so callers never branch on which provider they use.

use uuid::Uuid;

use disguise_types::config::{EndpointConfig, ID_PLACEHOLDER};
use disguise_types::error::SkinError;
use disguise_types::skin::Skin;

use super::context::SkinContext;
use super::extract;
use super::provider::{JsonFetcher, SkinProvider};

pub const MOJANG: &str = "mojang";
pub const MINETOOLS: &str = "minetools";
pub const MINESKIN: &str = "mineskin";

/// A validated URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    template: String,
}

impl Endpoint {
    /// Fails with [`SkinError::InvalidConfig`] when the template has no `{id}`.
    pub fn new(provider: &str, template: impl Into<String>) -> Result<Self, SkinError> {
        let template = template.into();
        if !template.contains(ID_PLACEHOLDER) {
            return Err(SkinError::InvalidConfig(format!(
                "{provider} endpoint '{template}' has no {ID_PLACEHOLDER} placeholder"
            )));
        }
        Ok(Self { template })
    }

    pub fn url(&self, id: &str) -> String {
        self.template.replace(ID_PLACEHOLDER, id)
    }
}

/// Mojang session server, keyed by player UUID.
pub struct MojangProvider<F> {
    fetcher: F,
    endpoint: Endpoint,
}

impl<F: JsonFetcher> MojangProvider<F> {
    pub fn new(fetcher: F, endpoint: Endpoint) -> Self {
        Self { fetcher, endpoint }
    }

    pub fn with_default_endpoint(fetcher: F) -> Result<Self, SkinError> {
        Ok(Self::new(
            fetcher,
            Endpoint::new(MOJANG, EndpointConfig::default().mojang)?,
        ))
    }
}

impl<F: JsonFetcher> SkinProvider<Uuid> for MojangProvider<F> {
    fn name(&self) -> &str {
        MOJANG
    }

    async fn resolve(&self, context: &dyn SkinContext<Uuid>) -> Result<Skin, SkinError> {
        let url = self.endpoint.url(&context.value().simple().to_string());
        tracing::debug!(provider = MOJANG, %url, "fetching profile");
        let body = self.fetcher.fetch_json(&url).await?;
        extract::skin_from_profile(MOJANG, &body)
    }
}

/// MineTools profile mirror, keyed by player UUID.
pub struct MineToolsProvider<F> {
    fetcher: F,
    endpoint: Endpoint,
}

impl<F: JsonFetcher> MineToolsProvider<F> {
    pub fn new(fetcher: F, endpoint: Endpoint) -> Self {
        Self { fetcher, endpoint }
    }

    pub fn with_default_endpoint(fetcher: F) -> Result<Self, SkinError> {
        Ok(Self::new(
            fetcher,
            Endpoint::new(MINETOOLS, EndpointConfig::default().minetools)?,
        ))
    }
}

impl<F: JsonFetcher> SkinProvider<Uuid> for MineToolsProvider<F> {
    fn name(&self) -> &str {
        MINETOOLS
    }

    async fn resolve(&self, context: &dyn SkinContext<Uuid>) -> Result<Skin, SkinError> {
        let url = self.endpoint.url(&context.value().simple().to_string());
        tracing::debug!(provider = MINETOOLS, %url, "fetching profile");
        let body = self.fetcher.fetch_json(&url).await?;
        extract::skin_from_raw_profile(MINETOOLS, &body)
    }
}

/// MineSkin texture bundles, keyed by the bundle id used verbatim.
pub struct MineSkinProvider<F> {
    fetcher: F,
    endpoint: Endpoint,
}

impl<F: JsonFetcher> MineSkinProvider<F> {
    pub fn new(fetcher: F, endpoint: Endpoint) -> Self {
        Self { fetcher, endpoint }
    }

    pub fn with_default_endpoint(fetcher: F) -> Result<Self, SkinError> {
        Ok(Self::new(
            fetcher,
            Endpoint::new(MINESKIN, EndpointConfig::default().mineskin)?,
        ))
    }
}

impl<F: JsonFetcher> SkinProvider<String> for MineSkinProvider<F> {
    fn name(&self) -> &str {
        MINESKIN
    }

    async fn resolve(&self, context: &dyn SkinContext<String>) -> Result<Skin, SkinError> {
        let url = self.endpoint.url(&context.value());
        tracing::debug!(provider = MINESKIN, %url, "fetching texture bundle");
        let body = self.fetcher.fetch_json(&url).await?;
        extract::skin_from_texture_bundle(MINESKIN, &body)
    }
}

//! Built-in skin APIs backed by [`HttpJsonFetcher`].

use std::sync::OnceLock;

use uuid::Uuid;

use disguise_core::skin::builtin::{
    Endpoint, MINESKIN, MINETOOLS, MOJANG, MineSkinProvider, MineToolsProvider, MojangProvider,
};
use disguise_core::skin::{SkinApi, SkinApiRegistry};
use disguise_types::config::DisguiseConfig;
use disguise_types::error::SkinError;

use crate::http::HttpJsonFetcher;

/// Process-wide defaults, built on first use.
static DEFAULTS: OnceLock<Result<BuiltinSkinApis, SkinError>> = OnceLock::new();

/// The three built-in skin APIs sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct BuiltinSkinApis {
    mojang: SkinApi<Uuid>,
    minetools: SkinApi<Uuid>,
    mineskin: SkinApi<String>,
}

impl BuiltinSkinApis {
    /// Build the APIs with the configured endpoints and transport settings.
    ///
    /// # Errors
    ///
    /// [`SkinError::InvalidConfig`] when an endpoint template lacks `{id}`,
    /// [`SkinError::Http`] when the HTTP client cannot be created.
    pub fn from_config(config: &DisguiseConfig) -> Result<Self, SkinError> {
        let fetcher = HttpJsonFetcher::new(config)?;
        let endpoints = &config.endpoints;

        Ok(Self {
            mojang: SkinApi::new(MojangProvider::new(
                fetcher.clone(),
                Endpoint::new(MOJANG, endpoints.mojang.as_str())?,
            )),
            minetools: SkinApi::new(MineToolsProvider::new(
                fetcher.clone(),
                Endpoint::new(MINETOOLS, endpoints.minetools.as_str())?,
            )),
            mineskin: SkinApi::new(MineSkinProvider::new(
                fetcher,
                Endpoint::new(MINESKIN, endpoints.mineskin.as_str())?,
            )),
        })
    }

    pub fn mojang(&self) -> &SkinApi<Uuid> {
        &self.mojang
    }

    pub fn minetools(&self) -> &SkinApi<Uuid> {
        &self.minetools
    }

    pub fn mineskin(&self) -> &SkinApi<String> {
        &self.mineskin
    }

    /// Registry of the UUID-keyed providers (`mojang`, `minetools`).
    pub fn uuid_registry(&self) -> SkinApiRegistry<Uuid> {
        let mut registry = SkinApiRegistry::new();
        registry.register(self.mojang.clone());
        registry.register(self.minetools.clone());
        registry
    }
}

/// Built-in APIs with the default configuration, shared by the whole process.
pub fn defaults() -> Result<&'static BuiltinSkinApis, SkinError> {
    DEFAULTS
        .get_or_init(|| BuiltinSkinApis::from_config(&DisguiseConfig::default()))
        .as_ref()
        .map_err(Clone::clone)
}

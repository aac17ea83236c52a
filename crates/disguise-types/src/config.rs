//! Configuration types for skin resolution.
//!
//! `DisguiseConfig` represents the top-level `config.toml` that controls the
//! provider endpoints and the HTTP transport.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the looked-up identifier in endpoint templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Top-level configuration.
///
/// Loaded from `~/.disguise/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisguiseConfig {
    /// Per-request timeout applied by the HTTP transport.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// `User-Agent` header sent to the profile services.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// URL templates for the built-in providers.
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("disguise/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for DisguiseConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            endpoints: EndpointConfig::default(),
        }
    }
}

/// URL templates for the built-in skin providers. Each must contain `{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_mojang")]
    pub mojang: String,
    #[serde(default = "default_minetools")]
    pub minetools: String,
    #[serde(default = "default_mineskin")]
    pub mineskin: String,
}

fn default_mojang() -> String {
    "https://sessionserver.mojang.com/session/minecraft/profile/{id}?unsigned=false".to_string()
}

fn default_minetools() -> String {
    "https://api.minetools.eu/profile/{id}".to_string()
}

fn default_mineskin() -> String {
    "https://api.mineskin.org/get/uuid/{id}".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            mojang: default_mojang(),
            minetools: default_minetools(),
            mineskin: default_mineskin(),
        }
    }
}

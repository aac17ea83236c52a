//! SkinProvider and JsonFetcher trait definitions.
//!
//! `SkinProvider` is the core abstraction every skin source implements.
//! `JsonFetcher` is the transport port the built-in providers are written
//! against; the reqwest implementation lives in disguise-infra.

use std::future::Future;

use disguise_types::error::SkinError;
use disguise_types::skin::Skin;

use super::context::SkinContext;

/// Trait for skin sources (Mojang, MineTools, MineSkin, custom).
///
/// Uses native async fn in traits (RPITIT). For dynamic dispatch wrap the
/// implementation in a [`SkinApi`](super::SkinApi).
pub trait SkinProvider<V>: Send + Sync {
    /// Short provider name (e.g., "mojang").
    fn name(&self) -> &str;

    /// Resolve the skin for the value exposed by `context`.
    ///
    /// Absent data resolves to [`Skin::empty`]; transport failures and
    /// malformed payloads fail the future.
    fn resolve(
        &self,
        context: &dyn SkinContext<V>,
    ) -> impl Future<Output = Result<Skin, SkinError>> + Send;
}

/// Fetches a URL and parses the body as JSON.
///
/// An empty body must be reported as `serde_json::Value::Null`, which the
/// providers treat as "no profile".
pub trait JsonFetcher: Send + Sync {
    fn fetch_json(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<serde_json::Value, SkinError>> + Send;
}

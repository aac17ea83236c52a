//! SkinApi -- named, type-erased handle over a [`SkinProvider`].
//!
//! Follows the blanket-impl pattern:
//! 1. Define an object-safe `SkinProviderDyn` trait with boxed futures
//! 2. Blanket-impl `SkinProviderDyn` for all `T: SkinProvider<V>`
//! 3. `SkinApi` wraps `Arc<dyn SkinProviderDyn<V>>` and hands out `'static`
//!    futures that own everything they need

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::Instrument;

use disguise_types::error::SkinError;
use disguise_types::skin::Skin;

use super::context::{SkinContext, ValueContext};
use super::provider::SkinProvider;

/// Future returned by every skin lookup.
pub type SkinFuture = BoxFuture<'static, Result<Skin, SkinError>>;

/// Object-safe version of [`SkinProvider`] with boxed futures.
pub trait SkinProviderDyn<V>: Send + Sync {
    fn name(&self) -> &str;

    fn resolve_boxed<'a>(
        &'a self,
        context: &'a dyn SkinContext<V>,
    ) -> BoxFuture<'a, Result<Skin, SkinError>>;
}

impl<V: 'static, T: SkinProvider<V>> SkinProviderDyn<V> for T {
    fn name(&self) -> &str {
        SkinProvider::name(self)
    }

    fn resolve_boxed<'a>(
        &'a self,
        context: &'a dyn SkinContext<V>,
    ) -> BoxFuture<'a, Result<Skin, SkinError>> {
        Box::pin(self.resolve(context))
    }
}

/// Provider backed by a plain function, see [`SkinApi::from_fn`].
struct FnProvider<F> {
    name: String,
    f: F,
}

impl<V, F> SkinProvider<V> for FnProvider<F>
where
    F: Fn(&dyn SkinContext<V>) -> SkinFuture + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(
        &self,
        context: &dyn SkinContext<V>,
    ) -> impl Future<Output = Result<Skin, SkinError>> + Send {
        (self.f)(context)
    }
}

/// A pluggable skin source.
///
/// Cloning is cheap (one `Arc`), the provider itself is shared and never
/// mutated, so a single `SkinApi` can serve any number of concurrent
/// lookups.
pub struct SkinApi<V> {
    inner: Arc<dyn SkinProviderDyn<V>>,
}

impl<V: Send + Sync + 'static> SkinApi<V> {
    /// Wrap a concrete provider.
    pub fn new<T: SkinProvider<V> + 'static>(provider: T) -> Self {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Build a provider from a function of the lookup context.
    ///
    /// The function should read what it needs from the context up front and
    /// return a future that owns its data.
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn SkinContext<V>) -> SkinFuture + Send + Sync + 'static,
    {
        Self::new(FnProvider {
            name: name.into(),
            f,
        })
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Look up the skin for a bare value.
    pub fn of(&self, value: V) -> SkinFuture
    where
        V: Clone,
    {
        self.of_context(ValueContext::new(value))
    }

    /// Look up the skin for a caller-supplied context.
    pub fn of_context<C: SkinContext<V> + 'static>(&self, context: C) -> SkinFuture {
        let inner = Arc::clone(&self.inner);
        let span = tracing::debug_span!("skin.resolve", provider = inner.name());
        Box::pin(
            async move {
                let result = inner.resolve_boxed(&context).await;
                match &result {
                    Ok(skin) => tracing::debug!(valid = skin.is_valid(), "skin lookup finished"),
                    Err(e) => tracing::debug!(error = %e, "skin lookup failed"),
                }
                result
            }
            .instrument(span),
        )
    }
}

impl<V> Clone for SkinApi<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for SkinApi<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkinApi")
            .field("name", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_api() -> SkinApi<String> {
        SkinApi::from_fn("echo", |ctx: &dyn SkinContext<String>| -> SkinFuture {
            let id = ctx.value();
            Box::pin(async move { Ok(Skin::new(format!("texture-{id}"), format!("sig-{id}"))) })
        })
    }

    struct ShoutingContext(&'static str);

    impl SkinContext<String> for ShoutingContext {
        fn value(&self) -> String {
            self.0.to_uppercase()
        }
    }

    struct StaticProvider;

    impl SkinProvider<u32> for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn resolve(&self, context: &dyn SkinContext<u32>) -> Result<Skin, SkinError> {
            Ok(Skin::new(context.value().to_string(), "signed"))
        }
    }

    #[tokio::test]
    async fn test_of_wraps_value_in_context() {
        let skin = echo_api().of("steve".to_string()).await.unwrap();
        assert_eq!(skin.texture(), Some("texture-steve"));
        assert_eq!(skin.signature(), Some("sig-steve"));
    }

    #[tokio::test]
    async fn test_of_context_uses_custom_context() {
        let skin = echo_api().of_context(ShoutingContext("alex")).await.unwrap();
        assert_eq!(skin.texture(), Some("texture-ALEX"));
    }

    #[tokio::test]
    async fn test_trait_provider_through_api() {
        let api = SkinApi::new(StaticProvider);
        assert_eq!(api.name(), "static");
        let skin = api.of(7).await.unwrap();
        assert_eq!(skin.texture(), Some("7"));
    }

    #[tokio::test]
    async fn test_failure_is_propagated() {
        let api = SkinApi::from_fn("broken", |_ctx: &dyn SkinContext<String>| -> SkinFuture {
            Box::pin(async {
                Err(SkinError::Http {
                    message: "connection refused".to_string(),
                })
            })
        });
        let err = api.of("x".to_string()).await.unwrap_err();
        assert_eq!(
            err,
            SkinError::Http {
                message: "connection refused".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_clones_share_provider() {
        let api = echo_api();
        let clone = api.clone();
        assert_eq!(clone.name(), "echo");
        let (a, b) = tokio::join!(api.of("a".to_string()), clone.of("b".to_string()));
        assert_eq!(a.unwrap().texture(), Some("texture-a"));
        assert_eq!(b.unwrap().texture(), Some("texture-b"));
    }

    #[test]
    fn test_debug_shows_name() {
        assert_eq!(format!("{:?}", echo_api()), "SkinApi { name: \"echo\" }");
    }
}

//! Provider context: the value a lookup is keyed by.

/// Capability exposing one value to a skin provider.
///
/// Lets callers hand a provider either a bare value (through
/// [`ValueContext`]) or a richer object of their own without providers
/// having to care which.
pub trait SkinContext<V>: Send + Sync {
    fn value(&self) -> V;
}

/// Trivial context wrapping a bare value.
#[derive(Debug, Clone)]
pub struct ValueContext<V>(V);

impl<V> ValueContext<V> {
    pub fn new(value: V) -> Self {
        Self(value)
    }
}

impl<V: Clone + Send + Sync> SkinContext<V> for ValueContext<V> {
    fn value(&self) -> V {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlayerContext {
        display_name: String,
    }

    impl SkinContext<String> for PlayerContext {
        fn value(&self) -> String {
            self.display_name.to_lowercase()
        }
    }

    #[test]
    fn test_value_context_returns_value() {
        let ctx = ValueContext::new(42u32);
        assert_eq!(ctx.value(), 42);
        assert_eq!(ctx.value(), 42);
    }

    #[test]
    fn test_custom_context_through_trait_object() {
        let ctx = PlayerContext {
            display_name: "Notch".to_string(),
        };
        let dyn_ctx: &dyn SkinContext<String> = &ctx;
        assert_eq!(dyn_ctx.value(), "notch");
    }
}

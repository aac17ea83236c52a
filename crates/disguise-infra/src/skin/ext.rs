//! Convenience setters that need the built-in providers.

use uuid::Uuid;

use disguise_core::disguise::DisguiseBuilder;
use disguise_types::error::SkinError;
use disguise_types::skin::Skin;

use super::builtin::{BuiltinSkinApis, defaults};

pub trait DisguiseBuilderExt {
    /// Look the skin up on the default mojang provider.
    fn skin_uuid(self, uuid: Uuid) -> Self;

    /// Look the skin up on the mojang provider of `apis`.
    fn skin_uuid_with(self, apis: &BuiltinSkinApis, uuid: Uuid) -> Self;
}

impl DisguiseBuilderExt for DisguiseBuilder {
    fn skin_uuid(self, uuid: Uuid) -> Self {
        mojang_lookup(self, defaults(), uuid)
    }

    fn skin_uuid_with(self, apis: &BuiltinSkinApis, uuid: Uuid) -> Self {
        self.skin_from(apis.mojang(), uuid)
    }
}

fn mojang_lookup(
    builder: DisguiseBuilder,
    apis: Result<&BuiltinSkinApis, SkinError>,
    uuid: Uuid,
) -> DisguiseBuilder {
    match apis {
        Ok(apis) => builder.skin_uuid_with(apis, uuid),
        Err(e) => {
            tracing::warn!(error = %e, "default skin providers unavailable");
            builder.skin_future(Box::pin(async move { Err::<Skin, _>(e) }))
        }
    }
}

#[cfg(test)]
mod tests {
    use disguise_core::disguise::Disguise;

    use super::*;

    const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_unavailable_defaults_fail_the_build() {
        let builder = mojang_lookup(
            Disguise::builder().name("Notch"),
            Err(SkinError::InvalidConfig("bad mojang template".to_string())),
            Uuid::parse_str(NOTCH).unwrap(),
        );

        let err = runtime().block_on(builder.build()).unwrap_err();
        assert!(matches!(err, SkinError::InvalidConfig(ref msg) if msg == "bad mojang template"));
    }

    #[test]
    fn test_later_texture_replaces_uuid_lookup() {
        // Built outside a runtime, so the superseded mojang lookup never runs.
        let builder = Disguise::builder()
            .skin_uuid(Uuid::parse_str(NOTCH).unwrap())
            .skin_texture("direct", "sig");

        let disguise = runtime().block_on(builder.build()).unwrap();
        assert_eq!(disguise.skin(), &Skin::new("direct", "sig"));
    }
}

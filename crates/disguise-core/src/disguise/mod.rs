//! The disguise value object and its asynchronous builder.

pub mod builder;

use serde::Serialize;

use disguise_types::entity::Entity;
use disguise_types::skin::Skin;

pub use builder::DisguiseBuilder;

/// What a disguised player looks like: display name, skin and entity shape.
///
/// Immutable. Only [`DisguiseBuilder::build`] constructs one, and only after
/// the pending skin lookup succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disguise {
    name: Option<String>,
    skin: Skin,
    entity: Option<Entity>,
}

impl Disguise {
    pub fn builder() -> DisguiseBuilder {
        DisguiseBuilder::new()
    }

    pub(crate) fn new(name: Option<String>, skin: Skin, entity: Option<Entity>) -> Self {
        Self { name, skin, entity }
    }

    /// True when the disguise changes nothing about the player.
    pub fn is_empty(&self) -> bool {
        !self.has_name() && !self.has_skin() && !self.has_entity()
    }

    /// An empty name is stored but does not count as a name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn has_skin(&self) -> bool {
        self.skin.is_valid()
    }

    pub fn has_entity(&self) -> bool {
        self.entity.as_ref().is_some_and(Entity::is_valid)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    pub fn textures(&self) -> Option<&str> {
        self.skin.texture()
    }

    pub fn signature(&self) -> Option<&str> {
        self.skin.signature()
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disguise_types::entity::EntityType;

    fn zombie() -> Entity {
        Entity::builder().entity_type(EntityType::Zombie).build()
    }

    #[test]
    fn test_empty_disguise() {
        let disguise = Disguise::new(None, Skin::empty(), None);
        assert!(disguise.is_empty());
        assert!(!disguise.has_name());
        assert!(!disguise.has_skin());
        assert!(!disguise.has_entity());
    }

    #[test]
    fn test_empty_name_and_invalid_parts_still_empty() {
        let disguise = Disguise::new(
            Some(String::new()),
            Skin::new("tex", ""),
            Some(Entity::builder().build()),
        );
        assert!(disguise.is_empty());
        assert_eq!(disguise.name(), Some(""));
    }

    #[test]
    fn test_any_single_part_makes_it_non_empty() {
        assert!(!Disguise::new(Some("Herobrine".into()), Skin::empty(), None).is_empty());
        assert!(!Disguise::new(None, Skin::new("t", "s"), None).is_empty());
        assert!(!Disguise::new(None, Skin::empty(), Some(zombie())).is_empty());
    }

    #[test]
    fn test_accessors() {
        let disguise = Disguise::new(Some("Dinnerbone".into()), Skin::new("t", "s"), Some(zombie()));
        assert_eq!(disguise.name(), Some("Dinnerbone"));
        assert_eq!(disguise.textures(), Some("t"));
        assert_eq!(disguise.signature(), Some("s"));
        assert_eq!(disguise.entity().and_then(Entity::entity_type), Some(EntityType::Zombie));
    }

    #[test]
    fn test_serialize() {
        let disguise = Disguise::new(Some("Jeb_".into()), Skin::new("t", "s"), Some(zombie()));
        let json = serde_json::to_value(&disguise).unwrap();
        assert_eq!(json["name"], "Jeb_");
        assert_eq!(json["skin"]["texture"], "t");
        assert_eq!(json["entity"]["entity_type"], "zombie");
    }
}

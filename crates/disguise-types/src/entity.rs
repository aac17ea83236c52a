//! Entity descriptors: the shape a disguised player is rendered as.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of entity a player can be disguised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Player,
    Zombie,
    Skeleton,
    Creeper,
    Spider,
    Enderman,
    Villager,
    IronGolem,
    Pig,
    Cow,
    Sheep,
    Chicken,
    Wolf,
    Blaze,
    Witch,
    ArmorStand,
    Minecart,
    Boat,
    FallingBlock,
}

impl EntityType {
    pub const ALL: [EntityType; 19] = [
        EntityType::Player,
        EntityType::Zombie,
        EntityType::Skeleton,
        EntityType::Creeper,
        EntityType::Spider,
        EntityType::Enderman,
        EntityType::Villager,
        EntityType::IronGolem,
        EntityType::Pig,
        EntityType::Cow,
        EntityType::Sheep,
        EntityType::Chicken,
        EntityType::Wolf,
        EntityType::Blaze,
        EntityType::Witch,
        EntityType::ArmorStand,
        EntityType::Minecart,
        EntityType::Boat,
        EntityType::FallingBlock,
    ];

    /// Whether the entity is a living one. Only living entities can carry a
    /// disguised player.
    pub fn is_alive(&self) -> bool {
        !matches!(
            self,
            EntityType::Minecart | EntityType::Boat | EntityType::FallingBlock
        )
    }

    fn as_str(&self) -> &'static str {
        match self {
            EntityType::Player => "player",
            EntityType::Zombie => "zombie",
            EntityType::Skeleton => "skeleton",
            EntityType::Creeper => "creeper",
            EntityType::Spider => "spider",
            EntityType::Enderman => "enderman",
            EntityType::Villager => "villager",
            EntityType::IronGolem => "iron_golem",
            EntityType::Pig => "pig",
            EntityType::Cow => "cow",
            EntityType::Sheep => "sheep",
            EntityType::Chicken => "chicken",
            EntityType::Wolf => "wolf",
            EntityType::Blaze => "blaze",
            EntityType::Witch => "witch",
            EntityType::ArmorStand => "armor_stand",
            EntityType::Minecart => "minecart",
            EntityType::Boat => "boat",
            EntityType::FallingBlock => "falling_block",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        EntityType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("invalid entity type: '{s}'"))
    }
}

/// Immutable entity descriptor produced by [`EntityBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    entity_type: Option<EntityType>,
}

impl Entity {
    pub fn builder() -> EntityBuilder {
        EntityBuilder::new()
    }

    pub fn entity_type(&self) -> Option<EntityType> {
        self.entity_type
    }

    /// A descriptor is usable only when it names a living entity type.
    pub fn is_valid(&self) -> bool {
        self.entity_type.is_some_and(|t| t.is_alive())
    }
}

/// Builder for [`Entity`].
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    entity_type: Option<EntityType>,
}

impl EntityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    pub fn build(self) -> Entity {
        Entity {
            entity_type: self.entity_type,
        }
    }
}

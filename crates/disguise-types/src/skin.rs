//! Skin value type: a texture/signature pair.

use serde::{Deserialize, Serialize};

/// A player skin as served by a profile service.
///
/// Either half may be missing. A skin that lacks data is a legitimate
/// state (the disguise simply keeps the player's own skin), not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    texture: Option<String>,
    signature: Option<String>,
}

impl Skin {
    pub fn new(texture: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            texture: Some(texture.into()),
            signature: Some(signature.into()),
        }
    }

    /// Build a skin from optional parts, as read from a JSON payload.
    pub fn from_parts(texture: Option<String>, signature: Option<String>) -> Self {
        Self { texture, signature }
    }

    /// A skin carrying neither texture nor signature.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// True iff both texture and signature are present and non-empty.
    pub fn is_valid(&self) -> bool {
        matches!(self.texture.as_deref(), Some(t) if !t.is_empty())
            && matches!(self.signature.as_deref(), Some(s) if !s.is_empty())
    }
}

//! Built-in skin API wiring.
//!
//! - [`builtin`]: constructs the mojang, minetools and mineskin `SkinApi`s
//!   from configuration, plus lazily created process-wide defaults
//! - [`ext`]: UUID shortcut on `DisguiseBuilder`

pub mod builtin;
pub mod ext;

pub use builtin::{BuiltinSkinApis, defaults};
pub use ext::DisguiseBuilderExt;

//! Skin provider abstractions.
//!
//! - `SkinContext`: single-value capability handed to a provider
//! - `SkinProvider`: RPITIT trait for concrete providers
//! - `SkinApi`: type-erased, cheaply cloneable handle over a provider
//! - `builtin`: the mojang, minetools and mineskin providers

pub mod api;
pub mod builtin;
pub mod context;
pub mod extract;
pub mod provider;
pub mod registry;

pub use api::{SkinApi, SkinFuture};
pub use context::{SkinContext, ValueContext};
pub use provider::{JsonFetcher, SkinProvider};
pub use registry::SkinApiRegistry;

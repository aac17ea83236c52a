//! Skin resolution pipeline and disguise composition.
//!
//! This crate defines the provider abstraction ([`skin::SkinProvider`],
//! [`skin::SkinApi`]), the JSON fetch port the built-in providers are written
//! against, and the [`disguise::DisguiseBuilder`] that defers finalization
//! until a pending skin lookup settles. It depends only on
//! `disguise-types` -- never on `disguise-infra` or any HTTP crate.

pub mod disguise;
pub mod skin;

//! Shared domain types for disguise skin resolution.
//!
//! This crate contains the leaf value types used across the workspace:
//! Skin, Entity and its builder, the skin error taxonomy and the
//! configuration schema.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod entity;
pub mod error;
pub mod skin;

//! Infrastructure layer for disguise skin resolution.
//!
//! Contains the reqwest implementation of the `JsonFetcher` port defined in
//! `disguise-core`, configuration loading, and the wiring of the built-in
//! skin providers into process-wide `SkinApi` instances.

pub mod config;
pub mod http;
pub mod skin;

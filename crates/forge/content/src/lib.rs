//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Recipe books (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is constructed once at startup and passed into `forge-core` APIs
//! by reference; it never appears in mutable game state.
//!
//! All loaders use forge-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, RecipeLoader};

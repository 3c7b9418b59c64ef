//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into forge-core
//! values: item catalogs, recipe books, and game configuration.

pub mod config;
pub mod factory;
pub mod item;
pub mod recipe;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use recipe::RecipeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

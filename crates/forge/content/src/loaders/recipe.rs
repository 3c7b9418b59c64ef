//! Recipe book loader.

use std::path::Path;

use forge_core::{Recipe, RecipeBook};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Recipe catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCatalog {
    pub recipes: Vec<Recipe>,
}

/// Loader for recipe books from RON files.
pub struct RecipeLoader;

impl RecipeLoader {
    /// Load a recipe book from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a RecipeCatalog
    ///
    /// # Returns
    ///
    /// Returns a RecipeBook with recipes registered in catalog order.
    pub fn load(path: &Path) -> LoadResult<RecipeBook> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a recipe book from RON text.
    pub fn parse(content: &str) -> LoadResult<RecipeBook> {
        let catalog: RecipeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe catalog RON: {}", e))?;

        Ok(catalog.recipes.into_iter().collect())
    }
}

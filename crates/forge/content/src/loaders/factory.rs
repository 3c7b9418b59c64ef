//! Content factory for loading game data from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, RecipeLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── recipes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<forge_core::GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<forge_core::Item>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load the recipe book from `recipes.ron`.
    pub fn load_recipes(&self) -> LoadResult<forge_core::RecipeBook> {
        let path = self.data_dir.join("recipes.ron");
        RecipeLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "starter_max_weight = 55.0").unwrap();
        fs::write(
            dir.path().join("items.ron"),
            r#"(items: [(name: "Wood", weight: 1.0, cost: 5, kind: Material((kind: Wood)))])"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("recipes.ron"),
            r#"(recipes: [(
                name: "Torch",
                required_level: 1,
                ingredients: [(name: "Wood", quantity: 1)],
                result: (name: "Torch", weight: 0.5, cost: 2, kind: Material((kind: Wood))),
            )])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().starter_max_weight, 55.0);
        assert_eq!(factory.load_items().unwrap().len(), 1);
        assert_eq!(factory.load_recipes().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        let err = factory.load_items().unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }
}

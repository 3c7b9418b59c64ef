//! Item catalog loader.

use std::path::Path;

use forge_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of Items in catalog order.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{ItemKind, MaterialKind, WeaponClass};

    const CATALOG: &str = r#"(
        items: [
            (
                name: "Iron Ore",
                weight: 2.0,
                cost: 10,
                kind: Material((kind: Metal)),
            ),
            (
                name: "Longbow",
                weight: 3.0,
                cost: 120,
                kind: Weapon((class: Bow, damage: 28)),
            ),
            (
                name: "Health Potion",
                weight: 0.5,
                cost: 50,
                kind: Potion((effect: Heal, value: 50)),
            ),
        ],
    )"#;

    #[test]
    fn parses_catalog_in_order() {
        let items = ItemLoader::parse(CATALOG).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Iron Ore");
        assert!(matches!(
            items[0].kind,
            ItemKind::Material(data) if data.kind == MaterialKind::Metal
        ));
        assert!(matches!(
            items[1].kind,
            ItemKind::Weapon(data) if data.class == WeaponClass::Bow && data.damage == 28
        ));
        assert_eq!(items[2].cost, 50);
    }

    #[test]
    fn rejects_malformed_catalog() {
        let err = ItemLoader::parse("(items: [(name: \"x\")])").unwrap_err();
        assert!(err.to_string().contains("item catalog"));
    }
}

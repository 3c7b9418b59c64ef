//! Character, inventory, and crafting rules.
//!
//! `forge-core` defines the canonical game rules (items, inventories,
//! characters, crafting) and exposes pure APIs with no I/O. Static content
//! (item catalogs, recipe books, configuration) is constructed by the caller,
//! either in code or through the loaders in `forge-content`, and passed in by
//! reference; nothing in this crate holds global state.
pub mod character;
pub mod config;
pub mod crafting;
pub mod error;
pub mod inventory;
pub mod item;

pub use character::{
    Character, CharacterClass, Equipment, EquipmentBuilder, ResourceMeter, UseItemError,
    UseOutcome,
};
pub use config::GameConfig;
pub use crafting::{
    CraftError, IngredientRequirement, MaterialYield, Recipe, RecipeBook, craft, dismantle,
};
pub use error::{ErrorSeverity, GameError};
pub use inventory::{Inventory, InventoryError, ItemStack};
pub use item::{
    ArmorData, Item, ItemKind, MaterialData, MaterialKind, PotionData, PotionEffect, WeaponClass,
    WeaponData,
};

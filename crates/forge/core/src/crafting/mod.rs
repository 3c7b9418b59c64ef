//! Crafting: recipe matching, atomic consume-then-produce, dismantling.
//!
//! [`craft`] is a two-phase commit over a character's inventory: phase 1
//! verifies the level gate, every ingredient quantity, and that the result
//! fits; phase 2 consumes the ingredients and adds the result. No failure
//! path leaves partial consumption behind.

pub mod recipe;

pub use recipe::{IngredientRequirement, Recipe, RecipeBook};

use crate::character::Character;
use crate::error::{ErrorSeverity, GameError};
use crate::inventory::InventoryError;
use crate::item::{Item, ItemKind, WeaponClass};

/// Errors raised by [`craft`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CraftError {
    /// Character level is below the recipe's gate.
    #[error("Level too low (required: {required}, current: {current})")]
    LevelTooLow { required: u32, current: u32 },

    /// An ingredient is absent or held in insufficient quantity.
    #[error("Missing ingredient {name} (required: {required}, have: {have})")]
    MissingIngredient {
        name: String,
        required: u32,
        have: u32,
    },

    /// The crafted item would not fit the inventory even after the
    /// ingredients are consumed.
    #[error("Result does not fit inventory (projected: {projected}, max: {max})")]
    ResultTooHeavy { projected: f32, max: f32 },

    /// A surviving stack already uses the result's name with a different
    /// item definition.
    #[error("Result {name} conflicts with an existing stack of the same name")]
    ResultConflict { name: String },

    /// Commit-phase inventory failure after all checks passed.
    ///
    /// This indicates a bug: phase 1 verified every mutation in phase 2.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl GameError for CraftError {
    fn severity(&self) -> ErrorSeverity {
        use CraftError::*;
        match self {
            // Level and stock can rise later
            LevelTooLow { .. } | MissingIngredient { .. } => ErrorSeverity::Recoverable,
            // Capacity may free up once the caller drops something
            ResultTooHeavy { .. } => ErrorSeverity::Recoverable,
            ResultConflict { .. } => ErrorSeverity::Validation,
            Inventory(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CraftError::*;
        match self {
            LevelTooLow { .. } => "CRAFT_LEVEL_TOO_LOW",
            MissingIngredient { .. } => "CRAFT_MISSING_INGREDIENT",
            ResultTooHeavy { .. } => "CRAFT_RESULT_TOO_HEAVY",
            ResultConflict { .. } => "CRAFT_RESULT_CONFLICT",
            Inventory(_) => "CRAFT_INVENTORY",
        }
    }
}

/// One (material name, quantity) entry produced by [`dismantle`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialYield {
    pub name: String,
    pub quantity: u32,
}

impl MaterialYield {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Crafts one unit of the recipe's result from the character's inventory.
///
/// Phase 1 verifies, in order: the level gate, every ingredient quantity
/// (name lookup against inventory stacks), that the result's name does not
/// collide with a surviving foreign stack, and that the post-craft weight
/// fits the capacity. Phase 2 removes each ingredient's required quantity
/// and adds one unit of the result.
///
/// On any error the inventory is unchanged.
pub fn craft(recipe: &Recipe, character: &mut Character) -> Result<Item, CraftError> {
    if character.level < recipe.required_level {
        return Err(CraftError::LevelTooLow {
            required: recipe.required_level,
            current: character.level,
        });
    }

    let mut consumed_weight = 0.0;
    for ingredient in &recipe.ingredients {
        let have = character.inventory.quantity_of(&ingredient.name);
        if have < ingredient.quantity {
            return Err(CraftError::MissingIngredient {
                name: ingredient.name.clone(),
                required: ingredient.quantity,
                have,
            });
        }
        if let Some(item) = character.inventory.find_by_name(&ingredient.name) {
            consumed_weight += item.weight * ingredient.quantity as f32;
        }
    }

    // A stack that survives ingredient consumption under the result's name
    // must hold the exact result definition, or the commit-phase add would
    // fail halfway through.
    if let Some(existing) = character.inventory.find_by_name(&recipe.result.name) {
        if *existing != recipe.result {
            let consumed: u32 = recipe
                .ingredients
                .iter()
                .filter(|ingredient| ingredient.name == recipe.result.name)
                .map(|ingredient| ingredient.quantity)
                .sum();
            if character.inventory.quantity_of(&recipe.result.name) > consumed {
                return Err(CraftError::ResultConflict {
                    name: recipe.result.name.clone(),
                });
            }
        }
    }

    let projected = character.inventory.total_weight() - consumed_weight + recipe.result.weight;
    if projected > character.inventory.max_weight() {
        return Err(CraftError::ResultTooHeavy {
            projected,
            max: character.inventory.max_weight(),
        });
    }

    for ingredient in &recipe.ingredients {
        character
            .inventory
            .remove(&ingredient.name, ingredient.quantity)?;
    }
    character.inventory.add(recipe.result.clone(), 1)?;

    tracing::debug!(recipe = %recipe.name, character = %character.name, "item crafted");
    Ok(recipe.result.clone())
}

/// Materials recovered by breaking an item down.
///
/// Pure table lookup; the caller decides what to do with the yield, no
/// inventory is touched. Sword and axe weapons break into Iron Ore x2 and
/// Wood x1; staff and wand weapons into Wood x2; armor into Leather x2 and
/// Thread x1; everything else yields nothing.
pub fn dismantle(item: &Item) -> Vec<MaterialYield> {
    match &item.kind {
        ItemKind::Weapon(data) => match data.class {
            WeaponClass::Sword | WeaponClass::Axe => vec![
                MaterialYield::new("Iron Ore", 2),
                MaterialYield::new("Wood", 1),
            ],
            WeaponClass::Staff | WeaponClass::Wand => vec![MaterialYield::new("Wood", 2)],
            _ => Vec::new(),
        },
        ItemKind::Armor(_) => vec![
            MaterialYield::new("Leather", 2),
            MaterialYield::new("Thread", 1),
        ],
        ItemKind::Potion(_) | ItemKind::Material(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::item::{MaterialKind, PotionEffect};

    fn smith_with(ore: u32, wood: u32) -> Character {
        let mut smith = Character::spawn(CharacterClass::Warrior, "Smith");
        if ore > 0 {
            smith
                .pick_up(Item::material("Iron Ore", 2.0, 10, MaterialKind::Metal), ore)
                .unwrap();
        }
        if wood > 0 {
            smith
                .pick_up(Item::material("Wood", 1.0, 5, MaterialKind::Wood), wood)
                .unwrap();
        }
        smith
    }

    fn iron_sword_recipe() -> Recipe {
        RecipeBook::standard().find("Iron Sword").unwrap().clone()
    }

    #[test]
    fn craft_consumes_ingredients_and_produces_result() {
        let mut smith = smith_with(5, 3);
        let recipe = iron_sword_recipe();

        let crafted = craft(&recipe, &mut smith).unwrap();
        assert_eq!(crafted.name, "Iron Sword");
        assert_eq!(smith.inventory.quantity_of("Iron Ore"), 2);
        assert_eq!(smith.inventory.quantity_of("Wood"), 2);
        assert_eq!(smith.inventory.quantity_of("Iron Sword"), 1);
    }

    #[test]
    fn craft_is_atomic_on_missing_ingredient() {
        // Iron Ore 2 of 3 required: nothing may change, Wood included.
        let mut smith = smith_with(2, 1);
        let recipe = iron_sword_recipe();

        let err = craft(&recipe, &mut smith).unwrap_err();
        assert_eq!(
            err,
            CraftError::MissingIngredient {
                name: "Iron Ore".into(),
                required: 3,
                have: 2,
            }
        );
        assert_eq!(smith.inventory.quantity_of("Iron Ore"), 2);
        assert_eq!(smith.inventory.quantity_of("Wood"), 1);
        assert_eq!(smith.inventory.quantity_of("Iron Sword"), 0);
    }

    #[test]
    fn craft_enforces_level_gate() {
        let mut smith = smith_with(5, 3);
        let book = RecipeBook::standard();
        let armor = book.find("Leather Armor").unwrap();

        assert_eq!(
            craft(armor, &mut smith),
            Err(CraftError::LevelTooLow {
                required: 2,
                current: 1,
            })
        );

        smith.level = 2;
        // still fails, but now on ingredients
        let err = craft(armor, &mut smith).unwrap_err();
        assert!(matches!(err, CraftError::MissingIngredient { .. }));
    }

    #[test]
    fn craft_rejects_result_that_does_not_fit() {
        // Mage capacity 40: ore x3 weighs 6, consuming one ore frees 2, and
        // the 39.0 result projects to 43.
        let mut smith = Character::new(CharacterClass::Mage, "Smith");
        smith
            .pick_up(Item::material("Iron Ore", 2.0, 10, MaterialKind::Metal), 3)
            .unwrap();
        let recipe = Recipe::new(
            "Anvil",
            1,
            vec![IngredientRequirement::new("Iron Ore", 1)],
            Item::material("Anvil", 39.0, 500, MaterialKind::Metal),
        );

        let err = craft(&recipe, &mut smith).unwrap_err();
        assert!(matches!(err, CraftError::ResultTooHeavy { .. }));
        assert_eq!(smith.inventory.quantity_of("Iron Ore"), 3);
        assert_eq!(smith.inventory.quantity_of("Anvil"), 0);
    }

    #[test]
    fn craft_rejects_conflicting_result_stack() {
        let mut smith = smith_with(5, 3);
        // a different "Iron Sword" definition already sits in the inventory
        smith
            .pick_up(Item::weapon("Iron Sword", 4.0, 90, 20, WeaponClass::Sword), 1)
            .unwrap();

        let err = craft(&iron_sword_recipe(), &mut smith).unwrap_err();
        assert!(matches!(err, CraftError::ResultConflict { .. }));
        assert_eq!(smith.inventory.quantity_of("Iron Ore"), 5);
    }

    #[test]
    fn craft_twice_stacks_results() {
        let mut smith = smith_with(6, 2);
        let recipe = iron_sword_recipe();

        craft(&recipe, &mut smith).unwrap();
        craft(&recipe, &mut smith).unwrap();
        assert_eq!(smith.inventory.quantity_of("Iron Sword"), 2);
        assert_eq!(smith.inventory.quantity_of("Iron Ore"), 0);
        assert_eq!(smith.inventory.quantity_of("Wood"), 0);
    }

    #[test]
    fn dismantle_yield_table() {
        let sword = Item::weapon("Steel Sword", 6.0, 150, 30, WeaponClass::Sword);
        assert_eq!(
            dismantle(&sword),
            [
                MaterialYield::new("Iron Ore", 2),
                MaterialYield::new("Wood", 1),
            ]
        );

        let staff = Item::weapon("Magic Staff", 4.0, 200, 35, WeaponClass::Staff);
        assert_eq!(dismantle(&staff), [MaterialYield::new("Wood", 2)]);

        let mace = Item::weapon("Flanged Mace", 7.0, 110, 26, WeaponClass::Mace);
        assert!(dismantle(&mace).is_empty());

        let armor = Item::armor("Chain Mail", 15.0, 180, 25);
        assert_eq!(
            dismantle(&armor),
            [
                MaterialYield::new("Leather", 2),
                MaterialYield::new("Thread", 1),
            ]
        );

        let potion = Item::potion("Water", 0.5, 5, PotionEffect::Heal, 10);
        assert!(dismantle(&potion).is_empty());
    }

    #[test]
    fn dismantle_does_not_touch_inventory() {
        let mut smith = smith_with(1, 0);
        let sword = Item::weapon("Steel Sword", 6.0, 150, 30, WeaponClass::Sword);
        smith.pick_up(sword.clone(), 1).unwrap();
        let before = smith.inventory.clone();

        let _ = dismantle(&sword);
        assert_eq!(smith.inventory, before);
    }
}

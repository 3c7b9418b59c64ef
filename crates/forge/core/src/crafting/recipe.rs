//! Recipes and the recipe book.
//!
//! A [`RecipeBook`] is an explicit, ordered collection owned by the caller
//! and passed by reference into crafting calls. There is no process-wide
//! recipe registry and therefore no initialization-order discipline.

use crate::item::{Item, WeaponClass};

/// One (name, quantity) pair a recipe demands from the crafting character's
/// inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IngredientRequirement {
    /// Ingredient item name, matched against inventory stacks.
    pub name: String,
    /// Units required. Always positive.
    pub quantity: u32,
}

impl IngredientRequirement {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        debug_assert!(quantity > 0, "ingredient quantity must be positive");
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A crafting recipe: level gate, ingredient list, and the produced item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub name: String,
    /// Minimum character level required to craft.
    pub required_level: u32,
    /// Ingredients in declaration order.
    pub ingredients: Vec<IngredientRequirement>,
    /// The item produced (one unit per craft).
    pub result: Item,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        required_level: u32,
        ingredients: Vec<IngredientRequirement>,
        result: Item,
    ) -> Self {
        Self {
            name: name.into(),
            required_level,
            ingredients,
            result,
        }
    }
}

/// Ordered collection of recipes.
///
/// Registration order is preserved and determines the order of
/// [`RecipeBook::available_for`] results.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Creates an empty recipe book.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in recipe list: Iron Sword, Wooden Staff, Leather Armor.
    pub fn standard() -> Self {
        let mut book = Self::new();

        book.register(Recipe::new(
            "Iron Sword",
            1,
            vec![
                IngredientRequirement::new("Iron Ore", 3),
                IngredientRequirement::new("Wood", 1),
            ],
            Item::weapon("Iron Sword", 5.0, 100, 25, WeaponClass::Sword),
        ));
        book.register(Recipe::new(
            "Wooden Staff",
            1,
            vec![
                IngredientRequirement::new("Wood", 2),
                IngredientRequirement::new("Crystal", 1),
            ],
            Item::weapon("Wooden Staff", 3.0, 80, 20, WeaponClass::Staff),
        ));
        book.register(Recipe::new(
            "Leather Armor",
            2,
            vec![
                IngredientRequirement::new("Leather", 4),
                IngredientRequirement::new("Thread", 2),
            ],
            Item::armor("Leather Armor", 8.0, 120, 15),
        ));

        book
    }

    /// Appends a recipe, preserving registration order.
    pub fn register(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Recipes whose level gate the given level satisfies, in registration
    /// order.
    pub fn available_for(&self, level: u32) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.required_level <= level)
    }

    /// Looks up a recipe by name.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Iterates over every recipe in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

//! Weight-capped item storage.
//!
//! An inventory holds one stack per item name. Stacks merge on add and are
//! dropped when their quantity reaches zero. Every successful mutation
//! preserves the invariant `total_weight() <= max_weight()`.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, MaterialKind, PotionEffect};

/// One inventory entry: an item and how many units of it are held.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// Combined weight of this stack.
    pub fn weight(&self) -> f32 {
        self.item.weight * self.quantity as f32
    }
}

/// Errors raised by inventory mutations.
///
/// No variant leaves the inventory partially mutated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// Adding the requested quantity would exceed the weight capacity.
    #[error("Adding {quantity}x {name} exceeds capacity (current: {current}, max: {max})")]
    OverWeight {
        name: String,
        quantity: u32,
        current: f32,
        max: f32,
    },

    /// No stack with the requested name exists.
    #[error("Item {name} not found in inventory")]
    NotFound { name: String },

    /// The stack exists but holds fewer units than requested.
    #[error("Insufficient quantity of {name} (have: {have}, requested: {requested})")]
    InsufficientQuantity {
        name: String,
        have: u32,
        requested: u32,
    },

    /// An existing stack has the same name but a different item definition.
    ///
    /// Stacks are keyed by name; merging two distinct definitions under one
    /// name would corrupt every downstream name lookup.
    #[error("Item {name} conflicts with an existing stack of the same name")]
    DefinitionMismatch { name: String },

    /// Quantity must be positive.
    #[error("Quantity must be positive")]
    InvalidQuantity,
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            // Capacity may free up once the caller drops something
            OverWeight { .. } => ErrorSeverity::Recoverable,
            NotFound { .. } | InsufficientQuantity { .. } => ErrorSeverity::Validation,
            DefinitionMismatch { .. } | InvalidQuantity => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            OverWeight { .. } => "INV_OVER_WEIGHT",
            NotFound { .. } => "INV_NOT_FOUND",
            InsufficientQuantity { .. } => "INV_INSUFFICIENT_QUANTITY",
            DefinitionMismatch { .. } => "INV_DEFINITION_MISMATCH",
            InvalidQuantity => "INV_INVALID_QUANTITY",
        }
    }
}

/// Weight-capped multiset of items, one stack per name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stacks: Vec<ItemStack>,
    max_weight: f32,
}

impl Inventory {
    /// Creates an empty inventory with the given weight capacity.
    pub fn new(max_weight: f32) -> Self {
        Self {
            stacks: Vec::new(),
            max_weight,
        }
    }

    /// Creates the starter inventory assigned by the character factory:
    /// Water x2, Bread x3, Gold Coins x50.
    pub fn starter() -> Self {
        Self::starter_with(&GameConfig::new())
    }

    /// Starter inventory with a configured weight capacity.
    pub fn starter_with(config: &GameConfig) -> Self {
        let mut inventory = Self::new(config.starter_max_weight);

        let water = Item::potion("Water", 0.5, 5, PotionEffect::Heal, 10);
        let bread = Item::potion("Bread", 0.3, 3, PotionEffect::Heal, 15);
        let gold = Item::material("Gold Coins", 0.1, 1, MaterialKind::Currency);

        // The preset always fits the default capacity; a misconfigured
        // capacity simply yields a partial kit.
        let _ = inventory.add(water, 2);
        let _ = inventory.add(bread, 3);
        let _ = inventory.add(gold, 50);

        inventory
    }

    /// Adds `quantity` units of an item, merging into an existing stack of
    /// the same name.
    ///
    /// Fails without mutation if the resulting total weight would exceed the
    /// capacity, or if an existing stack with this name holds a different
    /// item definition.
    pub fn add(&mut self, item: Item, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        if let Some(stack) = self.stacks.iter().find(|s| s.item.name == item.name) {
            if stack.item != item {
                return Err(InventoryError::DefinitionMismatch { name: item.name });
            }
        }

        let current = self.total_weight();
        let new_weight = current + item.weight * quantity as f32;
        if new_weight > self.max_weight {
            return Err(InventoryError::OverWeight {
                name: item.name,
                quantity,
                current,
                max: self.max_weight,
            });
        }

        tracing::debug!(name = %item.name, quantity, total_weight = new_weight, "item added");

        match self.stacks.iter_mut().find(|s| s.item.name == item.name) {
            Some(stack) => stack.quantity += quantity,
            None => self.stacks.push(ItemStack::new(item, quantity)),
        }
        Ok(())
    }

    /// Removes `quantity` units of the named item, dropping the stack when it
    /// reaches zero.
    ///
    /// Fails without mutation if the stack is absent or holds fewer units
    /// than requested.
    pub fn remove(&mut self, name: &str, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let index = self
            .stacks
            .iter()
            .position(|s| s.item.name == name)
            .ok_or_else(|| InventoryError::NotFound {
                name: name.to_string(),
            })?;

        let stack = &mut self.stacks[index];
        if stack.quantity < quantity {
            return Err(InventoryError::InsufficientQuantity {
                name: name.to_string(),
                have: stack.quantity,
                requested: quantity,
            });
        }

        stack.quantity -= quantity;
        if stack.quantity == 0 {
            self.stacks.remove(index);
        }

        tracing::debug!(name, quantity, "item removed");
        Ok(())
    }

    /// Looks up an item by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.stacks
            .iter()
            .find(|s| s.item.name == name)
            .map(|s| &s.item)
    }

    /// Units held of the named item; 0 if absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.stacks
            .iter()
            .find(|s| s.item.name == name)
            .map_or(0, |s| s.quantity)
    }

    /// Sum of stack weights.
    pub fn total_weight(&self) -> f32 {
        self.stacks.iter().map(ItemStack::weight).sum()
    }

    /// Weight capacity.
    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    /// Iterates over stacks in insertion order.
    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Number of distinct stacks.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

//! Character state and item interaction.
//!
//! This module contains everything specific to characters:
//! - CharacterClass: closed class set with per-class dispatch tables
//! - Equipment: weapon and armor slots
//! - Character: health, level, inventory, and the use-item entry point

pub mod class;
pub mod equipment;

pub use class::CharacterClass;
pub use equipment::{Equipment, EquipmentBuilder};

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::inventory::{Inventory, InventoryError};
use crate::item::{Item, ItemKind, PotionEffect, WeaponClass, WeaponData};

/// Integer resource meter (current / maximum), used for health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        debug_assert!(current <= maximum);
        Self { current, maximum }
    }

    /// Meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Raises `current` by `amount`, capped at `maximum`. Returns the amount
    /// actually gained.
    pub fn gain(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }
}

/// Errors raised by [`Character::use_item`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseItemError {
    /// No item with this name in the inventory.
    #[error("Item {name} not found in inventory")]
    NotFound { name: String },

    /// The character's class may not wield this weapon class.
    #[error("{class} cannot equip {weapon_class} weapons")]
    ClassRestricted {
        class: CharacterClass,
        weapon_class: WeaponClass,
    },

    /// The item has no use action (crafting materials).
    #[error("Item {name} cannot be used directly")]
    NotUsable { name: String },
}

impl GameError for UseItemError {
    fn severity(&self) -> ErrorSeverity {
        use UseItemError::*;
        match self {
            NotFound { .. } | NotUsable { .. } => ErrorSeverity::Validation,
            ClassRestricted { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use UseItemError::*;
        match self {
            NotFound { .. } => "USE_ITEM_NOT_FOUND",
            ClassRestricted { .. } => "USE_CLASS_RESTRICTED",
            NotUsable { .. } => "USE_NOT_USABLE",
        }
    }
}

/// What a successful [`Character::use_item`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseOutcome {
    /// The item now occupies the weapon slot.
    EquippedWeapon,
    /// The item now occupies the armor slot.
    EquippedArmor,
    /// One unit was consumed; `restored` health points were actually gained
    /// (0 for non-heal effects or at full health).
    Consumed { restored: u32 },
}

/// A playable character: class, health, level, inventory, and equipment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub health: ResourceMeter,
    /// Progression level, starts at 1. Gates recipe availability.
    pub level: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
}

impl Character {
    /// Creates a character with an empty inventory sized to the class carry
    /// capacity. Most callers want [`Character::spawn`] instead.
    pub fn new(class: CharacterClass, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class,
            health: ResourceMeter::full(class.base_health()),
            level: 1,
            inventory: Inventory::new(class.carry_capacity()),
            equipment: Equipment::empty(),
        }
    }

    /// Factory constructor: a fresh character holding the starter inventory.
    ///
    /// The starter preset replaces the empty class-capacity inventory a plain
    /// [`Character::new`] would carry.
    pub fn spawn(class: CharacterClass, name: impl Into<String>) -> Self {
        Self::spawn_with(class, name, &GameConfig::new())
    }

    /// Factory constructor with explicit configuration.
    pub fn spawn_with(
        class: CharacterClass,
        name: impl Into<String>,
        config: &GameConfig,
    ) -> Self {
        let mut character = Self::new(class, name);
        character.inventory = Inventory::starter_with(config);
        tracing::debug!(name = %character.name, class = %class, "character spawned");
        character
    }

    /// Returns true if this character may equip the given weapon.
    pub fn can_equip_weapon(&self, weapon: &WeaponData) -> bool {
        self.class.can_wield(weapon.class)
    }

    /// Effectiveness multiplier this character gets from an item.
    pub fn item_bonus(&self, item: &Item) -> f32 {
        self.class.item_bonus(item)
    }

    /// Adds items to the inventory, subject to its weight capacity.
    pub fn pick_up(&mut self, item: Item, quantity: u32) -> Result<(), InventoryError> {
        self.inventory.add(item, quantity)
    }

    /// Uses the named inventory item.
    ///
    /// - Weapons equip into the weapon slot, gated by the class weapon table;
    ///   the backing stack stays in the inventory.
    /// - Armor equips unconditionally into the armor slot.
    /// - Potions are consumed: one unit is removed and heal effects restore
    ///   health up to the maximum.
    /// - Materials fail with [`UseItemError::NotUsable`].
    ///
    /// On any error the inventory, equipment, and health are unchanged.
    pub fn use_item(&mut self, name: &str) -> Result<UseOutcome, UseItemError> {
        let item = self
            .inventory
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| UseItemError::NotFound {
                name: name.to_string(),
            })?;

        match item.kind {
            ItemKind::Weapon(data) => {
                if !self.can_equip_weapon(&data) {
                    return Err(UseItemError::ClassRestricted {
                        class: self.class,
                        weapon_class: data.class,
                    });
                }
                tracing::debug!(name = %item.name, class = %self.class, "weapon equipped");
                self.equipment.equip_weapon(item);
                Ok(UseOutcome::EquippedWeapon)
            }
            ItemKind::Armor(_) => {
                tracing::debug!(name = %item.name, "armor equipped");
                self.equipment.equip_armor(item);
                Ok(UseOutcome::EquippedArmor)
            }
            ItemKind::Potion(data) => {
                // The stack was just found, so removal of one unit cannot fail.
                self.inventory
                    .remove(name, 1)
                    .map_err(|_| UseItemError::NotFound {
                        name: name.to_string(),
                    })?;
                let restored = match data.effect {
                    PotionEffect::Heal => self.health.gain(data.value),
                    PotionEffect::Custom(_) => 0,
                };
                tracing::debug!(name = %item.name, restored, health = self.health.current, "potion consumed");
                Ok(UseOutcome::Consumed { restored })
            }
            ItemKind::Material(_) => Err(UseItemError::NotUsable {
                name: item.name,
            }),
        }
    }
}

//! Equipment slots for characters.
//!
//! Defines what items a character has equipped. Equipping stores a copy of
//! the item; the backing stack stays in the inventory.

use crate::item::Item;

/// Equipment state for a character.
///
/// Two fixed slots: weapon and armor. Class restrictions are enforced by
/// [`crate::character::Character::use_item`], not here.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon.
    pub weapon: Option<Item>,

    /// Currently equipped armor.
    pub armor: Option<Item>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Equips a weapon, returning the previously equipped weapon if any.
    pub fn equip_weapon(&mut self, item: Item) -> Option<Item> {
        self.weapon.replace(item)
    }

    /// Unequips the current weapon, returning it if any was equipped.
    pub fn unequip_weapon(&mut self) -> Option<Item> {
        self.weapon.take()
    }

    /// Equips armor, returning the previously equipped armor if any.
    pub fn equip_armor(&mut self, item: Item) -> Option<Item> {
        self.armor.replace(item)
    }

    /// Unequips the current armor, returning it if any was equipped.
    pub fn unequip_armor(&mut self) -> Option<Item> {
        self.armor.take()
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    weapon: Option<Item>,
    armor: Option<Item>,
}

impl EquipmentBuilder {
    /// Sets the weapon slot.
    pub fn weapon(mut self, item: Item) -> Self {
        self.weapon = Some(item);
        self
    }

    /// Sets the armor slot.
    pub fn armor(mut self, item: Item) -> Self {
        self.armor = Some(item);
        self
    }

    /// Builds the equipment.
    pub fn build(self) -> Equipment {
        Equipment {
            weapon: self.weapon,
            armor: self.armor,
        }
    }
}

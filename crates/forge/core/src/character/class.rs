//! Character classes and their dispatch tables.
//!
//! Classes form a closed set; every per-class rule (base stats, weapon
//! restrictions, item affinity) is a match on this enum rather than a
//! trait hierarchy.

use crate::item::{Item, ItemKind, WeaponClass};

/// Character class (combat role).
///
/// Parses from the lowercase class names used by content files and the
/// character factory ("warrior", "mage", "archer").
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterClass {
    /// High health, melee weapons, heavy carry capacity.
    Warrior,
    /// Low health, magic weapons, light carry capacity.
    Mage,
    /// Balanced health, ranged weapons, favors light armor.
    Archer,
}

impl CharacterClass {
    /// Base (and maximum) health at spawn.
    pub const fn base_health(&self) -> u32 {
        match self {
            Self::Warrior => 150,
            Self::Mage => 80,
            Self::Archer => 100,
        }
    }

    /// Inventory weight capacity for a plain (non-factory) character.
    pub const fn carry_capacity(&self) -> f32 {
        match self {
            Self::Warrior => 80.0,
            Self::Mage => 40.0,
            Self::Archer => 60.0,
        }
    }

    /// Weapon classes this class may equip.
    pub const fn allowed_weapon_classes(&self) -> &'static [WeaponClass] {
        match self {
            Self::Warrior => &[WeaponClass::Sword, WeaponClass::Axe, WeaponClass::Mace],
            Self::Mage => &[WeaponClass::Staff, WeaponClass::Wand],
            Self::Archer => &[WeaponClass::Bow, WeaponClass::Crossbow],
        }
    }

    /// Returns true if this class may wield the given weapon class.
    pub fn can_wield(&self, class: WeaponClass) -> bool {
        self.allowed_weapon_classes().contains(&class)
    }

    /// Effectiveness multiplier this class gets from an item.
    ///
    /// Warrior x1.2 on weapons, Mage x1.5 on potions, Archer x1.3 on armor
    /// lighter than 10.0; every other combination x1.0.
    pub fn item_bonus(&self, item: &Item) -> f32 {
        match (self, &item.kind) {
            (Self::Warrior, ItemKind::Weapon(_)) => 1.2,
            (Self::Mage, ItemKind::Potion(_)) => 1.5,
            (Self::Archer, ItemKind::Armor(_)) if item.weight < 10.0 => 1.3,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn class_parses_factory_names() {
        assert_eq!(CharacterClass::from_str("warrior").unwrap(), CharacterClass::Warrior);
        assert_eq!(CharacterClass::from_str("MAGE").unwrap(), CharacterClass::Mage);
        assert!(CharacterClass::from_str("paladin").is_err());
    }

    #[test]
    fn weapon_permissions_are_deterministic() {
        // Pure function of (class, weapon class): two evaluations agree,
        // and each class accepts exactly its own table.
        for class in CharacterClass::iter() {
            for weapon in WeaponClass::iter() {
                let allowed = class.can_wield(weapon);
                assert_eq!(allowed, class.can_wield(weapon));
                assert_eq!(allowed, class.allowed_weapon_classes().contains(&weapon));
            }
        }
        assert!(CharacterClass::Warrior.can_wield(WeaponClass::Mace));
        assert!(!CharacterClass::Warrior.can_wield(WeaponClass::Wand));
        assert!(CharacterClass::Mage.can_wield(WeaponClass::Staff));
        assert!(!CharacterClass::Mage.can_wield(WeaponClass::Sword));
        assert!(CharacterClass::Archer.can_wield(WeaponClass::Bow));
        assert!(!CharacterClass::Archer.can_wield(WeaponClass::Axe));
    }

    #[test]
    fn item_bonus_table() {
        let sword = Item::weapon("Steel Sword", 6.0, 150, 30, WeaponClass::Sword);
        let potion = Item::potion("Health Potion", 0.5, 50, crate::item::PotionEffect::Heal, 50);
        let light_armor = Item::armor("Leather Armor", 8.0, 120, 15);
        let heavy_armor = Item::armor("Chain Mail", 15.0, 180, 25);

        assert_eq!(CharacterClass::Warrior.item_bonus(&sword), 1.2);
        assert_eq!(CharacterClass::Warrior.item_bonus(&potion), 1.0);
        assert_eq!(CharacterClass::Mage.item_bonus(&potion), 1.5);
        assert_eq!(CharacterClass::Mage.item_bonus(&sword), 1.0);
        assert_eq!(CharacterClass::Archer.item_bonus(&light_armor), 1.3);
        // weight 15.0 is not light armor
        assert_eq!(CharacterClass::Archer.item_bonus(&heavy_armor), 1.0);
    }
}

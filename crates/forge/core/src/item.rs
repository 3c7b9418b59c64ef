//! Item model: common fields plus kind-specific data.
//!
//! # Design: Base + Kind Pattern
//!
//! - Base struct holds common fields (name, weight, cost)
//! - `kind` enum holds type-specific data (weapon stats, potion effects, etc.)
//!
//! Items are immutable value objects: once constructed they are held in an
//! inventory, copied into an equipment slot, or consumed. Two items are the
//! same stack iff their names match; see [`crate::inventory::Inventory`] for
//! the merge rules.

/// An item that can be stored, equipped, consumed, or crafted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name; unique per inventory (stacks are keyed by name).
    pub name: String,
    /// Carry weight of a single unit. Never negative.
    pub weight: f32,
    /// Base cost in gold.
    pub cost: u32,
    /// Type-specific data.
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f32, cost: u32, kind: ItemKind) -> Self {
        debug_assert!(weight >= 0.0, "item weight must be non-negative");
        Self {
            name: name.into(),
            weight,
            cost,
            kind,
        }
    }

    /// Convenience constructor for a weapon.
    pub fn weapon(
        name: impl Into<String>,
        weight: f32,
        cost: u32,
        damage: u32,
        class: WeaponClass,
    ) -> Self {
        Self::new(name, weight, cost, ItemKind::Weapon(WeaponData { class, damage }))
    }

    /// Convenience constructor for armor.
    pub fn armor(name: impl Into<String>, weight: f32, cost: u32, defense: u32) -> Self {
        Self::new(name, weight, cost, ItemKind::Armor(ArmorData { defense }))
    }

    /// Convenience constructor for a potion.
    pub fn potion(
        name: impl Into<String>,
        weight: f32,
        cost: u32,
        effect: PotionEffect,
        value: u32,
    ) -> Self {
        Self::new(name, weight, cost, ItemKind::Potion(PotionData { effect, value }))
    }

    /// Convenience constructor for a crafting material.
    pub fn material(name: impl Into<String>, weight: f32, cost: u32, kind: MaterialKind) -> Self {
        Self::new(name, weight, cost, ItemKind::Material(MaterialData { kind }))
    }

    /// Returns true if this item can occupy an equipment slot.
    pub fn is_equippable(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_) | ItemKind::Armor(_))
    }

    /// Returns the weapon data if this item is a weapon.
    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind.category())
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable armor.
    Armor(ArmorData),

    /// Consumable potion.
    Potion(PotionData),

    /// Crafting material; cannot be used directly.
    Material(MaterialData),
}

impl ItemKind {
    /// Short category label used in display output.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Weapon(_) => "weapon",
            Self::Armor(_) => "armor",
            Self::Potion(_) => "potion",
            Self::Material(_) => "material",
        }
    }
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub class: WeaponClass,
    pub damage: u32,
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub defense: u32,
}

/// Potion-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionData {
    pub effect: PotionEffect,
    /// Effect magnitude (hit points restored for [`PotionEffect::Heal`]).
    pub value: u32,
}

/// Material-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialData {
    pub kind: MaterialKind,
}

/// Weapon classes that determine which characters can wield a weapon.
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
pub enum WeaponClass {
    // Melee weapons
    Sword,
    Axe,
    Mace,

    // Magic weapons
    Staff,
    Wand,

    // Ranged weapons
    Bow,
    Crossbow,
}

/// Potion effects applied on use.
///
/// Only `Heal` changes character state; other effects consume the potion
/// without touching stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PotionEffect {
    /// Restore health, capped at the character's maximum.
    Heal,

    /// Custom effect with no built-in stat change.
    Custom(u16),
}

/// Material categories for crafting ingredients.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MaterialKind {
    Metal,
    Wood,
    Leather,
    Thread,
    Crystal,
    Currency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn weapon_class_parses_lowercase_names() {
        assert_eq!(WeaponClass::from_str("sword").unwrap(), WeaponClass::Sword);
        assert_eq!(WeaponClass::from_str("Crossbow").unwrap(), WeaponClass::Crossbow);
        assert!(WeaponClass::from_str("halberd").is_err());
    }

    #[test]
    fn weapon_class_displays_snake_case() {
        assert_eq!(WeaponClass::Bow.to_string(), "bow");
        assert_eq!(MaterialKind::Currency.as_ref(), "currency");
    }

    #[test]
    fn equippable_kinds() {
        let sword = Item::weapon("Steel Sword", 6.0, 150, 30, WeaponClass::Sword);
        let ore = Item::material("Iron Ore", 2.0, 10, MaterialKind::Metal);
        assert!(sword.is_equippable());
        assert!(!ore.is_equippable());
        assert_eq!(sword.as_weapon().map(|w| w.damage), Some(30));
        assert!(ore.as_weapon().is_none());
    }

    #[test]
    fn display_includes_category() {
        let bread = Item::potion("Bread", 0.3, 3, PotionEffect::Heal, 15);
        assert_eq!(bread.to_string(), "Bread (potion)");
    }
}

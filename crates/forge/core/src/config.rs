/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Weight capacity of the starter inventory assigned by the character
    /// factory. Class carry capacity applies only to inventories created
    /// outside the factory path.
    pub starter_max_weight: f32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTER_MAX_WEIGHT: f32 = 50.0;

    pub fn new() -> Self {
        Self {
            starter_max_weight: Self::DEFAULT_STARTER_MAX_WEIGHT,
        }
    }

    pub fn with_starter_max_weight(starter_max_weight: f32) -> Self {
        Self { starter_max_weight }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Appearance and profession variants carried by individual mob kinds.

use serde::{Deserialize, Serialize};

/// Wool and collar colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DyeColor {
    #[default]
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorseColor {
    #[default]
    White,
    Creamy,
    Chestnut,
    Brown,
    Black,
    Gray,
    DarkBrown,
}

/// Coat markings layered over a horse's base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorseStyle {
    #[default]
    None,
    White,
    Whitefield,
    WhiteDots,
    BlackDots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LlamaColor {
    #[default]
    Creamy,
    White,
    Brown,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParrotVariant {
    #[default]
    Red,
    Blue,
    Green,
    Cyan,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatType {
    #[default]
    Tabby,
    Black,
    Red,
    Siamese,
    BritishShorthair,
    Calico,
    Persian,
    Ragdoll,
    White,
    Jellie,
    AllBlack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MooshroomVariant {
    #[default]
    Red,
    Brown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoxType {
    #[default]
    Red,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrogVariant {
    #[default]
    Temperate,
    Warm,
    Cold,
}

/// Villager workstation profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profession {
    #[default]
    None,
    Armorer,
    Butcher,
    Cartographer,
    Cleric,
    Farmer,
    Fisherman,
    Fletcher,
    Leatherworker,
    Librarian,
    Mason,
    Nitwit,
    Shepherd,
    Toolsmith,
    Weaponsmith,
}

/// Status effect types that can be active on a living entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PotionKind {
    Speed,
    Slowness,
    Strength,
    Weakness,
    Regeneration,
    Poison,
    FireResistance,
    WaterBreathing,
    Invisibility,
    Glowing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&DyeColor::LightBlue).unwrap(),
            "\"light-blue\""
        );
        assert_eq!(
            serde_json::to_string(&CatType::BritishShorthair).unwrap(),
            "\"british-shorthair\""
        );
        let style: HorseStyle = serde_json::from_str("\"white-dots\"").unwrap();
        assert_eq!(style, HorseStyle::WhiteDots);
    }

    #[test]
    fn defaults_match_vanilla_spawns() {
        assert_eq!(DyeColor::default(), DyeColor::White);
        assert_eq!(Profession::default(), Profession::None);
        assert_eq!(FrogVariant::default(), FrogVariant::Temperate);
    }
}

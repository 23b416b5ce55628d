use mobstack_common::{
    CatType, DyeColor, EntityId, EntityKind, FoxType, FrogVariant, HorseColor, HorseStyle,
    LlamaColor, MooshroomVariant, ParrotVariant, PotionKind, Profession,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Age in ticks at which a freshly bred animal grows up.
pub const BABY_AGE: i32 = -24000;

/// A living entity as seen by the stacking rules.
///
/// Deserialized mobs must carry a concrete kind; abstract taxonomy nodes such
/// as `animal` are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    #[serde(default)]
    id: EntityId,
    #[serde(deserialize_with = "concrete_kind")]
    kind: EntityKind,
    #[serde(default)]
    pub state: MobState,
}

fn concrete_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EntityKind, D::Error> {
    let kind = EntityKind::deserialize(deserializer)?;
    if kind.is_abstract() {
        return Err(serde::de::Error::custom(format!(
            "{kind} is an abstract kind, a mob needs a concrete one"
        )));
    }
    Ok(kind)
}

/// An item held in a hand slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equipment {
    /// Namespaced material id, e.g. `minecraft:trident`.
    pub material: String,
    #[serde(default = "one")]
    pub amount: u8,
}

fn one() -> u8 {
    1
}

impl Equipment {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            amount: 1,
        }
    }
}

/// An active status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PotionEffect {
    pub kind: PotionKind,
    #[serde(default)]
    pub amplifier: u8,
    pub duration_ticks: u32,
}

/// Observable state of a mob.
///
/// Fields that only make sense for some kinds are `Option`s; `None` means the
/// mob does not carry that attribute and rules treat it as a no-op.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MobState {
    /// Ageable age in ticks. Negative while a baby.
    pub age: i32,
    pub can_breed: bool,
    pub love_mode_ticks: u32,
    /// Baby flag for zombies, zoglins and piglins. These sit under `Monster`
    /// in the kind tree, not `Ageable`, so their life stage lives here rather
    /// than in `age` and has its own per-kind rules.
    pub baby: bool,

    pub wool_color: Option<DyeColor>,
    pub sheared: bool,
    pub horse_color: Option<HorseColor>,
    pub horse_style: Option<HorseStyle>,
    pub slime_size: Option<u8>,
    pub llama_color: Option<LlamaColor>,
    pub parrot_variant: Option<ParrotVariant>,
    pub cat_type: Option<CatType>,
    pub mooshroom_variant: Option<MooshroomVariant>,
    pub fox_type: Option<FoxType>,
    pub frog_variant: Option<FrogVariant>,
    pub profession: Option<Profession>,

    pub main_hand: Option<Equipment>,
    pub off_hand: Option<Equipment>,

    pub has_nectar: bool,
    pub has_stung: bool,
    pub has_egg: bool,

    pub leash_holder: Option<EntityId>,
    pub potion_effects: Vec<PotionEffect>,
    pub liked_player: Option<EntityId>,
}

impl Mob {
    /// A fresh adult mob of the given kind with default state.
    pub fn new(kind: EntityKind) -> Self {
        Self::with_state(kind, MobState::default())
    }

    pub fn with_state(kind: EntityKind, state: MobState) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            state,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_adult(&self) -> bool {
        self.state.age >= 0
    }

    pub fn is_leashed(&self) -> bool {
        self.state.leash_holder.is_some()
    }

    pub fn is_love_mode(&self) -> bool {
        self.state.love_mode_ticks > 0
    }
}

impl AsRef<Mob> for Mob {
    fn as_ref(&self) -> &Mob {
        self
    }
}

impl AsMut<Mob> for Mob {
    fn as_mut(&mut self) -> &mut Mob {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mob_is_adult_and_unleashed() {
        let mob = Mob::new(EntityKind::Cow);
        assert!(mob.is_adult());
        assert!(!mob.is_leashed());
        assert!(!mob.is_love_mode());
        assert_eq!(mob.kind(), EntityKind::Cow);
    }

    #[test]
    fn negative_age_is_baby() {
        let mob = Mob::with_state(
            EntityKind::Pig,
            MobState {
                age: BABY_AGE,
                ..MobState::default()
            },
        );
        assert!(!mob.is_adult());
    }

    #[test]
    fn deserialize_sparse_json() {
        let mob: Mob = serde_json::from_str(
            r#"{ "kind": "sheep", "state": { "wool_color": "red", "sheared": true } }"#,
        )
        .unwrap();
        assert_eq!(mob.kind(), EntityKind::Sheep);
        assert_eq!(mob.state.wool_color, Some(DyeColor::Red));
        assert!(mob.state.sheared);
        assert_eq!(mob.state.age, 0);
    }

    #[test]
    fn deserialize_rejects_abstract_kind() {
        let err = serde_json::from_str::<Mob>(r#"{ "kind": "animal" }"#).unwrap_err();
        assert!(err.to_string().contains("abstract"));
        assert!(serde_json::from_str::<Mob>(r#"{ "kind": "cow" }"#).is_ok());
    }

    #[test]
    fn equipment_amount_defaults_to_one() {
        let item: Equipment = serde_json::from_str(r#"{ "material": "minecraft:trident" }"#).unwrap();
        assert_eq!(item, Equipment::new("minecraft:trident"));
    }
}

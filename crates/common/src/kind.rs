//! The entity kind taxonomy.
//!
//! Every kind has at most one direct supertype. Abstract nodes (`Living`,
//! `Ageable`, `Animal`, ...) exist so rules can target a whole family.
//!
//! Baby monsters (zombies, zoglins, piglins) are placed under `Monster` only.
//! A single-parent tree cannot also put them under `Ageable`, so their baby
//! state is compared by dedicated rules instead of the ageable one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    // Abstract taxonomy nodes.
    Living,
    Ageable,
    Animal,
    Tameable,
    AbstractHorse,
    Monster,

    // Animals.
    Sheep,
    Cow,
    Mooshroom,
    Pig,
    Chicken,
    Fox,
    Bee,
    Turtle,
    Frog,
    Cat,
    Wolf,
    Parrot,
    Horse,
    Llama,

    Villager,

    // Monsters.
    Zombie,
    Husk,
    Drowned,
    ZombieVillager,
    Zoglin,
    Piglin,
    Creeper,
    Skeleton,

    Slime,
    MagmaCube,
    Allay,
}

impl EntityKind {
    pub const ALL: [EntityKind; 32] = [
        Self::Living,
        Self::Ageable,
        Self::Animal,
        Self::Tameable,
        Self::AbstractHorse,
        Self::Monster,
        Self::Sheep,
        Self::Cow,
        Self::Mooshroom,
        Self::Pig,
        Self::Chicken,
        Self::Fox,
        Self::Bee,
        Self::Turtle,
        Self::Frog,
        Self::Cat,
        Self::Wolf,
        Self::Parrot,
        Self::Horse,
        Self::Llama,
        Self::Villager,
        Self::Zombie,
        Self::Husk,
        Self::Drowned,
        Self::ZombieVillager,
        Self::Zoglin,
        Self::Piglin,
        Self::Creeper,
        Self::Skeleton,
        Self::Slime,
        Self::MagmaCube,
        Self::Allay,
    ];

    /// Direct supertype, `None` only for `Living`.
    pub fn parent(self) -> Option<EntityKind> {
        use EntityKind::*;
        match self {
            Living => None,
            Ageable | Monster | Slime | Allay => Some(Living),
            Animal | Villager => Some(Ageable),
            Tameable | AbstractHorse => Some(Animal),
            Sheep | Cow | Pig | Chicken | Fox | Bee | Turtle | Frog => Some(Animal),
            Mooshroom => Some(Cow),
            Cat | Wolf | Parrot => Some(Tameable),
            Horse | Llama => Some(AbstractHorse),
            // Not under Ageable: baby monsters carry their own baby rules.
            Zombie | Zoglin | Piglin | Creeper | Skeleton => Some(Monster),
            Husk | Drowned | ZombieVillager => Some(Zombie),
            MagmaCube => Some(Slime),
        }
    }

    /// Iterate from this kind up to the root, inclusive on both ends.
    pub fn ancestors(self) -> impl Iterator<Item = EntityKind> {
        std::iter::successors(Some(self), |k| k.parent())
    }

    /// Reflexive, transitive subtype test: `self` is `ancestor` or descends from it.
    pub fn is_a(self, ancestor: EntityKind) -> bool {
        self.ancestors().any(|k| k == ancestor)
    }

    /// Taxonomy nodes that never describe a live entity.
    pub fn is_abstract(self) -> bool {
        matches!(
            self,
            Self::Living
                | Self::Ageable
                | Self::Animal
                | Self::Tameable
                | Self::AbstractHorse
                | Self::Monster
        )
    }

    pub fn name(self) -> &'static str {
        use EntityKind::*;
        match self {
            Living => "living",
            Ageable => "ageable",
            Animal => "animal",
            Tameable => "tameable",
            AbstractHorse => "abstract-horse",
            Monster => "monster",
            Sheep => "sheep",
            Cow => "cow",
            Mooshroom => "mooshroom",
            Pig => "pig",
            Chicken => "chicken",
            Fox => "fox",
            Bee => "bee",
            Turtle => "turtle",
            Frog => "frog",
            Cat => "cat",
            Wolf => "wolf",
            Parrot => "parrot",
            Horse => "horse",
            Llama => "llama",
            Villager => "villager",
            Zombie => "zombie",
            Husk => "husk",
            Drowned => "drowned",
            ZombieVillager => "zombie-villager",
            Zoglin => "zoglin",
            Piglin => "piglin",
            Creeper => "creeper",
            Skeleton => "skeleton",
            Slime => "slime",
            MagmaCube => "magma-cube",
            Allay => "allay",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0:?}")]
pub struct ParseKindError(pub String);

impl FromStr for EntityKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

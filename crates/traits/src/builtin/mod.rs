//! Built-in trait rules, one unit struct per rule.

mod ageable;
mod animal;
mod living;
mod monster;

pub use ageable::{Age, BreedMode, LoveMode, VillagerProfession};
pub use animal::{
    BeeNectar, BeeStung, CatType, FoxType, FrogVariant, HorseColor, LlamaColor, MooshroomVariant,
    ParrotVariant, SheepColor, SheepShear, TurtleHasEgg,
};
pub use living::{AllayOwner, Leash, Potion};
pub use monster::{DrownedItem, PiglinBaby, SlimeSize, ZoglinBaby, ZombieBaby};

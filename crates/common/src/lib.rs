//! Shared types for the mob stacking workspace.
//!
//! # Invariants
//! - `EntityKind` forms a single-rooted tree; every kind reaches `Living`.
//! - Variant enums serialize in kebab-case and never change names once shipped.

mod env;
mod kind;
mod types;
mod variant;

pub use env::{Environment, GameVersion, ParseVersionError, ServerFlavor};
pub use kind::{EntityKind, ParseKindError};
pub use types::EntityId;
pub use variant::{
    CatType, DyeColor, FoxType, FrogVariant, HorseColor, HorseStyle, LlamaColor,
    MooshroomVariant, ParrotVariant, PotionKind, Profession,
};

pub fn crate_info() -> &'static str {
    "mobstack-common v0.1.0"
}

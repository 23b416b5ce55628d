//! Mob Kernel: the entity model trait rules read and write.
//!
//! # Invariants
//! - A mob's kind is fixed at construction.
//! - All observable state lives in `MobState`; rules touch nothing else.

pub mod mob;
pub mod stack;

pub use mob::{Equipment, Mob, MobState, PotionEffect};
pub use stack::StackEntity;

pub fn crate_info() -> &'static str {
    "mobstack-kernel v0.1.0"
}

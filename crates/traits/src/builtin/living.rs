use crate::rule::{MobTrait, copy_some};
use mobstack_common::{EntityKind, PotionKind};
use mobstack_kernel::Mob;
use std::collections::BTreeSet;

/// Leashed mobs are never stacked, whichever side holds the lead.
#[derive(Debug, Default)]
pub struct Leash;

impl MobTrait for Leash {
    fn path(&self) -> &'static str {
        "leash"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Living
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.is_leashed() || nearby.is_leashed()
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.leash_holder, &dead.state.leash_holder);
    }
}

/// Compares which effects are active; amplifier and remaining time are ignored.
#[derive(Debug, Default)]
pub struct Potion;

fn active_kinds(mob: &Mob) -> BTreeSet<PotionKind> {
    mob.state.potion_effects.iter().map(|e| e.kind).collect()
}

impl MobTrait for Potion {
    fn path(&self) -> &'static str {
        "potion"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Living
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        active_kinds(first) != active_kinds(nearby)
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        for effect in &dead.state.potion_effects {
            let effects = &mut spawned.state.potion_effects;
            match effects.iter_mut().find(|e| e.kind == effect.kind) {
                Some(existing) => *existing = *effect,
                None => effects.push(*effect),
            }
        }
    }
}

/// The player an allay is bound to.
#[derive(Debug, Default)]
pub struct AllayOwner;

impl MobTrait for AllayOwner {
    fn path(&self) -> &'static str {
        "allay.owner"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Allay
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.liked_player != nearby.state.liked_player
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.liked_player, &dead.state.liked_player);
    }
}

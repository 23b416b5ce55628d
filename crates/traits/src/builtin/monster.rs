use crate::rule::{MobTrait, copy_some};
use mobstack_common::EntityKind;
use mobstack_kernel::{Equipment, Mob};

/// Magma cubes inherit this through the slime family.
#[derive(Debug, Default)]
pub struct SlimeSize;

impl MobTrait for SlimeSize {
    fn path(&self) -> &'static str {
        "slime.size"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Slime
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.slime_size != nearby.state.slime_size
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.slime_size, &dead.state.slime_size);
    }
}

/// Drowned holding a trident or nautilus shell stay apart from empty-handed ones.
#[derive(Debug, Default)]
pub struct DrownedItem;

fn material(slot: &Option<Equipment>) -> Option<&str> {
    slot.as_ref().map(|item| item.material.as_str())
}

impl MobTrait for DrownedItem {
    fn path(&self) -> &'static str {
        "drowned.item"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Drowned
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        material(&first.state.main_hand) != material(&nearby.state.main_hand)
            || material(&first.state.off_hand) != material(&nearby.state.off_hand)
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.main_hand, &dead.state.main_hand);
        copy_some(&mut spawned.state.off_hand, &dead.state.off_hand);
    }
}

#[derive(Debug, Default)]
pub struct ZombieBaby;

impl MobTrait for ZombieBaby {
    fn path(&self) -> &'static str {
        "zombie.baby"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Zombie
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.baby != nearby.state.baby
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.baby = dead.state.baby;
    }
}

#[derive(Debug, Default)]
pub struct ZoglinBaby;

impl MobTrait for ZoglinBaby {
    fn path(&self) -> &'static str {
        "zoglin.baby"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Zoglin
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.baby != nearby.state.baby
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.baby = dead.state.baby;
    }
}

#[derive(Debug, Default)]
pub struct PiglinBaby;

impl MobTrait for PiglinBaby {
    fn path(&self) -> &'static str {
        "piglin.baby"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Piglin
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.baby != nearby.state.baby
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.baby = dead.state.baby;
    }
}

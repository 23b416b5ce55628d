use crate::rule::{MobTrait, copy_some};
use mobstack_common::EntityKind;
use mobstack_kernel::Mob;

/// Babies and adults never share a stack.
#[derive(Debug, Default)]
pub struct Age;

impl MobTrait for Age {
    fn path(&self) -> &'static str {
        "age"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Ageable
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.is_adult() != nearby.is_adult()
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.age = dead.state.age;
    }
}

#[derive(Debug, Default)]
pub struct BreedMode;

impl MobTrait for BreedMode {
    fn path(&self) -> &'static str {
        "breed-mode"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Animal
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.can_breed != nearby.state.can_breed
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.can_breed = dead.state.can_breed;
    }
}

#[derive(Debug, Default)]
pub struct LoveMode;

impl MobTrait for LoveMode {
    fn path(&self) -> &'static str {
        "love-mode"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Animal
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.is_love_mode() != nearby.is_love_mode()
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.love_mode_ticks = dead.state.love_mode_ticks;
    }
}

#[derive(Debug, Default)]
pub struct VillagerProfession;

impl MobTrait for VillagerProfession {
    fn path(&self) -> &'static str {
        "villager.profession"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Villager
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.profession != nearby.state.profession
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.profession, &dead.state.profession);
    }
}

use crate::rule::{MobTrait, copy_some};
use mobstack_common::EntityKind;
use mobstack_kernel::Mob;

#[derive(Debug, Default)]
pub struct SheepColor;

impl MobTrait for SheepColor {
    fn path(&self) -> &'static str {
        "sheep.color"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Sheep
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.wool_color != nearby.state.wool_color
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.wool_color, &dead.state.wool_color);
    }
}

#[derive(Debug, Default)]
pub struct SheepShear;

impl MobTrait for SheepShear {
    fn path(&self) -> &'static str {
        "sheep.shear"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Sheep
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.sheared != nearby.state.sheared
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.sheared = dead.state.sheared;
    }
}

/// Base colour and markings together; a horse only matches on both.
#[derive(Debug, Default)]
pub struct HorseColor;

impl MobTrait for HorseColor {
    fn path(&self) -> &'static str {
        "horse.color"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Horse
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.horse_color != nearby.state.horse_color
            || first.state.horse_style != nearby.state.horse_style
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.horse_color, &dead.state.horse_color);
        copy_some(&mut spawned.state.horse_style, &dead.state.horse_style);
    }
}

#[derive(Debug, Default)]
pub struct LlamaColor;

impl MobTrait for LlamaColor {
    fn path(&self) -> &'static str {
        "llama.color"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Llama
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.llama_color != nearby.state.llama_color
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.llama_color, &dead.state.llama_color);
    }
}

#[derive(Debug, Default)]
pub struct ParrotVariant;

impl MobTrait for ParrotVariant {
    fn path(&self) -> &'static str {
        "parrot.variant"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Parrot
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.parrot_variant != nearby.state.parrot_variant
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.parrot_variant, &dead.state.parrot_variant);
    }
}

#[derive(Debug, Default)]
pub struct CatType;

impl MobTrait for CatType {
    fn path(&self) -> &'static str {
        "cat.type"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Cat
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.cat_type != nearby.state.cat_type
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.cat_type, &dead.state.cat_type);
    }
}

#[derive(Debug, Default)]
pub struct MooshroomVariant;

impl MobTrait for MooshroomVariant {
    fn path(&self) -> &'static str {
        "mooshroom.variant"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Mooshroom
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.mooshroom_variant != nearby.state.mooshroom_variant
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.mooshroom_variant, &dead.state.mooshroom_variant);
    }
}

#[derive(Debug, Default)]
pub struct FoxType;

impl MobTrait for FoxType {
    fn path(&self) -> &'static str {
        "fox.type"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Fox
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.fox_type != nearby.state.fox_type
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.fox_type, &dead.state.fox_type);
    }
}

/// Only registered on 1.19+ servers.
#[derive(Debug, Default)]
pub struct FrogVariant;

impl MobTrait for FrogVariant {
    fn path(&self) -> &'static str {
        "frog.variant"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Frog
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.frog_variant != nearby.state.frog_variant
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        copy_some(&mut spawned.state.frog_variant, &dead.state.frog_variant);
    }
}

#[derive(Debug, Default)]
pub struct BeeNectar;

impl MobTrait for BeeNectar {
    fn path(&self) -> &'static str {
        "bee.nectar"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Bee
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.has_nectar != nearby.state.has_nectar
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.has_nectar = dead.state.has_nectar;
    }
}

#[derive(Debug, Default)]
pub struct BeeStung;

impl MobTrait for BeeStung {
    fn path(&self) -> &'static str {
        "bee.stung"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Bee
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.has_stung != nearby.state.has_stung
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.has_stung = dead.state.has_stung;
    }
}

/// Egg state is only exposed by the Paper API.
#[derive(Debug, Default)]
pub struct TurtleHasEgg;

impl MobTrait for TurtleHasEgg {
    fn path(&self) -> &'static str {
        "turtle.egg"
    }

    fn subject(&self) -> EntityKind {
        EntityKind::Turtle
    }

    fn check(&self, first: &Mob, nearby: &Mob) -> bool {
        first.state.has_egg != nearby.state.has_egg
    }

    fn apply(&self, spawned: &mut Mob, dead: &Mob) {
        spawned.state.has_egg = dead.state.has_egg;
    }
}

//! The candidate table a registry is built from.

use crate::builtin::*;
use crate::error::TraitError;
use crate::rule::MobTrait;
use mobstack_common::{Environment, GameVersion};
use std::any::TypeId;

/// Environment capability a candidate needs before it is even constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Server exposes the Paper API.
    Paper,
    /// Server runs at least this game version.
    MinVersion(GameVersion),
}

impl Guard {
    pub fn holds(&self, env: &Environment) -> bool {
        match self {
            Self::Paper => env.is_paper(),
            Self::MinVersion(version) => env.is_version_at_least(*version),
        }
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paper => f.write_str("paper"),
            Self::MinVersion(version) => write!(f, ">= {version}"),
        }
    }
}

pub type Constructor = fn() -> Result<Box<dyn MobTrait>, TraitError>;

/// One entry of the catalog: how to build a rule and when it may be built.
#[derive(Debug, Clone)]
pub struct Candidate {
    name: &'static str,
    type_id: TypeId,
    guards: Vec<Guard>,
    construct: Constructor,
}

fn construct_default<T: MobTrait + Default + 'static>() -> Result<Box<dyn MobTrait>, TraitError> {
    Ok(Box::new(T::default()))
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl Candidate {
    /// Candidate for a rule with an infallible default constructor.
    pub fn of<T: MobTrait + Default + 'static>() -> Self {
        Self::with::<T>(construct_default::<T>)
    }

    /// Candidate for a rule built by a custom, possibly failing constructor.
    pub fn with<T: MobTrait + 'static>(construct: Constructor) -> Self {
        Self {
            name: short_type_name::<T>(),
            type_id: TypeId::of::<T>(),
            guards: Vec::new(),
            construct,
        }
    }

    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    /// First guard that does not hold, if any.
    pub fn failed_guard(&self, env_ok: impl Fn(&Guard) -> bool) -> Option<Guard> {
        self.guards.iter().copied().find(|g| !env_ok(g))
    }

    pub fn construct(&self) -> Result<Box<dyn MobTrait>, TraitError> {
        (self.construct)()
    }
}

/// Every built-in rule, in registration order.
pub fn catalog() -> Vec<Candidate> {
    vec![
        Candidate::of::<SheepColor>(),
        Candidate::of::<SheepShear>(),
        Candidate::of::<HorseColor>(),
        Candidate::of::<SlimeSize>(),
        Candidate::of::<LlamaColor>(),
        Candidate::of::<ParrotVariant>(),
        Candidate::of::<CatType>(),
        Candidate::of::<MooshroomVariant>(),
        Candidate::of::<FoxType>(),
        Candidate::of::<Age>(),
        Candidate::of::<BreedMode>(),
        Candidate::of::<LoveMode>(),
        Candidate::of::<DrownedItem>(),
        Candidate::of::<ZombieBaby>(),
        Candidate::of::<BeeNectar>(),
        Candidate::of::<BeeStung>(),
        Candidate::of::<Leash>(),
        Candidate::of::<Potion>(),
        Candidate::of::<VillagerProfession>(),
        Candidate::of::<TurtleHasEgg>().guarded(Guard::Paper),
        Candidate::of::<ZoglinBaby>(),
        Candidate::of::<PiglinBaby>(),
        Candidate::of::<FrogVariant>().guarded(Guard::MinVersion(GameVersion::V1_19)),
        Candidate::of::<AllayOwner>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::is_valid_path;
    use mobstack_common::ServerFlavor;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_is_well_formed() {
        let candidates = catalog();
        assert_eq!(candidates.len(), 24);

        let mut types = HashSet::new();
        let mut paths = HashSet::new();
        for candidate in &candidates {
            assert!(types.insert(candidate.type_id()), "{}", candidate.name());
            let rule = candidate.construct().unwrap();
            assert!(is_valid_path(rule.path()), "{}", rule.path());
            assert!(paths.insert(rule.path()), "{}", rule.path());
        }
    }

    #[test]
    fn candidate_name_is_short() {
        assert_eq!(Candidate::of::<SheepColor>().name(), "SheepColor");
    }

    #[test]
    fn only_turtle_and_frog_are_guarded() {
        let guarded: Vec<&str> = catalog()
            .iter()
            .filter(|c| !c.guards().is_empty())
            .map(|c| c.name())
            .collect();
        assert_eq!(guarded, ["TurtleHasEgg", "FrogVariant"]);
    }

    #[test]
    fn guards_evaluate_against_environment() {
        let old_spigot = Environment::new(ServerFlavor::Spigot, GameVersion::new(1, 18, 2));
        let new_paper = Environment::new(ServerFlavor::Paper, GameVersion::new(1, 20, 1));

        assert!(!Guard::Paper.holds(&old_spigot));
        assert!(Guard::Paper.holds(&new_paper));
        assert!(!Guard::MinVersion(GameVersion::V1_19).holds(&old_spigot));
        assert!(Guard::MinVersion(GameVersion::V1_19).holds(&new_paper));
    }

    #[test]
    fn failed_guard_reports_first_failure() {
        let candidate = Candidate::of::<TurtleHasEgg>()
            .guarded(Guard::Paper)
            .guarded(Guard::MinVersion(GameVersion::V1_19));
        assert_eq!(candidate.failed_guard(|_| true), None);
        assert_eq!(candidate.failed_guard(|_| false), Some(Guard::Paper));
        assert_eq!(
            candidate.failed_guard(|g| *g == Guard::Paper),
            Some(Guard::MinVersion(GameVersion::V1_19))
        );
    }
}

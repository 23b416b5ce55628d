use anyhow::Context;
use clap::{Parser, Subcommand};
use mobstack_common::{Environment, GameVersion, ServerFlavor};
use mobstack_kernel::{Mob, StackEntity};
use mobstack_traits::{Candidate, TraitRegistry, TraitSettings, catalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mobstack-cli", about = "Inspect and exercise mob stacking traits")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Trait settings file (YAML). Every trait is enabled without one.
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Server flavor: spigot, paper, purpur or folia
    #[arg(long, global = true, default_value = "spigot")]
    flavor: ServerFlavor,

    /// Game version, e.g. 1.20.4
    #[arg(long = "game-version", global = true, default_value = "1.20.4")]
    game_version: GameVersion,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// List every candidate trait and whether it is active
    Catalog,
    /// Decide whether two mobs may stack
    Check {
        /// JSON file holding `{ "first": Mob, "nearby": Mob }`
        pair: PathBuf,
    },
    /// Copy traits from a dead mob onto its replacement
    Transfer {
        /// JSON file holding `{ "spawned": Mob, "dead": Mob }`
        pair: PathBuf,
    },
}

#[derive(Deserialize)]
struct CheckPair {
    first: Mob,
    nearby: Mob,
}

#[derive(Deserialize)]
struct TransferPair {
    spawned: Mob,
    dead: Mob,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let env = Environment::new(cli.flavor, cli.game_version);
    tracing::debug!(flavor = ?env.flavor, version = %env.version, "server environment");
    let settings = match &cli.settings {
        Some(path) => TraitSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => TraitSettings::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("mobstack-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", mobstack_common::crate_info());
            println!("kernel: {}", mobstack_kernel::crate_info());
            println!("traits: {}", mobstack_traits::crate_info());
        }
        Commands::Catalog => {
            let registry = build_registry(&settings, &env)?;
            println!("Environment: {:?} {}", env.flavor, env.version);
            for line in catalog_lines(catalog(), &registry, &env)? {
                println!("{line}");
            }
            println!("{} of {} traits active", registry.len(), catalog().len());
        }
        Commands::Check { pair } => {
            let registry = build_registry(&settings, &env)?;
            let pair: CheckPair = read_json(&pair)?;
            let first = StackEntity::new(pair.first);
            let nearby = StackEntity::new(pair.nearby);
            match registry.first_mismatch(&first, &nearby) {
                Some(path) => println!("Cannot stack: {path} differs"),
                None => println!("Can stack"),
            }
        }
        Commands::Transfer { pair } => {
            let registry = build_registry(&settings, &env)?;
            let pair: TransferPair = read_json(&pair)?;
            let mut spawned = StackEntity::new(pair.spawned);
            let dead = StackEntity::new(pair.dead);
            registry.apply_traits(&mut spawned, &dead);
            println!("{}", serde_json::to_string_pretty(spawned.mob())?);
        }
    }

    Ok(())
}

fn build_registry(settings: &TraitSettings, env: &Environment) -> anyhow::Result<TraitRegistry> {
    TraitRegistry::from_settings(settings, env).context("building trait registry")
}

fn catalog_lines(
    candidates: Vec<Candidate>,
    registry: &TraitRegistry,
    env: &Environment,
) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for candidate in candidates {
        // Guarded-out rules may not even be constructible on this server.
        if let Some(guard) = candidate.failed_guard(|g| g.holds(env)) {
            lines.push(format!(
                "  {:<20} {:<10} inactive (needs {guard})",
                candidate.name(),
                "-"
            ));
            continue;
        }
        let rule = candidate.construct()?;
        let status = if registry.contains(rule.path()) {
            "active"
        } else {
            "disabled"
        };
        lines.push(format!("  {:<20} {:<10} {status}", rule.path(), rule.subject()));
    }
    Ok(lines)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobstack_traits::builtin::{SheepColor, TurtleHasEgg};
    use mobstack_traits::{Guard, TraitError};
    use std::io::Write;

    #[test]
    fn cli_parses_environment_flags() {
        let cli = Cli::try_parse_from([
            "mobstack-cli",
            "--flavor",
            "paper",
            "--game-version",
            "1.18.2",
            "catalog",
        ])
        .unwrap();
        assert_eq!(cli.flavor, ServerFlavor::Paper);
        assert_eq!(cli.game_version, GameVersion::new(1, 18, 2));
        assert!(matches!(cli.command, Commands::Catalog));
    }

    #[test]
    fn catalog_lines_report_guards() {
        let env = Environment::new(ServerFlavor::Spigot, GameVersion::new(1, 18, 2));
        let registry = build_registry(&TraitSettings::default(), &env).unwrap();
        let lines = catalog_lines(catalog(), &registry, &env).unwrap();
        assert_eq!(lines.len(), catalog().len());
        assert!(lines.iter().any(|l| l.contains("TurtleHasEgg") && l.contains("needs paper")));
        assert!(lines.iter().any(|l| l.contains("FrogVariant") && l.contains("needs >= 1.19.0")));
        assert!(lines.iter().any(|l| l.contains("sheep.color") && l.contains("active")));
    }

    #[test]
    fn catalog_lines_skip_construction_of_guarded_out_rules() {
        let env = Environment::new(ServerFlavor::Spigot, GameVersion::new(1, 20, 4));
        let candidates = vec![
            Candidate::of::<SheepColor>(),
            Candidate::with::<TurtleHasEgg>(|| {
                Err(TraitError::construction("TurtleHasEgg", "paper api missing"))
            })
            .guarded(Guard::Paper),
        ];
        let registry = build_registry(&TraitSettings::default(), &env).unwrap();
        let lines = catalog_lines(candidates, &registry, &env).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("sheep.color") && lines[0].contains("active"));
        assert!(lines[1].contains("TurtleHasEgg") && lines[1].contains("needs paper"));
    }

    #[test]
    fn read_check_pair() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{ "first": {{ "kind": "sheep", "state": {{ "wool_color": "red" }} }},
                 "nearby": {{ "kind": "sheep", "state": {{ "wool_color": "blue" }} }} }}"#
        )
        .unwrap();
        let pair: CheckPair = read_json(tmp.path()).unwrap();
        let registry = build_registry(&TraitSettings::default(), &Environment::default()).unwrap();
        assert_eq!(
            registry.first_mismatch(&pair.first, &pair.nearby),
            Some("sheep.color")
        );
    }
}

use std::hint::black_box;
use std::time::Instant;

use mobstack_common::{DyeColor, EntityKind};
use mobstack_kernel::{Mob, StackEntity};
use mobstack_traits::{TraitRegistry, catalog};

fn full_registry() -> TraitRegistry {
    match TraitRegistry::build(catalog(), |_| true, |_| true) {
        Ok(registry) => registry,
        Err(err) => panic!("built-in catalog failed to build: {err}"),
    }
}

fn sheep(color: DyeColor) -> StackEntity {
    let mut mob = Mob::new(EntityKind::Sheep);
    mob.state.wool_color = Some(color);
    StackEntity::new(mob)
}

fn bench_build(iterations: usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(full_registry());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  build ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_check(label: &str, first: &StackEntity, nearby: &StackEntity, iterations: usize) {
    let registry = full_registry();
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(registry.check_traits(black_box(first), black_box(nearby)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  check {label} ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_apply(iterations: usize) {
    let registry = full_registry();
    let dead = sheep(DyeColor::Blue);
    let mut spawned = sheep(DyeColor::White);
    let start = Instant::now();
    for _ in 0..iterations {
        registry.apply_traits(black_box(&mut spawned), black_box(&dead));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  apply sheep ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Trait Dispatch Benchmarks ===\n");

    println!("Registry build:");
    bench_build(10000);

    println!("\nCompatibility check:");
    bench_check("matching sheep", &sheep(DyeColor::Red), &sheep(DyeColor::Red), 100000);
    bench_check("mismatched sheep", &sheep(DyeColor::Red), &sheep(DyeColor::Blue), 100000);
    let creeper = StackEntity::new(Mob::new(EntityKind::Creeper));
    bench_check("creeper", &creeper, &creeper.clone(), 100000);

    println!("\nState transfer:");
    bench_apply(100000);

    println!("\n=== Done ===");
}

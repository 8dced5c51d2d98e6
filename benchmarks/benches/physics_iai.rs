//! Physics benchmarks (iai-callgrind - instruction counts).
//!
//! Prerequisites:
//!   cargo install iai-callgrind-runner
//!   sudo dnf install valgrind   # Fedora/WSL2
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai -- resolver

use std::hint::black_box;

use chaos_bench::*;
use chaos_physics::physics::island::build_islands;
use chaos_physics::physics::resolver::ContactResolver;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

fn resolve(n: usize, setup: fn(usize) -> (hecs::World, Vec<chaos_physics::Contact>)) {
    let (mut world, mut contacts) = setup(black_box(n));
    let mut resolver = ContactResolver::new(n as u32 * 4, 0.01, 0.01);
    resolver.resolve(&mut contacts, &mut world, DT);
    black_box(resolver.velocity_iterations_used());
}

#[library_benchmark]
fn resolver_stack_16() {
    resolve(16, setup_stack);
}

#[library_benchmark]
fn resolver_stack_64() {
    resolve(64, setup_stack);
}

#[library_benchmark]
fn resolver_pile_128() {
    resolve(128, setup_pile);
}

library_benchmark_group!(
    name = resolver_group;
    benchmarks =
        resolver_stack_16,
        resolver_stack_64,
        resolver_pile_128
);

// ---------------------------------------------------------------------------
// Islands
// ---------------------------------------------------------------------------

#[library_benchmark]
fn islands_pile_512() {
    let (_, contacts) = setup_pile(black_box(512));
    black_box(build_islands(&contacts));
}

library_benchmark_group!(
    name = island_group;
    benchmarks = islands_pile_512
);

// ---------------------------------------------------------------------------
// World step
// ---------------------------------------------------------------------------

#[library_benchmark]
fn world_step_100() {
    let (mut world, mut physics) = setup_scene(black_box(100));
    run_scene(&mut world, &mut physics, 1);
    black_box(physics.contacts().len());
}

library_benchmark_group!(
    name = world_group;
    benchmarks = world_step_100
);

main!(library_benchmark_groups = resolver_group, island_group, world_group);

//! Shared setup helpers for chaos-physics benchmarks.
//!
//! ## Running
//!
//! Resolver and world step (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! iai-callgrind (instruction counts, requires valgrind):
//!   cargo install iai-callgrind-runner
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- resolver
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- islands

use chaos_physics::ecs::components::physics::{block_inertia_tensor, RigidBody};
use chaos_physics::physics::contact::{Contact, ContactInfo};
use chaos_physics::physics::force::Gravity;
use chaos_physics::physics::generator::GroundPlane;
use chaos_physics::physics::{PhysicsConfig, PhysicsWorld};
use glam::Vec3;

pub const DT: f32 = 1.0 / 60.0;

/// Unit box resting at `position`, falling at `speed`.
fn unit_box(position: Vec3, speed: f32) -> RigidBody {
    RigidBody::new_dynamic(1.0)
        .with_inertia_tensor(block_inertia_tensor(Vec3::splat(0.5), 1.0))
        .with_position(position)
        .with_velocity(Vec3::new(0.0, -speed, 0.0))
}

fn contact(point: Vec3, penetration: f32) -> Contact {
    Contact::new(ContactInfo {
        normal: Vec3::Y,
        penetration,
        point,
    })
}

// ---------------------------------------------------------------------------
// Resolver setup
// ---------------------------------------------------------------------------

/// Column of `n` boxes on the ground, each slightly sunk into the one below.
///
/// Every contact shares a body with its neighbours, so the whole batch is
/// one island.
pub fn setup_stack(n: usize) -> (hecs::World, Vec<Contact>) {
    let mut world = hecs::World::new();
    let mut bodies = Vec::with_capacity(n);
    let mut contacts = Vec::with_capacity(n);

    for i in 0..n {
        let position = Vec3::new(0.0, 0.49 + i as f32 * 0.99, 0.0);
        bodies.push(world.spawn((unit_box(position, 1.0),)));
    }

    for i in 0..n {
        let below = if i == 0 { None } else { Some(bodies[i - 1]) };
        let point = Vec3::new(0.0, i as f32 * 0.99 - 0.005, 0.0);
        contacts.push(contact(point, 0.01).with_body_data(Some(bodies[i]), below, 0.4, 0.1));
    }

    (world, contacts)
}

/// `n` boxes side by side, each touching only the ground.
pub fn setup_pile(n: usize) -> (hecs::World, Vec<Contact>) {
    let mut world = hecs::World::new();
    let cols = (n as f32).sqrt().ceil() as usize;
    let mut contacts = Vec::with_capacity(n);

    for i in 0..n {
        let x = (i % cols) as f32 * 1.5;
        let z = (i / cols) as f32 * 1.5;
        let depth = 0.01 + (i % 7) as f32 * 0.01;
        let body = world.spawn((unit_box(Vec3::new(x, 0.5 - depth, z), 2.0),));
        contacts.push(
            contact(Vec3::new(x, -depth, z), depth).with_body_data(Some(body), None, 0.4, 0.2),
        );
    }

    (world, contacts)
}

// ---------------------------------------------------------------------------
// World scenes
// ---------------------------------------------------------------------------

/// Ground plane + `n` spheres dropped from staggered heights, with gravity.
pub fn setup_scene(n: usize) -> (hecs::World, PhysicsWorld) {
    // Default configuration always validates.
    match setup_scene_with(n, PhysicsConfig::default()) {
        Ok(scene) => scene,
        Err(err) => panic!("default scene setup failed: {err}"),
    }
}

/// [`setup_scene`] with a custom configuration.
pub fn setup_scene_with(
    n: usize,
    config: PhysicsConfig,
) -> anyhow::Result<(hecs::World, PhysicsWorld)> {
    config.resolver.validate()?;

    let mut world = hecs::World::new();
    let mut physics = PhysicsWorld::new(PhysicsConfig {
        max_contacts: n.max(1),
        ..config
    });

    let gravity = physics
        .registry_mut()
        .insert(Gravity::new(Vec3::new(0.0, -9.81, 0.0)))?;
    let mut ground = GroundPlane::horizontal(0.0).with_material(0.5, 0.3);

    let cols = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f32 * 2.0 - (cols as f32);
        let z = (i / cols) as f32 * 2.0 - (cols as f32);
        let y = 1.0 + (i % 5) as f32 * 1.5;
        let body = world.spawn((RigidBody::new_dynamic(1.0).with_position(Vec3::new(x, y, z)),));

        physics.registry_mut().add(body, gravity)?;
        ground.add_body(body, 0.5);
    }
    physics.add_contact_generator(ground);

    Ok((world, physics))
}

/// Run `frames` fixed frames.
pub fn run_scene(world: &mut hecs::World, physics: &mut PhysicsWorld, frames: usize) {
    for _ in 0..frames {
        physics.step(world, f64::from(DT));
    }
}

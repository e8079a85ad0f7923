//! Shared integration-test scaffolding, mirroring the reference's `tests/common/mod.rs`:
//! a fixed seeded RNG alias plus a couple of scenario-builder helpers so individual test
//! files don't repeat arena/world boilerplate.

use rand::SeedableRng;
use swept_quad_sim::core::config::{ArenaShapeConfig, Config};
use swept_quad_sim::core::types::Number;
use swept_quad_sim::observer::NullObserver;
use swept_quad_sim::World;

/// Deterministic RNG used throughout the integration suite, exactly as the reference seeds
/// `SmallRng` in its own test harness.
pub type Rng = rand::rngs::SmallRng;

pub fn seeded_rng(seed: u64) -> Rng { Rng::seed_from_u64(seed) }

pub fn circle_config(cx: Number, cy: Number, radius: Number, disc_radius: Number) -> Config {
    Config {
        arena_shape: ArenaShapeConfig::Circle {
            center: (cx, cy),
            radius,
        },
        default_radius: disc_radius,
        max_placement_retries: 500,
        ..Config::default()
    }
}

pub fn rectangle_config(cx: Number, cy: Number, width: Number, height: Number, disc_radius: Number) -> Config {
    Config {
        arena_shape: ArenaShapeConfig::Rectangle {
            center: (cx, cy),
            width,
            height,
        },
        default_radius: disc_radius,
        max_placement_retries: 500,
        ..Config::default()
    }
}

/// A world over a fixed seed and a discarding observer, for scenarios that only care about
/// resulting geometry.
pub fn world_with_seed(config: Config, seed: u64) -> World<Rng> { World::new(config, seeded_rng(seed), Box::new(NullObserver)).expect("valid configuration") }

//! The top-level simulation handle (§5, §6): owns the disc table, the arena, the RNG, and
//! the injected observer, and wires the motion resolver and vision query to them. Grounded
//! in `zone.py`'s `Zone` (the original's closest analogue to a single owning container).

use std::collections::HashMap;

use crate::arena::Arena;
use crate::core::config::{Config, RadiusPolicy};
use crate::core::error::{ConfigError, SimError};
use crate::core::targets;
use crate::core::types::{IdToken, Number, Point2, Vector2};
use crate::motion;
use crate::observer::GeometryObserver;
use crate::particle::{Fov, Particle};
use crate::shared::rng::RandomSource;
use crate::vision::{self, Sighting};

/// Owns every disc and the arena they live in. Single-threaded, cooperative: every method
/// here is a complete tick or sub-tick operation (§5) — nothing suspends mid-mutation.
pub struct World<R: RandomSource> {
    config: Config,
    arena: Arena,
    particles: HashMap<IdToken, Particle>,
    next_id: IdToken,
    rng: R,
    observer: Box<dyn GeometryObserver>,
}

impl<R: RandomSource> World<R> {
    pub fn new(config: Config, rng: R, observer: Box<dyn GeometryObserver>) -> Result<Self, ConfigError> {
        config.validate()?;
        let max_radius = match config.radius_policy() {
            RadiusPolicy::Fixed(r) => r,
            RadiusPolicy::UniformRange(_, hi) => hi,
        };
        let arena = Arena::new(&config, max_radius)?;
        tracing::debug!(target: targets::WORLD, "world constructed");
        Ok(Self {
            config,
            arena,
            particles: HashMap::new(),
            next_id: 0,
            rng,
            observer,
        })
    }

    pub fn arena(&self) -> &Arena { &self.arena }
    pub fn particle(&self, id: IdToken) -> Option<&Particle> { self.particles.get(&id) }
    pub fn particles(&self) -> impl Iterator<Item = &Particle> { self.particles.values() }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    fn sample_radius(&mut self) -> Number {
        match self.config.radius_policy() {
            RadiusPolicy::Fixed(r) => r,
            RadiusPolicy::UniformRange(lo, hi) => self.rng.next_range(lo, hi),
        }
    }

    /// Inserts a single disc at an explicit position. `None` means I5 rejected it (strict
    /// overlap with `allow_overlap = false`); the world is left unchanged.
    pub fn add_particle_at(&mut self, center: Point2, radius: Number, allow_overlap: bool) -> Option<IdToken> {
        let id = self.next_id;
        let result = self.arena.index_mut().insert(id, center, radius, allow_overlap);
        if !result.is_accepted() {
            return None;
        }
        self.next_id += 1;
        for (bounds, depth) in result.new_quadrants {
            self.observer.quadrant_drawn(bounds, depth);
        }
        self.particles.insert(id, Particle::new(id, center, radius));
        self.observer.disc_drawn(id, center, radius);
        Some(id)
    }

    /// §4.5: draws `n` random interior points (per the configured radius policy), retrying
    /// each up to `max_placement_retries` times. A disc that never lands cleanly is skipped
    /// and reported through `placement_exhausted` — no error is raised.
    pub fn add_particles(&mut self, n: usize, allow_overlap: bool) -> Vec<IdToken> {
        let max_iters = self.config.max_placement_retries as u64;
        let mut placed = Vec::with_capacity(n);
        for _ in 0..n {
            let radius = self.sample_radius();
            let mut attempted = 0u64;
            let mut landed = false;
            while attempted < max_iters {
                attempted += 1;
                let point = self.arena.random_interior_point(radius, &mut self.rng);
                if let Some(id) = self.add_particle_at(point, radius, allow_overlap) {
                    placed.push(id);
                    landed = true;
                    break;
                }
            }
            if !landed {
                tracing::warn!(target: targets::WORLD, attempted, max_iters, "placement exhausted, skipping disc");
                self.observer.placement_exhausted(attempted, max_iters);
            }
        }
        placed
    }

    pub fn remove_particle(&mut self, id: IdToken) {
        if self.particles.remove(&id).is_some() {
            self.arena.index_mut().remove(id);
            self.observer.disc_removed(id);
        }
    }

    /// Runs one tick of the motion resolver (§4.3) for `id`.
    pub fn advance(
        &mut self,
        id: IdToken,
        magnitude: Number,
        direction: Option<Vector2>,
        angle_range_degrees: Option<(Number, Number)>,
    ) -> Result<(), SimError> {
        motion::advance(
            &mut self.arena,
            &mut self.particles,
            id,
            magnitude,
            direction,
            angle_range_degrees,
            &mut self.rng,
            self.observer.as_mut(),
        )
    }

    /// §4.4: every particle visible from `observer_id`'s field of view, descending by
    /// surface-to-surface distance.
    pub fn visible_from(&self, observer_id: IdToken) -> Vec<Sighting> { vision::visible_from(&self.arena, &self.particles, observer_id) }

    pub fn rotate(&mut self, id: IdToken, delta_degrees: Number) {
        if let Some(particle) = self.particles.get_mut(&id) {
            particle.rotate(delta_degrees);
        }
    }

    pub fn set_fov(&mut self, id: IdToken, fov: Option<Fov>) {
        if let Some(particle) = self.particles.get_mut(&id) {
            particle.set_fov(fov);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ArenaShapeConfig;
    use crate::observer::NullObserver;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn test_world(config: Config) -> World<SmallRng> {
        World::new(config, SmallRng::seed_from_u64(42), Box::new(NullObserver)).unwrap()
    }

    #[test]
    fn s5_non_overlapping_insertion_holds_for_fifty_discs() {
        let config = Config {
            arena_shape: ArenaShapeConfig::Circle {
                center: (500.0, 500.0),
                radius: 200.0,
            },
            default_radius: 10.0,
            max_placement_retries: 500,
            ..Config::default()
        };
        let mut world = test_world(config);
        let placed = world.add_particles(50, false);
        assert_eq!(placed.len(), 50);

        let discs: Vec<&Particle> = world.particles().collect();
        for i in 0..discs.len() {
            assert!(world.arena().confines(discs[i].center(), discs[i].radius()));
            for j in (i + 1)..discs.len() {
                assert!(!discs[i].overlaps(discs[j], 1e-9));
            }
        }
    }

    #[test]
    fn remove_particle_clears_index_membership() {
        let config = Config::default();
        let mut world = test_world(config);
        let id = world.add_particle_at(Point2::new(0.0, 0.0), 10.0, true).unwrap();
        assert!(world.arena().index().contains(id));
        world.remove_particle(id);
        assert!(!world.arena().index().contains(id));
        assert!(world.particle(id).is_none());
    }

    #[test]
    fn rejected_insert_does_not_advance_next_id() {
        let config = Config::default();
        let mut world = test_world(config);
        let first = world.add_particle_at(Point2::new(0.0, 0.0), 10.0, false).unwrap();
        assert!(world.add_particle_at(Point2::new(5.0, 0.0), 10.0, false).is_none());
        let retry = world.add_particle_at(Point2::new(100.0, 0.0), 10.0, false).unwrap();
        assert_eq!(retry, first + 1);
    }
}

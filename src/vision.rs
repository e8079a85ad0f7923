//! The field-of-view query (§4.4): an exact filter over the quadtree's sector-leaf
//! candidates, grounded in `particle.py`'s `field_of_view` consumers.

use std::collections::HashMap;

use crate::arena::Arena;
use crate::core::types::{IdToken, Number, Point2};
use crate::geometry;
use crate::particle::Particle;

/// A particle found within another's field of view, paired with its surface-to-surface
/// distance from the observer for the caller's sort.
#[derive(Copy, Clone, Debug)]
pub struct Sighting {
    pub id: IdToken,
    pub center: Point2,
    pub distance: Number,
}

/// Every particle visible from `observer_id`'s field of view (§4.4), sorted descending by
/// surface-to-surface distance. Returns an empty vector if the observer has no [`Fov`] set
/// or doesn't exist.
///
/// [`Fov`]: crate::particle::Fov
pub fn visible_from(arena: &Arena, particles: &HashMap<IdToken, Particle>, observer_id: IdToken) -> Vec<Sighting> {
    let Some(observer) = particles.get(&observer_id) else {
        return Vec::new();
    };
    let Some(fov) = observer.fov() else {
        return Vec::new();
    };

    let facing = observer.facing_vector();
    let half_aperture_rad = (fov.aperture / 2.0).to_radians();
    let eps = arena.epsilon_rel();

    let candidate_ids = arena.index().query_sector(observer.center(), facing, fov.range, fov.aperture);

    let mut sightings: Vec<Sighting> = candidate_ids
        .into_iter()
        .filter(|&id| id != observer_id)
        .filter_map(|id| particles.get(&id).map(|other| (id, other)))
        .filter_map(|(id, other)| is_visible(observer.center(), facing, half_aperture_rad, fov.range, other, eps).map(|distance| Sighting {
            id,
            center: other.center(),
            distance,
        }))
        .collect();

    sightings.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    sightings
}

/// Exact visibility test (§4.4): the angle from `facing` to the target, minus the half-angle
/// the target's own radius subtends at `center`, must fall within the half-aperture; and the
/// target's near edge must fall within range. Returns the observer's surface-to-surface
/// distance to the target when visible.
fn is_visible(center: Point2, facing: crate::core::types::Vector2, half_aperture_rad: Number, range: Number, target: &Particle, eps: Number) -> Option<Number> {
    let v = target.center() - center;
    let len_sq = v.length_squared();
    if len_sq <= Number::EPSILON {
        return Some(-target.radius());
    }
    let len = len_sq.sqrt();

    let angle = geometry::angle_between(facing, v);
    let subtended = ((2.0 * len_sq - target.radius() * target.radius()) / (2.0 * len_sq)).clamp(-1.0, 1.0).acos();

    if angle - subtended > half_aperture_rad + eps {
        return None;
    }
    if len > range + target.radius() + eps {
        return None;
    }

    Some(len - target.radius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ArenaShapeConfig, Config};
    use crate::particle::Fov;

    #[test]
    fn s6_sees_only_targets_within_cone_and_range() {
        let config = Config {
            arena_shape: ArenaShapeConfig::Circle {
                center: (0.0, 0.0),
                radius: 300.0,
            },
            ..Config::default()
        };
        let mut arena = Arena::new(&config, config.default_radius).unwrap();
        let mut particles = HashMap::new();

        let observer = Particle::new(0, Point2::new(0.0, 0.0), 5.0).with_fov(Fov::new(100.0, 90.0).unwrap());
        arena.index_mut().insert(0, observer.center(), observer.radius(), true);
        particles.insert(0, observer);

        let targets = [
            (1u64, Point2::new(50.0, 0.0)),
            (2, Point2::new(30.0, 40.0)),
            (3, Point2::new(-50.0, 0.0)),
            (4, Point2::new(120.0, 0.0)),
        ];
        for (id, center) in targets {
            arena.index_mut().insert(id, center, 10.0, true);
            particles.insert(id, Particle::new(id, center, 10.0));
        }

        let visible: Vec<IdToken> = visible_from(&arena, &particles, 0).into_iter().map(|s| s.id).collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.contains(&1));
        assert!(visible.contains(&2));
        assert!(!visible.contains(&3));
        assert!(!visible.contains(&4));
    }

    #[test]
    fn observer_without_fov_sees_nothing() {
        let config = Config::default();
        let mut arena = Arena::new(&config, config.default_radius).unwrap();
        let mut particles = HashMap::new();
        let observer = Particle::new(0, Point2::new(0.0, 0.0), 5.0);
        arena.index_mut().insert(0, observer.center(), observer.radius(), true);
        particles.insert(0, observer);
        particles.insert(1, Particle::new(1, Point2::new(5.0, 0.0), 1.0));
        assert!(visible_from(&arena, &particles, 0).is_empty());
    }
}

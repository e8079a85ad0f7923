//! The swept-circle motion resolver (§4.3), grounded in `particle.py`'s `move`/`_collide`
//! pair — first-hit-stop, not sliding or elastic response.

use std::collections::HashMap;

use crate::arena::Arena;
use crate::core::error::SimError;
use crate::core::targets;
use crate::core::types::{IdToken, Number, Point2, Vector2};
use crate::geometry::{self, Segment};
use crate::observer::GeometryObserver;
use crate::particle::Particle;
use crate::shared::rng::RandomSource;

/// A neighbor's geometry snapshotted at tick start, so later mutation of `particles` can't
/// perturb the obstacle sort mid-resolution.
struct Candidate {
    id: IdToken,
    center: Point2,
    radius: Number,
}

fn strictly_overlaps(center_a: Point2, radius_a: Number, center_b: Point2, radius_b: Number, eps: Number) -> bool {
    let d2 = (center_b - center_a).length_squared();
    let threshold = (radius_a + radius_b).powi(2);
    d2 <= threshold - eps
}

/// Runs one tick of the motion resolver for `id`: picks a direction, clips against the
/// arena boundary, resolves collisions against swept-corridor candidates, and commits the
/// result into `particles` and the arena's index (§4.3 steps 1-10).
#[allow(clippy::too_many_arguments)]
pub fn advance(
    arena: &mut Arena,
    particles: &mut HashMap<IdToken, Particle>,
    id: IdToken,
    magnitude: Number,
    direction: Option<Vector2>,
    angle_range_degrees: Option<(Number, Number)>,
    rng: &mut impl RandomSource,
    observer: &mut dyn GeometryObserver,
) -> Result<(), SimError> {
    let (p0, radius) = {
        let particle = particles.get(&id).ok_or(SimError::InvariantViolated {
            id: Some(id),
            detail: "advance called on an unknown particle".to_string(),
        })?;
        (particle.center(), particle.radius())
    };

    // Step 1: pick the direction.
    let mut delta = match direction {
        Some(dir) => geometry::resize_to(dir, magnitude),
        None => {
            let (tmin, tmax) = angle_range_degrees.unwrap_or((0.0, 360.0));
            let theta = rng.next_range(tmin, tmax).to_radians();
            Vector2::new(magnitude * theta.cos(), magnitude * theta.sin())
        }
    };
    let mut p1 = p0 + delta;

    // Step 3: boundary clip.
    if !arena.confines(p1, radius) {
        p1 = arena.clip_traversal(radius, p0, p1);
        delta = p1 - p0;
        if delta.length_squared() <= arena.epsilon_rel() {
            return Ok(());
        }
        if !arena.confines(p1, radius) {
            let detail = "clip_traversal did not restore arena confinement".to_string();
            observer.invariant_violated(Some(id), &detail);
            tracing::error!(target: targets::MOTION, id, "{detail}");
            return Err(SimError::InvariantViolated { id: Some(id), detail });
        }
    }

    let magnitude_actual = delta.length();
    let trajectory = Segment::new(p0, p1);
    let unit = geometry::resize_to(delta, 1.0);

    // Step 5: candidate gather (step 4's "restore to p0" is implicit — `particles` is never
    // mutated until the tick commits).
    let candidates: Vec<Candidate> = arena
        .index()
        .query_swept_corridor(p0, p1, radius)
        .into_iter()
        .filter(|&candidate_id| candidate_id != id)
        .filter_map(|candidate_id| {
            particles.get(&candidate_id).map(|other| Candidate {
                id: candidate_id,
                center: other.center(),
                radius: other.radius(),
            })
        })
        .collect();

    // Step 6: partition into obstacles and non-obstacles.
    let mut obstacles = Vec::new();
    let mut non_obstacles = Vec::new();
    for candidate in candidates {
        let to_candidate = candidate.center - p0;
        let angle = geometry::angle_between(delta, to_candidate);
        let combined = radius + candidate.radius;
        let perp_sq = trajectory.squared_distance_from_point(candidate.center);
        let along_sq = (to_candidate.length_squared() - perp_sq).max(0.0);
        let is_obstacle = angle < std::f64::consts::FRAC_PI_2
            && perp_sq < combined * combined
            && along_sq < (magnitude_actual + combined).powi(2);
        if is_obstacle {
            obstacles.push(candidate);
        } else {
            non_obstacles.push(candidate);
        }
    }

    // Step 7: sort both lists ascending by surface-to-surface distance from p0.
    let surface_distance = |candidate: &Candidate| (candidate.center - p0).length() - radius - candidate.radius;
    obstacles.sort_by(|a, b| surface_distance(a).total_cmp(&surface_distance(b)));
    non_obstacles.sort_by(|a, b| surface_distance(a).total_cmp(&surface_distance(b)));

    let eps = arena.epsilon_rel();

    // Step 8: stop at the first real obstacle. The first (nearest) obstacle is always
    // processed; later obstacles are skipped once `terminal` has been pulled back far enough
    // that they no longer strictly overlap it.
    let mut terminal = p1;
    for (i, candidate) in obstacles.iter().enumerate() {
        if i > 0 && !strictly_overlaps(terminal, radius, candidate.center, candidate.radius, eps) {
            continue;
        }
        let perp_sq = trajectory.squared_distance_from_point(candidate.center);
        let combined = radius + candidate.radius;
        let t_sq = combined * combined - perp_sq;
        if t_sq <= 0.0 {
            continue;
        }
        let proj = geometry::project_onto(candidate.center - p0, delta);
        let mut stop = p0 + proj - unit * t_sq.sqrt();
        if (stop - p0).length_squared() > magnitude_actual * magnitude_actual + eps {
            stop = p0 + unit * magnitude_actual;
        }
        terminal = stop;
    }

    // Step 9: non-obstacle veto.
    for candidate in &non_obstacles {
        if strictly_overlaps(terminal, radius, candidate.center, candidate.radius, eps) {
            tracing::debug!(target: targets::MOTION, id, blocker = candidate.id, "non-obstacle veto: reverting tick");
            terminal = p0;
            break;
        }
    }

    // Step 10: commit.
    let net_displacement = (terminal - p0).length_squared();
    if net_displacement > eps {
        arena.index_mut().remove(id);
        arena.index_mut().insert(id, terminal, radius, true);
        if let Some(particle) = particles.get_mut(&id) {
            particle.set_center(terminal);
        }
        observer.disc_moved(id, terminal);
    }

    Ok(())
}

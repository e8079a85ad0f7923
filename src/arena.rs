//! The arena: outer boundary plus the quadtree index it owns (§4.2), grounded in
//! `zone.py`'s `CircleZone`/`RectangleZone` (`random_circle_coord`, `confine_circle_coord`,
//! and the `Quadtree` each zone constructs over its own bounds).

use crate::core::config::Config;
use crate::core::error::ConfigError;
use crate::core::targets;
use crate::core::types::{Number, Point2, Vector2};
use crate::geometry::Segment;
use crate::quadtree::QuadtreeIndex;
use crate::shapes::Shape;
use crate::shared::rng::RandomSource;

/// The bounded region discs live in: a [`Shape`] boundary plus the [`QuadtreeIndex`] over
/// it (I6: the index root is always the shape's own AABB).
#[derive(Debug)]
pub struct Arena {
    shape: Shape,
    index: QuadtreeIndex,
    epsilon_rel: Number,
}

impl Arena {
    pub fn new(config: &Config, max_disc_radius: Number) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = config.arena_shape.to_shape();
        let max_depth = config.resolved_max_depth(max_disc_radius);
        let index = QuadtreeIndex::new(shape.aabb(), config.leaf_capacity, max_depth, config.epsilon_rel);
        tracing::debug!(target: targets::ARENA, ?shape, max_depth, "arena constructed");
        Ok(Self {
            shape,
            index,
            epsilon_rel: config.epsilon_rel,
        })
    }

    pub fn shape(&self) -> Shape { self.shape }
    pub fn epsilon_rel(&self) -> Number { self.epsilon_rel }
    pub fn index(&self) -> &QuadtreeIndex { &self.index }
    pub fn index_mut(&mut self) -> &mut QuadtreeIndex { &mut self.index }

    /// I4: whether a disc at `(center, radius)` lies entirely within the boundary.
    pub fn confines(&self, center: Point2, radius: Number) -> bool {
        self.shape.confines_circle(center, radius, self.epsilon_rel)
    }

    /// §4.2 `clip_traversal`: given a disc of `radius` that would end up outside the
    /// boundary traveling `from -> to`, the latest point along that line at which it
    /// remains (just) inside.
    pub fn clip_traversal(&self, radius: Number, from: Point2, to: Point2) -> Point2 {
        match self.shape {
            Shape::Circle { center, radius: arena_radius } => {
                circle_clip(from, to, center, (arena_radius - radius).max(0.0))
            }
            Shape::Rectangle { center, width, height } => {
                rectangle_clip(from, to, radius, center, width, height, self.epsilon_rel)
            }
        }
    }

    /// §4.2 `random_interior_point`: a point such that a disc of `radius` placed there
    /// satisfies I4. Not uniform over the disc's area for a circular arena (documented
    /// faithfully from the reference — callers wanting true area-uniformity should
    /// reject-sample).
    pub fn random_interior_point(&self, radius: Number, rng: &mut impl RandomSource) -> Point2 {
        match self.shape {
            Shape::Circle { center, radius: arena_radius } => {
                let inner = (arena_radius - radius).max(0.0);
                let x = rng.next_range(center.x - inner, center.x + inner);
                let chord_half = (inner * inner - (x - center.x).powi(2)).max(0.0).sqrt();
                let y = rng.next_range(center.y - chord_half, center.y + chord_half);
                Point2::new(x, y)
            }
            Shape::Rectangle { center, width, height } => {
                let hx = (width / 2.0 - radius).max(0.0);
                let hy = (height / 2.0 - radius).max(0.0);
                let x = rng.next_range(center.x - hx, center.x + hx);
                let y = rng.next_range(center.y - hy, center.y + hy);
                Point2::new(x, y)
            }
        }
    }
}

/// Intersection of the line through `from, to` with the circle `(center, inner_radius)`,
/// choosing whichever of the (up to two) roots lies closer to `to`. Falls back to `from`
/// for a degenerate (zero-length) segment or a line that misses the circle entirely — both
/// only reachable if the caller already violated the precondition that `to` is outside
/// `inner_radius` and `from` is inside it.
fn circle_clip(from: Point2, to: Point2, center: Point2, inner_radius: Number) -> Point2 {
    let d = to - from;
    let f = from - center;
    let a = Vector2::dot(d, d);
    if a <= Number::EPSILON {
        return from;
    }
    let b = 2.0 * Vector2::dot(f, d);
    let c = Vector2::dot(f, f) - inner_radius * inner_radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return from;
    }
    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    let p1 = from + d * t1;
    let p2 = from + d * t2;
    if (p1 - to).length_squared() <= (p2 - to).length_squared() {
        p1
    } else {
        p2
    }
}

/// §4.2's rectangular clip: finds which border(s) the disc's terminal position violates,
/// and resolves the one closest to the disc's *current* (pre-tick) center first — the
/// "nearest violated border first" policy that settles corner cases in one step without
/// the original source's dead-code branching (§9's open question on `confine_circle_coord`).
fn rectangle_clip(from: Point2, to: Point2, radius: Number, center: Point2, width: Number, height: Number, eps: Number) -> Point2 {
    let west = center.x - width / 2.0;
    let east = center.x + width / 2.0;
    let north = center.y - height / 2.0;
    let south = center.y + height / 2.0;

    let seg = Segment::new(from, to);
    let mut candidates: Vec<(Number, Point2)> = Vec::new();

    if to.x - radius < west - eps {
        let x = west + radius;
        candidates.push(((from.x - west).abs(), Point2::new(x, seg.y_at_x(x))));
    }
    if to.x + radius > east + eps {
        let x = east - radius;
        candidates.push(((from.x - east).abs(), Point2::new(x, seg.y_at_x(x))));
    }
    if to.y - radius < north - eps {
        let y = north + radius;
        candidates.push(((from.y - north).abs(), Point2::new(seg.x_at_y(y), y)));
    }
    if to.y + radius > south + eps {
        let y = south - radius;
        candidates.push(((from.y - south).abs(), Point2::new(seg.x_at_y(y), y)));
    }

    candidates
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| p)
        .unwrap_or(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ArenaShapeConfig;
    use approx::assert_relative_eq;

    fn circle_arena(cx: Number, cy: Number, r: Number) -> Arena {
        let config = Config {
            arena_shape: ArenaShapeConfig::Circle {
                center: (cx, cy),
                radius: r,
            },
            ..Config::default()
        };
        Arena::new(&config, config.default_radius).unwrap()
    }

    fn rect_arena(cx: Number, cy: Number, w: Number, h: Number) -> Arena {
        let config = Config {
            arena_shape: ArenaShapeConfig::Rectangle {
                center: (cx, cy),
                width: w,
                height: h,
            },
            ..Config::default()
        };
        Arena::new(&config, config.default_radius).unwrap()
    }

    #[test]
    fn s2_circle_clip_lands_tangent_to_inner_circle() {
        // Circular arena R=100 at (0,0), disc r=10 at (85,0), magnitude=20, direction=(1,0).
        let arena = circle_arena(0.0, 0.0, 100.0);
        let from = Point2::new(85.0, 0.0);
        let to = Point2::new(105.0, 0.0);
        let clipped = arena.clip_traversal(10.0, from, to);
        assert_relative_eq!(clipped.x, 90.0, epsilon = 1e-9);
        assert_relative_eq!(clipped.y, 0.0, epsilon = 1e-9);
        assert!(arena.confines(clipped, 10.0));
    }

    #[test]
    fn rectangle_clip_stops_at_east_border() {
        let arena = rect_arena(0.0, 0.0, 400.0, 400.0);
        let from = Point2::new(150.0, 0.0);
        let to = Point2::new(250.0, 0.0);
        let clipped = arena.clip_traversal(10.0, from, to);
        assert_relative_eq!(clipped.x, 190.0, epsilon = 1e-9);
        assert_relative_eq!(clipped.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn rectangle_clip_resolves_corner_via_nearest_border() {
        let arena = rect_arena(0.0, 0.0, 200.0, 200.0);
        // Heading straight into the NE corner; the current center is closer to the east
        // border than the north border, so east resolves first.
        let from = Point2::new(80.0, 50.0);
        let to = Point2::new(150.0, 120.0);
        let clipped = arena.clip_traversal(10.0, from, to);
        assert!(arena.confines(clipped, 10.0));
    }

    #[test]
    fn random_interior_point_always_confines() {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        let arena = circle_arena(500.0, 500.0, 200.0);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = arena.random_interior_point(10.0, &mut rng);
            assert!(arena.confines(p, 10.0));
        }
    }
}

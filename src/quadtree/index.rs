use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

use strum_macros::Display;

use crate::core::targets;
use crate::core::types::{IdToken, Number, Point2, Vector2};
use crate::geometry;
use crate::quadtree::quadrant::Quadrant;
use crate::shared::aabb::Aabb;

/// Whether an [`QuadtreeIndex::insert`] committed or was turned away by I5 (`allow_overlap
/// = false` and an existing member strictly overlaps the candidate).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum InsertOutcome {
    Accepted,
    Rejected,
}

/// The result of an insertion attempt: the outcome, plus the bounds/depth of any quadrants
/// that were created by subdivision along the way (for `quadrant_drawn` events).
#[derive(Clone, Debug)]
pub struct InsertResult {
    pub outcome: InsertOutcome,
    pub new_quadrants: Vec<(Aabb, u32)>,
}

impl InsertResult {
    pub fn is_accepted(&self) -> bool { self.outcome == InsertOutcome::Accepted }
}

/// The quadtree spatial index (§4.1): a tree of [`Quadrant`]s rooted at the arena's AABB
/// (I6), plus a small geometry cache (`registry`) the index uses internally to re-file
/// members on subdivision and to know where to remove from — the world still owns the full
/// `Particle` records (§9 "Multi-membership without reference cycles").
#[derive(Clone, Debug)]
pub struct QuadtreeIndex {
    root: Quadrant,
    capacity: usize,
    max_depth: u32,
    epsilon_rel: Number,
    registry: HashMap<IdToken, (Point2, Number)>,
}

impl QuadtreeIndex {
    pub fn new(bounds: Aabb, capacity: NonZeroUsize, max_depth: u32, epsilon_rel: Number) -> Self {
        Self {
            root: Quadrant::new_leaf(bounds, 0),
            capacity: capacity.get(),
            max_depth,
            epsilon_rel,
            registry: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Quadrant { &self.root }

    pub fn len(&self) -> usize { self.registry.len() }
    pub fn is_empty(&self) -> bool { self.registry.is_empty() }

    pub fn contains(&self, id: IdToken) -> bool { self.registry.contains_key(&id) }

    /// Inserts `id` at `(center, radius)`. With `allow_overlap = false`, rejects (I5) if any
    /// current member strictly overlaps the candidate; the index is left unchanged.
    pub fn insert(&mut self, id: IdToken, center: Point2, radius: Number, allow_overlap: bool) -> InsertResult {
        if !allow_overlap {
            for other in self.query_circle_members(center, radius) {
                if other == id {
                    continue;
                }
                if let Some(&(ocenter, oradius)) = self.registry.get(&other) {
                    let d2 = (ocenter - center).length_squared();
                    let threshold_sq = (oradius + radius).powi(2);
                    if d2 <= threshold_sq - self.epsilon_rel {
                        tracing::debug!(target: targets::QUADTREE, id, other, "insertion rejected: overlaps existing member");
                        return InsertResult {
                            outcome: InsertOutcome::Rejected,
                            new_quadrants: Vec::new(),
                        };
                    }
                }
            }
        }

        self.registry.insert(id, (center, radius));
        let mut new_quadrants = Vec::new();
        self.root.insert(
            id,
            center,
            radius,
            self.capacity,
            self.max_depth,
            &self.registry,
            self.epsilon_rel,
            &mut new_quadrants,
        );
        InsertResult {
            outcome: InsertOutcome::Accepted,
            new_quadrants,
        }
    }

    /// Removes `id` from every leaf it belongs to. A no-op if `id` isn't present.
    pub fn remove(&mut self, id: IdToken) {
        if let Some((center, radius)) = self.registry.remove(&id) {
            self.root.remove(id, center, radius, self.epsilon_rel);
        }
    }

    /// Every distinct disc in a leaf whose bounds intersect the swept corridor of a disc of
    /// `radius` traveling from `from` to `to` (§4.1).
    pub fn query_swept_corridor(&self, from: Point2, to: Point2, radius: Number) -> HashSet<IdToken> {
        let corridor = geometry::swept_corridor_aabb(from, to, radius);
        let eps = self.epsilon_rel;
        let mut out = HashSet::new();
        self.root.collect_members_if(&|bounds| bounds.intersects(&corridor, eps), &mut out);
        out
    }

    /// Every distinct disc in a leaf whose bounds intersect the closed disc `(center,
    /// radius)`.
    pub fn query_circle_members(&self, center: Point2, radius: Number) -> HashSet<IdToken> {
        let eps = self.epsilon_rel;
        let mut out = HashSet::new();
        self.root
            .collect_members_if(&|bounds| bounds.intersects_circle(center, radius, eps), &mut out);
        out
    }

    /// Every distinct disc in a leaf that could contain any point of the oriented circular
    /// sector at `center`, facing `facing`, with `range`/`aperture` (§4.1).
    pub fn query_sector(&self, center: Point2, facing: Vector2, range: Number, aperture: Number) -> HashSet<IdToken> {
        let eps = self.epsilon_rel;
        let mut out = HashSet::new();
        self.root
            .collect_members_if(&|bounds| sector_intersects_aabb(bounds, center, facing, range, aperture, eps), &mut out);
        out
    }
}

/// Leaf-qualification test for `query_sector` (§4.1's bulleted rule): the leaf contains the
/// center, contains either boundary ray's endpoint, a boundary ray crosses one of its edges,
/// or a corner falls within both the aperture and the range.
fn sector_intersects_aabb(
    bounds: Aabb,
    center: Point2,
    facing: Vector2,
    range: Number,
    aperture: Number,
    eps: Number,
) -> bool {
    if bounds.contains_point(center, eps) {
        return true;
    }

    let half_aperture_rad = (aperture / 2.0).to_radians();
    let left = geometry::rotate_vector(facing, half_aperture_rad) * range;
    let right = geometry::rotate_vector(facing, -half_aperture_rad) * range;
    let left_end = center + left;
    let right_end = center + right;

    if bounds.contains_point(left_end, eps) || bounds.contains_point(right_end, eps) {
        return true;
    }

    let left_ray = geometry::Segment::new(center, left_end);
    let right_ray = geometry::Segment::new(center, right_end);
    for edge in bounds.edges() {
        if edge.intersects(&left_ray, eps) || edge.intersects(&right_ray, eps) {
            return true;
        }
    }

    let range_sq = range * range;
    for corner in bounds.corners() {
        let v = corner - center;
        if geometry::angle_between(facing, v) <= half_aperture_rad + eps && v.length_squared() <= range_sq + eps {
            return true;
        }
    }

    false
}

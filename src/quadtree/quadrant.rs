use std::collections::{HashMap, HashSet};

use getset::CopyGetters;

use crate::core::targets;
use crate::core::types::{IdToken, Number, Point2};
use crate::shared::aabb::Aabb;

/// Exactly one of `members` or `children` is populated at any time (§3's Quadrant
/// invariant): a leaf holds a membership set, an internal node holds four children and
/// nothing else.
#[derive(Clone, Debug)]
enum QuadrantNode {
    Leaf(HashSet<IdToken>),
    Internal(Box<[Quadrant; 4]>),
}

/// One rectangular region of the index, leaf or internal (§4.1).
#[derive(Clone, Debug, CopyGetters)]
pub struct Quadrant {
    #[getset(get_copy = "pub")]
    bounds: Aabb,
    #[getset(get_copy = "pub")]
    depth: u32,
    node: QuadrantNode,
}

impl Quadrant {
    pub(crate) fn new_leaf(bounds: Aabb, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            node: QuadrantNode::Leaf(HashSet::new()),
        }
    }

    /// `true` for a leaf (I1: only leaves hold members).
    pub fn is_leaf(&self) -> bool { matches!(self.node, QuadrantNode::Leaf(_)) }

    /// The membership set, if this is a leaf.
    pub fn members(&self) -> Option<&HashSet<IdToken>> {
        match &self.node {
            QuadrantNode::Leaf(members) => Some(members),
            QuadrantNode::Internal(_) => None,
        }
    }

    /// The four children, in NW, NE, SW, SE order, if this is an internal node.
    pub fn children(&self) -> Option<&[Quadrant; 4]> {
        match &self.node {
            QuadrantNode::Internal(children) => Some(children),
            QuadrantNode::Leaf(_) => None,
        }
    }

    /// Inserts `id` into every leaf descendant whose bounds intersect the closed disc
    /// `(center, radius)` (I2), subdividing leaves that overflow `capacity` along the way
    /// (I3). Newly created quadrants are appended to `new_quadrants` for the caller to emit
    /// `quadrant_drawn` events from.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn insert(
        &mut self,
        id: IdToken,
        center: Point2,
        radius: Number,
        capacity: usize,
        max_depth: u32,
        registry: &HashMap<IdToken, (Point2, Number)>,
        eps: Number,
        new_quadrants: &mut Vec<(Aabb, u32)>,
    ) {
        if !self.bounds.intersects_circle(center, radius, eps) {
            return;
        }
        match &mut self.node {
            QuadrantNode::Internal(children) => {
                for child in children.iter_mut() {
                    child.insert(id, center, radius, capacity, max_depth, registry, eps, new_quadrants);
                }
            }
            QuadrantNode::Leaf(members) => {
                members.insert(id);
                if members.len() > capacity && self.depth < max_depth {
                    self.subdivide(capacity, max_depth, registry, eps, new_quadrants);
                }
            }
        }
    }

    /// Replaces this leaf with four children and re-files every current member into them
    /// according to I2. Permanent: once subdivided, a quadrant never re-merges (P7).
    fn subdivide(
        &mut self,
        capacity: usize,
        max_depth: u32,
        registry: &HashMap<IdToken, (Point2, Number)>,
        eps: Number,
        new_quadrants: &mut Vec<(Aabb, u32)>,
    ) {
        let QuadrantNode::Leaf(members) = &self.node else {
            return;
        };
        let member_ids: Vec<IdToken> = members.iter().copied().collect();
        let child_depth = self.depth + 1;
        let mut children = self.bounds.subdivide_quadrants().map(|b| Quadrant::new_leaf(b, child_depth));

        tracing::trace!(target: targets::QUADTREE, depth = self.depth, count = member_ids.len(), "subdividing quadrant");
        for child in &children {
            new_quadrants.push((child.bounds, child.depth));
        }

        for member_id in member_ids {
            let Some(&(mcenter, mradius)) = registry.get(&member_id) else {
                continue;
            };
            for child in children.iter_mut() {
                child.insert(member_id, mcenter, mradius, capacity, max_depth, registry, eps, new_quadrants);
            }
        }

        self.node = QuadrantNode::Internal(Box::new(children));
    }

    /// Removes `id` from every leaf descendant whose bounds intersect `(center, radius)`
    /// — the same traversal `insert` would take for that geometry (P6).
    pub(crate) fn remove(&mut self, id: IdToken, center: Point2, radius: Number, eps: Number) {
        if !self.bounds.intersects_circle(center, radius, eps) {
            return;
        }
        match &mut self.node {
            QuadrantNode::Internal(children) => {
                for child in children.iter_mut() {
                    child.remove(id, center, radius, eps);
                }
            }
            QuadrantNode::Leaf(members) => {
                members.remove(&id);
            }
        }
    }

    /// Collects the union of member sets of every leaf descendant for which `predicate`
    /// (tested against the leaf's bounds) holds. Internal nodes are descended into
    /// whenever `predicate` holds for their (larger) bounds too, since a qualifying leaf
    /// can only live under a qualifying ancestor.
    pub(crate) fn collect_members_if(&self, predicate: &dyn Fn(Aabb) -> bool, out: &mut HashSet<IdToken>) {
        if !predicate(self.bounds) {
            return;
        }
        match &self.node {
            QuadrantNode::Internal(children) => {
                for child in children.iter() {
                    child.collect_members_if(predicate, out);
                }
            }
            QuadrantNode::Leaf(members) => {
                out.extend(members.iter().copied());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(entries: &[(IdToken, Point2, Number)]) -> HashMap<IdToken, (Point2, Number)> {
        entries.iter().map(|&(id, c, r)| (id, (c, r))).collect()
    }

    #[test]
    fn inserting_beyond_capacity_subdivides() {
        let bounds = Aabb::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0));
        let mut root = Quadrant::new_leaf(bounds, 0);
        let entries = [
            (0u64, Point2::new(-5.0, -5.0), 1.0),
            (1, Point2::new(5.0, -5.0), 1.0),
            (2, Point2::new(-5.0, 5.0), 1.0),
            (3, Point2::new(5.0, 5.0), 1.0),
            (4, Point2::new(0.0, 0.0), 1.0),
        ];
        let registry = registry_of(&entries);
        let mut new_quadrants = Vec::new();
        for &(id, c, r) in &entries {
            root.insert(id, c, r, 4, 8, &registry, 1e-9, &mut new_quadrants);
        }
        assert!(!root.is_leaf());
        assert_eq!(new_quadrants.len(), 4);
    }

    #[test]
    fn remove_is_inverse_of_insert() {
        let bounds = Aabb::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0));
        let mut root = Quadrant::new_leaf(bounds, 0);
        let registry = registry_of(&[(0, Point2::new(0.0, 0.0), 1.0)]);
        let mut new_quadrants = Vec::new();
        root.insert(0, Point2::new(0.0, 0.0), 1.0, 4, 8, &registry, 1e-9, &mut new_quadrants);
        assert_eq!(root.members().unwrap().len(), 1);
        root.remove(0, Point2::new(0.0, 0.0), 1.0, 1e-9);
        assert_eq!(root.members().unwrap().len(), 0);
    }
}

//! The `GeometryObserver` interface (§6), replacing the original source's direct
//! `canvas.create_*` calls (§9 "Global canvas references"). The core never draws; it only
//! reports what changed.

use strum_macros::Display;

use crate::core::types::{IdToken, Number, Point2};
use crate::shared::aabb::Aabb;

/// Which query kind produced a [`GeometryObserver::query_highlight`] event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum QueryKind {
    SweptCorridor,
    Sector,
    CircleMembers,
}

/// Receives geometric events as the world mutates (§6). All methods have no-op defaults so
/// a caller can implement only the subset it cares about.
#[allow(unused_variables)]
pub trait GeometryObserver {
    /// A disc was inserted for the first time.
    fn disc_drawn(&mut self, id: IdToken, center: Point2, radius: Number) {}

    /// A disc's center changed after a tick with non-trivial displacement.
    fn disc_moved(&mut self, id: IdToken, new_center: Point2) {}

    /// A disc was removed from the world.
    fn disc_removed(&mut self, id: IdToken) {}

    /// A leaf subdivided and created this new quadrant.
    fn quadrant_drawn(&mut self, bounds: Aabb, depth: u32) {}

    /// An optional debugging channel: the ids a query returned.
    fn query_highlight(&mut self, kind: QueryKind, ids: &[IdToken]) {}

    /// An invariant was violated and a tick reverted (§7).
    fn invariant_violated(&mut self, id: Option<IdToken>, detail: &str) {}

    /// Non-overlapping placement exhausted its retries and was skipped (§4.5, §7).
    fn placement_exhausted(&mut self, attempted: u64, max_iters: u64) {}
}

/// An observer that discards every event; the default when a caller doesn't need one.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullObserver;

impl GeometryObserver for NullObserver {}

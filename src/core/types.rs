//! Numeric and geometric type aliases shared across the crate.

/// Numeric type used for all coordinates, distances and angles.
pub type Number = f64;
pub type Vector2 = glamour::Vector2<Number>;
pub type Point2 = glamour::Point2<Number>;
pub type Size2 = glamour::Size2<Number>;

/// Stable identifier for a disc. Assigned monotonically by [`crate::world::World`] and
/// never reused within a run.
pub type IdToken = u64;

static_assertions::const_assert_eq!(std::mem::size_of::<IdToken>(), 8);

//! The spatial index (§4.1), grounded in `node.py`'s `Quadrant`/`Quadtree` (referenced by
//! `zone.py` and `particle.py` but not itself captured in the retrieved source — rebuilt here
//! from its call sites: `quadtree_search`, `rectangle_overlap`, `circle_quadrants`, the
//! `contents()`/`leaves()` duality).

mod index;
mod quadrant;

pub use index::{InsertOutcome, InsertResult, QuadtreeIndex};
pub use quadrant::Quadrant;

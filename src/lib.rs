//! Quadtree-indexed 2D particle simulation with swept-circle collision resolution and
//! field-of-view queries.

pub mod arena;
pub mod core;
pub mod geometry;
pub mod motion;
pub mod observer;
pub mod particle;
pub mod quadtree;
pub mod shapes;
pub mod shared;
pub mod vision;
pub mod world;

pub use arena::Arena;
pub use core::config::Config;
pub use core::error::{ConfigError, SimError};
pub use core::types::{IdToken, Number, Point2, Vector2};
pub use observer::{GeometryObserver, NullObserver, QueryKind};
pub use particle::{Fov, Particle};
pub use shapes::Shape;
pub use vision::Sighting;
pub use world::World;

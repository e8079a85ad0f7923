pub mod aabb;
pub mod rng;
pub mod validate;

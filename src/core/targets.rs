//! String targets for the [`tracing`] crate, grouping log events by subsystem so a caller
//! can filter with `tracing-subscriber`'s `EnvFilter`.

pub const QUADTREE: &str = concat!(env!("CARGO_PKG_NAME"), "::", "quadtree");
pub const ARENA: &str = concat!(env!("CARGO_PKG_NAME"), "::", "arena");
pub const MOTION: &str = concat!(env!("CARGO_PKG_NAME"), "::", "motion");
pub const VISION: &str = concat!(env!("CARGO_PKG_NAME"), "::", "vision");
pub const WORLD: &str = concat!(env!("CARGO_PKG_NAME"), "::", "world");

// Type aliases used everywhere in the engine. Always import this
use swept_quad_sim::core::types::*;

use swept_quad_sim::core::config::{ArenaShapeConfig, Config};
/// Builds a config for a circular arena, matching `zone.py`'s
/// `if __name__ == "__main__"` demo setup: a round pen a few hundred units across,
/// populated with small discs of a fixed radius.
pub fn create_config() -> Config {
    let arena_shape = ArenaShapeConfig::Circle {
        center: (500.0, 500.0),
        radius: 200.0,
    };

    Config {
        arena_shape,
        default_radius: 10.0,
        max_placement_retries: 200,
        ..Config::default()
    }
}

use swept_quad_sim::observer::{GeometryObserver, QueryKind};
/// An observer that just counts events, standing in for the original source's tkinter
/// canvas calls (`canvas.create_oval`, `canvas.create_rectangle`, ...).
#[derive(Default)]
pub struct CountingObserver {
    pub discs_drawn: usize,
    pub discs_moved: usize,
    pub quadrants_drawn: usize,
}

impl GeometryObserver for CountingObserver {
    fn disc_drawn(&mut self, _id: IdToken, _center: Point2, _radius: Number) { self.discs_drawn += 1; }
    fn disc_moved(&mut self, _id: IdToken, _new_center: Point2) { self.discs_moved += 1; }
    fn quadrant_drawn(&mut self, _bounds: swept_quad_sim::shared::aabb::Aabb, _depth: u32) { self.quadrants_drawn += 1; }
    fn query_highlight(&mut self, kind: QueryKind, ids: &[IdToken]) {
        println!("query {kind} highlighted {} discs", ids.len());
    }
}

use rand::rngs::SmallRng;
use rand::SeedableRng;
use swept_quad_sim::World;

/// Builds a world, populates it with random discs, and steps every disc forward once —
/// the Rust analogue of `zone.py`'s animation loop body, minus the drawing.
fn main() {
    let config = create_config();
    let rng = SmallRng::seed_from_u64(1);
    let observer = Box::new(CountingObserver::default());
    let mut world = World::new(config, rng, observer).expect("valid configuration");

    let placed = world.add_particles(30, false);
    println!("placed {} of 30 requested discs", placed.len());

    for &id in &placed {
        if let Err(err) = world.advance(id, 5.0, None, Some((0.0, 360.0))) {
            eprintln!("disc {id} failed to advance: {err}");
        }
    }

    world.set_fov(placed[0], Some(swept_quad_sim::Fov::new(150.0, 120.0).expect("valid fov")));
    for sighting in world.visible_from(placed[0]) {
        println!("disc {} sees disc {} at distance {:.2}", placed[0], sighting.id, sighting.distance);
    }
}

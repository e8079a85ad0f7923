//! The literal end-to-end scenarios (S1-S6), driven through the public [`World`] API rather
//! than the internal `motion`/`vision` functions the unit tests exercise directly.

mod common;

use approx::assert_relative_eq;
use swept_quad_sim::core::types::{IdToken, Point2, Vector2};
use swept_quad_sim::{Fov, Particle};

#[test]
fn s1_open_space_moves_the_full_magnitude() {
    let config = common::circle_config(500.0, 500.0, 200.0, 10.0);
    let mut world = common::world_with_seed(config, 1);
    let id = world.add_particle_at(Point2::new(500.0, 500.0), 10.0, true).unwrap();

    world.advance(id, 50.0, Some(Vector2::new(1.0, 0.0)), None).unwrap();

    let p = world.particle(id).unwrap();
    assert_relative_eq!(p.center().x, 550.0, epsilon = 1e-6);
    assert_relative_eq!(p.center().y, 500.0, epsilon = 1e-6);
}

#[test]
fn s2_circular_boundary_clips_the_traversal() {
    let config = common::circle_config(0.0, 0.0, 100.0, 10.0);
    let mut world = common::world_with_seed(config, 1);
    let id = world.add_particle_at(Point2::new(85.0, 0.0), 10.0, true).unwrap();

    world.advance(id, 20.0, Some(Vector2::new(1.0, 0.0)), None).unwrap();

    let p = world.particle(id).unwrap();
    assert_relative_eq!(p.center().x, 90.0, epsilon = 1e-6);
    assert_relative_eq!(p.center().y, 0.0, epsilon = 1e-6);
}

#[test]
fn s3_mover_stops_tangent_to_a_blocking_disc() {
    let config = common::rectangle_config(0.0, 0.0, 400.0, 400.0, 10.0);
    let mut world = common::world_with_seed(config, 1);
    let a = world.add_particle_at(Point2::new(-50.0, 0.0), 10.0, true).unwrap();
    let b = world.add_particle_at(Point2::new(50.0, 0.0), 10.0, true).unwrap();

    world.advance(a, 200.0, Some(Vector2::new(1.0, 0.0)), None).unwrap();

    let pa = world.particle(a).unwrap();
    assert_relative_eq!(pa.center().x, 30.0, epsilon = 1e-6);
    assert_relative_eq!(pa.center().y, 0.0, epsilon = 1e-6);
    assert!(!pa.overlaps(world.particle(b).unwrap(), 1e-9));
}

#[test]
fn s4_disc_outside_the_swept_corridor_is_ignored() {
    let config = common::rectangle_config(0.0, 0.0, 500.0, 500.0, 10.0);
    let mut world = common::world_with_seed(config, 1);
    let a = world.add_particle_at(Point2::new(-50.0, 0.0), 10.0, true).unwrap();
    let _b = world.add_particle_at(Point2::new(50.0, 25.0), 10.0, true).unwrap();

    world.advance(a, 200.0, Some(Vector2::new(1.0, 0.0)), None).unwrap();

    let pa = world.particle(a).unwrap();
    assert_relative_eq!(pa.center().x, 150.0, epsilon = 1e-6);
    assert_relative_eq!(pa.center().y, 0.0, epsilon = 1e-6);
}

#[test]
fn s5_fifty_discs_place_without_strict_overlap() {
    let config = common::circle_config(500.0, 500.0, 200.0, 10.0);
    let mut world = common::world_with_seed(config, 7);

    let placed = world.add_particles(50, false);
    assert_eq!(placed.len(), 50, "all 50 discs should fit a 200-radius arena at this density");

    let discs: Vec<&Particle> = world.particles().collect();
    for i in 0..discs.len() {
        assert!(world.arena().confines(discs[i].center(), discs[i].radius()));
        for j in (i + 1)..discs.len() {
            assert!(!discs[i].overlaps(discs[j], 1e-9));
        }
    }
}

#[test]
fn s6_vision_cone_sees_only_the_expected_targets() {
    let config = common::circle_config(0.0, 0.0, 300.0, 5.0);
    let mut world = common::world_with_seed(config, 1);

    let observer = world.add_particle_at(Point2::new(0.0, 0.0), 5.0, true).unwrap();
    world.set_fov(observer, Some(Fov::new(100.0, 90.0).unwrap()));

    let visible_name = world.add_particle_at(Point2::new(50.0, 0.0), 10.0, true).unwrap();
    let diagonal_visible = world.add_particle_at(Point2::new(30.0, 40.0), 10.0, true).unwrap();
    let behind = world.add_particle_at(Point2::new(-50.0, 0.0), 10.0, true).unwrap();
    let too_far = world.add_particle_at(Point2::new(120.0, 0.0), 10.0, true).unwrap();

    let visible: Vec<IdToken> = world.visible_from(observer).into_iter().map(|s| s.id).collect();
    assert_eq!(visible.len(), 2);
    assert!(visible.contains(&visible_name));
    assert!(visible.contains(&diagonal_visible));
    assert!(!visible.contains(&behind));
    assert!(!visible.contains(&too_far));
}

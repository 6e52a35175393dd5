use nalgebra::Vector2;
use rand::Rng;
use rand_pcg::Pcg64;

use crate::body::Body;
use crate::force::{net_force, pairwise_force, Aggregation, CUTOFF_DISTANCE};
use crate::palette::Rgb;

fn body(x: f64, y: f64, mass: f64) -> Body {
    Body::new(
        Vector2::new(x, y),
        Vector2::zeros(),
        mass,
        Rgb::new(0, 0, 0),
        0.5,
        Vector2::new(800., 600.),
    )
    .unwrap()
}

fn rng() -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

#[test]
fn test_force_points_toward_other_body() {
    let a = body(100., 100., 10.);
    let b = body(300., 100., 10.);
    let force = pairwise_force(&a, &b, 9.8);
    assert!(force.x > 0.);
    assert!(force.y.abs() < 1e-12);
}

#[test]
fn test_force_magnitude() {
    let a = body(0., 0., 10.);
    let b = body(0., 200., 20.);
    let force = pairwise_force(&a, &b, 9.8);
    let expected = 9.8 * 10. * 20. / (200. * 200.);
    assert!((force.norm() - expected).abs() < 1e-12);
    assert!(force.y > 0.);
}

#[test]
fn test_inverse_square_law() {
    let a = body(0., 0., 10.);
    let near = body(100., 0., 10.);
    let far = body(200., 0., 10.);
    let ratio = pairwise_force(&a, &near, 1.).norm() / pairwise_force(&a, &far, 1.).norm();
    assert!((ratio - 4.).abs() < 1e-9);
}

#[test]
fn test_force_symmetry() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = body(
            rng.gen_range(0.0..800.),
            rng.gen_range(0.0..600.),
            rng.gen_range(0.1..100.),
        );
        let b = body(
            rng.gen_range(0.0..800.),
            rng.gen_range(0.0..600.),
            rng.gen_range(0.1..100.),
        );
        let g = rng.gen_range(-20.0..20.);
        let ab = pairwise_force(&a, &b, g);
        let ba = pairwise_force(&b, &a, g);
        assert!((ab + ba).norm() <= 1e-12 * (1. + ab.norm()), "{} vs {}", ab, ba);
    }
}

#[test]
fn test_close_range_cutoff() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = body(400., 300., rng.gen_range(0.1..1000.));
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let distance = rng.gen_range(0.0..CUTOFF_DISTANCE);
        let b = body(
            400. + distance * angle.cos(),
            300. + distance * angle.sin(),
            rng.gen_range(0.1..1000.),
        );
        if (b.position - a.position).norm() >= CUTOFF_DISTANCE {
            continue;
        }
        let g = rng.gen_range(-1000.0..1000.);
        assert_eq!(pairwise_force(&a, &b, g), Vector2::zeros());
    }
}

#[test]
fn test_force_just_past_cutoff_is_nonzero() {
    let a = body(0., 0., 10.);
    let b = body(CUTOFF_DISTANCE, 0., 10.);
    assert!(pairwise_force(&a, &b, 9.8).x > 0.);
}

#[test]
fn test_coincident_bodies_are_finite() {
    let a = body(250., 250., 10.);
    let b = body(250., 250., 10.);
    let force = pairwise_force(&a, &b, 9.8);
    assert!(force.x.is_finite() && force.y.is_finite());
    assert_eq!(force, Vector2::zeros());
}

#[test]
fn test_net_force_skips_self_by_index() {
    // Two bodies with identical state are still distinct.
    let bodies = vec![body(100., 100., 10.), body(100., 100., 10.), body(300., 100., 10.)];
    let force = net_force(0, &bodies, 9.8, Aggregation::Componentwise);
    let expected = pairwise_force(&bodies[0], &bodies[2], 9.8);
    assert_eq!(force, expected);
}

#[test]
fn test_net_force_of_lonely_body_is_zero() {
    let bodies = vec![body(100., 100., 10.)];
    for aggregation in [Aggregation::Componentwise, Aggregation::ParitySplit].iter() {
        assert_eq!(net_force(0, &bodies, 9.8, *aggregation), Vector2::zeros());
    }
}

#[test]
fn test_parity_split_matches_componentwise() {
    // Each pair contributes two slots, so parity lines up with the axes.
    let mut rng = rng();
    let bodies: Vec<Body> = (0..8)
        .map(|_| {
            body(
                rng.gen_range(0.0..800.),
                rng.gen_range(0.0..600.),
                rng.gen_range(1.0..50.),
            )
        })
        .collect();
    for idx in 0..bodies.len() {
        let corrected = net_force(idx, &bodies, 9.8, Aggregation::Componentwise);
        let compatible = net_force(idx, &bodies, 9.8, Aggregation::ParitySplit);
        assert_eq!(corrected, compatible);
    }
}

#[test]
fn test_parity_split_slots() {
    let forces = vec![Vector2::new(1., 2.), Vector2::new(3., 4.), Vector2::new(-5., 0.5)];
    assert_eq!(
        Aggregation::ParitySplit.combine(forces.clone()),
        Vector2::new(-1., 6.5)
    );
    assert_eq!(
        Aggregation::Componentwise.combine(forces),
        Vector2::new(-1., 6.5)
    );
}

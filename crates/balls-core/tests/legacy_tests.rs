mod common;

use balls_core::*;
use common::{DrawCall, RecordingSink};

fn still() -> WindowMetrics {
    WindowMetrics::default()
}

#[test]
fn capture_radius_shrinks_to_zero() {
    let mut field = LegacyField::new(Viewport::default(), 1);
    assert_eq!(field.capture_radius(), LEGACY_CAPTURE_RADIUS);
    field.update(still());
    assert_eq!(field.capture_radius(), LEGACY_CAPTURE_RADIUS - LEGACY_CAPTURE_DECAY);
    for _ in 0..200 {
        field.update(still());
    }
    assert_eq!(field.capture_radius(), 0.0);

    field.set_pointer(10.0, 20.0);
    assert_eq!(field.capture_radius(), LEGACY_CAPTURE_RADIUS);
}

#[test]
fn same_seed_gives_same_particles() {
    let a = LegacyField::new(Viewport::default(), 99);
    let b = LegacyField::new(Viewport::default(), 99);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.velocity, pb.velocity);
        assert_eq!(pa.push_strength, pb.push_strength);
        assert_eq!(pa.relax_rate_target, pb.relax_rate_target);
    }
}

#[test]
fn random_constants_stay_in_range() {
    let field = LegacyField::new(Viewport::default(), 5);
    assert_eq!(field.particles().len(), LAYOUT.len());
    for p in field.particles() {
        assert!(p.velocity.x.abs() <= LEGACY_INITIAL_SPEED);
        assert!(p.velocity.y.abs() <= LEGACY_INITIAL_SPEED);
        assert!(p.push_strength >= 3.0 && p.push_strength <= 101.0);
        assert!(p.relax_rate_target >= 0.1 && p.relax_rate_target <= 0.5);
        assert_eq!(p.relax_rate, 0.0);
        assert_eq!(p.decay, 1.0);
        assert!(!p.settled);
    }
}

#[test]
fn particles_settle_home_without_a_pointer() {
    let mut field = LegacyField::new(Viewport::default(), 3);
    for _ in 0..4000 {
        field.update(still());
    }
    assert!(field.all_settled());
    for p in field.particles() {
        assert!(p.pos.distance(p.home) < LEGACY_SETTLE_EPSILON);
        assert!((p.radius - p.base_radius).abs() < 0.1);
    }
}

#[test]
fn settled_particles_are_not_replaced() {
    let mut field = LegacyField::new(Viewport::default(), 3);
    let mut sink = RecordingSink::default();
    field.draw(&mut sink);
    assert_eq!(sink.placements(), LAYOUT.len());

    for _ in 0..4000 {
        field.update(still());
    }
    let mut sink = RecordingSink::default();
    field.draw(&mut sink);
    assert_eq!(sink.placements(), 0);
}

#[test]
fn placement_uses_top_left_and_diameter() {
    let field = LegacyField::new(Viewport::default(), 11);
    let mut sink = RecordingSink::default();
    field.draw(&mut sink);
    let p = &field.particles()[0];
    assert_eq!(
        sink.calls[0],
        DrawCall::Place {
            index: 0,
            left: p.pos.x,
            top: p.pos.y,
            diameter: p.radius * 2.0,
        }
    );
}

#[test]
fn captured_particles_brake() {
    let mut field = LegacyField::new(Viewport::default(), 8);
    let home = field.particles()[0].home;
    field.set_pointer(home.x, home.y);
    field.update(still());
    let p = &field.particles()[0];
    assert!((p.decay - 0.89).abs() < 1e-5, "decay = {}", p.decay);
    assert!(p.relax_rate > 0.0);
    for p in field.particles() {
        assert!(p.pos.is_finite());
        assert!(p.velocity.is_finite());
    }
}

#[test]
fn window_drift_pushes_every_particle() {
    let mut calm = LegacyField::new(Viewport::default(), 21);
    let mut dragged = LegacyField::new(Viewport::default(), 21);
    calm.update(still());
    dragged.update(WindowMetrics {
        screen_x: 100.0,
        ..WindowMetrics::default()
    });
    let mut any_faster = false;
    for (c, d) in calm.particles().iter().zip(dragged.particles()) {
        assert!(d.velocity.x >= c.velocity.x);
        any_faster |= d.velocity.x > c.velocity.x;
        assert_eq!(d.velocity.y, c.velocity.y);
    }
    assert!(any_faster);
}

#[test]
fn reset_rebuilds_elements_with_fresh_particles() {
    let mut field = LegacyField::new(Viewport::default(), 4);
    let first = field.particles()[0].velocity;
    let mut sink = RecordingSink::default();
    field.reset(still(), Some(&mut sink));
    match &sink.calls[..] {
        [DrawCall::Rebuild(colors)] => {
            let expected: Vec<Color> = LAYOUT.iter().map(|e| e.color).collect();
            assert_eq!(colors, &expected);
        }
        other => panic!("unexpected calls {other:?}"),
    }
    assert_ne!(field.particles()[0].velocity, first);
}

#[test]
fn homes_follow_the_layout_anchor() {
    let viewport = Viewport::new(1000.0, 700.0, 1.0);
    let field = LegacyField::new(viewport, 2);
    let anchor = viewport.layout_anchor();
    for (p, e) in field.particles().iter().zip(LAYOUT.iter()) {
        assert_eq!(p.home.x, anchor.x + e.x);
        assert_eq!(p.home.y, anchor.y + e.y);
        assert_eq!(p.base_radius, e.size);
    }
}

#[test]
fn recenter_replaces_settled_particles() {
    let mut field = LegacyField::new(Viewport::default(), 6);
    for _ in 0..4000 {
        field.update(still());
    }
    assert!(field.all_settled());
    field.recenter(Viewport::new(1000.0, 600.0, 1.0));
    let mut sink = RecordingSink::default();
    field.draw(&mut sink);
    assert_eq!(sink.placements(), LAYOUT.len());
    assert_eq!(field.particles()[0].home.x, 400.0 - 180.0 + LAYOUT[0].x + 100.0);
}

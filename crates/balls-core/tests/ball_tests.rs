mod common;

use balls_core::*;
use common::RecordingSink;

const GREY: Color = Color::from_hex(0x808080);

#[test]
fn update_stays_finite_for_clamped_deltas() {
    let deltas = [0.0, 0.001, 1.0 / 60.0, 0.03, 0.05, MAX_FRAME_DELTA];
    let offsets = [0.0, 1.0, -250.0, 4000.0];
    for &dt in &deltas {
        for &off in &offsets {
            let mut ball = Ball::new(100.0, 100.0, 0.0, 9.0, GREY);
            ball.target_pos = Vector3::new(100.0 + off, 100.0 - off, 1.0);
            for _ in 0..1000 {
                ball.update(dt);
                assert!(ball.cur_pos.is_finite(), "cur_pos blew up at dt={dt} off={off}");
                assert!(ball.velocity.is_finite(), "velocity blew up at dt={dt} off={off}");
                assert!(ball.radius.is_finite());
            }
        }
    }
}

#[test]
fn radius_never_drops_below_one() {
    let mut ball = Ball::new(10.0, 10.0, -5.0, 5.0, GREY);
    for i in 0..500 {
        ball.update(if i % 2 == 0 { 0.1 } else { 0.016 });
        assert!(ball.radius >= 1.0, "radius {} after {} steps", ball.radius, i);
    }
}

#[test]
fn ball_at_rest_is_a_fixed_point() {
    // z = 1 is the resting depth for zero displacement
    let mut ball = Ball::new(50.0, 60.0, 1.0, 8.0, GREY);
    let before = ball.cur_pos;
    ball.update(0.03);
    assert_eq!(ball.cur_pos, before);
    assert_eq!(ball.velocity, Vector3::ZERO);
    assert_eq!(ball.radius, 8.0);
}

#[test]
fn zero_delta_does_not_move() {
    let mut ball = Ball::new(0.0, 0.0, 0.0, 6.0, GREY);
    ball.target_pos = Vector3::new(40.0, -40.0, 1.0);
    ball.velocity = Vector3::new(3.0, 2.0, 0.5);
    let before = ball.cur_pos;
    ball.update(0.0);
    assert_eq!(ball.cur_pos, before);
    assert_eq!(ball.velocity, Vector3::new(3.0, 2.0, 0.5));
}

#[test]
fn spring_converges_on_fixed_target() {
    let mut ball = Ball::new(100.0, 100.0, 0.0, 10.0, GREY);
    ball.target_pos = Vector3::new(200.0, 100.0, 1.0);
    for _ in 0..500 {
        ball.update(0.03);
    }
    assert!((ball.cur_pos.x - 200.0).abs() < 0.01, "x = {}", ball.cur_pos.x);
    assert!((ball.cur_pos.y - 100.0).abs() < 0.01);
}

#[test]
fn convergence_is_similar_across_frame_rates() {
    let run = |dt: f32| {
        let mut ball = Ball::new(0.0, 0.0, 1.0, 8.0, GREY);
        ball.target_pos = Vector3::new(100.0, 0.0, 1.0);
        let steps = (3.0 / dt).round() as usize;
        for _ in 0..steps {
            ball.update(dt);
        }
        ball.cur_pos.x
    };
    let fast = run(1.0 / 120.0);
    let slow = run(1.0 / 20.0);
    assert!((fast - 100.0).abs() < 1.0, "fast = {fast}");
    assert!((slow - 100.0).abs() < 1.0, "slow = {slow}");
}

#[test]
fn displacement_puffs_the_ball_up() {
    let mut ball = Ball::new(0.0, 0.0, 1.0, 10.0, GREY);
    ball.cur_pos.x = 200.0;
    ball.target_pos.x = 200.0;
    ball.update(0.03);
    // target depth = 200 / 100 + 1
    assert!(ball.target_pos.z > 2.9 && ball.target_pos.z < 3.1);
    assert!(ball.radius > 10.0);
}

#[test]
fn custom_params_are_used() {
    let params = BallParams {
        friction: 0.5,
        spring_strength: 0.3,
    };
    let ball = Ball::with_params(1.0, 2.0, 3.0, 4.0, GREY, params);
    assert_eq!(ball.friction, 0.5);
    assert_eq!(ball.spring_strength, 0.3);
    assert_eq!(ball.radius, 4.0);
    assert_eq!(ball.original_pos, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(ball.target_pos, ball.cur_pos);
}

#[test]
fn draw_emits_one_circle_at_current_position() {
    let mut ball = Ball::new(12.0, 34.0, 1.0, 7.0, GREY);
    ball.radius = 9.5;
    let mut sink = RecordingSink::default();
    ball.draw(&mut sink);
    let circles = sink.circles();
    assert_eq!(circles.len(), 1);
    let (center, radius, color) = circles[0];
    assert_eq!((center.x, center.y), (12.0, 34.0));
    assert_eq!(radius, 9.5);
    assert_eq!(color, GREY);
}

#[test]
fn vector_helpers_mutate_in_place() {
    let mut v = Vector3::default();
    assert_eq!(v, Vector3::ZERO);
    v.set(1.0, 2.0, 3.0);
    v.add_x(1.0);
    v.add_y(-2.0);
    v.add_z(0.5);
    assert_eq!(v, Vector3::new(2.0, 0.0, 3.5));
    let other = Vector3::new(5.0, 4.0, 100.0);
    assert_eq!(v.planar_distance(&other), 5.0);
}

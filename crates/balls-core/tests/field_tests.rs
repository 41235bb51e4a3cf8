mod common;

use balls_core::*;
use common::{DrawCall, RecordingSink};

const GREY: Color = Color::from_hex(0x808080);

#[test]
fn near_pointer_mirrors_through_the_ball() {
    let mut field = BallField::new(vec![Ball::new(0.0, 0.0, 0.0, 10.0, GREY)]);
    field.set_mouse_position(1.0, 0.0);
    field.update(0.03);
    let ball = &field.balls()[0];
    // cur - (mouse - cur) evaluated before the ball moved
    assert_eq!(ball.target_pos.x, -1.0);
    assert_eq!(ball.target_pos.y, 0.0);
}

#[test]
fn pointer_side_does_not_change_the_rule() {
    let mut left = BallField::new(vec![Ball::new(100.0, 100.0, 1.0, 10.0, GREY)]);
    let mut right = BallField::new(vec![Ball::new(100.0, 100.0, 1.0, 10.0, GREY)]);
    left.set_mouse_position(80.0, 90.0);
    right.set_mouse_position(120.0, 110.0);
    left.update(0.0);
    right.update(0.0);
    assert_eq!(left.balls()[0].target_pos.x, 120.0);
    assert_eq!(left.balls()[0].target_pos.y, 110.0);
    assert_eq!(right.balls()[0].target_pos.x, 80.0);
    assert_eq!(right.balls()[0].target_pos.y, 90.0);
}

#[test]
fn only_the_nearby_ball_is_retargeted() {
    let mut field = BallField::new(vec![
        Ball::new(0.0, 0.0, 1.0, 8.0, GREY),
        Ball::new(1000.0, 0.0, 1.0, 8.0, GREY),
        Ball::new(0.0, 1000.0, 1.0, 8.0, GREY),
    ]);
    field.set_mouse_position(10.0, 5.0);
    field.update(0.03);
    let balls = field.balls();
    assert_ne!(balls[0].target_pos.x, balls[0].original_pos.x);
    for b in &balls[1..] {
        assert_eq!(b.target_pos.x, b.original_pos.x);
        assert_eq!(b.target_pos.y, b.original_pos.y);
    }
}

#[test]
fn pointer_at_threshold_is_ignored() {
    let mut field = BallField::new(vec![Ball::new(0.0, 0.0, 1.0, 8.0, GREY)]);
    field.set_mouse_position(PROXIMITY_RADIUS, 0.0);
    field.update(0.03);
    assert_eq!(field.balls()[0].target_pos.x, 0.0);
}

#[test]
fn balls_spring_home_when_pointer_is_far() {
    let viewport = Viewport::new(1024.0, 768.0, 1.0);
    let mut field = BallField::from_layout(viewport);
    for (i, ball) in field.balls_mut().iter_mut().enumerate() {
        ball.cur_pos.x += 40.0 - i as f32;
        ball.cur_pos.y -= 25.0;
    }
    field.set_mouse_position(-10_000.0, -10_000.0);
    for _ in 0..500 {
        field.update(0.03);
    }
    for ball in field.balls() {
        assert!((ball.cur_pos.x - ball.original_pos.x).abs() < 0.01);
        assert!((ball.cur_pos.y - ball.original_pos.y).abs() < 0.01);
        assert!((ball.cur_pos.z - 1.0).abs() < 0.01);
    }
}

#[test]
fn layout_field_is_centred_on_the_anchor() {
    let viewport = Viewport::new(800.0, 600.0, 2.0);
    let field = BallField::from_layout(viewport);
    assert_eq!(field.len(), LAYOUT.len());
    assert!(!field.is_empty());
    let anchor = viewport.layout_anchor();
    assert_eq!(field.anchor(), anchor);
    for (ball, entry) in field.balls().iter().zip(LAYOUT.iter()) {
        assert_eq!(ball.original_pos.x, anchor.x + entry.x);
        assert_eq!(ball.original_pos.y, anchor.y + entry.y);
        assert_eq!(ball.size, entry.size);
        assert_eq!(ball.color, entry.color);
    }
}

#[test]
fn recenter_is_idempotent() {
    let mut field = BallField::from_layout(Viewport::new(800.0, 600.0, 1.0));
    let wide = Viewport::new(1920.0, 1080.0, 1.0);
    field.recenter(wide);
    let once: Vec<Vector3> = field.balls().iter().map(|b| b.original_pos).collect();
    field.recenter(wide);
    let twice: Vec<Vector3> = field.balls().iter().map(|b| b.original_pos).collect();
    assert_eq!(once, twice);

    let anchor = wide.layout_anchor();
    for (ball, entry) in field.balls().iter().zip(LAYOUT.iter()) {
        assert!((ball.original_pos.x - anchor.x - entry.x).abs() < 1e-3);
        assert!((ball.original_pos.y - anchor.y - entry.y).abs() < 1e-3);
    }
}

#[test]
fn recenter_carries_displacement_along() {
    let mut field = BallField::from_layout(Viewport::new(800.0, 600.0, 1.0));
    field.balls_mut()[3].cur_pos.x += 12.0;
    field.recenter(Viewport::new(1000.0, 600.0, 1.0));
    let ball = &field.balls()[3];
    assert!((ball.cur_pos.x - ball.original_pos.x - 12.0).abs() < 1e-3);
}

#[test]
fn draw_paints_in_table_order() {
    let field = BallField::from_layout(Viewport::default());
    let mut sink = RecordingSink::default();
    field.draw(&mut sink);
    let colors: Vec<Color> = sink.circles().into_iter().map(|(_, _, c)| c).collect();
    let expected: Vec<Color> = LAYOUT.iter().map(|e| e.color).collect();
    assert_eq!(colors, expected);
}

#[test]
fn frame_clears_then_draws_then_updates() {
    let mut field = BallField::new(vec![Ball::new(0.0, 0.0, 1.0, 8.0, GREY)]);
    field.balls_mut()[0].cur_pos.x = 30.0;
    field.set_mouse_position(-10_000.0, -10_000.0);
    let mut sink = RecordingSink::default();
    let input = FrameInput {
        delta: 0.03,
        window: WindowMetrics::default(),
    };
    Simulation::frame(&mut field, &input, Some(&mut sink));
    assert_eq!(sink.calls[0], DrawCall::Clear);
    let (center, _, _) = sink.circles()[0];
    assert_eq!(center.x, 30.0);
    assert!(field.balls()[0].cur_pos.x < 30.0);
}

#[test]
fn frame_without_surface_still_updates() {
    let mut field = BallField::new(vec![Ball::new(0.0, 0.0, 1.0, 8.0, GREY)]);
    field.balls_mut()[0].cur_pos.x = 30.0;
    field.set_mouse_position(-10_000.0, -10_000.0);
    let input = FrameInput {
        delta: 0.03,
        window: WindowMetrics::default(),
    };
    Simulation::frame(&mut field, &input, None);
    assert!(field.balls()[0].cur_pos.x < 30.0);
}

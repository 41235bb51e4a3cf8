use crate::color::Color;
use crate::constants::{
    DEFAULT_FRICTION, DEFAULT_SPRING_STRENGTH, DEPTH_DISTANCE_DIVISOR, MIN_RADIUS,
    TARGET_FRAME_TIME,
};
use crate::surface::RenderSink;
use crate::vector::{Vector3, Vector3Ext};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallParams {
    /// Velocity kept per reference tick, in (0, 1).
    pub friction: f32,
    pub spring_strength: f32,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            spring_strength: DEFAULT_SPRING_STRENGTH,
        }
    }
}

/// One circle of the field, pulled toward `target_pos` by a damped spring.
///
/// The z component is depth: it springs toward `1 + displacement / 100`, so a
/// ball swells while it is pushed away from rest and shrinks back once home.
#[derive(Clone, Debug)]
pub struct Ball {
    pub color: Color,
    pub cur_pos: Vector3,
    pub original_pos: Vector3,
    pub target_pos: Vector3,
    pub velocity: Vector3,
    pub radius: f32,
    pub size: f32,
    pub friction: f32,
    pub spring_strength: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, z: f32, size: f32, color: Color) -> Self {
        Self::with_params(x, y, z, size, color, BallParams::default())
    }

    pub fn with_params(x: f32, y: f32, z: f32, size: f32, color: Color, params: BallParams) -> Self {
        let pos = Vector3::new(x, y, z);
        Self {
            color,
            cur_pos: pos,
            original_pos: pos,
            target_pos: pos,
            velocity: Vector3::ZERO,
            radius: size,
            size,
            friction: params.friction,
            spring_strength: params.spring_strength,
        }
    }

    /// Advance by `delta_time` seconds. Callers clamp the delta to
    /// `MAX_FRAME_DELTA` first; larger steps make the spring overshoot.
    pub fn update(&mut self, delta_time: f32) {
        let time_scale = delta_time / TARGET_FRAME_TIME;
        let damping = self.friction.powf(time_scale);

        let (vx, px) = spring_axis(
            self.target_pos.x - self.cur_pos.x,
            self.velocity.x,
            self.spring_strength,
            damping,
            time_scale,
        );
        self.velocity.x = vx;
        self.cur_pos.add_x(px);

        let (vy, py) = spring_axis(
            self.target_pos.y - self.cur_pos.y,
            self.velocity.y,
            self.spring_strength,
            damping,
            time_scale,
        );
        self.velocity.y = vy;
        self.cur_pos.add_y(py);

        let displacement = self.original_pos.planar_distance(&self.cur_pos);
        self.target_pos.z = displacement / DEPTH_DISTANCE_DIVISOR + 1.0;
        let (vz, pz) = spring_axis(
            self.target_pos.z - self.cur_pos.z,
            self.velocity.z,
            self.spring_strength,
            damping,
            time_scale,
        );
        self.velocity.z = vz;
        self.cur_pos.add_z(pz);

        self.radius = (self.size * self.cur_pos.z).max(MIN_RADIUS);
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill_circle(
            Vec2::new(self.cur_pos.x, self.cur_pos.y),
            self.radius,
            self.color,
        );
    }

    /// Translate the resting layout (and the in-flight state with it) in xy.
    pub fn shift(&mut self, offset: Vec2) {
        for v in [&mut self.original_pos, &mut self.cur_pos, &mut self.target_pos] {
            v.add_x(offset.x);
            v.add_y(offset.y);
        }
    }
}

/// Returns the new velocity and the position step for one axis.
#[inline]
fn spring_axis(
    to_target: f32,
    velocity: f32,
    spring_strength: f32,
    damping: f32,
    time_scale: f32,
) -> (f32, f32) {
    let accel = to_target * spring_strength * time_scale;
    let v = (velocity + accel) * damping;
    (v, v * time_scale)
}

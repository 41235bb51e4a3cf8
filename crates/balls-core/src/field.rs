//! The spring field: every ball of the artwork plus the shared pointer.

use crate::ball::{Ball, BallParams};
use crate::constants::{POINTER_ABSENT, PROXIMITY_RADIUS};
use crate::layout::{Viewport, LAYOUT};
use crate::surface::{FrameInput, RenderSink, Simulation, WindowMetrics};
use crate::vector::{Vector3, Vector3Ext};
use glam::Vec2;

pub struct BallField {
    balls: Vec<Ball>,
    pub mouse_pos: Vector3,
    anchor: Vec2,
}

impl BallField {
    /// A field over arbitrary balls, positioned in absolute coordinates.
    pub fn new(balls: Vec<Ball>) -> Self {
        Self {
            balls,
            mouse_pos: Vector3::ZERO,
            anchor: Vec2::ZERO,
        }
    }

    /// The full artwork, centred in `viewport`.
    pub fn from_layout(viewport: Viewport) -> Self {
        Self::from_layout_with(viewport, BallParams::default())
    }

    pub fn from_layout_with(viewport: Viewport, params: BallParams) -> Self {
        let anchor = viewport.layout_anchor();
        let balls = LAYOUT
            .iter()
            .map(|e| {
                Ball::with_params(anchor.x + e.x, anchor.y + e.y, 0.0, e.size, e.color, params)
            })
            .collect();
        Self {
            balls,
            mouse_pos: Vector3::new(POINTER_ABSENT, POINTER_ABSENT, 0.0),
            anchor,
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_pos.set(x, y, 0.0);
    }

    /// Retarget every ball against the pointer, then integrate it.
    pub fn update(&mut self, delta_time: f32) {
        let mouse = self.mouse_pos;
        for ball in &mut self.balls {
            let dx = mouse.x - ball.cur_pos.x;
            let dy = mouse.y - ball.cur_pos.y;
            let d = (dx * dx + dy * dy).sqrt();

            if d < PROXIMITY_RADIUS {
                // Mirror the pointer through the ball. Which side the pointer
                // is on does not change the rule.
                ball.target_pos.x = ball.cur_pos.x - dx;
                ball.target_pos.y = ball.cur_pos.y - dy;
            } else {
                ball.target_pos.x = ball.original_pos.x;
                ball.target_pos.y = ball.original_pos.y;
            }

            ball.update(delta_time);
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        for ball in &self.balls {
            ball.draw(sink);
        }
    }

    /// Move the artwork so it stays centred in `viewport`, keeping each ball's
    /// offset from the layout anchor. Calling this again with the same
    /// viewport changes nothing.
    pub fn recenter(&mut self, viewport: Viewport) {
        let anchor = viewport.layout_anchor();
        let offset = anchor - self.anchor;
        self.anchor = anchor;
        if offset == Vec2::ZERO {
            return;
        }
        log::debug!(
            "[field] recenter to {:.0}x{:.0}, shift ({:.1}, {:.1})",
            viewport.width,
            viewport.height,
            offset.x,
            offset.y
        );
        for ball in &mut self.balls {
            ball.shift(offset);
        }
    }
}

impl Simulation for BallField {
    fn start(&mut self, _window: WindowMetrics, sink: Option<&mut dyn RenderSink>) {
        // legacy elements are not part of this mode
        if let Some(sink) = sink {
            sink.rebuild_elements(&[]);
        }
    }

    fn set_pointer(&mut self, x: f32, y: f32) {
        self.set_mouse_position(x, y);
    }

    fn recenter(&mut self, viewport: Viewport) {
        BallField::recenter(self, viewport);
    }

    /// Draws the previous step's positions, then advances: the visible frame
    /// trails the physics by one step.
    fn frame(&mut self, input: &FrameInput, sink: Option<&mut dyn RenderSink>) {
        if let Some(sink) = sink {
            sink.clear();
            self.draw(sink);
        }
        self.update(input.delta);
    }
}

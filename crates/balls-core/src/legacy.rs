//! The older particle-repulsion animation, kept as an alternate style.
//!
//! Unlike the spring field it ignores frame delta entirely: every tick is one
//! fixed step, and the host's pacing (display sync or 30 fps) sets the speed.
//! Particles are drawn as retained elements; once a particle settles its
//! element is simply left where it is.

use crate::color::Color;
use crate::constants::*;
use crate::layout::{Viewport, LAYOUT};
use crate::surface::{FrameInput, RenderSink, Simulation, WindowMetrics};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub color: Color,
    pub home: Vec2,
    pub pos: Vec2,
    pub velocity: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    /// How hard the pointer shoves this particle while captured.
    pub push_strength: f32,
    /// Rate `relax_rate` drifts back to once the pointer lets go.
    pub relax_rate_target: f32,
    /// Fraction of the home offset added to velocity each tick.
    pub relax_rate: f32,
    /// 1 = free, 0 = fully braked by the pointer.
    pub decay: f32,
    pub settled: bool,
}

impl Particle {
    fn new(home: Vec2, base_radius: f32, color: Color, rng: &mut StdRng) -> Self {
        Self {
            color,
            home,
            pos: home,
            velocity: Vec2::new(
                LEGACY_INITIAL_SPEED * 2.0 * (rng.gen::<f32>() - 0.5),
                LEGACY_INITIAL_SPEED * 2.0 * (rng.gen::<f32>() - 0.5),
            ),
            base_radius,
            radius: base_radius,
            push_strength: LEGACY_PUSH_MIN + rng.gen::<f32>() * LEGACY_PUSH_SPAN,
            relax_rate_target: LEGACY_RELAX_MIN + rng.gen::<f32>() * LEGACY_RELAX_SPAN,
            relax_rate: 0.0,
            decay: 1.0,
            settled: false,
        }
    }

    fn step(&mut self, drift: Vec2, pointer: Vec2, capture_radius: f32) {
        self.pos += self.velocity;
        self.velocity.x = ((self.velocity.x + drift.x / self.base_radius) * LEGACY_VELOCITY_DAMPING)
            .clamp(-LEGACY_MAX_SPEED, LEGACY_MAX_SPEED);
        self.velocity.y = ((self.velocity.y + drift.y / self.base_radius) * LEGACY_VELOCITY_DAMPING)
            .clamp(-LEGACY_MAX_SPEED, LEGACY_MAX_SPEED);

        let to_pointer = pointer - self.pos;
        let d = to_pointer.length();
        if d < capture_radius {
            let dir = if d > 0.0 { to_pointer / d } else { Vec2::ZERO };
            self.velocity -= dir * self.push_strength;
            self.relax_rate += (LEGACY_CAPTURED_RELAX - self.relax_rate) * 0.4;
            self.decay = (self.decay * 0.9 - 0.01).max(0.0);
            self.velocity *= 1.0 - self.decay;
        } else {
            self.relax_rate += (self.relax_rate_target - self.relax_rate) * 0.005;
            self.decay = (self.decay + 0.03).min(1.0);
        }

        let to_home = self.home - self.pos;
        let home_dist = to_home.length();
        self.velocity += to_home * self.relax_rate;
        self.radius = self.base_radius + home_dist / LEGACY_RADIUS_GROWTH_DIVISOR;
        // signed comparison: a particle drifting fast in -x/-y still counts
        self.settled = home_dist < LEGACY_SETTLE_EPSILON
            && self.velocity.x < LEGACY_SETTLE_EPSILON
            && self.velocity.y < LEGACY_SETTLE_EPSILON;
    }
}

pub struct LegacyField {
    particles: Vec<Particle>,
    rng: StdRng,
    anchor: Vec2,
    pointer: Vec2,
    capture_radius: f32,
    last_window: WindowMetrics,
}

impl LegacyField {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            anchor: viewport.layout_anchor(),
            pointer: Vec2::splat(LEGACY_POINTER_START),
            capture_radius: LEGACY_CAPTURE_RADIUS,
            last_window: WindowMetrics::default(),
        };
        field.respawn();
        field
    }

    fn respawn(&mut self) {
        let anchor = self.anchor;
        let rng = &mut self.rng;
        self.particles = LAYOUT
            .iter()
            .map(|e| Particle::new(anchor + Vec2::new(e.x, e.y), e.size, e.color, rng))
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn capture_radius(&self) -> f32 {
        self.capture_radius
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn all_settled(&self) -> bool {
        self.particles.iter().all(|p| p.settled)
    }

    /// A pointer move re-arms the full capture radius.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.capture_radius = LEGACY_CAPTURE_RADIUS;
    }

    /// Fresh particles (new random response constants) and fresh elements.
    pub fn reset(&mut self, window: WindowMetrics, sink: Option<&mut dyn RenderSink>) {
        self.respawn();
        self.last_window = window;
        if let Some(sink) = sink {
            let colors: Vec<Color> = self.particles.iter().map(|p| p.color).collect();
            sink.rebuild_elements(&colors);
        }
    }

    pub fn update(&mut self, window: WindowMetrics) {
        let drift = Vec2::new(
            (window.screen_x - self.last_window.screen_x)
                + (window.client_width - self.last_window.client_width),
            window.screen_y - self.last_window.screen_y,
        );
        self.last_window = window;
        self.capture_radius = (self.capture_radius - LEGACY_CAPTURE_DECAY).max(0.0);

        let pointer = self.pointer;
        let capture = self.capture_radius;
        for p in &mut self.particles {
            p.step(drift, pointer, capture);
        }
    }

    /// Place every element whose particle is still moving.
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        for (i, p) in self.particles.iter().enumerate() {
            if !p.settled {
                sink.place_element(i, p.pos.x, p.pos.y, p.radius * 2.0);
            }
        }
    }

    pub fn recenter(&mut self, viewport: Viewport) {
        let anchor = viewport.layout_anchor();
        let offset = anchor - self.anchor;
        self.anchor = anchor;
        if offset == Vec2::ZERO {
            return;
        }
        // Shifted elements must be placed again even if they had come to rest.
        for p in &mut self.particles {
            p.home += offset;
            p.pos += offset;
            p.settled = false;
        }
    }
}

impl Simulation for LegacyField {
    fn start(&mut self, window: WindowMetrics, sink: Option<&mut dyn RenderSink>) {
        self.reset(window, sink);
    }

    fn set_pointer(&mut self, x: f32, y: f32) {
        LegacyField::set_pointer(self, x, y);
    }

    fn recenter(&mut self, viewport: Viewport) {
        LegacyField::recenter(self, viewport);
    }

    fn frame(&mut self, input: &FrameInput, sink: Option<&mut dyn RenderSink>) {
        self.update(input.window);
        if let Some(sink) = sink {
            self.draw(sink);
        }
    }
}

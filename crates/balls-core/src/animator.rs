//! Frame driver shared by the frontends.
//!
//! The host owns one `Animator`, feeds it timestamps, pointer moves and
//! viewport changes, and schedules the next frame according to `pacing()`.
//! Every mode switch resets the clock; the host is expected to cancel its
//! pending callback or timer before calling in, so only one frame is ever in
//! flight.

use crate::ball::BallParams;
use crate::clock::{FrameClock, FrameRate, Pacing};
use crate::field::BallField;
use crate::layout::Viewport;
use crate::legacy::LegacyField;
use crate::surface::{FrameInput, RenderSink, Simulation, WindowMetrics};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationMode {
    #[default]
    Field,
    Legacy,
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub frame_rate: FrameRate,
    pub mode: AnimationMode,
    pub ball: BallParams,
    /// Seeds the legacy particles' random response constants.
    pub seed: u64,
}

pub struct Animator {
    field: BallField,
    legacy: LegacyField,
    mode: AnimationMode,
    frame_rate: FrameRate,
    clock: FrameClock,
    viewport: Viewport,
    running: bool,
}

impl Animator {
    pub fn new(viewport: Viewport, settings: Settings) -> Self {
        Self {
            field: BallField::from_layout_with(viewport, settings.ball),
            legacy: LegacyField::new(viewport, settings.seed),
            mode: settings.mode,
            frame_rate: settings.frame_rate,
            clock: FrameClock::new(),
            viewport,
            running: false,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn pacing(&self) -> Pacing {
        self.frame_rate.pacing()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn field(&self) -> &BallField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut BallField {
        &mut self.field
    }

    pub fn legacy(&self) -> &LegacyField {
        &self.legacy
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn active_mut(&mut self) -> &mut dyn Simulation {
        match self.mode {
            AnimationMode::Field => &mut self.field,
            AnimationMode::Legacy => &mut self.legacy,
        }
    }

    /// (Re)start the active simulation from a clean clock.
    pub fn start(&mut self, window: WindowMetrics, sink: Option<&mut dyn RenderSink>) {
        self.clock.reset();
        self.running = true;
        self.active_mut().start(window, sink);
    }

    pub fn stop(&mut self) {
        self.clock.reset();
        self.running = false;
    }

    /// Returns false when `rate` was already active.
    pub fn set_frame_rate(
        &mut self,
        rate: FrameRate,
        window: WindowMetrics,
        sink: Option<&mut dyn RenderSink>,
    ) -> bool {
        if rate == self.frame_rate {
            return false;
        }
        log::info!("[animator] frame rate {:?} -> {:?}", self.frame_rate, rate);
        self.frame_rate = rate;
        self.start(window, sink);
        true
    }

    /// Returns false when `mode` was already active.
    pub fn set_mode(
        &mut self,
        mode: AnimationMode,
        window: WindowMetrics,
        sink: Option<&mut dyn RenderSink>,
    ) -> bool {
        if mode == self.mode {
            return false;
        }
        log::info!("[animator] mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.start(window, sink);
        true
    }

    /// Both simulations follow the viewport so a later mode switch starts centred.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.field.recenter(viewport);
        self.legacy.recenter(viewport);
    }

    /// Both simulations see every move, as the pointer stream is shared.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.field.set_pointer(x, y);
        self.legacy.set_pointer(x, y);
    }

    /// Run one scheduled frame at host time `now_ms`; returns the delta used.
    pub fn frame(
        &mut self,
        now_ms: f64,
        window: WindowMetrics,
        sink: Option<&mut dyn RenderSink>,
    ) -> f32 {
        if !self.running {
            return 0.0;
        }
        let delta = self.clock.tick(now_ms);
        let input = FrameInput { delta, window };
        self.active_mut().frame(&input, sink);
        delta
    }
}

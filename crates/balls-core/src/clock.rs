use crate::constants::{CAPPED_FRAME_MS, MAX_FRAME_DELTA};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameRate {
    #[default]
    Uncapped,
    Capped30,
}

/// How the host should schedule the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pacing {
    /// requestAnimationFrame / redraw on vsync.
    DisplaySync,
    /// A plain timer, this many milliseconds out.
    Fixed(f64),
}

impl FrameRate {
    pub fn pacing(self) -> Pacing {
        match self {
            FrameRate::Uncapped => Pacing::DisplaySync,
            FrameRate::Capped30 => Pacing::Fixed(CAPPED_FRAME_MS),
        }
    }
}

/// Turns host timestamps (milliseconds) into clamped frame deltas (seconds).
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame so the next tick reports zero.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_ms
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let prev = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let delta = ((now_ms - prev) / 1000.0) as f32;
        if !delta.is_finite() {
            return 0.0;
        }
        delta.clamp(0.0, MAX_FRAME_DELTA)
    }
}

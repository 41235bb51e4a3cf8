// Simulation tuning constants shared by the web and native frontends.

// Integrator
pub const TARGET_FRAME_TIME: f32 = 0.03; // reference tick the spring constants were tuned for
pub const MAX_FRAME_DELTA: f32 = 0.1; // clamp for stalls / backgrounded tabs
pub const DEFAULT_FRICTION: f32 = 0.8;
pub const DEFAULT_SPRING_STRENGTH: f32 = 0.1;
pub const MIN_RADIUS: f32 = 1.0;
pub const DEPTH_DISTANCE_DIVISOR: f32 = 100.0; // z target = displacement / divisor + 1

// Pointer interaction
pub const PROXIMITY_RADIUS: f32 = 150.0;
pub const POINTER_ABSENT: f32 = -10_000.0; // far off-screen, never within reach of a ball

// Layout anchor: artwork origin = viewport centre minus this offset
pub const LAYOUT_ANCHOR_OFFSET_X: f32 = 180.0;
pub const LAYOUT_ANCHOR_OFFSET_Y: f32 = 65.0;

// Frame pacing
pub const CAPPED_FPS: f64 = 30.0;
pub const CAPPED_FRAME_MS: f64 = 1000.0 / CAPPED_FPS;

// Legacy particle field
pub const LEGACY_CAPTURE_RADIUS: f32 = 200.0;
pub const LEGACY_CAPTURE_DECAY: f32 = 2.0; // per tick
pub const LEGACY_POINTER_START: f32 = -200.0;
pub const LEGACY_VELOCITY_DAMPING: f32 = 0.92;
pub const LEGACY_MAX_SPEED: f32 = 50.0;
pub const LEGACY_INITIAL_SPEED: f32 = 50.0; // initial velocity in [-v, v] per axis
pub const LEGACY_PUSH_MIN: f32 = 3.0;
pub const LEGACY_PUSH_SPAN: f32 = 98.0;
pub const LEGACY_RELAX_MIN: f32 = 0.1;
pub const LEGACY_RELAX_SPAN: f32 = 0.4;
pub const LEGACY_CAPTURED_RELAX: f32 = 0.005;
pub const LEGACY_SETTLE_EPSILON: f32 = 0.3;
pub const LEGACY_RADIUS_GROWTH_DIVISOR: f32 = 8.0;

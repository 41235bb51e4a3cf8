// Pure pointer and key helpers; kept free of web-sys so host tests can include them.
use glam::Vec2;

/// Client-space pointer position relative to an element's top-left corner.
#[inline]
pub fn client_to_local(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Vec2 {
    Vec2::new((client_x - origin_left) as f32, (client_y - origin_top) as f32)
}

#[inline]
pub fn is_overlay_toggle_key(key: &str) -> bool {
    matches!(key, "h" | "H")
}

/// setTimeout only takes whole milliseconds.
#[inline]
pub fn timeout_delay_ms(ms: f64) -> i32 {
    if ms.is_finite() {
        ms.round().max(0.0) as i32
    } else {
        0
    }
}

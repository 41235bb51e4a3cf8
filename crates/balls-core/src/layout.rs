//! The fixed decorative arrangement and the viewport it is centred in.

use crate::color::Color;
use crate::constants::{LAYOUT_ANCHOR_OFFSET_X, LAYOUT_ANCHOR_OFFSET_Y};
use glam::Vec2;

/// One ball of the artwork: offset from the layout anchor, radius tier, colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEntry {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

const fn entry(x: f32, y: f32, size: f32, hex: u32) -> LayoutEntry {
    LayoutEntry {
        x,
        y,
        size,
        color: Color::from_hex(hex),
    }
}

/// Table order is paint order: later entries cover earlier ones.
pub const LAYOUT: [LayoutEntry; 65] = [
    entry(202.0, 78.0, 9.0, 0xed9d33),
    entry(348.0, 83.0, 9.0, 0xd44d61),
    entry(256.0, 69.0, 9.0, 0x4f7af2),
    entry(214.0, 59.0, 9.0, 0xef9a1e),
    entry(265.0, 36.0, 9.0, 0x4976f3),
    entry(300.0, 78.0, 9.0, 0x269230),
    entry(294.0, 59.0, 9.0, 0x1f9e2c),
    entry(45.0, 88.0, 9.0, 0x1c48dd),
    entry(268.0, 52.0, 9.0, 0x2a56ea),
    entry(73.0, 83.0, 9.0, 0x3355d8),
    entry(294.0, 6.0, 9.0, 0x36b641),
    entry(235.0, 62.0, 9.0, 0x2e5def),
    entry(353.0, 42.0, 8.0, 0xd53747),
    entry(336.0, 52.0, 8.0, 0xeb676f),
    entry(208.0, 41.0, 8.0, 0xf9b125),
    entry(321.0, 70.0, 8.0, 0xde3646),
    entry(8.0, 60.0, 8.0, 0x2a59f0),
    entry(180.0, 81.0, 8.0, 0xeb9c31),
    entry(146.0, 65.0, 8.0, 0xc41731),
    entry(145.0, 49.0, 8.0, 0xd82038),
    entry(246.0, 34.0, 8.0, 0x5f8af8),
    entry(169.0, 69.0, 8.0, 0xefa11e),
    entry(273.0, 99.0, 8.0, 0x2e55e2),
    entry(248.0, 120.0, 8.0, 0x4167e4),
    entry(294.0, 41.0, 8.0, 0x0b991a),
    entry(267.0, 114.0, 8.0, 0x4869e3),
    entry(78.0, 67.0, 8.0, 0x3059e3),
    entry(294.0, 23.0, 8.0, 0x10a11d),
    entry(117.0, 83.0, 8.0, 0xcf4055),
    entry(137.0, 80.0, 8.0, 0xcd4359),
    entry(14.0, 71.0, 8.0, 0x2855ea),
    entry(331.0, 80.0, 8.0, 0xca273c),
    entry(25.0, 82.0, 8.0, 0x2650e1),
    entry(233.0, 46.0, 8.0, 0x4a7bf9),
    entry(73.0, 13.0, 8.0, 0x3d65e7),
    entry(327.0, 35.0, 6.0, 0xf47875),
    entry(319.0, 46.0, 6.0, 0xf36764),
    entry(256.0, 81.0, 6.0, 0x1d4eeb),
    entry(244.0, 88.0, 6.0, 0x698bf1),
    entry(194.0, 32.0, 6.0, 0xfac652),
    entry(97.0, 56.0, 6.0, 0xee5257),
    entry(105.0, 75.0, 6.0, 0xcf2a3f),
    entry(42.0, 4.0, 6.0, 0x5681f5),
    entry(10.0, 27.0, 6.0, 0x4577f6),
    entry(166.0, 55.0, 6.0, 0xf7b326),
    entry(266.0, 88.0, 6.0, 0x2b58e8),
    entry(178.0, 34.0, 6.0, 0xfacb5e),
    entry(100.0, 65.0, 6.0, 0xe02e3d),
    entry(343.0, 32.0, 6.0, 0xf16d6f),
    entry(59.0, 5.0, 6.0, 0x507bf2),
    entry(27.0, 9.0, 6.0, 0x5683f7),
    entry(233.0, 116.0, 6.0, 0x3158e2),
    entry(123.0, 32.0, 6.0, 0xf0696c),
    entry(6.0, 38.0, 6.0, 0x3769f6),
    entry(63.0, 62.0, 6.0, 0x6084ef),
    entry(6.0, 49.0, 6.0, 0x2a5cf4),
    entry(108.0, 36.0, 6.0, 0xf4716e),
    entry(169.0, 43.0, 6.0, 0xf8c247),
    entry(137.0, 37.0, 6.0, 0xe74653),
    entry(318.0, 58.0, 6.0, 0xec4147),
    entry(226.0, 100.0, 5.0, 0x4876f1),
    entry(101.0, 46.0, 5.0, 0xef5c5c),
    entry(226.0, 108.0, 5.0, 0x2552ea),
    entry(17.0, 17.0, 5.0, 0x4779f7),
    entry(232.0, 93.0, 5.0, 0x4b78f1),
];

/// Logical viewport size plus the device pixel ratio the host renders at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Backing store size in device pixels, never smaller than 1x1.
    pub fn device_size(&self) -> (u32, u32) {
        let dpr = if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        let w = (self.width * dpr).round().max(1.0) as u32;
        let h = (self.height * dpr).round().max(1.0) as u32;
        (w, h)
    }

    /// Top-left origin of the artwork for this viewport.
    pub fn layout_anchor(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - LAYOUT_ANCHOR_OFFSET_X,
            self.height / 2.0 - LAYOUT_ANCHOR_OFFSET_Y,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}

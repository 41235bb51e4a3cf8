//! The seam between the simulations and whatever the host draws with.
//!
//! Field mode paints immediate-mode circles onto a raster surface every
//! frame. Legacy mode drives retained elements (DOM nodes on the web) that
//! keep their last placement until moved again. A host implements the half
//! it supports; the other half stays a no-op.

use crate::color::Color;
use crate::layout::Viewport;
use glam::Vec2;

pub trait RenderSink {
    /// Wipe the raster surface before a field-mode frame.
    fn clear(&mut self) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

    /// Drop every retained element and create one per colour, in order.
    fn rebuild_elements(&mut self, _colors: &[Color]) {}

    /// Move retained element `index`; `left`/`top` is its top-left corner.
    fn place_element(&mut self, _index: usize, _left: f32, _top: f32, _diameter: f32) {}
}

/// Host window position and body width, sampled once per frame.
///
/// Legacy mode turns frame-to-frame changes of these into a shared push on
/// every particle, so dragging the browser window jostles the circles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowMetrics {
    pub screen_x: f32,
    pub screen_y: f32,
    pub client_width: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame, already clamped.
    pub delta: f32,
    pub window: WindowMetrics,
}

/// Common contract of the two animation algorithms.
pub trait Simulation {
    /// Called when the simulation becomes the active one.
    fn start(&mut self, window: WindowMetrics, sink: Option<&mut dyn RenderSink>);
    fn set_pointer(&mut self, x: f32, y: f32);
    fn recenter(&mut self, viewport: Viewport);
    /// One scheduled frame, including any drawing it does.
    fn frame(&mut self, input: &FrameInput, sink: Option<&mut dyn RenderSink>);
}

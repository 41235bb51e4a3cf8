use crate::gpu::InstanceData;
use balls_core::{AnimationMode, Color, RenderSink};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Element {
    color: [f32; 4],
    /// Centre and radius once placed; unplaced elements stay invisible.
    placed: Option<(Vec2, f32)>,
}

/// Collects one frame's circles for the GPU.
///
/// Field mode paints immediate circles that `clear` wipes. Legacy mode keeps
/// an element per particle that holds its last placement, like a DOM node.
#[derive(Default)]
pub struct NativeSink {
    circles: Vec<InstanceData>,
    elements: Vec<Element>,
}

impl NativeSink {
    pub fn instances(&self, mode: AnimationMode) -> Vec<InstanceData> {
        match mode {
            AnimationMode::Field => self.circles.clone(),
            AnimationMode::Legacy => self
                .elements
                .iter()
                .filter_map(|e| {
                    e.placed.map(|(center, radius)| InstanceData {
                        center: center.to_array(),
                        radius,
                        _pad: 0.0,
                        color: e.color,
                    })
                })
                .collect(),
        }
    }
}

impl RenderSink for NativeSink {
    fn clear(&mut self) {
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles.push(InstanceData {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color: color.to_linear_rgba(),
        });
    }

    fn rebuild_elements(&mut self, colors: &[Color]) {
        self.elements = colors
            .iter()
            .map(|c| Element {
                color: c.to_linear_rgba(),
                placed: None,
            })
            .collect();
    }

    fn place_element(&mut self, index: usize, left: f32, top: f32, diameter: f32) {
        if let Some(e) = self.elements.get_mut(index) {
            let r = diameter * 0.5;
            e.placed = Some((Vec2::new(left + r, top + r), r));
        }
    }
}

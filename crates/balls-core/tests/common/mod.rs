// Shared test sink that records every draw call.

#![allow(dead_code)]

use balls_core::{Color, RenderSink};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle { center: Vec2, radius: f32, color: Color },
    Rebuild(Vec<Color>),
    Place { index: usize, left: f32, top: f32, diameter: f32 },
}

#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn placements(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Place { .. }))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn rebuild_elements(&mut self, colors: &[Color]) {
        self.calls.push(DrawCall::Rebuild(colors.to_vec()));
    }

    fn place_element(&mut self, index: usize, left: f32, top: f32, diameter: f32) {
        self.calls.push(DrawCall::Place {
            index,
            left,
            top,
            diameter,
        });
    }
}

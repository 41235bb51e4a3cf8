use crate::constants::{LEGACY_CIRCLE_CLASS, LEGACY_CIRCLE_Z_INDEX};
use balls_core::{Color, RenderSink, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D raster target for field mode. Coordinates are CSS pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext('2d') failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("2d context has an unexpected type"))?;
        Ok(Self {
            canvas,
            ctx,
            viewport: Viewport::default(),
        })
    }

    /// Size the backing store in device pixels and keep drawing in CSS pixels.
    pub fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.device_size();
        // Assigning width/height also resets the context transform.
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        let dpr = viewport.device_pixel_ratio as f64;
        if let Err(e) = self.ctx.scale(dpr, dpr) {
            log::warn!("[render] ctx.scale failed: {:?}", e);
        }
        self.viewport = viewport;
    }
}

impl RenderSink for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.close_path();
        self.ctx.fill();
    }
}

/// One absolutely positioned `<div>` per legacy particle.
pub struct DomCircleLayer {
    document: web::Document,
    container: web::HtmlElement,
    circles: Vec<web::HtmlElement>,
}

impl DomCircleLayer {
    pub fn new(document: web::Document, container: web::HtmlElement) -> Self {
        Self {
            document,
            container,
            circles: Vec::new(),
        }
    }

    fn create_circle(&self, color: Color) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(LEGACY_CIRCLE_CLASS);
        let style = el.style();
        _ = style.set_property("position", "absolute");
        _ = style.set_property("z-index", LEGACY_CIRCLE_Z_INDEX);
        _ = style.set_property("border-radius", "50%");
        _ = style.set_property("background-color", &color.to_css());
        _ = self.container.append_child(&el);
        Some(el)
    }
}

impl RenderSink for DomCircleLayer {
    fn rebuild_elements(&mut self, colors: &[Color]) {
        while let Some(child) = self.container.first_child() {
            _ = self.container.remove_child(&child);
        }
        self.circles.clear();
        for &color in colors {
            match self.create_circle(color) {
                Some(el) => self.circles.push(el),
                None => {
                    log::error!("[render] failed to create legacy circle element");
                    return;
                }
            }
        }
        log::debug!("[render] rebuilt {} legacy circles", self.circles.len());
    }

    fn place_element(&mut self, index: usize, left: f32, top: f32, diameter: f32) {
        let Some(el) = self.circles.get(index) else {
            return;
        };
        let style = el.style();
        let d = format!("{}px", diameter);
        _ = style.set_property("width", &d);
        _ = style.set_property("height", &d);
        _ = style.set_property("left", &format!("{}px", left));
        _ = style.set_property("top", &format!("{}px", top));
    }
}

/// Routes each half of the sink contract to whichever target exists.
#[derive(Default)]
pub struct Targets {
    pub canvas: Option<CanvasSurface>,
    pub layer: Option<DomCircleLayer>,
}

impl Targets {
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(c) = &mut self.canvas {
            c.resize(viewport);
        }
    }
}

impl RenderSink for Targets {
    fn clear(&mut self) {
        if let Some(c) = &mut self.canvas {
            c.clear();
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if let Some(c) = &mut self.canvas {
            c.fill_circle(center, radius, color);
        }
    }

    fn rebuild_elements(&mut self, colors: &[Color]) {
        if let Some(l) = &mut self.layer {
            l.rebuild_elements(colors);
        }
    }

    fn place_element(&mut self, index: usize, left: f32, top: f32, diameter: f32) {
        if let Some(l) = &mut self.layer {
            l.place_element(index, left, top, diameter);
        }
    }
}

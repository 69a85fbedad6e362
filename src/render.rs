use echo_core::{Blend, Painter, Rgba, Stroke, Viewport};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Painter`] over a canvas 2D context. Drawing units are CSS pixels; the
/// device pixel ratio lives in the context transform.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// `None` while the canvas cannot hand out a 2D context.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    /// Re-applies the viewport transform. Resizing the backing store resets
    /// context state, so call after every resize.
    pub fn apply_viewport(&self, viewport: &Viewport) {
        let [a, b, c, d, e, f] = viewport.transform();
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::warn!("[render] set_transform failed: {:?}", err);
        }
    }

    fn stroke_style(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_string());
        self.ctx.set_line_width(stroke.width);
    }
}

impl Painter for CanvasPainter {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.stroke_style(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.stroke_style(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn stroke_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, stroke: Stroke) {
        self.stroke_style(stroke);
        self.ctx.begin_path();
        _ = self
            .ctx
            .ellipse(center.x, center.y, radii.x, radii.y, rotation, 0.0, TAU);
        self.ctx.stroke();
    }

    fn stroke_quadratic(&mut self, from: DVec2, control: DVec2, to: DVec2, stroke: Stroke) {
        self.stroke_style(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.quadratic_curve_to(control.x, control.y, to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.css_name());
    }
}

//! Drawing seam between the simulator and whatever surface shows it.
//!
//! Coordinates are in drawing units (CSS pixels); the surface applies the
//! device-pixel-ratio transform itself.

use glam::DVec2;
use std::fmt;

/// sRGB colour with straight alpha, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

/// Compositing mode for subsequent draw calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    #[default]
    SourceOver,
    /// Additive ("lighter") compositing.
    Lighter,
}

impl Blend {
    pub fn css_name(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

/// Immediate-mode 2D surface.
pub trait Painter {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: Stroke);
    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke);
    fn stroke_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, stroke: Stroke);
    fn stroke_quadratic(&mut self, from: DVec2, control: DVec2, to: DVec2, stroke: Stroke);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn set_blend(&mut self, blend: Blend);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        origin: DVec2,
        size: DVec2,
        color: Rgba,
    },
    Line {
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<DVec2>,
        stroke: Stroke,
    },
    Ellipse {
        center: DVec2,
        radii: DVec2,
        rotation: f64,
        stroke: Stroke,
    },
    Quadratic {
        from: DVec2,
        control: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    Blend(Blend),
}

/// Painter that records every call instead of rasterizing it. Used for
/// headless inspection of a frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// 1×1 filled rects, i.e. speckle marks.
    pub fn single_pixels(&self) -> impl Iterator<Item = (DVec2, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect {
                origin,
                size,
                color,
            } if *size == DVec2::ONE => Some((*origin, *color)),
            _ => None,
        })
    }

    pub fn ellipses(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Ellipse { .. }))
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[DVec2]> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2, Stroke)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (DVec2, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }
}

impl Painter for DrawList {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            origin,
            size,
            color,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, stroke: Stroke) {
        self.ops.push(DrawOp::Ellipse {
            center,
            radii,
            rotation,
            stroke,
        });
    }

    fn stroke_quadratic(&mut self, from: DVec2, control: DVec2, to: DVec2, stroke: Stroke) {
        self.ops.push(DrawOp::Quadratic {
            from,
            control,
            to,
            stroke,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn set_blend(&mut self, blend: Blend) {
        self.ops.push(DrawOp::Blend(blend));
    }
}

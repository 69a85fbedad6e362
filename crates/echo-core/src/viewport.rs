use crate::params::DepthCm;
use glam::DVec2;

/// Canvas geometry in CSS pixels plus the device pixel ratio.
///
/// Rendering and click mapping both work in CSS pixels; only the backing
/// store size and the context transform involve the ratio. Recompute on
/// every resize or ratio change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    css_size: DVec2,
    device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            css_size: DVec2::new(sanitize(css_width), sanitize(css_height)),
            device_pixel_ratio: dpr,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.css_size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.css_size.y
    }

    #[inline]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Backing-store size in device pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_size.x * self.device_pixel_ratio).floor() as u32;
        let h = (self.css_size.y * self.device_pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }

    /// `setTransform` arguments mapping one drawing unit to one CSS pixel.
    pub fn transform(&self) -> [f64; 6] {
        let s = self.device_pixel_ratio;
        [s, 0.0, 0.0, s, 0.0, 0.0]
    }

    /// Pixels per centimetre of imaging depth.
    #[inline]
    pub fn pixels_per_cm(&self, depth: DepthCm) -> f64 {
        self.css_size.y / depth.as_f64()
    }

    /// Client-space pointer position to canvas-local CSS pixels, given the
    /// canvas's top-left corner in client space.
    #[inline]
    pub fn to_canvas(&self, client: DVec2, canvas_origin: DVec2) -> DVec2 {
        client - canvas_origin
    }

    /// Media query that stops matching once the host's pixel ratio moves
    /// away from this viewport's.
    pub fn resolution_query(&self) -> String {
        format!("(resolution: {}dppx)", self.device_pixel_ratio)
    }

    /// Columns available to the M-mode trace.
    pub fn trace_capacity(&self) -> usize {
        self.css_size.x.floor() as usize
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_height_over_depth() {
        let vp = Viewport::new(640.0, 420.0, 2.0);
        assert_eq!(vp.pixels_per_cm(DepthCm::clamped(8)), 52.5);
        assert_eq!(vp.pixels_per_cm(DepthCm::clamped(12)), 35.0);
    }

    #[test]
    fn backing_store_follows_ratio() {
        let vp = Viewport::new(640.5, 420.0, 1.5);
        assert_eq!(vp.backing_size(), (960, 630));
        assert_eq!(vp.transform(), [1.5, 0.0, 0.0, 1.5, 0.0, 0.0]);
        assert_eq!(vp.trace_capacity(), 640);
    }

    #[test]
    fn bad_ratio_falls_back_to_one() {
        let vp = Viewport::new(100.0, 50.0, 0.0);
        assert_eq!(vp.device_pixel_ratio(), 1.0);
        let vp = Viewport::new(f64::NAN, 50.0, f64::INFINITY);
        assert_eq!(vp.width(), 0.0);
        assert_eq!(vp.device_pixel_ratio(), 1.0);
        assert_eq!(vp.backing_size(), (1, 50));
    }

    #[test]
    fn resolution_query_tracks_ratio() {
        assert_eq!(
            Viewport::new(640.0, 420.0, 2.0).resolution_query(),
            "(resolution: 2dppx)"
        );
        assert_eq!(
            Viewport::new(640.0, 420.0, 1.25).resolution_query(),
            "(resolution: 1.25dppx)"
        );
        assert_eq!(
            Viewport::new(640.0, 420.0, f64::NAN).resolution_query(),
            "(resolution: 1dppx)"
        );
    }

    #[test]
    fn client_points_shift_by_canvas_origin() {
        let vp = Viewport::new(640.0, 420.0, 2.0);
        let p = vp.to_canvas(DVec2::new(130.0, 260.0), DVec2::new(30.0, 60.0));
        assert_eq!(p, DVec2::new(100.0, 200.0));
    }
}

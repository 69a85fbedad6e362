//! Static parts of a frame: background, depth graticule and the chamber
//! silhouettes driven by the motion model.

use crate::constants::*;
use crate::paint::Painter;
use crate::params::{DepthCm, Preset};
use glam::DVec2;

pub fn draw_background<P: Painter + ?Sized>(painter: &mut P, size: DVec2) {
    painter.fill_rect(DVec2::ZERO, size, BACKGROUND);
}

/// One horizontal line per whole centimetre of depth plus the vertical sweep
/// grid.
pub fn draw_graticule<P: Painter + ?Sized>(painter: &mut P, size: DVec2, depth: DepthCm) {
    let scale = size.y / depth.as_f64();
    for i in 0..depth.get() {
        let y = (f64::from(i) * scale).floor() + PIXEL_CENTER;
        painter.stroke_line(DVec2::new(0.0, y), DVec2::new(size.x, y), GRATICULE_STROKE);
    }
    let mut x = 0.0;
    while x < size.x {
        painter.stroke_line(
            DVec2::new(x + PIXEL_CENTER, 0.0),
            DVec2::new(x + PIXEL_CENTER, size.y),
            GRATICULE_STROKE,
        );
        x += SWEEP_GRID_SPACING_PX;
    }
}

/// Preset-specific placement of the left-ventricle centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChamberLayout {
    pub center: DVec2,
}

impl ChamberLayout {
    pub fn for_preset(preset: Preset, size: DVec2) -> Self {
        let fx = match preset {
            Preset::ParasternalLongAxis => CENTER_X_PLAX,
            Preset::ParasternalShortAxis => CENTER_X_PSAX,
            Preset::ApicalFourChamber | Preset::Subcostal => CENTER_X_DEFAULT,
        };
        let fy = match preset {
            Preset::ParasternalShortAxis => CENTER_Y_PSAX,
            _ => CENTER_Y_DEFAULT,
        };
        Self {
            center: DVec2::new(size.x * fx, size.y * fy),
        }
    }

    pub fn lv_radii(&self, contraction: f64) -> DVec2 {
        DVec2::from_array(LV_RADII) * (1.0 - contraction * LV_SHRINK)
    }

    pub fn rv_center(&self) -> DVec2 {
        self.center + DVec2::from_array(RV_OFFSET)
    }

    pub fn rv_radii(&self, contraction: f64) -> DVec2 {
        DVec2::from_array(RV_RADII) * (1.0 - contraction * RV_SHRINK)
    }

    /// Control point of the valve curve; rises as the valve opens in
    /// diastole.
    pub fn valve_control(&self, contraction: f64) -> DVec2 {
        let open = VALVE_OPEN_MIN + VALVE_OPEN_SPAN * (1.0 - contraction);
        DVec2::new(self.center.x, self.center.y - VALVE_LIFT * open)
    }
}

pub fn draw_chambers<P: Painter + ?Sized>(painter: &mut P, layout: &ChamberLayout, contraction: f64) {
    painter.stroke_ellipse(
        layout.center,
        layout.lv_radii(contraction),
        LV_ROTATION,
        LV_STROKE,
    );
    painter.stroke_ellipse(
        layout.rv_center(),
        layout.rv_radii(contraction),
        RV_ROTATION,
        RV_STROKE,
    );
}

pub fn draw_valve<P: Painter + ?Sized>(painter: &mut P, layout: &ChamberLayout, contraction: f64) {
    let c = layout.center;
    painter.stroke_quadratic(
        DVec2::new(c.x - VALVE_HALF_SPAN, c.y),
        layout.valve_control(contraction),
        DVec2::new(c.x + VALVE_HALF_SPAN, c.y),
        VALVE_STROKE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::DrawList;

    #[test]
    fn graticule_line_counts() {
        let mut list = DrawList::new();
        draw_graticule(&mut list, DVec2::new(400.0, 420.0), DepthCm::clamped(8));
        let (horizontal, vertical): (Vec<_>, Vec<_>) =
            list.lines().partition(|(from, to, _)| from.y == to.y);
        assert_eq!(horizontal.len(), 8);
        assert_eq!(vertical.len(), 10); // 0, 40, ..., 360
        assert_eq!(horizontal[1].0.y, 52.5); // floor(52.5) + 0.5
        assert_eq!(horizontal[2].0.y, 105.5);
    }

    #[test]
    fn layouts_differ_per_preset() {
        let size = DVec2::new(1000.0, 500.0);
        let a4c = ChamberLayout::for_preset(Preset::ApicalFourChamber, size);
        let plax = ChamberLayout::for_preset(Preset::ParasternalLongAxis, size);
        let psax = ChamberLayout::for_preset(Preset::ParasternalShortAxis, size);
        let sub = ChamberLayout::for_preset(Preset::Subcostal, size);
        assert_eq!(a4c.center, DVec2::new(400.0, 275.0));
        assert_eq!(plax.center, DVec2::new(450.0, 275.0));
        assert_eq!(psax.center, DVec2::new(500.0, 225.0));
        assert_eq!(sub.center, a4c.center);
    }

    #[test]
    fn chambers_shrink_at_peak_contraction() {
        let layout = ChamberLayout::for_preset(Preset::ApicalFourChamber, DVec2::new(800.0, 420.0));
        assert_eq!(layout.lv_radii(0.0), DVec2::new(80.0, 120.0));
        let lv = layout.lv_radii(1.0);
        assert!((lv.x - 68.0).abs() < 1e-9 && (lv.y - 102.0).abs() < 1e-9);
        let rv = layout.rv_radii(1.0);
        assert!((rv.x - 54.0).abs() < 1e-9 && (rv.y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn valve_opens_in_diastole() {
        let layout = ChamberLayout::for_preset(Preset::ApicalFourChamber, DVec2::new(800.0, 420.0));
        let diastole = layout.valve_control(0.0);
        let systole = layout.valve_control(1.0);
        assert!(diastole.y < systole.y);
        assert!((layout.center.y - diastole.y - 14.0).abs() < 1e-9);
        assert!((layout.center.y - systole.y - 4.0).abs() < 1e-9);
    }
}

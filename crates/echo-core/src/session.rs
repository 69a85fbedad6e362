//! The simulator's owned per-frame state and the render step that threads it
//! through the scene, overlays and measurement layer.

use crate::measure::{
    distance_cm, draw_points, ClickOutcome, FrozenClicks, MeasurementRecord, PointBuffer,
};
use crate::motion::CardiacSample;
use crate::overlay::{draw_doppler, draw_mmode, mmode_sample, TraceBuffer};
use crate::paint::Painter;
use crate::params::{ImagingParameters, MeasurementTool, Mode};
use crate::scene::{draw_background, draw_chambers, draw_graticule, draw_valve, ChamberLayout};
use crate::speckle::{draw_speckle, Lcg, SeedSource};
use crate::viewport::Viewport;
use glam::DVec2;

/// Time, seed and parameters of a rendered frame; enough to redraw it
/// exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStamp {
    pub t_sec: f64,
    pub seed: u32,
    pub params: ImagingParameters,
}

/// What one frame drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub stamp: FrameStamp,
    pub speckles: usize,
    pub trace_len: usize,
}

#[derive(Clone, Debug)]
pub struct Session {
    params: ImagingParameters,
    tool: MeasurementTool,
    viewport: Viewport,
    trace: TraceBuffer,
    points: PointBuffer,
    frozen_clicks: FrozenClicks,
    last_frame: Option<FrameStamp>,
    // mode changed while frozen; the held frame still shows the old trace
    trace_reset_pending: bool,
}

impl Session {
    pub fn new(params: ImagingParameters, viewport: Viewport) -> Self {
        Self {
            params,
            tool: MeasurementTool::default(),
            viewport,
            trace: TraceBuffer::new(viewport.trace_capacity()),
            points: PointBuffer::default(),
            frozen_clicks: FrozenClicks::default(),
            last_frame: None,
            trace_reset_pending: false,
        }
    }

    pub fn with_frozen_clicks(mut self, policy: FrozenClicks) -> Self {
        self.frozen_clicks = policy;
        self
    }

    pub fn params(&self) -> &ImagingParameters {
        &self.params
    }

    pub fn tool(&self) -> MeasurementTool {
        self.tool
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    pub fn points(&self) -> &[DVec2] {
        self.points.as_slice()
    }

    pub fn frozen_clicks(&self) -> FrozenClicks {
        self.frozen_clicks
    }

    pub fn last_frame(&self) -> Option<FrameStamp> {
        self.last_frame
    }

    /// Current pixel/cm scale, derived from the live viewport and depth.
    pub fn pixels_per_cm(&self) -> f64 {
        self.viewport.pixels_per_cm(self.params.depth)
    }

    /// Applies `edit` to the parameters. Returns whether anything changed.
    /// A mode change empties the M-mode trace; while frozen the emptying
    /// waits for the next advancing frame.
    pub fn update_params(&mut self, edit: impl FnOnce(&mut ImagingParameters)) -> bool {
        let before = self.params;
        edit(&mut self.params);
        if self.params.mode != before.mode {
            if self.params.frozen {
                self.trace_reset_pending = true;
            } else {
                self.trace.clear();
                self.trace_reset_pending = false;
            }
            log::debug!("[session] mode {} -> {}", before.mode, self.params.mode);
        }
        self.params != before
    }

    /// Switching tools drops any half-finished measurement.
    pub fn set_tool(&mut self, tool: MeasurementTool) {
        if tool != self.tool {
            self.points.clear();
            self.tool = tool;
        }
    }

    /// Adopts a new viewport. Identical viewports are a no-op; otherwise the
    /// trace is rebuilt for the new width. Returns whether anything changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.trace.rebuild(viewport.trace_capacity());
        true
    }

    /// Renders one advancing frame at `t_sec`: samples the trace when in
    /// M-mode, then draws everything.
    pub fn render_frame<P, S>(&mut self, painter: &mut P, t_sec: f64, seeds: &mut S) -> FrameReport
    where
        P: Painter + ?Sized,
        S: SeedSource + ?Sized,
    {
        let stamp = FrameStamp {
            t_sec,
            seed: seeds.seed_for(t_sec),
            params: self.params,
        };
        if std::mem::take(&mut self.trace_reset_pending) {
            self.trace.clear();
        }
        if self.params.mode == Mode::MMode {
            let sample = CardiacSample::at(t_sec, self.params.heart_rate.as_f64());
            self.trace
                .push(mmode_sample(self.viewport.height(), sample.contraction));
        }
        let speckles = self.draw(painter, stamp);
        self.last_frame = Some(stamp);
        FrameReport {
            stamp,
            speckles,
            trace_len: self.trace.len(),
        }
    }

    /// Redraws the last frame without advancing the animation, with the
    /// parameters it was rendered with. Edits made since then show on the
    /// next advancing frame. Returns `false` if nothing has been rendered
    /// yet.
    pub fn repaint<P: Painter + ?Sized>(&self, painter: &mut P) -> bool {
        match self.last_frame {
            Some(stamp) => {
                self.draw(painter, stamp);
                true
            }
            None => false,
        }
    }

    fn draw<P: Painter + ?Sized>(&self, painter: &mut P, stamp: FrameStamp) -> usize {
        let size = DVec2::new(self.viewport.width(), self.viewport.height());
        let p = &stamp.params;
        let sample = CardiacSample::at(stamp.t_sec, p.heart_rate.as_f64());

        draw_background(painter, size);
        draw_graticule(painter, size, p.depth);
        let mut rng = Lcg::new(stamp.seed);
        let speckles = draw_speckle(painter, size.x, size.y, p.gain, &mut rng);

        let layout = ChamberLayout::for_preset(p.preset, size);
        draw_chambers(painter, &layout, sample.contraction);
        draw_valve(painter, &layout, sample.contraction);

        match p.mode {
            Mode::TwoD => {}
            Mode::MMode => draw_mmode(painter, &self.trace),
            Mode::Doppler => draw_doppler(painter, size, &sample, stamp.t_sec),
        }

        if !self.points.is_empty() {
            draw_points(painter, self.points.as_slice());
        }
        speckles
    }

    /// Feeds a click in canvas-local CSS pixels to the measurement layer.
    pub fn click(&mut self, point: DVec2, timestamp_ms: f64) -> ClickOutcome {
        if self.tool != MeasurementTool::Distance {
            return ClickOutcome::Ignored;
        }
        if self.params.frozen && self.frozen_clicks == FrozenClicks::Ignore {
            return ClickOutcome::Ignored;
        }
        self.points.push(point);
        match self.points.pair() {
            Some((a, b)) => {
                let cm = distance_cm(a, b, self.pixels_per_cm());
                self.points.clear();
                log::debug!("[measure] distance {:.2} cm", cm);
                ClickOutcome::Measured(MeasurementRecord::distance(cm, self.params, timestamp_ms))
            }
            None => ClickOutcome::Pending(point),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ImagingParameters::default(), Viewport::default())
    }
}

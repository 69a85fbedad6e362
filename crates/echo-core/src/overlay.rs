//! Mode overlays: the M-mode scrolling trace and the Doppler sweep.

use crate::constants::*;
use crate::motion::CardiacSample;
use crate::paint::{Blend, Painter};
use glam::DVec2;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of M-mode y-samples, one per column.
#[derive(Clone, Debug, Default)]
pub struct TraceBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest once past capacity.
    pub fn push(&mut self, y: f64) {
        self.samples.push_back(y);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Empties the buffer and adopts a new capacity.
    pub fn rebuild(&mut self, capacity: usize) {
        self.samples = VecDeque::with_capacity(capacity);
        self.capacity = capacity;
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

/// Mock LV wall position for this frame.
#[inline]
pub fn mmode_sample(height: f64, contraction: f64) -> f64 {
    height * (MMODE_Y_BASE + MMODE_Y_SPAN * contraction)
}

pub fn draw_mmode<P: Painter + ?Sized>(painter: &mut P, trace: &TraceBuffer) {
    if trace.is_empty() {
        return;
    }
    let points: Vec<DVec2> = trace
        .iter()
        .enumerate()
        .map(|(x, y)| DVec2::new(x as f64, y))
        .collect();
    painter.stroke_polyline(&points, MMODE_STROKE);
}

/// Column of the Doppler sweep at time `t`.
#[inline]
pub fn doppler_sweep_x(t_sec: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    ((t_sec * DOPPLER_SWEEP_PX_PER_SEC) % width).floor()
}

/// Baseline and peak y of the spectral line.
pub fn doppler_segment(height: f64, sample: &CardiacSample) -> (f64, f64) {
    let baseline = height * DOPPLER_BASELINE;
    let peak = baseline - sample.doppler_velocity() * (height * DOPPLER_PEAK_SPAN);
    (baseline, peak)
}

pub fn draw_doppler<P: Painter + ?Sized>(
    painter: &mut P,
    size: DVec2,
    sample: &CardiacSample,
    t_sec: f64,
) {
    let (baseline, peak) = doppler_segment(size.y, sample);
    let x = doppler_sweep_x(t_sec, size.x);
    painter.set_blend(Blend::Lighter);
    painter.stroke_line(DVec2::new(x, baseline), DVec2::new(x, peak), DOPPLER_STROKE);
    painter.set_blend(Blend::SourceOver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DrawList, DrawOp};

    #[test]
    fn trace_evicts_oldest_past_capacity() {
        let mut trace = TraceBuffer::new(3);
        for y in [1.0, 2.0, 3.0, 4.0] {
            trace.push(y);
        }
        assert_eq!(trace.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut trace = TraceBuffer::new(0);
        trace.push(1.0);
        assert!(trace.is_empty());
    }

    #[test]
    fn rebuild_empties_and_recaps() {
        let mut trace = TraceBuffer::new(4);
        trace.push(1.0);
        trace.rebuild(2);
        assert!(trace.is_empty());
        assert_eq!(trace.capacity(), 2);
    }

    #[test]
    fn sweep_wraps_at_width() {
        assert_eq!(doppler_sweep_x(0.5, 400.0), 60.0);
        assert_eq!(doppler_sweep_x(4.0, 400.0), 80.0); // 480 mod 400
        assert_eq!(doppler_sweep_x(1.0, 0.0), 0.0);
    }

    #[test]
    fn doppler_draws_additive_segment() {
        let mut list = DrawList::new();
        // quarter beat at 60 bpm -> peak forward flow
        let sample = CardiacSample::at(0.25, 60.0);
        draw_doppler(&mut list, DVec2::new(400.0, 400.0), &sample, 0.25);
        assert_eq!(list.ops()[0], DrawOp::Blend(Blend::Lighter));
        let (from, to, _) = list.lines().next().unwrap();
        assert_eq!(from.x, 30.0);
        assert!((from.y - 240.0).abs() < 1e-9);
        assert!((to.y - (240.0 - 0.9 * 180.0)).abs() < 1e-9);
        assert_eq!(list.ops().last(), Some(&DrawOp::Blend(Blend::SourceOver)));
    }

    #[test]
    fn mmode_polyline_uses_column_index() {
        let mut trace = TraceBuffer::new(10);
        trace.push(5.0);
        trace.push(6.0);
        let mut list = DrawList::new();
        draw_mmode(&mut list, &trace);
        let line = list.polylines().next().unwrap();
        assert_eq!(line, &[DVec2::new(0.0, 5.0), DVec2::new(1.0, 6.0)][..]);
    }
}

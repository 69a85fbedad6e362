//! Two-point distance measurement, the records it emits and the
//! newest-first log they land in.

use crate::constants::*;
use crate::paint::{Painter, Stroke};
use crate::params::ImagingParameters;
use glam::DVec2;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

pub const UNIT_CM: &str = "cm";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    Distance,
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementKind::Distance => f.write_str("Distance"),
        }
    }
}

/// A completed measurement. `meta` is the parameter snapshot at capture.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRecord {
    pub kind: MeasurementKind,
    pub value: f64,
    pub unit: &'static str,
    pub meta: ImagingParameters,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
}

impl MeasurementRecord {
    pub fn distance(value_cm: f64, meta: ImagingParameters, timestamp_ms: f64) -> Self {
        Self {
            kind: MeasurementKind::Distance,
            value: value_cm,
            unit: UNIT_CM,
            meta,
            timestamp_ms,
        }
    }

    pub fn formatted_value(&self) -> String {
        match self.kind {
            MeasurementKind::Distance => format!("{:.2} {}", self.value, self.unit),
        }
    }
}

/// What to do with clicks while the animation is frozen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrozenClicks {
    #[default]
    Ignore,
    Accept,
}

/// The two most recent clicks.
#[derive(Clone, Debug, Default)]
pub struct PointBuffer {
    points: SmallVec<[DVec2; 2]>,
}

impl PointBuffer {
    pub fn push(&mut self, p: DVec2) {
        if self.points.len() == 2 {
            self.points.remove(0);
        }
        self.points.push(p);
    }

    /// Both points once two are held.
    pub fn pair(&self) -> Option<(DVec2, DVec2)> {
        match self.points.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[inline]
pub fn distance_cm(a: DVec2, b: DVec2, pixels_per_cm: f64) -> f64 {
    a.distance(b) / pixels_per_cm
}

/// Result of feeding one click to the measurement layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Tool inactive, or frozen with [`FrozenClicks::Ignore`].
    Ignored,
    /// Point stored; waiting for the second one.
    Pending(DVec2),
    Measured(MeasurementRecord),
}

/// Filled markers for held points, joined when two are held.
pub fn draw_points<P: Painter + ?Sized>(painter: &mut P, points: &[DVec2]) {
    for p in points {
        painter.fill_circle(*p, MARKER_RADIUS, MARKER_COLOR);
    }
    if let [a, b] = points {
        painter.stroke_line(*a, *b, Stroke::new(MARKER_COLOR, MARKER_LINE_WIDTH));
    }
}

/// Metrics derived from the log for the summary cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMetrics {
    pub heart_rate_bpm: u16,
    pub fractional_shortening_pct: Option<f64>,
}

impl DerivedMetrics {
    pub fn fractional_shortening_text(&self) -> String {
        match self.fractional_shortening_pct {
            Some(fs) => format!("{fs:.1} %"),
            None => "—".to_string(),
        }
    }
}

/// Fractional shortening treating `lvedd_cm` as the diastolic dimension and
/// a fixed fraction of it as the systolic one. Decorative, not physiology.
pub fn fractional_shortening(lvedd_cm: f64) -> Option<f64> {
    if !(lvedd_cm.is_finite() && lvedd_cm > 0.0) {
        return None;
    }
    let lvesd = (lvedd_cm * LVESD_TO_LVEDD_RATIO).max(LVESD_MIN_CM);
    let fs = (lvedd_cm - lvesd) / lvedd_cm * 100.0;
    // a zero reading has nothing to show
    (fs != 0.0).then_some(fs)
}

/// Append-only, newest-first list of records with a clear-all.
#[derive(Clone, Debug, Default)]
pub struct MeasurementLog {
    records: VecDeque<MeasurementRecord>,
}

impl MeasurementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MeasurementRecord) {
        self.records.push_front(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &MeasurementRecord> + '_ {
        self.records.iter()
    }

    pub fn latest_distance(&self) -> Option<&MeasurementRecord> {
        self.records
            .iter()
            .find(|r| r.kind == MeasurementKind::Distance)
    }

    pub fn derived(&self) -> DerivedMetrics {
        let heart_rate_bpm = self
            .records
            .front()
            .map(|r| r.meta.heart_rate.get())
            .unwrap_or(DEFAULT_DERIVED_HEART_RATE);
        DerivedMetrics {
            heart_rate_bpm,
            fractional_shortening_pct: self
                .latest_distance()
                .and_then(|r| fractional_shortening(r.value)),
        }
    }
}

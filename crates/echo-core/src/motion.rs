use crate::constants::DOPPLER_VELOCITY_SCALE;
use std::f64::consts::TAU;

/// Phase of the virtual cardiac cycle, radians in `[0, 2π)` for `t >= 0`.
#[inline]
pub fn cardiac_phase(t_sec: f64, heart_rate_bpm: f64) -> f64 {
    let freq_hz = heart_rate_bpm / 60.0;
    (t_sec * freq_hz * TAU) % TAU
}

/// Normalized contraction: 0 at end-diastole, 1 at peak systole.
#[inline]
pub fn contraction(t_sec: f64, heart_rate_bpm: f64) -> f64 {
    (cardiac_phase(t_sec, heart_rate_bpm).sin() + 1.0) / 2.0
}

/// Forward-flow-only velocity envelope in `[0, 0.9]`.
#[inline]
pub fn doppler_velocity(phase: f64) -> f64 {
    (phase.sin() * DOPPLER_VELOCITY_SCALE).max(0.0)
}

/// One evaluation of the motion model, shared by every element drawn in a
/// frame so they stay phase-locked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardiacSample {
    pub phase: f64,
    pub contraction: f64,
}

impl CardiacSample {
    pub fn at(t_sec: f64, heart_rate_bpm: f64) -> Self {
        let phase = cardiac_phase(t_sec, heart_rate_bpm);
        Self {
            phase,
            contraction: (phase.sin() + 1.0) / 2.0,
        }
    }

    pub fn doppler_velocity(&self) -> f64 {
        doppler_velocity(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contraction_is_half_at_start_and_peaks_a_quarter_cycle_in() {
        assert!((contraction(0.0, 120.0) - 0.5).abs() < 1e-12);
        // 120 bpm -> 2 Hz -> quarter cycle at 0.125 s
        assert!((contraction(0.125, 120.0) - 1.0).abs() < 1e-12);
        assert!(contraction(0.375, 120.0).abs() < 1e-12);
    }

    #[test]
    fn phase_wraps_each_beat() {
        let hr = 90.0;
        let beat = 60.0 / hr;
        let a = cardiac_phase(0.1, hr);
        let b = cardiac_phase(0.1 + 3.0 * beat, hr);
        assert!((a - b).abs() < 1e-9);
        assert!((0.0..TAU).contains(&b));
    }

    #[test]
    fn sample_matches_free_functions() {
        let s = CardiacSample::at(1.234, 150.0);
        assert_eq!(s.phase, cardiac_phase(1.234, 150.0));
        assert_eq!(s.contraction, contraction(1.234, 150.0));
    }

    #[test]
    fn doppler_is_zero_during_reverse_half() {
        assert_eq!(doppler_velocity(1.5 * std::f64::consts::PI), 0.0);
        let peak = doppler_velocity(std::f64::consts::FRAC_PI_2);
        assert!((peak - 0.9).abs() < 1e-12);
    }
}

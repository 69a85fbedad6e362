//! Speckle noise: a 32-bit LCG seeded per frame scattering translucent
//! single-pixel marks whose density and brightness follow gain.

use crate::constants::*;
use crate::paint::Painter;
use crate::params::Gain;
use glam::DVec2;
use rand::{RngCore, SeedableRng};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// `s <- s * 1664525 + 1013904223 (mod 2^32)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        unit(self)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[inline]
fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    rng.next_u32() as f64 / TWO_POW_32
}

/// Where a frame's speckle seed comes from.
pub trait SeedSource {
    fn seed_for(&mut self, t_sec: f64) -> u32;
}

/// Seeds from the frame's millisecond timestamp, wrapping at 2^32.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock;

impl SeedSource for FrameClock {
    fn seed_for(&mut self, t_sec: f64) -> u32 {
        (t_sec * 1000.0).floor() as u64 as u32
    }
}

/// Same seed every frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn seed_for(&mut self, _t_sec: f64) -> u32 {
        self.0
    }
}

#[inline]
pub fn speckle_density(gain: Gain) -> f64 {
    SPECKLE_DENSITY_BASE + (gain.as_f64() / 100.0) * SPECKLE_DENSITY_GAIN
}

/// Number of marks plotted on a `width x height` surface.
pub fn speckle_count(width: f64, height: f64, gain: Gain) -> usize {
    let n = (width * height * speckle_density(gain) * SPECKLE_AREA_FACTOR).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Plots the speckle for one frame and returns how many marks were drawn.
pub fn draw_speckle<P, R>(painter: &mut P, width: f64, height: f64, gain: Gain, rng: &mut R) -> usize
where
    P: Painter + ?Sized,
    R: RngCore + ?Sized,
{
    let count = speckle_count(width, height, gain);
    let alpha_span = (gain.as_f64() / 100.0) * SPECKLE_ALPHA_GAIN;
    for _ in 0..count {
        let x = (unit(rng) * width).floor();
        let y = (unit(rng) * height).floor();
        let alpha = SPECKLE_ALPHA_MIN + unit(rng) * alpha_span;
        painter.fill_rect(DVec2::new(x, y), DVec2::ONE, SPECKLE_COLOR.with_alpha(alpha));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_matches_reference_sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_eq!(rng.next_u32(), 1_196_435_762);
        let mut rng = Lcg::new(1);
        assert_eq!(rng.next_u32(), 1_015_568_748);
    }

    #[test]
    fn unit_values_stay_in_half_open_range() {
        let mut rng = Lcg::new(123_456);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn from_seed_uses_little_endian() {
        let a = Lcg::from_seed(7u32.to_le_bytes());
        assert_eq!(a, Lcg::new(7));
    }

    #[test]
    fn frame_clock_floors_milliseconds_and_wraps() {
        let mut clock = FrameClock;
        assert_eq!(clock.seed_for(1.2345), 1234);
        assert_eq!(clock.seed_for(4_294_968.0), 704);
        assert_eq!(FixedSeed(9).seed_for(100.0), 9);
    }

    #[test]
    fn count_follows_area_and_gain() {
        // 400 * 420 * 0.305 * 0.002 = 102.48
        assert_eq!(speckle_count(400.0, 420.0, Gain::clamped(90)), 102);
        // 400 * 420 * 0.13 * 0.002 = 43.68
        assert_eq!(speckle_count(400.0, 420.0, Gain::clamped(20)), 43);
        assert_eq!(speckle_count(0.0, 420.0, Gain::clamped(90)), 0);
    }
}

//! Imaging parameters and the bounded values the control surface produces.
//!
//! Range checks happen here, at construction. Everything downstream (scene,
//! viewport scale, measurement) can rely on e.g. a depth that is never zero.

use crate::error::ParamError;
use std::fmt;
use std::str::FromStr;

macro_rules! bounded {
    ($(#[$meta:meta])* $name:ident($repr:ty), $label:literal, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            pub const MIN: $repr = $min;
            pub const MAX: $repr = $max;
            pub const DEFAULT: Self = Self($default);

            /// Rejects values outside `MIN..=MAX`.
            pub fn new(value: i64) -> Result<Self, ParamError> {
                if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
                    Ok(Self(value as $repr))
                } else {
                    Err(ParamError::OutOfRange {
                        name: $label,
                        value,
                        min: Self::MIN as i64,
                        max: Self::MAX as i64,
                    })
                }
            }

            /// Pins `value` into `MIN..=MAX`.
            pub fn clamped(value: i64) -> Self {
                Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as $repr)
            }

            #[inline]
            pub fn get(self) -> $repr {
                self.0
            }

            #[inline]
            pub fn as_f64(self) -> f64 {
                self.0 as f64
            }

            pub fn step(self, delta: i64) -> Self {
                Self::clamped(self.0 as i64 + delta)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded!(
    /// Simulated receive gain, percent.
    Gain(u8), "gain", 20, 90, 55
);
bounded!(
    /// Imaging depth in whole centimetres.
    DepthCm(u8), "depth", 4, 12, 8
);
bounded!(
    /// Heart rate in beats per minute. Pediatric rates run high.
    HeartRate(u16), "heart rate", 60, 180, 120
);

/// Named anatomical viewing angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    #[default]
    ApicalFourChamber,
    ParasternalLongAxis,
    ParasternalShortAxis,
    Subcostal,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::ApicalFourChamber,
        Preset::ParasternalLongAxis,
        Preset::ParasternalShortAxis,
        Preset::Subcostal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Preset::ApicalFourChamber => "Apical 4C",
            Preset::ParasternalLongAxis => "PLAX",
            Preset::ParasternalShortAxis => "PSAX",
            Preset::Subcostal => "Subcostal",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParamError::UnknownPreset(s.to_string()))
    }
}

/// Display mode. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    TwoD,
    MMode,
    Doppler,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::TwoD, Mode::MMode, Mode::Doppler];

    pub fn id(self) -> &'static str {
        match self {
            Mode::TwoD => "2D",
            Mode::MMode => "M-mode",
            Mode::Doppler => "Doppler",
        }
    }

    /// Next mode in button order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Mode::TwoD => Mode::MMode,
            Mode::MMode => Mode::Doppler,
            Mode::Doppler => Mode::TwoD,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParamError::UnknownMode(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeasurementTool {
    #[default]
    None,
    Distance,
    MTrace,
}

impl MeasurementTool {
    pub const ALL: [MeasurementTool; 3] = [
        MeasurementTool::None,
        MeasurementTool::Distance,
        MeasurementTool::MTrace,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MeasurementTool::None => "None",
            MeasurementTool::Distance => "Distance",
            MeasurementTool::MTrace => "M-Trace",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MeasurementTool::None => "No Tool",
            MeasurementTool::Distance => "2-Point Distance",
            MeasurementTool::MTrace => "M-mode Trace",
        }
    }

    /// Instruction shown next to the viewport status line.
    pub fn hint(self) -> &'static str {
        match self {
            MeasurementTool::Distance => "Click two points to measure (cm)",
            _ => "Use controls to change mode and view",
        }
    }
}

impl FromStr for MeasurementTool {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasurementTool::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParamError::UnknownTool(s.to_string()))
    }
}

/// Everything the renderer reads each frame. Copied wholesale into each
/// measurement as its snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImagingParameters {
    pub preset: Preset,
    pub mode: Mode,
    pub gain: Gain,
    pub depth: DepthCm,
    pub heart_rate: HeartRate,
    pub frozen: bool,
}

impl ImagingParameters {
    pub fn status_line(&self) -> String {
        format!(
            "{} · {} · Depth {} cm · Gain {}% · HR {} bpm",
            self.preset, self.mode, self.depth, self.gain, self.heart_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_boot_state() {
        let p = ImagingParameters::default();
        assert_eq!(p.preset, Preset::ApicalFourChamber);
        assert_eq!(p.mode, Mode::TwoD);
        assert_eq!(p.gain.get(), 55);
        assert_eq!(p.depth.get(), 8);
        assert_eq!(p.heart_rate.get(), 120);
        assert!(!p.frozen);
    }

    #[test]
    fn bounded_new_rejects_and_clamped_pins() {
        assert!(DepthCm::new(0).is_err());
        assert!(DepthCm::new(-3).is_err());
        assert!(DepthCm::new(13).is_err());
        assert_eq!(DepthCm::new(12).map(DepthCm::get), Ok(12));
        assert_eq!(DepthCm::clamped(0).get(), DepthCm::MIN);
        assert_eq!(Gain::clamped(500).get(), Gain::MAX);
        assert_eq!(HeartRate::clamped(59).get(), 60);

        match HeartRate::new(200) {
            Err(ParamError::OutOfRange { name, value, min, max }) => {
                assert_eq!(name, "heart rate");
                assert_eq!((value, min, max), (200, 60, 180));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn step_saturates_at_bounds() {
        let g = Gain::clamped(88).step(5);
        assert_eq!(g.get(), 90);
        let d = DepthCm::clamped(4).step(-1);
        assert_eq!(d.get(), 4);
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for p in Preset::ALL {
            assert_eq!(p.id().parse::<Preset>(), Ok(p));
        }
        for m in Mode::ALL {
            assert_eq!(m.id().parse::<Mode>(), Ok(m));
        }
        assert_eq!("m-trace".parse::<MeasurementTool>(), Ok(MeasurementTool::MTrace));
        assert!("A2C".parse::<Preset>().is_err());
    }

    #[test]
    fn tool_labels_are_distinct_and_readable() {
        let labels: Vec<_> = MeasurementTool::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["No Tool", "2-Point Distance", "M-mode Trace"]);
        for t in MeasurementTool::ALL {
            assert_ne!(t.label(), t.id());
        }
    }

    #[test]
    fn mode_cycle_visits_all() {
        let mut m = Mode::TwoD;
        let mut seen = vec![m];
        for _ in 0..2 {
            m = m.next();
            seen.push(m);
        }
        assert_eq!(seen, Mode::ALL.to_vec());
        assert_eq!(m.next(), Mode::TwoD);
    }

    #[test]
    fn status_line_lists_every_parameter() {
        let p = ImagingParameters::default();
        assert_eq!(
            p.status_line(),
            "Apical 4C · 2D · Depth 8 cm · Gain 55% · HR 120 bpm"
        );
    }
}

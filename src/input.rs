use crate::constants::{DEPTH_STEP, GAIN_STEP, HEART_RATE_STEP};
use echo_core::{ImagingParameters, MeasurementTool, Preset};

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleFreeze,
    Preset(Preset),
    CycleMode,
    Tool(MeasurementTool),
    Gain(i64),
    Depth(i64),
    HeartRate(i64),
    ClearMeasurements,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    let action = match key {
        " " | "f" | "F" => KeyAction::ToggleFreeze,
        "1" => KeyAction::Preset(Preset::ApicalFourChamber),
        "2" => KeyAction::Preset(Preset::ParasternalLongAxis),
        "3" => KeyAction::Preset(Preset::ParasternalShortAxis),
        "4" => KeyAction::Preset(Preset::Subcostal),
        "m" | "M" => KeyAction::CycleMode,
        "d" | "D" => KeyAction::Tool(MeasurementTool::Distance),
        "Escape" => KeyAction::Tool(MeasurementTool::None),
        "+" | "=" => KeyAction::Gain(GAIN_STEP),
        "-" | "_" => KeyAction::Gain(-GAIN_STEP),
        "ArrowUp" => KeyAction::Depth(DEPTH_STEP),
        "ArrowDown" => KeyAction::Depth(-DEPTH_STEP),
        "]" => KeyAction::HeartRate(HEART_RATE_STEP),
        "[" => KeyAction::HeartRate(-HEART_RATE_STEP),
        "c" | "C" => KeyAction::ClearMeasurements,
        _ => return None,
    };
    Some(action)
}

impl KeyAction {
    /// Applies parameter edits. Tool and clear actions are not parameter
    /// edits and leave `params` untouched.
    pub fn apply(self, params: &mut ImagingParameters) {
        match self {
            KeyAction::ToggleFreeze => params.frozen = !params.frozen,
            KeyAction::Preset(p) => params.preset = p,
            KeyAction::CycleMode => params.mode = params.mode.next(),
            KeyAction::Gain(d) => params.gain = params.gain.step(d),
            KeyAction::Depth(d) => params.depth = params.depth.step(d),
            KeyAction::HeartRate(d) => params.heart_rate = params.heart_rate.step(d),
            KeyAction::Tool(_) | KeyAction::ClearMeasurements => {}
        }
    }

    /// Keys the browser would otherwise scroll the page with.
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyAction::ToggleFreeze | KeyAction::Depth(_))
    }
}

use echo_core::FrozenClicks;

// Front-end wiring and interaction constants.

// DOM element ids
pub const CANVAS_ID: &str = "echo-canvas";
pub const STATUS_ID: &str = "viewport-status";
pub const TOOL_HINT_ID: &str = "viewport-hint";
pub const GAIN_INPUT_ID: &str = "gain-input";
pub const DEPTH_INPUT_ID: &str = "depth-input";
pub const HEART_RATE_INPUT_ID: &str = "hr-input";
pub const GAIN_LABEL_ID: &str = "gain-label";
pub const DEPTH_LABEL_ID: &str = "depth-label";
pub const HEART_RATE_LABEL_ID: &str = "hr-label";
pub const TOOL_SELECT_ID: &str = "tool-select";
pub const FREEZE_BUTTON_ID: &str = "freeze-button";
pub const CLEAR_BUTTON_ID: &str = "clear-measurements";
pub const MEASUREMENT_LIST_ID: &str = "measurement-list";
pub const DERIVED_HR_ID: &str = "derived-hr";
pub const DERIVED_FS_ID: &str = "derived-fs";
pub const HERO_SCENE_ID: &str = "hero-scene";

// Button groups are matched by data attribute, value = preset/mode id
pub const PRESET_ATTR: &str = "data-preset";
pub const MODE_ATTR: &str = "data-mode";
pub const ACTIVE_CLASS: &str = "active";

// Decorative hero scene, mounted as an opaque embed
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/2fSS9b44gtYBt4RI/scene.splinecode";

// Keyboard steps
pub const GAIN_STEP: i64 = 5; // percent
pub const DEPTH_STEP: i64 = 1; // cm
pub const HEART_RATE_STEP: i64 = 5; // bpm

// Clicks while frozen are dropped. `Accept` allows measuring on a frozen frame
pub const FROZEN_CLICKS: FrozenClicks = FrozenClicks::Ignore;

pub const EMPTY_LIST_TEXT: &str = "No measurements yet. Use the 2-point tool in the viewport.";

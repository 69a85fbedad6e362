// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use echo_core::{DepthCm, FrozenClicks, Gain, HeartRate};

#[test]
fn dom_ids_are_unique_and_non_empty() {
    let ids = [
        CANVAS_ID,
        STATUS_ID,
        TOOL_HINT_ID,
        GAIN_INPUT_ID,
        DEPTH_INPUT_ID,
        HEART_RATE_INPUT_ID,
        GAIN_LABEL_ID,
        DEPTH_LABEL_ID,
        HEART_RATE_LABEL_ID,
        TOOL_SELECT_ID,
        FREEZE_BUTTON_ID,
        CLEAR_BUTTON_ID,
        MEASUREMENT_LIST_ID,
        DERIVED_HR_ID,
        DERIVED_FS_ID,
        HERO_SCENE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are passed to getElementById: {a}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn group_attributes_are_data_attributes() {
    assert!(PRESET_ATTR.starts_with("data-"));
    assert!(MODE_ATTR.starts_with("data-"));
    assert_ne!(PRESET_ATTR, MODE_ATTR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn keyboard_steps_fit_parameter_ranges() {
    assert!(GAIN_STEP > 0 && GAIN_STEP < (Gain::MAX - Gain::MIN) as i64);
    assert!(DEPTH_STEP > 0 && DEPTH_STEP < (DepthCm::MAX - DepthCm::MIN) as i64);
    assert!(HEART_RATE_STEP > 0 && HEART_RATE_STEP < (HeartRate::MAX - HeartRate::MIN) as i64);
}

#[test]
fn frozen_clicks_default_is_ignore() {
    assert_eq!(FROZEN_CLICKS, FrozenClicks::Ignore);
    assert_eq!(FROZEN_CLICKS, FrozenClicks::default());
}

#[test]
fn hero_scene_url_is_https() {
    assert!(HERO_SCENE_URL.starts_with("https://"));
    assert!(HERO_SCENE_URL.ends_with(".splinecode"));
}

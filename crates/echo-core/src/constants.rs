use crate::paint::{Rgba, Stroke};

// Shared rendering/tuning constants for the scene, overlays and measurement layer.

// Background and graticule
pub const BACKGROUND: Rgba = Rgba::opaque(10, 10, 10); // #0a0a0a
pub const GRATICULE_STROKE: Stroke = Stroke::new(Rgba::new(255, 255, 255, 0.06), 1.0);
pub const SWEEP_GRID_SPACING_PX: f64 = 40.0; // decorative vertical lines
pub const PIXEL_CENTER: f64 = 0.5; // crisp 1px lines on the pixel grid

// Speckle
pub const SPECKLE_COLOR: Rgba = Rgba::new(200, 220, 255, 0.0); // alpha set per mark
pub const SPECKLE_DENSITY_BASE: f64 = 0.08;
pub const SPECKLE_DENSITY_GAIN: f64 = 0.25; // added density at 100% gain
pub const SPECKLE_AREA_FACTOR: f64 = 0.002; // marks per pixel of area at density 1
pub const SPECKLE_ALPHA_MIN: f64 = 0.05;
pub const SPECKLE_ALPHA_GAIN: f64 = 0.6; // alpha span at 100% gain

// Speckle LCG (Numerical Recipes constants)
pub const LCG_MULTIPLIER: u32 = 1_664_525;
pub const LCG_INCREMENT: u32 = 1_013_904_223;

// Chamber framing as fractions of canvas size
pub const CENTER_X_PLAX: f64 = 0.45;
pub const CENTER_X_PSAX: f64 = 0.5;
pub const CENTER_X_DEFAULT: f64 = 0.4;
pub const CENTER_Y_PSAX: f64 = 0.45;
pub const CENTER_Y_DEFAULT: f64 = 0.55;

// Left ventricle
pub const LV_RADII: [f64; 2] = [80.0, 120.0];
pub const LV_SHRINK: f64 = 0.15; // radius lost at peak contraction
pub const LV_ROTATION: f64 = -0.2;
pub const LV_STROKE: Stroke = Stroke::new(Rgba::new(180, 220, 255, 0.5), 2.0);

// Right ventricle
pub const RV_OFFSET: [f64; 2] = [90.0, 10.0]; // from the LV centre
pub const RV_RADII: [f64; 2] = [60.0, 100.0];
pub const RV_SHRINK: f64 = 0.10;
pub const RV_ROTATION: f64 = -0.1;
pub const RV_STROKE: Stroke = Stroke::new(Rgba::new(160, 200, 255, 0.35), 2.0);

// Mitral valve hint
pub const VALVE_HALF_SPAN: f64 = 40.0;
pub const VALVE_LIFT: f64 = 20.0; // control-point rise at full opening
pub const VALVE_OPEN_MIN: f64 = 0.2;
pub const VALVE_OPEN_SPAN: f64 = 0.5;
pub const VALVE_STROKE: Stroke = Stroke::new(Rgba::new(200, 240, 255, 0.6), 1.5);

// M-mode trace
pub const MMODE_Y_BASE: f64 = 0.3; // fraction of height at end-diastole
pub const MMODE_Y_SPAN: f64 = 0.25;
pub const MMODE_STROKE: Stroke = Stroke::new(Rgba::new(0, 255, 200, 0.9), 1.0);

// Doppler sweep
pub const DOPPLER_VELOCITY_SCALE: f64 = 0.9;
pub const DOPPLER_BASELINE: f64 = 0.6; // fraction of height
pub const DOPPLER_PEAK_SPAN: f64 = 0.45; // fraction of height at v = 1
pub const DOPPLER_SWEEP_PX_PER_SEC: f64 = 120.0;
pub const DOPPLER_STROKE: Stroke = Stroke::new(Rgba::new(0, 255, 180, 0.8), 1.0);

// Measurement markers
pub const MARKER_COLOR: Rgba = Rgba::new(255, 200, 0, 0.9);
pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_LINE_WIDTH: f64 = 2.0;

// Derived metrics
pub const DEFAULT_DERIVED_HEART_RATE: u16 = 120;
pub const LVESD_TO_LVEDD_RATIO: f64 = 0.7; // mock systolic dimension
pub const LVESD_MIN_CM: f64 = 0.1;

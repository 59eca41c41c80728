// Centralized configuration for field sampling and rendering

// ====================
// Physics Constants
// ====================
/// Coulomb's constant used for every potential and field evaluation.
pub const COULOMB_K: f64 = 9.0e9;

// ====================
// Color/Length Mapping
// ====================
/// Upper end of the potential color domain (volts). Values at or above clamp to the warmest swatch.
pub const POT_MAX: f64 = 9.0e9;
/// Lower end of the potential color domain (volts). Values below clamp to the coolest swatch.
pub const POT_MIN: f64 = -9.0e9;
/// Field magnitude that maps to a length ratio of 1.0 before quantization.
pub const FIELD_MAX: f64 = 1.0e5;

// ====================
// Field-Line Tracing
// ====================
/// Length in pixels of each traced segment (and of the seed segments around a charge).
pub const TRACE_STEP: f64 = 16.0;
/// Number of seed rays emitted around each charge.
pub const SEED_RAYS: usize = 8;
/// Angular offset of the first seed ray, as a fraction of a full turn (22.5 degrees).
pub const SEED_ANGLE_OFFSET: f64 = std::f64::consts::TAU / 16.0;
/// Hard cap on segments per traced line. Keeps a frame bounded when a line never leaves the canvas.
pub const MAX_TRACE_STEPS: usize = 4096;

// ====================
// Lattice (Discrete Mode)
// ====================
pub const LATTICE_STRIDE: u32 = 20; // Pixels between neighbouring sample points
pub const LATTICE_OFFSET: u32 = 10; // Margin between the play-area edge and the first sample

// ====================
// Window/Play Area
// ====================
pub const PLAY_AREA_WIDTH: f64 = 1180.0; // Play area width in pixels
pub const PLAY_AREA_HEIGHT: f64 = 880.0; // Play area height in pixels
/// Half the side of the square hit box around a charge icon.
pub const CHARGE_HALF_EXTENT: f64 = 15.0;

// ====================
// Runtime Config File
// ====================
pub const DEFAULT_CONFIG_FILE: &str = "visualizer.toml";

/// Multiplier applied to `length * gravity` (golden ratio, three decimals).
pub const GOLDEN_RATIO: f64 = 1.618;

/// Resonant frequency of an unfolded fragment, in Hz.
pub const BASE_FREQUENCY_HZ: f64 = 440.0;

/// Complexity units per quantum knot.
pub const KNOT_SIZE: f64 = 10.0;

/// Gravity at or above which a fold ruptures.
pub const RUPTURE_GRAVITY: f64 = 10.0;

/// Gravity above which the dashboard reports dimensional instability.
pub const INSTABILITY_GRAVITY: f64 = 15.0;

pub const DEFAULT_GRAVITY: f64 = 1.0;

pub const DEFAULT_SPIRAL_SAMPLES: usize = 500;

/// Spiral parameter `t` runs over `[0, SPIRAL_SPAN]`.
pub const SPIRAL_SPAN: f64 = 10.0;

/// Spiral height `z` runs over `[0, SPIRAL_DEPTH]`.
pub const SPIRAL_DEPTH: f64 = 5.0;

/// Label used for symbols with no note.
pub const SILENT_NOTE_LABEL: &str = "None";

pub const GENE_SONG_SEPARATOR: &str = " ➔ ";

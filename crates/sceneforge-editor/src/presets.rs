//! Option lists offered by the editor's pickers.
//!
//! Each form starts on one of these entries; the `DEFAULT_*` constants name
//! which one.

use sceneforge_scene::FontWeight;

// ── Text ────────────────────────────────────────────────────────

pub const FONT_SIZES: [f64; 10] = [12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 64.0, 72.0, 96.0];

pub const FONT_FAMILIES: [&str; 5] = [
    "System",
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Courier New",
];

/// Weights offered in the text editor, with display labels.
pub const FONT_WEIGHTS: [(&str, FontWeight); 4] = [
    ("Normal", FontWeight::Normal),
    ("Bold", FontWeight::Bold),
    ("Light", FontWeight::W300),
    ("Heavy", FontWeight::W700),
];

pub const DEFAULT_FONT_SIZE: f64 = FONT_SIZES[6];
pub const DEFAULT_FONT_FAMILY: &str = FONT_FAMILIES[0];
pub const DEFAULT_FONT_WEIGHT: FontWeight = FONT_WEIGHTS[1].1;

pub const TEXT_COLORS: [&str; 10] = [
    "#FFFFFF", "#000000", "#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#8B5CF6", "#EC4899",
    "#6B7280", "#FCD34D",
];

// ── Shape ───────────────────────────────────────────────────────

/// Named fill colours.
pub const SHAPE_COLORS: [(&str, &str); 10] = [
    ("Red", "#EF4444"),
    ("Orange", "#F97316"),
    ("Yellow", "#EAB308"),
    ("Green", "#22C55E"),
    ("Blue", "#3B82F6"),
    ("Purple", "#A855F7"),
    ("Pink", "#EC4899"),
    ("Gray", "#6B7280"),
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
];

/// Blue.
pub const DEFAULT_SHAPE_FILL: &str = SHAPE_COLORS[4].1;

pub const BORDER_WIDTHS: [f64; 6] = [0.0, 1.0, 2.0, 4.0, 6.0, 8.0];
pub const DEFAULT_BORDER_WIDTH: f64 = BORDER_WIDTHS[0];

pub const OPACITY_OPTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
pub const DEFAULT_OPACITY: f64 = OPACITY_OPTIONS[3];

// ── Image ───────────────────────────────────────────────────────

pub const IMAGE_OPACITY_OPTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
pub const DEFAULT_IMAGE_OPACITY: f64 = IMAGE_OPACITY_OPTIONS[3];

// ── Animation ───────────────────────────────────────────────────

/// Milliseconds.
pub const DURATIONS: [u32; 6] = [300, 500, 800, 1000, 1500, 2000];
pub const DEFAULT_DURATION: u32 = DURATIONS[1];

/// Milliseconds.
pub const DELAYS: [u32; 4] = [0, 200, 500, 1000];
pub const DEFAULT_DELAY: u32 = DELAYS[0];

// ── Audio ───────────────────────────────────────────────────────

pub const VOLUME_OPTIONS: [f64; 4] = [0.25, 0.5, 0.7, 1.0];
pub const DEFAULT_VOLUME: f64 = VOLUME_OPTIONS[2];

/// Milliseconds.
pub const FADE_IN_OPTIONS: [u32; 4] = [0, 500, 1000, 2000];
pub const DEFAULT_FADE_IN: u32 = FADE_IN_OPTIONS[2];

/// Milliseconds.
pub const FADE_OUT_OPTIONS: [u32; 4] = [0, 500, 1000, 2000];
pub const DEFAULT_FADE_OUT: u32 = FADE_OUT_OPTIONS[2];

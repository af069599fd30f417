//! Color constants for the demo widgets.

// === BRAND ===
pub const BRAND_GREEN: &str = "#07c160";

// === NEUTRALS ===
pub const LAYER: &str = "#ebedf0";
pub const FILL_SOFT: &str = "#f7f8fa";

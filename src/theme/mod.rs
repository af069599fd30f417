//! Gallery theme: page layout styles and demo colors.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

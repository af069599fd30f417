//! Gallery context.
//!
//! Provides the loaded [`GalleryConfig`] to all pages via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(crate::gallery_config()));
//!
//! // In pages
//! let config = use_gallery_config();
//! ```

use dioxus::prelude::*;
use vantui_core::GalleryConfig;

/// Hook to access the gallery presets from context.
pub fn use_gallery_config() -> Signal<GalleryConfig> {
    use_context::<Signal<GalleryConfig>>()
}

/// Hook to read the configured animation frame interval.
pub fn use_frame_ms() -> f64 {
    use_gallery_config().read().frame_ms
}

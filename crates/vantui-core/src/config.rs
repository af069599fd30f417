//! Gallery configuration
//!
//! A JSON document listing the circle presets and the dialog preset shown by
//! the gallery app and the CLI. Every field is optional; missing fields take
//! the widget defaults.
//!
//! ```json
//! {
//!   "frame_ms": 16,
//!   "circles": [
//!     { "rate": 70, "text": "70%", "color": { "0%": "#3fecff", "100%": "#6149f6" } },
//!     { "rate": 40, "start_position": "right", "speed": 0 }
//!   ],
//!   "dialog": { "title": "Title", "message": "Body", "show_cancel_button": true }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::animation::DEFAULT_FRAME_MS;
use crate::circle::CircleConfig;
use crate::color::CircleColor;
use crate::dialog::DialogConfig;
use crate::error::VantResult;
use crate::geometry::{Linecap, StartPosition};

/// File name looked up under the user's config directory
pub const CONFIG_FILE_NAME: &str = "gallery.json";

/// Presets for the gallery and CLI
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Interval between animation frames in milliseconds
    pub frame_ms: f64,
    pub circles: Vec<CircleConfig>,
    pub dialog: DialogConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let gradient = CircleColor::gradient([("0%", "#3fecff"), ("100%", "#6149f6")])
            .unwrap_or_default();

        Self {
            frame_ms: DEFAULT_FRAME_MS,
            circles: vec![
                CircleConfig {
                    rate: 70.0,
                    text: Some("solid".to_string()),
                    layer_color: Some("#ebedf0".to_string()),
                    ..Default::default()
                },
                CircleConfig {
                    rate: 70.0,
                    color: gradient,
                    text: Some("gradient".to_string()),
                    layer_color: Some("#ebedf0".to_string()),
                    ..Default::default()
                },
                CircleConfig {
                    rate: 70.0,
                    clockwise: false,
                    stroke_width: 60.0,
                    stroke_linecap: Some(Linecap::Round),
                    color: CircleColor::Solid("#ee0a24".to_string()),
                    text: Some("counter".to_string()),
                    layer_color: Some("#ebedf0".to_string()),
                    ..Default::default()
                },
                CircleConfig {
                    rate: 70.0,
                    start_position: StartPosition::Left,
                    color: CircleColor::Solid("#07c160".to_string()),
                    text: Some("left".to_string()),
                    layer_color: Some("#ebedf0".to_string()),
                    ..Default::default()
                },
                CircleConfig {
                    rate: 70.0,
                    speed: 0.0,
                    text: Some("instant".to_string()),
                    layer_color: Some("#ebedf0".to_string()),
                    ..Default::default()
                },
            ],
            dialog: DialogConfig::confirm("Proceed with the changes?").with_title("Title"),
        }
    }
}

impl GalleryConfig {
    /// Read a config file.
    pub fn load(path: &Path) -> VantResult<Self> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        info!(path = %path.display(), "loaded gallery config");
        Ok(config)
    }

    /// Read a config file, or fall back to defaults when it does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> VantResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no gallery config, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_json_pretty(&self) -> VantResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

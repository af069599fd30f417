//! Class names and inline sizes
//!
//! Widgets use BEM class names under a shared prefix: block `vt-circle`,
//! element `vt-circle__hover`, modifier `vt-dialog--round-button`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VantError;

/// Prefix shared by every widget class name
pub const CLASS_PREFIX: &str = "vt";

/// BEM class-name builder for one widget block
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bem {
    block: &'static str,
}

impl Bem {
    pub const fn new(block: &'static str) -> Self {
        Self { block }
    }

    /// The block class, e.g. `vt-circle`
    pub fn block(&self) -> String {
        format!("{CLASS_PREFIX}-{}", self.block)
    }

    /// An element class, e.g. `vt-circle__hover`
    pub fn element(&self, element: &str) -> String {
        format!("{}__{element}", self.block())
    }

    /// A block modifier class, e.g. `vt-dialog--round-button`
    pub fn modifier(&self, modifier: &str) -> String {
        format!("{}--{modifier}", self.block())
    }
}

/// Join class names, skipping empty ones
pub fn class_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A CSS length: bare numbers are pixels, anything else is used verbatim
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl Dimension {
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Px(px) => format!("{px}px"),
            Dimension::Css(value) => value.clone(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Dimension::Px(px)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Px(f64::from(px))
    }
}

impl FromStr for Dimension {
    type Err = VantError;

    /// `"120"` parses as pixels; `"50%"`, `"10rem"` are kept as written.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VantError::InvalidDimension(s.to_string()));
        }
        match trimmed.parse::<f64>() {
            Ok(px) if px.is_finite() => Ok(Dimension::Px(px)),
            Ok(_) => Err(VantError::InvalidDimension(s.to_string())),
            Err(_) => Ok(Dimension::Css(trimmed.to_string())),
        }
    }
}

/// Inline `width`/`height` declarations for a square widget
pub fn size_style(size: Option<&Dimension>) -> String {
    match size {
        Some(size) => {
            let css = size.to_css();
            format!("width: {css}; height: {css};")
        }
        None => String::new(),
    }
}

/// Join inline style fragments, skipping empty ones
pub fn merge_styles<'a>(styles: impl IntoIterator<Item = &'a str>) -> String {
    styles
        .into_iter()
        .map(|s| s.trim().trim_end_matches(';'))
        .filter(|s| !s.is_empty())
        .map(|s| format!("{s};"))
        .collect::<Vec<_>>()
        .join(" ")
}

//! Circle geometry
//!
//! The ring is drawn as a single SVG path made of two half-circle arcs with a
//! fixed radius of 500 units. The view box grows with the stroke width so the
//! stroke is never clipped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VantError;

/// Arc radius in view box units
pub const RADIUS: f64 = 500.0;

/// Total dash length used to encode the rate on the hover arc
pub const PERIMETER: f64 = 3140.0;

/// Default stroke width in view box units
pub const DEFAULT_STROKE_WIDTH: f64 = 40.0;

/// Side length of the square view box for a given stroke width.
pub fn view_box_size(stroke_width: f64) -> f64 {
    stroke_width + 2.0 * RADIUS
}

/// SVG path data for the full ring.
///
/// Starts at the top of the circle and draws two half arcs. Both arcs share
/// the same sweep flag: `1` clockwise, `0` counter-clockwise.
pub fn arc_path(clockwise: bool, view_box_size: f64) -> String {
    let sweep = if clockwise { 1 } else { 0 };
    let center = view_box_size / 2.0;
    format!(
        "M {center} {center} m 0, -{r} a {r}, {r} 0 1, {sweep} 0, {d} a {r}, {r} 0 1, {sweep} 0, -{d}",
        r = RADIUS,
        d = RADIUS * 2.0,
    )
}

/// Where the ring's fill begins
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl StartPosition {
    /// Rotation from the default top start, in degrees
    pub fn angle(&self) -> u16 {
        match self {
            StartPosition::Top => 0,
            StartPosition::Right => 90,
            StartPosition::Bottom => 180,
            StartPosition::Left => 270,
        }
    }

    /// CSS transform for the SVG element, omitted for a zero angle
    pub fn rotation(&self) -> Option<String> {
        match self.angle() {
            0 => None,
            angle => Some(format!("rotate({angle}deg)")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StartPosition::Top => "top",
            StartPosition::Right => "right",
            StartPosition::Bottom => "bottom",
            StartPosition::Left => "left",
        }
    }
}

impl fmt::Display for StartPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartPosition {
    type Err = VantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(StartPosition::Top),
            "right" => Ok(StartPosition::Right),
            "bottom" => Ok(StartPosition::Bottom),
            "left" => Ok(StartPosition::Left),
            _ => Err(VantError::InvalidStartPosition(s.to_string())),
        }
    }
}

/// Shape of the hover arc's ends
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linecap {
    Butt,
    Round,
    Square,
}

impl Linecap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Linecap::Butt => "butt",
            Linecap::Round => "round",
            Linecap::Square => "square",
        }
    }
}

impl FromStr for Linecap {
    type Err = VantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "butt" => Ok(Linecap::Butt),
            "round" => Ok(Linecap::Round),
            "square" => Ok(Linecap::Square),
            _ => Err(VantError::InvalidLinecap(s.to_string())),
        }
    }
}

/// Dash array for the hover arc: the filled length, then the full perimeter.
pub fn dash_array(rate: f64) -> String {
    let filled = PERIMETER * rate / 100.0;
    format!("{filled}px {PERIMETER}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_box_adds_diameter() {
        assert_eq!(view_box_size(40.0), 1040.0);
        assert_eq!(view_box_size(0.0), 1000.0);
    }

    #[test]
    fn clockwise_path() {
        assert_eq!(
            arc_path(true, 1040.0),
            "M 520 520 m 0, -500 a 500, 500 0 1, 1 0, 1000 a 500, 500 0 1, 1 0, -1000"
        );
    }

    #[test]
    fn sweep_flag_is_the_only_difference() {
        let cw = arc_path(true, 1040.0);
        let ccw = arc_path(false, 1040.0);
        assert_eq!(cw.replace("0 1, 1 ", "0 1, 0 "), ccw);

        let differing: Vec<(char, char)> = cw
            .chars()
            .zip(ccw.chars())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(differing, vec![('1', '0'), ('1', '0')]);
    }

    #[test]
    fn fractional_center() {
        assert!(arc_path(true, 1041.0).starts_with("M 520.5 520.5 "));
    }

    #[test]
    fn rotation_table() {
        assert_eq!(StartPosition::Top.rotation(), None);
        assert_eq!(StartPosition::Right.rotation().as_deref(), Some("rotate(90deg)"));
        assert_eq!(StartPosition::Bottom.rotation().as_deref(), Some("rotate(180deg)"));
        assert_eq!(StartPosition::Left.rotation().as_deref(), Some("rotate(270deg)"));
    }

    #[test]
    fn start_position_parse() {
        assert_eq!("Left".parse::<StartPosition>().unwrap(), StartPosition::Left);
        assert!("diagonal".parse::<StartPosition>().is_err());
        assert_eq!(StartPosition::default(), StartPosition::Top);
    }

    #[test]
    fn start_position_serde() {
        let json = serde_json::to_string(&StartPosition::Bottom).unwrap();
        assert_eq!(json, "\"bottom\"");
    }

    #[test]
    fn dash_array_encodes_rate() {
        assert_eq!(dash_array(0.0), "0px 3140px");
        assert_eq!(dash_array(50.0), "1570px 3140px");
        assert_eq!(dash_array(100.0), "3140px 3140px");
    }
}

//! Stroke colors for the circle
//!
//! A circle is painted with either one solid color or a linear gradient
//! described by an offset → color mapping. The mapping is resolved once into
//! stops sorted by their numeric offset.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{VantError, VantResult};

/// Default stroke color of the hover arc
pub const DEFAULT_COLOR: &str = "#1989fa";

/// Default stroke color of the background arc
pub const DEFAULT_LAYER_COLOR: &str = "#ffffff";

/// One stop of a linear gradient
#[derive(Clone, PartialEq, Debug)]
pub struct GradientStop {
    /// Offset exactly as supplied (e.g. `"10%"`), used as the SVG attribute
    pub offset: String,
    /// Parsed numeric offset used for ordering
    pub position: f64,
    pub color: String,
}

/// Resolved stroke paint
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "ColorSpec", into = "ColorSpec")]
pub enum CircleColor {
    Solid(String),
    Gradient(Vec<GradientStop>),
}

impl Default for CircleColor {
    fn default() -> Self {
        CircleColor::Solid(DEFAULT_COLOR.to_string())
    }
}

impl CircleColor {
    /// Build a gradient from an offset → color mapping.
    pub fn gradient<I, K, V>(stops: I) -> VantResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Ok(CircleColor::Gradient(sort_gradient_stops(stops)?))
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, CircleColor::Gradient(_))
    }

    /// Stroke value for the hover arc; gradients reference their definition
    /// element by id.
    pub fn stroke(&self, gradient_id: &str) -> String {
        match self {
            CircleColor::Solid(color) => color.clone(),
            CircleColor::Gradient(_) => format!("url(#{gradient_id})"),
        }
    }
}

/// Wire form of [`CircleColor`]: a string or an offset → color object
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Solid(String),
    Gradient(GradientMap),
}

/// Offset → color entries in the order they were written
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradientMap(pub Vec<(String, String)>);

impl Serialize for GradientMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (offset, color) in &self.0 {
            map.serialize_entry(offset, color)?;
        }
        map.end()
    }
}

struct GradientMapVisitor;

impl<'de> Visitor<'de> for GradientMapVisitor {
    type Value = GradientMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of gradient offsets to colors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, String>()? {
            entries.push(entry);
        }
        Ok(GradientMap(entries))
    }
}

impl<'de> Deserialize<'de> for GradientMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GradientMapVisitor)
    }
}

impl TryFrom<ColorSpec> for CircleColor {
    type Error = VantError;

    fn try_from(spec: ColorSpec) -> Result<Self, Self::Error> {
        match spec {
            ColorSpec::Solid(color) => Ok(CircleColor::Solid(color)),
            ColorSpec::Gradient(map) => CircleColor::gradient(map.0),
        }
    }
}

impl From<CircleColor> for ColorSpec {
    fn from(color: CircleColor) -> Self {
        match color {
            CircleColor::Solid(color) => ColorSpec::Solid(color),
            CircleColor::Gradient(stops) => ColorSpec::Gradient(GradientMap(
                stops.into_iter().map(|s| (s.offset, s.color)).collect(),
            )),
        }
    }
}

/// Parse the leading number of an offset key (`"10%"` → `10.0`).
pub fn parse_offset(key: &str) -> Option<f64> {
    let trimmed = key.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| {
            !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0))
        })
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Order gradient stops ascending by the numeric value of their offsets.
///
/// Stops with equal offsets keep their input order.
pub fn sort_gradient_stops<I, K, V>(stops: I) -> VantResult<Vec<GradientStop>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut sorted = stops
        .into_iter()
        .map(|(offset, color)| {
            let offset = offset.into();
            let position = parse_offset(&offset)
                .ok_or_else(|| VantError::InvalidGradientOffset(offset.clone()))?;
            Ok(GradientStop {
                offset,
                position,
                color: color.into(),
            })
        })
        .collect::<VantResult<Vec<_>>>()?;

    if sorted.is_empty() {
        return Err(VantError::EmptyGradient);
    }

    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_numerically_not_lexicographically() {
        let stops = sort_gradient_stops([("50", "red"), ("10", "blue"), ("100", "green")]).unwrap();
        let order: Vec<(&str, &str)> = stops
            .iter()
            .map(|s| (s.offset.as_str(), s.color.as_str()))
            .collect();
        assert_eq!(order, vec![("10", "blue"), ("50", "red"), ("100", "green")]);
    }

    #[test]
    fn percent_offsets() {
        let stops = sort_gradient_stops([("100%", "#3fecff"), ("0%", "#6149f6")]).unwrap();
        assert_eq!(stops[0].offset, "0%");
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[1].position, 100.0);
    }

    #[test]
    fn parse_offset_variants() {
        assert_eq!(parse_offset("10"), Some(10.0));
        assert_eq!(parse_offset("12.5%"), Some(12.5));
        assert_eq!(parse_offset(" 7 "), Some(7.0));
        assert_eq!(parse_offset("-3"), Some(-3.0));
        assert_eq!(parse_offset("abc"), None);
        assert_eq!(parse_offset(""), None);
    }

    #[test]
    fn invalid_offset_is_an_error() {
        let err = sort_gradient_stops([("start", "red")]).unwrap_err();
        assert!(matches!(err, VantError::InvalidGradientOffset(ref k) if k == "start"));
    }

    #[test]
    fn empty_gradient_is_an_error() {
        let empty: Vec<(String, String)> = Vec::new();
        assert!(matches!(sort_gradient_stops(empty), Err(VantError::EmptyGradient)));
    }

    #[test]
    fn stroke_references_gradient_id() {
        let solid = CircleColor::Solid("red".to_string());
        assert_eq!(solid.stroke("vt-circle-x"), "red");

        let gradient = CircleColor::gradient([("0", "red"), ("100", "blue")]).unwrap();
        assert_eq!(gradient.stroke("vt-circle-x"), "url(#vt-circle-x)");
    }

    #[test]
    fn deserialize_string_or_map() {
        let solid: CircleColor = serde_json::from_str("\"#ee0a24\"").unwrap();
        assert_eq!(solid, CircleColor::Solid("#ee0a24".to_string()));

        let gradient: CircleColor =
            serde_json::from_str(r##"{"100%": "#3fecff", "0%": "#6149f6"}"##).unwrap();
        match gradient {
            CircleColor::Gradient(stops) => {
                assert_eq!(stops.len(), 2);
                assert_eq!(stops[0].color, "#6149f6");
            }
            other => panic!("expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn deserialize_equal_offsets_keep_written_order() {
        let gradient: CircleColor =
            serde_json::from_str(r#"{"50": "late", "10%": "first", "10": "second"}"#).unwrap();
        let CircleColor::Gradient(stops) = gradient else {
            panic!("expected gradient");
        };
        let colors: Vec<&str> = stops.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["first", "second", "late"]);
    }

    #[test]
    fn serialize_gradient_as_object() {
        let gradient = CircleColor::gradient([("100%", "blue"), ("0%", "red")]).unwrap();
        let json = serde_json::to_string(&gradient).unwrap();
        assert_eq!(json, r#"{"0%":"red","100%":"blue"}"#);
    }

    #[test]
    fn deserialize_rejects_bad_offset() {
        assert!(serde_json::from_str::<CircleColor>(r#"{"x": "red"}"#).is_err());
    }
}

//! Circle progress widget model
//!
//! [`CircleConfig`] is the widget's option set. [`CircleRender`] is everything
//! a renderer needs for one frame, derived from the config and the rate
//! currently on display. Nothing here schedules or mutates; animation lives in
//! [`crate::animation`].

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_SPEED;
use crate::color::{CircleColor, GradientStop};
use crate::geometry::{self, Linecap, StartPosition, DEFAULT_STROKE_WIDTH};
use crate::id::ElementId;
use crate::rate::clamp_rate;
use crate::style::{class_names, merge_styles, size_style, Bem, Dimension};

/// Class-name builder for the circle block
pub const CIRCLE: Bem = Bem::new("circle");

/// Options recognized by the circle widget
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Target rate, 0-100
    pub rate: f64,
    /// Rate currently on display; the animation starts here
    pub current_rate: f64,
    /// Rate units per second; 0 jumps straight to the target
    pub speed: f64,
    pub clockwise: bool,
    /// Fill of the ring's interior
    pub fill: String,
    pub stroke_width: f64,
    pub start_position: StartPosition,
    pub color: CircleColor,
    pub layer_color: Option<String>,
    pub stroke_linecap: Option<Linecap>,
    pub size: Option<Dimension>,
    pub text: Option<String>,
    pub class_name: Option<String>,
    pub style: Option<String>,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            rate: 100.0,
            current_rate: 0.0,
            speed: DEFAULT_SPEED,
            clockwise: true,
            fill: "none".to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            start_position: StartPosition::Top,
            color: CircleColor::default(),
            layer_color: None,
            stroke_linecap: None,
            size: None,
            text: None,
            class_name: None,
            style: None,
        }
    }
}

impl CircleConfig {
    /// Stroke width with negative and non-finite values replaced.
    pub fn effective_stroke_width(&self) -> f64 {
        if self.stroke_width.is_finite() {
            self.stroke_width.max(0.0)
        } else {
            DEFAULT_STROKE_WIDTH
        }
    }

    pub fn target_rate(&self) -> f64 {
        clamp_rate(self.rate)
    }

    /// Render model for the rate currently on display.
    pub fn render(&self, displayed_rate: f64, id: &ElementId) -> CircleRender {
        CircleRender::new(self, displayed_rate, id)
    }
}

/// Gradient definition referenced by the hover arc
#[derive(Clone, PartialEq, Debug)]
pub struct GradientDef {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl GradientDef {
    // Right to left, matching a clockwise sweep from the top
    pub const X1: &'static str = "100%";
    pub const Y1: &'static str = "0%";
    pub const X2: &'static str = "0%";
    pub const Y2: &'static str = "0%";
}

/// Class and inline style of one arc
#[derive(Clone, PartialEq, Debug)]
pub struct ArcRender {
    pub class: String,
    pub style: String,
    /// Stroke attribute, set on the hover arc only
    pub stroke: Option<String>,
}

/// Everything needed to draw the circle once
#[derive(Clone, PartialEq, Debug)]
pub struct CircleRender {
    pub class: String,
    pub container_style: String,
    pub view_box_size: f64,
    pub view_box: String,
    /// Rotation of the SVG element in degrees
    pub rotation: u16,
    /// Inline style of the SVG element; `None` at the default start position
    pub svg_style: Option<String>,
    pub path: String,
    pub gradient: Option<GradientDef>,
    pub layer: ArcRender,
    pub hover: ArcRender,
    pub text: Option<String>,
    pub text_class: String,
    pub rate: f64,
}

impl CircleRender {
    pub fn new(config: &CircleConfig, displayed_rate: f64, id: &ElementId) -> Self {
        let rate = clamp_rate(displayed_rate);
        let stroke_width = config.effective_stroke_width();
        let view_box_size = geometry::view_box_size(stroke_width);
        let path = geometry::arc_path(config.clockwise, view_box_size);

        let svg_style = config
            .start_position
            .rotation()
            .map(|transform| format!("transform: {transform};"));

        let gradient = match &config.color {
            CircleColor::Gradient(stops) => Some(GradientDef {
                id: id.to_string(),
                stops: stops.clone(),
            }),
            CircleColor::Solid(_) => None,
        };

        let stroke = config.color.stroke(id.as_str());
        let linecap = config
            .stroke_linecap
            .map(|cap| format!("stroke-linecap: {}", cap.as_str()))
            .unwrap_or_default();
        let hover = ArcRender {
            class: CIRCLE.element("hover"),
            style: merge_styles([
                format!("stroke: {stroke}").as_str(),
                format!("stroke-width: {}px", stroke_width + 1.0).as_str(),
                linecap.as_str(),
                format!("stroke-dasharray: {}", geometry::dash_array(rate)).as_str(),
            ]),
            stroke: Some(stroke),
        };

        let layer_stroke = config
            .layer_color
            .as_deref()
            .map(|color| format!("stroke: {color}"))
            .unwrap_or_default();
        let layer = ArcRender {
            class: CIRCLE.element("layer"),
            style: merge_styles([
                format!("fill: {}", config.fill).as_str(),
                layer_stroke.as_str(),
                format!("stroke-width: {stroke_width}px").as_str(),
            ]),
            stroke: None,
        };

        let block = CIRCLE.block();
        let class = class_names([block.as_str(), config.class_name.as_deref().unwrap_or("")]);
        let sizing = size_style(config.size.as_ref());
        let container_style =
            merge_styles([config.style.as_deref().unwrap_or(""), sizing.as_str()]);

        Self {
            class,
            container_style,
            view_box_size,
            view_box: format!("0 0 {view_box_size} {view_box_size}"),
            rotation: config.start_position.angle(),
            svg_style,
            path,
            gradient,
            layer,
            hover,
            text: config.text.clone().filter(|t| !t.is_empty()),
            text_class: CIRCLE.element("text"),
            rate,
        }
    }

    /// Standalone SVG document for this frame.
    ///
    /// The text slot becomes a centered `<text>` element since there is no
    /// surrounding HTML container.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"{}\" viewBox=\"{}\"",
            escape_xml(&self.class),
            self.view_box
        ));
        if let Some(style) = &self.svg_style {
            out.push_str(&format!(" style=\"{}\"", escape_xml(style)));
        }
        out.push_str(">\n");

        if let Some(gradient) = &self.gradient {
            out.push_str(&format!(
                "  <defs>\n    <linearGradient id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">\n",
                escape_xml(&gradient.id),
                GradientDef::X1,
                GradientDef::Y1,
                GradientDef::X2,
                GradientDef::Y2
            ));
            for stop in &gradient.stops {
                out.push_str(&format!(
                    "      <stop offset=\"{}\" stop-color=\"{}\"/>\n",
                    escape_xml(&stop.offset),
                    escape_xml(&stop.color)
                ));
            }
            out.push_str("    </linearGradient>\n  </defs>\n");
        }

        out.push_str(&format!(
            "  <path class=\"{}\" style=\"{}\" d=\"{}\"/>\n",
            self.layer.class,
            escape_xml(&self.layer.style),
            self.path
        ));
        out.push_str(&format!(
            "  <path class=\"{}\" style=\"{}\" stroke=\"{}\" d=\"{}\"/>\n",
            self.hover.class,
            escape_xml(&self.hover.style),
            escape_xml(self.hover.stroke.as_deref().unwrap_or("")),
            self.path
        ));

        if let Some(text) = &self.text {
            let center = self.view_box_size / 2.0;
            // Counter-rotate so the label stays upright
            let transform = match self.rotation {
                0 => String::new(),
                angle => format!(" transform=\"rotate(-{angle} {center} {center})\""),
            };
            out.push_str(&format!(
                "  <text class=\"{}\" x=\"{center}\" y=\"{center}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"160\"{transform}>{}</text>\n",
                self.text_class,
                escape_xml(text)
            ));
        }

        out.push_str("</svg>\n");
        out
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ElementId {
        ElementId::from_string("ring")
    }

    #[test]
    fn defaults() {
        let config = CircleConfig::default();
        assert_eq!(config.rate, 100.0);
        assert_eq!(config.current_rate, 0.0);
        assert_eq!(config.speed, 100.0);
        assert!(config.clockwise);
        assert_eq!(config.fill, "none");
        assert_eq!(config.stroke_width, 40.0);
        assert_eq!(config.start_position, StartPosition::Top);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CircleConfig =
            serde_json::from_str(r#"{"rate": 30, "start_position": "left"}"#).unwrap();
        assert_eq!(config.rate, 30.0);
        assert_eq!(config.start_position, StartPosition::Left);
        assert_eq!(config.stroke_width, 40.0);
        assert!(config.clockwise);
    }

    #[test]
    fn render_state() {
        let render = CircleConfig::default().render(50.0, &id());
        assert_eq!(render.view_box_size, 1040.0);
        assert_eq!(render.view_box, "0 0 1040 1040");
        assert_eq!(render.svg_style, None);
        assert_eq!(render.path, geometry::arc_path(true, 1040.0));
        assert!(render.gradient.is_none());
        assert_eq!(render.class, "vt-circle");
    }

    #[test]
    fn hover_encodes_displayed_rate() {
        let render = CircleConfig::default().render(25.0, &id());
        assert_eq!(render.hover.class, "vt-circle__hover");
        assert_eq!(
            render.hover.style,
            "stroke: #1989fa; stroke-width: 41px; stroke-dasharray: 785px 3140px;"
        );
        assert_eq!(render.hover.stroke.as_deref(), Some("#1989fa"));
    }

    #[test]
    fn layer_style() {
        let config = CircleConfig {
            layer_color: Some("#ebedf0".to_string()),
            ..Default::default()
        };
        let render = config.render(0.0, &id());
        assert_eq!(
            render.layer.style,
            "fill: none; stroke: #ebedf0; stroke-width: 40px;"
        );
    }

    #[test]
    fn rotation_applied_off_top() {
        let config = CircleConfig {
            start_position: StartPosition::Right,
            ..Default::default()
        };
        let render = config.render(0.0, &id());
        assert_eq!(render.svg_style.as_deref(), Some("transform: rotate(90deg);"));
    }

    #[test]
    fn gradient_uses_instance_id() {
        let config = CircleConfig {
            color: CircleColor::gradient([("100%", "#3fecff"), ("0%", "#6149f6")]).unwrap(),
            ..Default::default()
        };
        let render = config.render(10.0, &id());
        let gradient = render.gradient.expect("gradient");
        assert_eq!(gradient.id, "ring");
        assert_eq!(gradient.stops[0].offset, "0%");
        assert_eq!(render.hover.stroke.as_deref(), Some("url(#ring)"));
    }

    #[test]
    fn container_class_and_size() {
        let config = CircleConfig {
            class_name: Some("big".to_string()),
            size: Some(Dimension::Px(120.0)),
            style: Some("margin: 4px".to_string()),
            ..Default::default()
        };
        let render = config.render(0.0, &id());
        assert_eq!(render.class, "vt-circle big");
        assert_eq!(render.container_style, "margin: 4px; width: 120px; height: 120px;");
    }

    #[test]
    fn empty_text_is_no_text() {
        let config = CircleConfig {
            text: Some(String::new()),
            ..Default::default()
        };
        assert!(config.render(0.0, &id()).text.is_none());
    }

    #[test]
    fn bad_stroke_width_falls_back() {
        let config = CircleConfig {
            stroke_width: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.effective_stroke_width(), 40.0);
        let config = CircleConfig {
            stroke_width: -10.0,
            ..Default::default()
        };
        assert_eq!(config.effective_stroke_width(), 0.0);
    }

    #[test]
    fn svg_document_order() {
        let config = CircleConfig {
            color: CircleColor::gradient([("0", "red"), ("100", "blue")]).unwrap(),
            text: Some("70%".to_string()),
            start_position: StartPosition::Bottom,
            ..Default::default()
        };
        let svg = config.render(70.0, &id()).to_svg();

        let defs = svg.find("<defs>").unwrap();
        let layer = svg.find("vt-circle__layer").unwrap();
        let hover = svg.find("vt-circle__hover").unwrap();
        assert!(defs < layer && layer < hover);
        assert!(svg.contains("rotate(180deg)"));
        assert!(svg.contains("rotate(-180 520 520)"));
        assert!(svg.contains(">70%</text>"));
    }

    #[test]
    fn svg_escapes_text() {
        let config = CircleConfig {
            text: Some("<b>".to_string()),
            ..Default::default()
        };
        let svg = config.render(0.0, &id()).to_svg();
        assert!(svg.contains("&lt;b&gt;"));
    }
}

//! Circle Progress Component
//!
//! Renders an annular progress indicator as an inline SVG and eases the fill
//! toward a new `rate` whenever it changes.
//!
//! The SVG contains, in order: an optional gradient definition, the
//! background "layer" arc, and the foreground "hover" arc whose dash array
//! encodes the displayed rate.

use dioxus::prelude::*;
use vantui_core::animation::{DEFAULT_FRAME_MS, DEFAULT_SPEED};
use vantui_core::circle::{CircleConfig, GradientDef, CIRCLE};
use vantui_core::geometry::DEFAULT_STROKE_WIDTH;
use vantui_core::{CircleColor, Dimension, ElementId, Linecap, StartPosition};

use crate::hooks::{use_rate_animation, RateAnimation};

/// Properties for the Circle component
#[derive(Clone, PartialEq, Props)]
pub struct CircleProps {
    /// Target rate, 0-100 (default: 100)
    #[props(default = 100.0)]
    pub rate: f64,
    /// Caller-tracked displayed rate. Leave unset to let the circle track
    /// it; set it together with `on_change` to own the value.
    #[props(default)]
    pub current_rate: Option<f64>,
    /// Rate units per second; 0 jumps straight to the target (default: 100)
    #[props(default = DEFAULT_SPEED)]
    pub speed: f64,
    #[props(default = true)]
    pub clockwise: bool,
    #[props(default = "none".to_string())]
    pub fill: String,
    #[props(default = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,
    #[props(default)]
    pub start_position: StartPosition,
    /// Solid color or gradient stops (default: #1989fa)
    #[props(default)]
    pub color: CircleColor,
    #[props(default)]
    pub layer_color: Option<String>,
    #[props(default)]
    pub stroke_linecap: Option<Linecap>,
    /// Width and height of the container
    #[props(default)]
    pub size: Option<Dimension>,
    /// Centered label; takes precedence over children
    #[props(default)]
    pub text: Option<String>,
    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Additional inline style
    #[props(default)]
    pub style: Option<String>,
    /// DOM id of the gradient definition; generated when unset
    #[props(default)]
    pub id: Option<String>,
    /// Milliseconds between animation frames (default: 16)
    #[props(default = DEFAULT_FRAME_MS)]
    pub frame_ms: f64,
    /// Called with the displayed rate on every animation frame
    #[props(default)]
    pub on_change: Option<EventHandler<f64>>,
    /// Content shown in the center when there is no `text`
    pub children: Element,
}

impl CircleProps {
    /// The framework-independent option set these props describe
    pub fn config(&self) -> CircleConfig {
        CircleConfig {
            rate: self.rate,
            current_rate: self.current_rate.unwrap_or(0.0),
            speed: self.speed,
            clockwise: self.clockwise,
            fill: self.fill.clone(),
            stroke_width: self.stroke_width,
            start_position: self.start_position,
            color: self.color.clone(),
            layer_color: self.layer_color.clone(),
            stroke_linecap: self.stroke_linecap,
            size: self.size.clone(),
            text: self.text.clone(),
            class_name: self.class.clone(),
            style: self.style.clone(),
        }
    }
}

/// Animated circular progress indicator
///
/// # Example
///
/// ```rust,ignore
/// let mut rate = use_signal(|| 30.0);
///
/// rsx! {
///     Circle {
///         rate: rate(),
///         text: format!("{}%", rate()),
///         color: CircleColor::gradient([("0%", "#3fecff"), ("100%", "#6149f6")])?,
///         size: Dimension::Px(120.0),
///     }
///     button { onclick: move |_| rate += 10.0, "+10" }
/// }
/// ```
#[component]
pub fn Circle(props: CircleProps) -> Element {
    let id = use_hook(|| match props.id.clone() {
        Some(id) => ElementId::from_string(id),
        None => ElementId::generate(&CIRCLE.block()),
    });

    let displayed = use_rate_animation(RateAnimation {
        target: props.rate,
        start: props.current_rate,
        speed: props.speed,
        frame_ms: props.frame_ms,
        on_change: props.on_change.clone(),
    });
    let shown = match props.current_rate {
        Some(rate) => rate,
        None => displayed(),
    };

    let render = props.config().render(shown, &id);
    let layer = render.layer.clone();
    let hover = render.hover.clone();

    rsx! {
        div {
            class: "{render.class}",
            style: "{render.container_style}",
            svg {
                view_box: "{render.view_box}",
                style: render.svg_style.clone(),
                if let Some(gradient) = render.gradient.clone() {
                    defs {
                        linearGradient {
                            id: "{gradient.id}",
                            x1: GradientDef::X1,
                            y1: GradientDef::Y1,
                            x2: GradientDef::X2,
                            y2: GradientDef::Y2,
                            for (index, stop) in gradient.stops.iter().enumerate() {
                                stop {
                                    key: "{index}",
                                    offset: "{stop.offset}",
                                    stop_color: "{stop.color}",
                                }
                            }
                        }
                    }
                }
                path { class: "{layer.class}", style: "{layer.style}", d: "{render.path}" }
                path {
                    class: "{hover.class}",
                    style: "{hover.style}",
                    stroke: hover.stroke.clone(),
                    d: "{render.path}",
                }
            }
            if let Some(text) = render.text.clone() {
                div { class: "{render.text_class}", "{text}" }
            } else {
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> CircleProps {
        CircleProps {
            rate: 100.0,
            current_rate: None,
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
            class: None,
            style: None,
            id: None,
            frame_ms: DEFAULT_FRAME_MS,
            on_change: None,
            children: VNode::empty(),
        }
    }

    #[test]
    fn default_props_match_widget_defaults() {
        assert_eq!(props().config(), CircleConfig::default());
    }

    #[test]
    fn props_carry_into_config() {
        let props = CircleProps {
            rate: 30.0,
            current_rate: Some(12.0),
            start_position: StartPosition::Bottom,
            class: Some("ring".to_string()),
            ..props()
        };
        let config = props.config();
        assert_eq!(config.rate, 30.0);
        assert_eq!(config.current_rate, 12.0);
        assert_eq!(config.start_position, StartPosition::Bottom);
        assert_eq!(config.class_name.as_deref(), Some("ring"));
    }
}

//! Circle page - every configured preset with rate controls.

use dioxus::prelude::*;
use vantui_core::rate::clamp_rate;
use vantui_core::{CircleColor, CircleConfig, Dimension};
use vantui_ui::{Button, ButtonVariant, Circle};

use crate::components::{DemoSection, NavHeader, NavLocation};
use crate::context::{use_frame_ms, use_gallery_config};
use crate::theme::colors;

/// Rate change applied by the +/- buttons
const STEP: f64 = 10.0;

/// Circle showcase page.
#[component]
pub fn Circles() -> Element {
    let config = use_gallery_config();
    let frame_ms = use_frame_ms();
    let presets = config.read().circles.clone();

    rsx! {
        NavHeader { current: NavLocation::Circles }

        main { class: "page",
            DemoSection { title: "Presets".to_string(),
                div { class: "preset-grid",
                    for (index, preset) in presets.into_iter().enumerate() {
                        CirclePreset { key: "{index}", preset, frame_ms }
                    }
                }
            }

            DemoSection { title: "Controlled".to_string(),
                ControlledCircle { frame_ms }
            }

            DemoSection { title: "Custom content".to_string(),
                div { class: "preset-grid",
                    Circle {
                        rate: 45.0,
                        size: Some(Dimension::Px(120.0)),
                        color: CircleColor::Solid(colors::BRAND_GREEN.to_string()),
                        layer_color: Some(colors::LAYER.to_string()),
                        frame_ms,
                        span { class: "circle-slot", "slot" }
                    }
                    Circle {
                        rate: 80.0,
                        size: Some(Dimension::Css("8rem".to_string())),
                        stroke_width: 80.0,
                        fill: colors::FILL_SOFT.to_string(),
                        text: Some("thick".to_string()),
                        frame_ms,
                    }
                }
            }
        }
    }
}

/// One preset with its own target rate and +/- controls
#[component]
fn CirclePreset(preset: CircleConfig, frame_ms: f64) -> Element {
    let mut rate = use_signal(|| preset.target_rate());
    let mut shown = use_signal(|| preset.current_rate);
    let label = preset.text.clone().unwrap_or_default();

    rsx! {
        div { class: "preset",
            Circle {
                rate: rate(),
                speed: preset.speed,
                clockwise: preset.clockwise,
                fill: preset.fill.clone(),
                stroke_width: preset.stroke_width,
                start_position: preset.start_position,
                color: preset.color.clone(),
                layer_color: preset.layer_color.clone(),
                stroke_linecap: preset.stroke_linecap,
                size: preset.size.clone(),
                class: preset.class_name.clone(),
                style: preset.style.clone(),
                text: Some(format!("{}%", shown().round())),
                frame_ms,
                on_change: move |value: f64| shown.set(value),
            }
            div { class: "preset-label", "{label}" }
            div { class: "preset-controls",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| rate.set(clamp_rate(rate() + STEP)),
                    "+{STEP}"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| rate.set(clamp_rate(rate() - STEP)),
                    "-{STEP}"
                }
            }
        }
    }
}

/// The page owns the displayed rate and feeds it back as `current_rate`
#[component]
fn ControlledCircle(frame_ms: f64) -> Element {
    let mut target = use_signal(|| 30.0);
    let mut current = use_signal(|| 0.0);

    rsx! {
        div { class: "preset",
            Circle {
                rate: target(),
                current_rate: Some(current()),
                speed: 40.0,
                frame_ms,
                text: Some(format!("{:.1}", current())),
                on_change: move |value: f64| current.set(value),
            }
            div { class: "preset-controls",
                for value in [0.0, 30.0, 100.0] {
                    Button {
                        key: "{value}",
                        variant: if target() == value { ButtonVariant::Primary } else { ButtonVariant::Default },
                        onclick: move |_| target.set(value),
                        "{value}"
                    }
                }
            }
        }
    }
}

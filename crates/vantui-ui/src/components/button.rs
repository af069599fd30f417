//! Button Components
//!
//! Footer buttons for dialogs and general actions:
//! - Default: plain text button
//! - Primary: filled with the brand color
//! - Danger: filled red, for destructive confirmations

use dioxus::prelude::*;
use vantui_core::style::{class_names, Bem};
use vantui_core::ButtonState;

const BUTTON: Bem = Bem::new("button");

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> String {
        match self {
            ButtonVariant::Default => BUTTON.modifier("default"),
            ButtonVariant::Primary => BUTTON.modifier("primary"),
            ButtonVariant::Danger => BUTTON.modifier("danger"),
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler; not called while loading or disabled
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Loading/disabled flags
    #[props(default)]
    pub state: ButtonState,
    /// Text color override
    #[props(default)]
    pub color: Option<String>,
    /// Rounded pill shape
    #[props(default = false)]
    pub round: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Full class list for a button
pub fn button_class(
    variant: ButtonVariant,
    state: ButtonState,
    round: bool,
    extra: Option<&str>,
) -> String {
    let block = BUTTON.block();
    let variant = variant.class();
    let loading = if state.loading { BUTTON.modifier("loading") } else { String::new() };
    let disabled = if state.disabled { BUTTON.modifier("disabled") } else { String::new() };
    let round = if round { BUTTON.modifier("round") } else { String::new() };
    class_names([
        block.as_str(),
        variant.as_str(),
        loading.as_str(),
        disabled.as_str(),
        round.as_str(),
        extra.unwrap_or(""),
    ])
}

/// Styled button with loading and disabled states
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         state: ButtonState { loading: saving(), disabled: false },
///         onclick: move |_| save(),
///         "Save"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.state, props.round, props.class.as_deref());
    let style = props
        .color
        .as_deref()
        .map(|color| format!("color: {color};"));
    let interactive = props.state.is_interactive();
    let spinner_class = BUTTON.element("loading");

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            style: style,
            disabled: props.state.disabled,
            "aria-busy": props.state.loading,
            onclick: move |_| {
                if !interactive {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.state.loading {
                span { class: "{spinner_class}", "aria-hidden": "true" }
            } else {
                {props.children}
            }
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    let extra_class = class.as_deref().unwrap_or("");
    let full_class = class_names(["vt-close", extra_class]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

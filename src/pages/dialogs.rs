//! Dialog page - declarative and imperative dialogs.

use std::time::Duration;

use dioxus::prelude::*;
use vantui_core::{CloseReason, DialogConfig, DialogTheme, MessageAlign};
use vantui_ui::{use_dialog, ActionFuture, Button, ButtonVariant, Dialog};

use crate::components::{DemoSection, NavHeader, NavLocation};
use crate::context::use_gallery_config;

/// How long the "saving" dialog pretends to work
const SAVE_DELAY_MS: u64 = 1000;

/// Dialog showcase page.
#[component]
pub fn Dialogs() -> Element {
    let config = use_gallery_config();
    let dialogs = use_dialog();

    let mut show_preset = use_signal(|| false);
    let mut show_round = use_signal(|| false);
    let mut show_custom = use_signal(|| false);
    let mut show_saving = use_signal(|| false);
    let mut last_event = use_signal(|| "nothing yet".to_string());

    let preset = config.read().dialog.clone();

    let round = DialogConfig {
        theme: DialogTheme::RoundButton,
        ..DialogConfig::alert("Rounded footer buttons.").with_title("Round button")
    };

    let custom = DialogConfig {
        show_cancel_button: true,
        closeable: true,
        close_on_click_overlay: true,
        message: None,
        ..DialogConfig::default().with_title("Custom body")
    };

    let saving_config = DialogConfig {
        show_cancel_button: true,
        message_align: MessageAlign::Left,
        ..DialogConfig::confirm("Confirm stays loading for a second, then the dialog closes.")
            .with_title("Async close")
    };

    let record = move |reason: CloseReason| {
        let mut last_event = last_event;
        last_event.set(format!("closed: {reason:?}"));
    };

    let open_confirm = move |_| {
        spawn(async move {
            let answer = dialogs
                .confirm(DialogConfig::confirm("Delete this item?").with_title("Confirm"))
                .await;
            tracing::info!("Confirm dialog answered {}", answer);
            last_event.set(format!("confirm resolved: {answer}"));
        });
    };

    let open_alert = move |_| {
        spawn(async move {
            dialogs.alert(DialogConfig::alert("Saved.")).await;
            last_event.set("alert dismissed".to_string());
        });
    };

    let open_queue = move |_| {
        for step in 1..=3 {
            dialogs.show(DialogConfig::alert(format!("Queued dialog {step} of 3")));
        }
    };

    rsx! {
        NavHeader { current: NavLocation::Dialogs }

        main { class: "page",
            DemoSection { title: "Declarative".to_string(),
                div { class: "button-row",
                    Button { onclick: move |_| show_preset.set(true), "Preset" }
                    Button { onclick: move |_| show_round.set(true), "Round button" }
                    Button { onclick: move |_| show_custom.set(true), "Custom content" }
                    Button { onclick: move |_| show_saving.set(true), "Async close" }
                }
            }

            DemoSection { title: "Imperative".to_string(),
                div { class: "button-row",
                    Button { variant: ButtonVariant::Primary, onclick: open_confirm, "Confirm" }
                    Button { onclick: open_alert, "Alert" }
                    Button { onclick: open_queue, "Queue three" }
                }
            }

            p { class: "event-log", "Last event: {last_event}" }
        }

        Dialog {
            visible: show_preset(),
            config: preset,
            on_close: move |reason: CloseReason| {
                show_preset.set(false);
                record(reason);
            },
        }

        Dialog {
            visible: show_round(),
            config: round,
            on_close: move |reason: CloseReason| {
                show_round.set(false);
                record(reason);
            },
        }

        Dialog {
            visible: show_custom(),
            config: custom,
            on_close: move |reason: CloseReason| {
                show_custom.set(false);
                record(reason);
            },
            on_click_close_icon: move |_| last_event.set("close icon clicked".to_string()),
            div { class: "custom-dialog-body",
                p { "Any content can go here." }
                p { "Click the overlay or the \u{00D7} to close." }
            }
        }

        Dialog {
            visible: show_saving(),
            config: saving_config,
            on_confirm: move |_| -> ActionFuture {
                Box::pin(async move {
                    tokio::time::sleep(Duration::from_millis(SAVE_DELAY_MS)).await;
                    last_event.set("saved".to_string());
                    true
                })
            },
            on_close: move |reason: CloseReason| {
                show_saving.set(false);
                record(reason);
            },
            after_close: move |_| tracing::debug!("Async close dialog finished leaving"),
        }
    }
}

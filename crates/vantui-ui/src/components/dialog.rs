//! Dialog Component
//!
//! Modal panel over a dimmed overlay with optional header image, title,
//! message (or custom children) and a confirm/cancel footer.
//!
//! The open/close lifecycle is driven by [`DialogController`]: the panel stays
//! mounted while its leave transition runs, and `after_close` fires once the
//! transition is over.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use vantui_core::dialog::DIALOG;
use vantui_core::style::class_names;
use vantui_core::{
    ActionOutcome, CloseReason, DialogAction, DialogConfig, DialogController, DialogPhase,
    DialogTheme,
};

use super::button::{Button, ButtonVariant, CloseButton};

/// How long the leave transition keeps the panel mounted
pub const LEAVE_TRANSITION_MS: u64 = 300;

/// Answer of a confirm/cancel handler; resolving to `false` keeps the dialog
/// open
pub type ActionFuture = Pin<Box<dyn Future<Output = bool>>>;

/// Handler answer that is known right away
pub fn resolved(answer: bool) -> ActionFuture {
    Box::pin(std::future::ready(answer))
}

/// Mutable access to a dialog's controller between await points
pub trait ControllerHandle {
    fn with_controller<R>(&mut self, f: impl FnOnce(&mut DialogController) -> R) -> R;
}

impl ControllerHandle for Signal<DialogController> {
    fn with_controller<R>(&mut self, f: impl FnOnce(&mut DialogController) -> R) -> R {
        f(&mut self.write())
    }
}

impl ControllerHandle for Rc<RefCell<DialogController>> {
    fn with_controller<R>(&mut self, f: impl FnOnce(&mut DialogController) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Mark `action` pending. Returns `false` when the click should be ignored.
pub fn start_action<C: ControllerHandle>(
    controller: &mut C,
    config: &DialogConfig,
    action: DialogAction,
) -> bool {
    match controller.with_controller(|c| c.begin_action(config, action)) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Dialog action ignored: {}", e);
            false
        }
    }
}

/// Wait for the handler's answer, then settle the pending action.
///
/// The action's button reports loading until `answer` resolves. Returns the
/// close reason when the dialog starts closing.
pub async fn complete_action<C: ControllerHandle>(
    mut controller: C,
    answer: Option<ActionFuture>,
) -> Option<CloseReason> {
    let outcome = match answer {
        Some(answer) => ActionOutcome::from(answer.await),
        None => ActionOutcome::Close,
    };

    match controller.with_controller(|c| c.finish_action(outcome)) {
        Ok(reason) => reason,
        Err(e) => {
            tracing::warn!("Dialog action could not finish: {}", e);
            None
        }
    }
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// let mut show = use_signal(|| false);
///
/// rsx! {
///     Dialog {
///         visible: show(),
///         config: DialogConfig::confirm("Delete this item?").with_title("Delete"),
///         on_confirm: move |_| Box::pin(async move { delete_item().await.is_ok() }) as ActionFuture,
///         on_close: move |_| show.set(false),
///     }
/// }
/// ```
#[component]
pub fn Dialog(
    /// Whether the dialog should be shown
    visible: bool,
    /// Appearance and behavior
    #[props(default)]
    config: DialogConfig,
    /// Confirm handler; the confirm button shows loading until its answer
    /// resolves, and `false` keeps the dialog open
    #[props(default)]
    on_confirm: Option<Callback<(), ActionFuture>>,
    /// Cancel handler; same contract as `on_confirm`
    #[props(default)]
    on_cancel: Option<Callback<(), ActionFuture>>,
    /// Called when the dialog starts closing on its own (action, overlay,
    /// close icon). The owner should set `visible` to false.
    #[props(default)]
    on_close: Option<EventHandler<CloseReason>>,
    /// Called once the leave transition has finished
    #[props(default)]
    after_close: Option<EventHandler<()>>,
    /// Called when the close icon is clicked
    #[props(default)]
    on_click_close_icon: Option<EventHandler<()>>,
    /// Custom body, shown when the config has no message
    children: Element,
) -> Element {
    let controller = use_signal(DialogController::new);
    let mut image_ready = use_signal(|| false);

    let start_leave = move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(LEAVE_TRANSITION_MS)).await;
            let mut controller = controller;
            if controller.write().transition_end() {
                if let Some(handler) = &after_close {
                    handler.call(());
                }
            }
        });
    };

    let finish_close = move |reason: CloseReason| {
        tracing::debug!("Dialog closing: {:?}", reason);
        if let Some(handler) = &on_close {
            handler.call(reason);
        }
        start_leave();
    };

    use_effect(use_reactive!(|(visible,)| {
        let mut controller = controller;
        let changed = controller.write().sync_visible(visible);
        if changed && !visible {
            start_leave();
        }
    }));

    let phase = controller.read().phase();
    if phase == DialogPhase::Hidden {
        return rsx! {};
    }

    let leaving = phase == DialogPhase::Closing;
    let confirm_state = controller.read().button_state(&config, DialogAction::Confirm);
    let cancel_state = controller.read().button_state(&config, DialogAction::Cancel);

    let transition_class = if leaving {
        format!("{}-leave", config.transition)
    } else {
        format!("{}-enter", config.transition)
    };
    let panel_class = class_names([config.class().as_str(), transition_class.as_str()]);
    let overlay_class = if leaving { "vt-overlay vt-overlay--leave" } else { "vt-overlay" };

    let waiting_for_image =
        config.header_image.is_some() && config.wait_image_load && !image_ready();
    let panel_style = if waiting_for_image {
        format!("width: {}; visibility: hidden;", config.width)
    } else {
        format!("width: {};", config.width)
    };

    let round = config.theme == DialogTheme::RoundButton;
    let footer_class = if round {
        class_names([DIALOG.element("footer").as_str(), "vt-dialog__footer--round"])
    } else {
        DIALOG.element("footer")
    };
    let confirm_variant = if round { ButtonVariant::Primary } else { ButtonVariant::Default };
    let message_class = config.message_class();
    let title_class = DIALOG.element("header");
    let content_class = DIALOG.element("content");
    let image_class = DIALOG.element("header-image");

    let handle_overlay = {
        let config = config.clone();
        move |_| {
            let mut controller = controller;
            if controller.write().click_overlay(&config) {
                finish_close(CloseReason::Overlay);
            }
        }
    };

    let handle_close_icon = {
        let config = config.clone();
        move |_| {
            if let Some(handler) = &on_click_close_icon {
                handler.call(());
            }
            let mut controller = controller;
            if controller.write().click_close_icon(&config) {
                finish_close(CloseReason::CloseIcon);
            }
        }
    };

    let run_action = move |config: &DialogConfig, action: DialogAction| {
        let mut handle = controller;
        if !start_action(&mut handle, config, action) {
            return;
        }
        let handler = match action {
            DialogAction::Confirm => on_confirm,
            DialogAction::Cancel => on_cancel,
        };
        let answer = handler.map(|handler| handler.call(()));
        spawn(async move {
            if let Some(reason) = complete_action(handle, answer).await {
                finish_close(reason);
            }
        });
    };

    let handle_cancel = {
        let config = config.clone();
        move |_| run_action(&config, DialogAction::Cancel)
    };

    let handle_confirm = {
        let config = config.clone();
        move |_| run_action(&config, DialogAction::Confirm)
    };

    rsx! {
        div {
            class: "{overlay_class}",
            onclick: handle_overlay,

            div {
                class: "{panel_class}",
                style: "{panel_style}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                if config.closeable {
                    CloseButton {
                        onclick: handle_close_icon,
                        class: Some("vt-dialog__close".to_string()),
                    }
                }

                if let Some(src) = config.header_image.clone() {
                    img {
                        class: "{image_class}",
                        src: "{src}",
                        onload: move |_| image_ready.set(true),
                        onerror: move |_| image_ready.set(true),
                    }
                }

                if let Some(title) = config.title.clone() {
                    div { class: "{title_class}", "{title}" }
                }

                div { class: "{content_class}",
                    if let Some(message) = config.message.clone() {
                        div { class: "{message_class}", "{message}" }
                    } else {
                        {children}
                    }
                }

                if config.has_footer() {
                    div { class: "{footer_class}",
                        if config.show_cancel_button {
                            Button {
                                variant: ButtonVariant::Default,
                                state: cancel_state,
                                color: config.cancel_button_color.clone(),
                                round: round,
                                class: Some("vt-dialog__cancel".to_string()),
                                onclick: handle_cancel,
                                "{config.cancel_button_text}"
                            }
                        }
                        if config.show_confirm_button {
                            Button {
                                variant: confirm_variant,
                                state: confirm_state,
                                color: config.confirm_button_color.clone(),
                                round: round,
                                class: Some("vt-dialog__confirm".to_string()),
                                onclick: handle_confirm,
                                "{config.confirm_button_text}"
                            }
                        }
                    }
                }
            }
        }
    }
}

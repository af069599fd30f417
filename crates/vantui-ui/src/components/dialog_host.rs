//! Imperative dialogs
//!
//! [`DialogHost`] owns a queue of dialog requests and renders the one at the
//! front. Anything below it can grab a [`DialogApi`] with [`use_dialog`] and
//! open dialogs without managing `visible` state:
//!
//! ```rust,ignore
//! let dialogs = use_dialog();
//! spawn(async move {
//!     if dialogs.confirm(DialogConfig::confirm("Leave the page?")).await {
//!         navigate_away();
//!     }
//! });
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dioxus::prelude::*;
use tokio::sync::oneshot;
use vantui_core::{CloseReason, DialogConfig};

use super::dialog::Dialog;

/// One-shot answer channel for an awaited dialog.
///
/// Cloneable so it can live in component props; only the first answer is
/// delivered.
#[derive(Clone)]
pub struct DialogResponder(Rc<RefCell<Option<oneshot::Sender<bool>>>>);

impl DialogResponder {
    pub fn new() -> (Self, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        (Self(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    /// Deliver the answer. Later calls are ignored.
    pub fn respond(&self, confirmed: bool) {
        if let Some(tx) = self.0.borrow_mut().take() {
            // Receiver may be gone if the awaiting task was cancelled
            let _ = tx.send(confirmed);
        }
    }

    /// Answer according to how the dialog closed
    pub fn resolve(&self, reason: CloseReason) {
        self.respond(confirmed(reason));
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Only the confirm button counts as a yes
pub fn confirmed(reason: CloseReason) -> bool {
    reason == CloseReason::Confirm
}

#[derive(Clone)]
struct DialogRequest {
    id: u64,
    config: DialogConfig,
    responder: Option<DialogResponder>,
}

/// Handle for opening dialogs from anywhere under a [`DialogHost`]
#[derive(Clone, Copy)]
pub struct DialogApi {
    queue: Signal<VecDeque<DialogRequest>>,
    next_id: Signal<u64>,
}

impl DialogApi {
    fn push(&self, config: DialogConfig, responder: Option<DialogResponder>) {
        let mut next_id = self.next_id;
        let mut queue = self.queue;

        let id = *next_id.peek();
        next_id.set(id + 1);
        tracing::debug!("Queueing dialog {} ({} waiting)", id, queue.peek().len());
        queue.write().push_back(DialogRequest {
            id,
            config,
            responder,
        });
    }

    /// Open a dialog without waiting for the answer
    pub fn show(&self, config: DialogConfig) {
        self.push(config, None);
    }

    /// Open a confirm/cancel dialog and wait for the answer.
    ///
    /// Resolves `true` only for the confirm button. Overlay clicks, the close
    /// icon and [`DialogApi::close_all`] resolve `false`.
    pub async fn confirm(&self, mut config: DialogConfig) -> bool {
        config.show_cancel_button = true;
        let (responder, answer) = DialogResponder::new();
        self.push(config, Some(responder));
        answer.await.unwrap_or(false)
    }

    /// Open a confirm-only dialog and wait until it closes
    pub async fn alert(&self, mut config: DialogConfig) {
        config.show_cancel_button = false;
        let (responder, answer) = DialogResponder::new();
        self.push(config, Some(responder));
        let _ = answer.await;
    }

    /// Drop every queued dialog, answering pending ones with `false`
    pub fn close_all(&self) {
        let mut queue = self.queue;
        let dropped: Vec<DialogRequest> = queue.write().drain(..).collect();
        for request in dropped {
            if let Some(responder) = request.responder {
                responder.respond(false);
            }
        }
    }

    /// Number of dialogs shown or waiting
    pub fn len(&self) -> usize {
        self.queue.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Get the dialog API from the nearest [`DialogHost`]
pub fn use_dialog() -> DialogApi {
    use_context::<DialogApi>()
}

/// Provides [`DialogApi`] to its children and renders queued dialogs one at
/// a time
#[component]
pub fn DialogHost(children: Element) -> Element {
    let mut queue = use_signal(VecDeque::<DialogRequest>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| DialogApi { queue, next_id });

    let current = queue.read().front().cloned();

    rsx! {
        {children}

        if let Some(request) = current {
            Dialog {
                key: "{request.id}",
                visible: true,
                config: request.config.clone(),
                on_close: {
                    let responder = request.responder.clone();
                    move |reason: CloseReason| {
                        if let Some(responder) = &responder {
                            responder.resolve(reason);
                        }
                    }
                },
                after_close: move |_| {
                    queue.write().pop_front();
                },
            }
        }
    }
}

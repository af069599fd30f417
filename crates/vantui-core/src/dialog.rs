//! Dialog model
//!
//! [`DialogConfig`] describes a modal's appearance and behavior.
//! [`DialogController`] is the small state machine behind it: showing,
//! confirm/cancel actions that may be vetoed or take time, overlay and close
//! icon handling, and the after-close notification once the leave transition
//! has run.
//!
//! ```text
//!  Hidden ──open──▶ Shown ──close(reason)──▶ Closing ──transition_end──▶ Hidden
//!                    │  ▲                       │
//!                    ▼  │ KeepOpen              └──open──▶ Shown
//!               action pending
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{VantError, VantResult};
use crate::style::{Bem, Dimension};

/// Class-name builder for the dialog block
pub const DIALOG: Bem = Bem::new("dialog");

/// Visual theme of the dialog footer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialogTheme {
    /// Text buttons separated by hairlines
    #[default]
    Default,
    /// Rounded filled buttons
    RoundButton,
}

impl DialogTheme {
    /// Modifier class, if the theme has one
    pub fn class(&self) -> Option<String> {
        match self {
            DialogTheme::Default => None,
            DialogTheme::RoundButton => Some(DIALOG.modifier("round-button")),
        }
    }
}

/// Horizontal alignment of the message body
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl MessageAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageAlign::Left => "left",
            MessageAlign::Center => "center",
            MessageAlign::Right => "right",
        }
    }
}

/// Loading/disabled flags of a footer button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonState {
    pub loading: bool,
    pub disabled: bool,
}

impl ButtonState {
    /// Whether a click should be accepted
    pub fn is_interactive(&self) -> bool {
        !self.loading && !self.disabled
    }

    fn merge(self, other: ButtonState) -> ButtonState {
        ButtonState {
            loading: self.loading || other.loading,
            disabled: self.disabled || other.disabled,
        }
    }
}

/// Options recognized by the dialog
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub visible: bool,
    /// Image shown above the title
    pub header_image: Option<String>,
    /// Hold the dialog back until the header image has loaded
    pub wait_image_load: bool,
    /// Show a close icon in the top-right corner
    pub closeable: bool,
    pub close_icon: String,
    pub title: Option<String>,
    pub theme: DialogTheme,
    pub width: Dimension,
    pub message: Option<String>,
    /// Class name of the enter/leave transition
    pub transition: String,
    pub message_align: MessageAlign,
    pub show_cancel_button: bool,
    pub cancel_button_text: String,
    pub cancel_button_color: Option<String>,
    pub show_confirm_button: bool,
    pub confirm_button_text: String,
    pub confirm_button_color: Option<String>,
    pub close_on_click_overlay: bool,
    pub cancel_props: ButtonState,
    pub confirm_props: ButtonState,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            visible: false,
            header_image: None,
            wait_image_load: true,
            closeable: false,
            close_icon: "cross".to_string(),
            title: None,
            theme: DialogTheme::Default,
            width: Dimension::Px(320.0),
            message: None,
            transition: "vt-dialog-bounce".to_string(),
            message_align: MessageAlign::Center,
            show_cancel_button: false,
            cancel_button_text: "Cancel".to_string(),
            cancel_button_color: None,
            show_confirm_button: true,
            confirm_button_text: "Confirm".to_string(),
            confirm_button_color: None,
            close_on_click_overlay: false,
            cancel_props: ButtonState::default(),
            confirm_props: ButtonState::default(),
        }
    }
}

impl DialogConfig {
    /// Preset for an alert: confirm button only
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            show_cancel_button: false,
            ..Default::default()
        }
    }

    /// Preset for a confirmation: confirm and cancel buttons
    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            show_cancel_button: true,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Class list of the dialog panel
    pub fn class(&self) -> String {
        match self.theme.class() {
            Some(modifier) => format!("{} {modifier}", DIALOG.block()),
            None => DIALOG.block(),
        }
    }

    /// Class list of the message body; a message without a title is styled
    /// as the dialog's only content.
    pub fn message_class(&self) -> String {
        let base = DIALOG.element("message");
        let align = format!("{base}--{}", self.message_align.as_str());
        let mut classes = vec![base.clone(), align];
        if self.title.is_none() {
            classes.push(format!("{base}--no-title"));
        }
        classes.join(" ")
    }

    /// Whether the footer renders at all
    pub fn has_footer(&self) -> bool {
        self.show_cancel_button || self.show_confirm_button
    }
}

/// A footer action
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogAction {
    Confirm,
    Cancel,
}

/// What a confirm/cancel handler decided
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActionOutcome {
    #[default]
    Close,
    /// Veto: the dialog stays open
    KeepOpen,
}

impl From<bool> for ActionOutcome {
    /// `false` keeps the dialog open, as a handler returning `false` would.
    fn from(close: bool) -> Self {
        if close {
            ActionOutcome::Close
        } else {
            ActionOutcome::KeepOpen
        }
    }
}

/// Why a dialog closed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseReason {
    Confirm,
    Cancel,
    Overlay,
    CloseIcon,
    /// Closed by its owner, e.g. `visible` turned false
    External,
}

impl From<DialogAction> for CloseReason {
    fn from(action: DialogAction) -> Self {
        match action {
            DialogAction::Confirm => CloseReason::Confirm,
            DialogAction::Cancel => CloseReason::Cancel,
        }
    }
}

/// Lifecycle phase of a dialog
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DialogPhase {
    #[default]
    Hidden,
    Shown,
    /// Leave transition running
    Closing,
}

/// State machine behind one dialog instance
#[derive(Clone, Debug, Default)]
pub struct DialogController {
    phase: DialogPhase,
    pending: Option<DialogAction>,
    last_close: Option<CloseReason>,
}

impl DialogController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Whether the panel should be mounted (shown or leaving)
    pub fn is_mounted(&self) -> bool {
        self.phase != DialogPhase::Hidden
    }

    pub fn pending_action(&self) -> Option<DialogAction> {
        self.pending
    }

    pub fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Show the dialog. Reopening during the leave transition is allowed.
    pub fn open(&mut self) -> bool {
        match self.phase {
            DialogPhase::Shown => false,
            DialogPhase::Hidden | DialogPhase::Closing => {
                debug!("dialog opened");
                self.phase = DialogPhase::Shown;
                self.pending = None;
                self.last_close = None;
                true
            }
        }
    }

    /// Effective state of a footer button given the caller's flags
    pub fn button_state(&self, config: &DialogConfig, action: DialogAction) -> ButtonState {
        let configured = match action {
            DialogAction::Confirm => config.confirm_props,
            DialogAction::Cancel => config.cancel_props,
        };
        let busy = ButtonState {
            loading: self.pending == Some(action),
            disabled: false,
        };
        configured.merge(busy)
    }

    /// Accept a footer click. The caller runs its handler and reports back
    /// through [`Self::finish_action`].
    pub fn begin_action(&mut self, config: &DialogConfig, action: DialogAction) -> VantResult<()> {
        if self.phase != DialogPhase::Shown {
            return Err(VantError::DialogState(format!("{action:?} while {:?}", self.phase)));
        }
        if let Some(pending) = self.pending {
            return Err(VantError::DialogState(format!(
                "{action:?} while {pending:?} is pending"
            )));
        }
        if !self.button_state(config, action).is_interactive() {
            return Err(VantError::DialogState(format!("{action:?} button is not interactive")));
        }
        debug!(?action, "dialog action started");
        self.pending = Some(action);
        Ok(())
    }

    /// Complete the pending action. Returns the close reason when the dialog
    /// starts closing.
    pub fn finish_action(&mut self, outcome: ActionOutcome) -> VantResult<Option<CloseReason>> {
        let action = self
            .pending
            .take()
            .ok_or_else(|| VantError::DialogState("no action pending".to_string()))?;

        if self.phase != DialogPhase::Shown {
            // Closed externally while the handler ran
            return Ok(None);
        }

        match outcome {
            ActionOutcome::KeepOpen => {
                debug!(?action, "dialog action vetoed");
                Ok(None)
            }
            ActionOutcome::Close => {
                let reason = CloseReason::from(action);
                self.close(reason);
                Ok(Some(reason))
            }
        }
    }

    /// Overlay click; closes only when the config allows it.
    pub fn click_overlay(&mut self, config: &DialogConfig) -> bool {
        config.close_on_click_overlay && self.close(CloseReason::Overlay)
    }

    /// Close icon click; ignored unless the icon is shown.
    pub fn click_close_icon(&mut self, config: &DialogConfig) -> bool {
        config.closeable && self.close(CloseReason::CloseIcon)
    }

    /// Begin the leave transition. Returns `false` if already closing/hidden.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if self.phase != DialogPhase::Shown {
            return false;
        }
        debug!(?reason, "dialog closing");
        self.phase = DialogPhase::Closing;
        self.last_close = Some(reason);
        true
    }

    /// Leave transition finished. Returns `true` exactly once per close, when
    /// the after-close callback should fire.
    pub fn transition_end(&mut self) -> bool {
        if self.phase != DialogPhase::Closing {
            return false;
        }
        self.phase = DialogPhase::Hidden;
        self.pending = None;
        true
    }

    /// Follow a declarative `visible` flag. Returns `true` if the phase changed.
    pub fn sync_visible(&mut self, visible: bool) -> bool {
        if visible {
            self.open()
        } else {
            self.close(CloseReason::External)
        }
    }
}

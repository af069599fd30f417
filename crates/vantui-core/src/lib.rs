//! Vantui Core Library
//!
//! Framework-independent models for the Vantui widgets.
//!
//! ## Overview
//!
//! - **Circle**: an annular progress indicator. [`CircleConfig`] holds its
//!   options, [`CircleRender`] is the derived per-frame render model, and
//!   [`RateAnimator`] eases the displayed rate toward a new target one frame
//!   at a time.
//! - **Dialog**: [`DialogConfig`] and the [`DialogController`] state machine
//!   behind a modal with confirm/cancel actions.
//!
//! Rendering crates (see `vantui-ui`) bind these models to a UI framework.
//!
//! ## Quick Start
//!
//! ```
//! use vantui_core::{CircleConfig, ElementId, RateAnimator, Retarget};
//!
//! let config = CircleConfig { rate: 60.0, ..Default::default() };
//! let mut animator = RateAnimator::new();
//!
//! if let Retarget::Animating(session) =
//!     animator.retarget(config.current_rate, config.target_rate(), config.speed, 0.0)
//! {
//!     let tick = animator.frame(session, 300.0).unwrap();
//!     let render = config.render(tick.rate, &ElementId::generate("vt-circle"));
//!     assert!(render.hover.style.contains("942px"));
//! }
//! ```

pub mod animation;
pub mod circle;
pub mod clock;
pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod id;
pub mod logging;
pub mod rate;
pub mod style;

// Re-exports
pub use animation::{timeline, AnimationSession, RateAnimator, Retarget, SessionId, Tick};
pub use circle::{CircleConfig, CircleRender};
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{sort_gradient_stops, CircleColor, GradientStop};
pub use config::GalleryConfig;
pub use dialog::{
    ActionOutcome, ButtonState, CloseReason, DialogAction, DialogConfig, DialogController,
    DialogPhase, DialogTheme, MessageAlign,
};
pub use error::{VantError, VantResult};
pub use frame::{FrameHandle, FrameSlot};
pub use geometry::{arc_path, view_box_size, Linecap, StartPosition, PERIMETER};
pub use id::ElementId;
pub use rate::{clamp_rate, coerce_rate};
pub use style::Dimension;

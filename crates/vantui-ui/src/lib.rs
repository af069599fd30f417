//! Vantui UI Components
//!
//! Dioxus bindings for the framework-independent models in `vantui-core`.
//!
//! ## Components
//!
//! - **Circle**: annular progress ring that eases toward a new `rate`
//! - **Dialog**: modal with title, message and confirm/cancel footer
//! - **DialogHost**: queue for imperative `confirm`/`alert` dialogs
//! - **Button**: footer and general-purpose button
//!
//! ## Hooks
//!
//! - [`use_rate_animation`]: the rate animation behind `Circle`, usable on
//!   its own
//! - [`use_dialog`]: open dialogs from anywhere under a `DialogHost`

pub mod components;
pub mod hooks;
mod styles;

pub use components::*;
pub use hooks::{use_rate_animation, RateAnimation};
pub use styles::STYLES;

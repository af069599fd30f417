//! Reusable UI components
//!
//! Class names follow the `vt-` BEM scheme from `vantui_core::style`, so
//! [`crate::STYLES`] styles every component here.

mod button;
mod circle;
mod dialog;
mod dialog_host;

pub use button::*;
pub use circle::*;
pub use dialog::*;
pub use dialog_host::*;

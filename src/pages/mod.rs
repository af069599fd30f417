//! Gallery pages.

mod circles;
mod dialogs;

pub use circles::Circles;
pub use dialogs::Dialogs;

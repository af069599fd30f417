//! Gallery-only components

mod demo_section;
mod nav_header;

pub use demo_section::DemoSection;
pub use nav_header::{NavHeader, NavLocation};

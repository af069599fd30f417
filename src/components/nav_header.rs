//! Navigation Header Component
//!
//! Horizontal header with the gallery title and one link per page.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the gallery
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Circles,
    Dialogs,
}

impl NavLocation {
    pub const ALL: [NavLocation; 2] = [NavLocation::Circles, NavLocation::Dialogs];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Circles => "Circle",
            NavLocation::Dialogs => "Dialog",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Circles => Route::Circles {},
            NavLocation::Dialogs => Route::Dialogs {},
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader(current: NavLocation) -> Element {
    rsx! {
        header { class: "nav-header",
            h1 { class: "app-title", "Vantui" }
            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    Link {
                        to: location.route(),
                        class: if location == current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }
        }
    }
}

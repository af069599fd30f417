use dioxus::prelude::*;
use vantui_core::GalleryConfig;
use vantui_ui::{DialogHost, STYLES};

use crate::pages::{Circles, Dialogs};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Circle presets with rate controls
/// - `/dialogs` - Declarative and imperative dialogs
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Circles {},
    #[route("/dialogs")]
    Dialogs {},
}

/// Root application component.
///
/// Provides global styles, the gallery config, the dialog host and routing.
#[component]
pub fn App() -> Element {
    let config: Signal<GalleryConfig> = use_signal(crate::gallery_config);
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {STYLES} }
        DialogHost {
            Router::<Route> {}
        }
    }
}

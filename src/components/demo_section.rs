use dioxus::prelude::*;

/// Titled block on a showcase page
#[component]
pub fn DemoSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "demo-section",
            h2 { class: "demo-title", "{title}" }
            div { class: "demo-body", {children} }
        }
    }
}

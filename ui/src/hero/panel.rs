use dioxus::prelude::*;

use crate::core::registry::TechIcon;
use crate::t;

/// Overlay describing the selected technology.
///
/// Slides up into view when mounted. With `leaving` set it plays the reverse
/// animation and ignores input until the hero unmounts it.
#[component]
pub fn InfoPanel(icon: &'static TechIcon, leaving: bool, onclose: EventHandler<MouseEvent>) -> Element {
    let experience = icon.experience_text();
    let class = if leaving {
        "info-panel info-panel--leaving"
    } else {
        "info-panel"
    };

    rsx! {
        div { class, role: "dialog", aria_label: "{icon.name}",
            h3 { class: "info-panel__title", "{icon.name}" }
            p { class: "info-panel__body", "{experience}" }
            button {
                r#type: "button",
                class: "info-panel__close",
                aria_label: t!("info-panel-close"),
                onclick: move |evt| onclose.call(evt),
                "✕"
            }
        }
    }
}

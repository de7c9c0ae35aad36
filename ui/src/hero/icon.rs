use dioxus::prelude::*;

use crate::core::palette::icon_color;
use crate::core::registry::TechIcon;
use crate::core::scatter::Position;

use super::GlyphIcon;

/// One technology icon pinned at `position`. Dimmed until hovered (see hero.css).
#[component]
pub fn ScatteredIcon(
    icon: &'static TechIcon,
    position: Position,
    onselect: EventHandler<&'static TechIcon>,
) -> Element {
    let color = icon_color(icon.name);

    rsx! {
        div {
            class: "hero-icon",
            style: "{position.css()}",
            role: "button",
            tabindex: 0,
            title: "{icon.name}",
            aria_label: "{icon.name}",
            "data-tech": "{icon.name}",
            onclick: move |_| onselect.call(icon),
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string().to_lowercase();
                if key == " " || key == "enter" {
                    evt.prevent_default();
                    onselect.call(icon);
                }
            },
            GlyphIcon { glyph: icon.glyph, color }
        }
    }
}

//! Landing-page hero: animated gradient backdrop, name and role, a scatter
//! of technology icons, and an info panel for the icon last clicked.

mod background;
mod glyph;
mod icon;
mod panel;

pub use background::AnimatedBackground;
pub use glyph::GlyphIcon;
pub use icon::ScatteredIcon;
pub use panel::InfoPanel;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config::{HeroConfig, LayoutMode};
use crate::core::presence::ExitTracker;
use crate::core::registry::{self, TechIcon};
use crate::core::selection::Selection;
use crate::core::timing;
use crate::t;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");
const HERO_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/hero.css"
));

/// Full-viewport hero section. Takes no props; a `HeroConfig` in context
/// overrides the defaults.
#[component]
pub fn Hero() -> Element {
    crate::i18n::init();

    let config = try_use_context::<HeroConfig>().unwrap_or_default();
    let icons: &'static [TechIcon] = use_hook(registry::tech_icons);
    let mut selection = use_signal(Selection::default);
    let mut exits = use_signal(ExitTracker::default);

    let mount_layout = use_hook(|| {
        (config.layout == LayoutMode::PerMount).then(|| config.scatter.layout(icons.len()))
    });
    // Without a mount layout every render scatters the icons afresh.
    let positions = mount_layout.unwrap_or_else(|| config.scatter.layout(icons.len()));

    use_hook(|| debug!(icons = icons.len(), layout = ?config.layout, "hero mounted"));
    use_drop(|| debug!("hero unmounted"));

    let panel = match (selection(), exits().leaving()) {
        (Selection::Open(icon), _) => Some((icon, false)),
        (Selection::Closed, Some(icon)) => Some((icon, true)),
        (Selection::Closed, None) => None,
    };

    let exit_ms = config.exit_ms;
    let on_close = move |_: MouseEvent| {
        let Some(icon) = selection.with_mut(Selection::close) else {
            return;
        };
        debug!(name = icon.name, "info panel dismissed");
        let generation = exits.with_mut(|tracker| tracker.begin(icon));
        spawn(async move {
            timing::sleep_ms(exit_ms).await;
            exits.with_mut(|tracker| tracker.finish(generation));
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HERO_CSS_INLINE}" }
        }

        section { class: "hero",
            AnimatedBackground {
                cycle_ms: config.cycle_ms,
                frame_interval_ms: config.frame_interval_ms,
            }

            div { class: "hero__heading",
                h1 { class: "hero__title", "Lourenço Rosado" }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
            }

            div {
                class: "hero__icons",
                role: "group",
                aria_label: t!("hero-icons-label"),
                for (icon, position) in icons.iter().zip(positions) {
                    ScatteredIcon {
                        key: "{icon.name}",
                        icon,
                        position,
                        onselect: move |icon: &'static TechIcon| {
                            debug!(name = icon.name, "tech icon selected");
                            exits.with_mut(ExitTracker::cancel);
                            selection.with_mut(|current| current.select(icon));
                        },
                    }
                }
            }

            if let Some((icon, leaving)) = panel {
                InfoPanel { icon, leaving, onclose: on_close }
            }
        }
    }
}

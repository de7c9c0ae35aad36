//! Small inline SVG marks for each technology. Drawn on a 24×24 grid and
//! tinted with the icon's brand color.

use dioxus::prelude::*;

use crate::core::registry::Glyph;

/// Rendered glyph edge length.
const GLYPH_SIZE: &str = "1.5rem";

#[component]
pub fn GlyphIcon(glyph: Glyph, color: &'static str) -> Element {
    rsx! {
        svg {
            class: "hero-icon__glyph",
            width: GLYPH_SIZE,
            height: GLYPH_SIZE,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: color,
            "aria-hidden": "true",
            {glyph_body(glyph, color)}
        }
    }
}

fn glyph_body(glyph: Glyph, color: &'static str) -> Element {
    match glyph {
        Glyph::React => rsx! {
            g { stroke_width: "1.4",
                ellipse { cx: "12", cy: "12", rx: "10", ry: "4" }
                ellipse { cx: "12", cy: "12", rx: "10", ry: "4", transform: "rotate(60 12 12)" }
                ellipse { cx: "12", cy: "12", rx: "10", ry: "4", transform: "rotate(120 12 12)" }
            }
            circle { cx: "12", cy: "12", r: "2", fill: color, stroke: "none" }
        },
        Glyph::Database => rsx! {
            g { stroke_width: "1.6",
                ellipse { cx: "12", cy: "5", rx: "8", ry: "3" }
                path { d: "M4 5v14c0 1.7 3.6 3 8 3s8-1.3 8-3V5" }
                path { d: "M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3" }
            }
        },
        Glyph::Firebase => rsx! {
            path { d: "M5 19 8 3l3.5 6.5L14 5l5 14-7 3.5z", fill: color, stroke: "none" }
        },
        Glyph::Prisma => rsx! {
            path {
                d: "M12.5 2 20 19.5 7 22 4 17.5z",
                stroke_width: "1.6",
                stroke_linejoin: "round",
            }
        },
        Glyph::Tailwind => rsx! {
            path {
                d: "M3 10c2-4 5-5 9-3s5 2 9-2M3 17c2-4 5-5 9-3s5 2 9-2",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        },
        Glyph::Aws => rsx! {
            {monogram("aws", color, "8")}
            path { d: "M5 18c4 2.5 10 2.5 14 0", stroke_width: "1.6", stroke_linecap: "round" }
        },
        Glyph::TypeScript => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "2", fill: color, stroke: "none" }
            text {
                x: "20",
                y: "19",
                fill: "white",
                stroke: "none",
                "text-anchor": "end",
                "font-size": "10",
                "font-weight": "700",
                "font-family": "sans-serif",
                "TS"
            }
        },
        Glyph::Linux => rsx! {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "3", stroke_width: "1.6" }
            path { d: "m6 9 3 3-3 3M12 15h5", stroke_width: "1.6", stroke_linecap: "round" }
        },
        Glyph::NextJs => rsx! {
            circle { cx: "12", cy: "12", r: "10", fill: color, stroke: "white", stroke_width: "1" }
            path { d: "M9 16.5v-9l7 10M15 7.5v6", stroke: "white", stroke_width: "1.6" }
        },
        Glyph::Google => monogram("G", color, "17"),
        Glyph::AppStore => rsx! {
            circle { cx: "12", cy: "12", r: "10", stroke_width: "1.6" }
            path { d: "m8 17 4-9 4 9M9.3 14h5.4", stroke_width: "1.6", stroke_linecap: "round" }
        },
        Glyph::MySql => monogram("My", color, "12"),
    }
}

/// Letter mark centered on the grid, for brands without a simple shape.
fn monogram(label: &'static str, color: &'static str, size: &'static str) -> Element {
    rsx! {
        text {
            x: "12",
            y: "12",
            fill: color,
            stroke: "none",
            "text-anchor": "middle",
            "dominant-baseline": "central",
            "font-size": size,
            "font-weight": "700",
            "font-family": "sans-serif",
            "{label}"
        }
    }
}

use dioxus::prelude::*;

use crate::Hero;

/// Landing route. The hero fills the viewport and clips whatever overflows it.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page page-home",
            Hero {}
        }
    }
}

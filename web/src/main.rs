use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    info!(version = env!("CARGO_PKG_VERSION"), "starting showcase (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

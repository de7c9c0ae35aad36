use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    info!(version = env!("CARGO_PKG_VERSION"), "starting showcase (mobile)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

use dioxus::prelude::*;

use crate::core::gradient::GradientCycle;
use crate::core::timing;

/// Backdrop that sweeps through the hero gradients forever.
///
/// The ticker is a scoped future, so it stops when the component unmounts.
#[component]
pub fn AnimatedBackground(cycle_ms: u64, frame_interval_ms: u64) -> Element {
    let cycle = GradientCycle::new(cycle_ms);
    let mut background = use_signal(|| cycle.frame_at(0.0).css());

    use_future(move || async move {
        let started = timing::now_ms();
        loop {
            timing::sleep_ms(frame_interval_ms.max(1)).await;
            background.set(cycle.frame_at(timing::now_ms() - started).css());
        }
    });

    rsx! {
        div {
            class: "hero__background",
            aria_hidden: "true",
            style: "background: {background};",
        }
    }
}

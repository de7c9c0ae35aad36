//! Pure, platform-agnostic pieces of the hero. Nothing in here touches the DOM.

pub mod config;
pub mod gradient;
pub mod palette;
pub mod presence;
pub mod registry;
pub mod scatter;
pub mod selection;
pub mod timing;

//! Tunables for the hero. Platforms can override them by providing a
//! `HeroConfig` through context; otherwise [`HeroConfig::default`] applies.

use super::scatter::ScatterSource;

/// When icon positions are (re)sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Every render of the hero scatters the icons again.
    #[default]
    PerRender,
    /// Icons keep the positions sampled when the hero mounted.
    PerMount,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroConfig {
    /// Length of one sweep through the background gradients (one direction).
    pub cycle_ms: u64,
    /// How often the background gradient is recomputed.
    pub frame_interval_ms: u64,
    /// Duration of the info panel exit animation. Keep in step with `info-panel-out` in hero.css.
    pub exit_ms: u64,
    pub scatter: ScatterSource,
    pub layout: LayoutMode,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            cycle_ms: 20_000,
            frame_interval_ms: 50,
            exit_ms: 300,
            scatter: ScatterSource::Entropy,
            layout: LayoutMode::PerRender,
        }
    }
}

impl HeroConfig {
    /// Fixed, reproducible layout that does not move between renders.
    pub fn seeded(seed: u64) -> Self {
        Self {
            scatter: ScatterSource::Seeded(seed),
            layout: LayoutMode::PerMount,
            ..Self::default()
        }
    }
}

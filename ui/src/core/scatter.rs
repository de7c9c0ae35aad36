//! Random placement of icons over the hero.
//!
//! Positions are percentages of the container. There is no collision
//! avoidance; two icons may land on top of each other.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertical band, in percent of container height.
pub const TOP_RANGE: (f64, f64) = (15.0, 85.0);
/// Horizontal band, in percent of container width.
pub const LEFT_RANGE: (f64, f64) = (5.0, 95.0);

/// Mixes the icon index into the seed so neighbouring icons get unrelated streams.
const INDEX_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top_pct: f64,
    pub left_pct: f64,
}

impl Position {
    /// Inline style placing an absolutely positioned element.
    pub fn css(&self) -> String {
        format!("top: {:.3}%; left: {:.3}%;", self.top_pct, self.left_pct)
    }
}

/// Where scatter positions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScatterSource {
    /// Platform randomness; a fresh layout every time.
    #[default]
    Entropy,
    /// Deterministic layout derived from `(seed, index)`.
    Seeded(u64),
}

impl ScatterSource {
    /// Sample the position of the icon at `index`.
    pub fn position(&self, index: usize) -> Position {
        match *self {
            ScatterSource::Entropy => sample(&mut rand::thread_rng()),
            ScatterSource::Seeded(seed) => {
                let mixed = seed ^ (index as u64).wrapping_add(1).wrapping_mul(INDEX_MIX);
                sample(&mut StdRng::seed_from_u64(mixed))
            }
        }
    }

    /// Positions for `count` icons, in registry order.
    pub fn layout(&self, count: usize) -> Vec<Position> {
        (0..count).map(|index| self.position(index)).collect()
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R) -> Position {
    let top_pct = TOP_RANGE.0 + rng.gen::<f64>() * (TOP_RANGE.1 - TOP_RANGE.0);
    let left_pct = LEFT_RANGE.0 + rng.gen::<f64>() * (LEFT_RANGE.1 - LEFT_RANGE.0);
    Position { top_pct, left_pct }
}

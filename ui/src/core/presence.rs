//! Keeps a dismissed info panel mounted while its exit animation plays.
//!
//! Each dismissal gets a generation number. The exit timer reports back with
//! that number and only unmounts the panel if nothing newer happened since;
//! a timer left over from an earlier close is ignored.

use super::registry::TechIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitTracker {
    generation: u64,
    leaving: Option<&'static TechIcon>,
}

impl ExitTracker {
    /// Start the exit animation for `icon`. Returns the generation the timer must echo.
    pub fn begin(&mut self, icon: &'static TechIcon) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.leaving = Some(icon);
        self.generation
    }

    /// The exit animation for `generation` has finished. Returns whether the panel was removed.
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.leaving.is_none() {
            return false;
        }
        self.leaving = None;
        true
    }

    /// A new selection arrived; drop any panel that is still on its way out.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.leaving = None;
    }

    /// Icon whose panel is currently animating out.
    pub fn leaving(&self) -> Option<&'static TechIcon> {
        self.leaving
    }
}

//! Which icon, if any, the info panel is describing.

use super::registry::TechIcon;

/// Two-state machine behind the info panel.
///
/// `Open` holds a registry entry rather than a name, so a selection can never
/// point at an icon that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(&'static TechIcon),
}

impl Selection {
    /// Clicking an icon. Replaces any current selection, including itself.
    pub fn select(&mut self, icon: &'static TechIcon) {
        *self = Selection::Open(icon);
    }

    /// Dismissing the panel. Returns the icon that was showing, if any.
    pub fn close(&mut self) -> Option<&'static TechIcon> {
        match std::mem::take(self) {
            Selection::Open(icon) => Some(icon),
            Selection::Closed => None,
        }
    }

    pub fn icon(&self) -> Option<&'static TechIcon> {
        match *self {
            Selection::Open(icon) => Some(icon),
            Selection::Closed => None,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.icon().map(|icon| icon.name)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}

//! Local UI chrome state (creation dialog visibility).
//!
//! DESIGN
//! ======
//! The dialog itself is owned by another surface. This slice only stores the
//! CSS scale token that surface animates on, and `UiIntent` is the one
//! transition components may request.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::fmt;

/// Opaque visibility token for an overlay, expressed as its CSS scale class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisibilityToken(&'static str);

impl VisibilityToken {
    /// Overlay is shown (scaled in).
    pub const SHOWN: Self = Self("scale-100");
    /// Overlay is hidden (scaled to zero).
    pub const HIDDEN: Self = Self("scale-0");

    pub fn as_str(self) -> &'static str {
        self.0
    }

    pub fn is_shown(self) -> bool {
        self == Self::SHOWN
    }
}

impl Default for VisibilityToken {
    fn default() -> Self {
        Self::HIDDEN
    }
}

impl fmt::Display for VisibilityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// State change requested by a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiIntent {
    /// Set the create-poll dialog's visibility token.
    SetCreateModal(VisibilityToken),
}

/// UI state shared through a `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub create_modal: VisibilityToken,
}

impl UiState {
    /// Apply an intent in place.
    pub fn apply(&mut self, intent: UiIntent) {
        match intent {
            UiIntent::SetCreateModal(token) => self.create_modal = token,
        }
    }
}

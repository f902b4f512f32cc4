//! Capability for requesting UI state changes.
//!
//! ARCHITECTURE
//! ============
//! Components never write the UI store directly. They emit a [`UiIntent`]
//! through a [`UiDispatch`] pulled from context, so a test can provide a
//! recording fake in place of the live `RwSignal<UiState>`.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::ui::{UiIntent, UiState, VisibilityToken};

/// Sink for UI intents.
pub trait UiDispatch: Send + Sync {
    /// Deliver one intent to the store.
    fn dispatch(&self, intent: UiIntent);

    /// Request a new visibility token for the create-poll dialog.
    fn set_create_modal(&self, token: VisibilityToken) {
        self.dispatch(UiIntent::SetCreateModal(token));
    }
}

impl UiDispatch for RwSignal<UiState> {
    fn dispatch(&self, intent: UiIntent) {
        #[cfg(feature = "hydrate")]
        log::debug!("ui intent: {intent:?}");
        self.update(|state| state.apply(intent));
    }
}

/// Shared dispatcher handle provided through Leptos context.
#[derive(Clone)]
pub struct DispatchHandle(Arc<dyn UiDispatch>);

impl DispatchHandle {
    pub fn new(dispatch: impl UiDispatch + 'static) -> Self {
        Self(Arc::new(dispatch))
    }
}

impl UiDispatch for DispatchHandle {
    fn dispatch(&self, intent: UiIntent) {
        self.0.dispatch(intent);
    }
}

/// Read the dispatcher from context.
///
/// # Panics
///
/// Panics if no `DispatchHandle` was provided by an ancestor; `App` always
/// provides one.
pub fn use_dispatch() -> DispatchHandle {
    expect_context::<DispatchHandle>()
}

use super::*;

// =============================================================
// VisibilityToken
// =============================================================

#[test]
fn visibility_token_default_is_hidden() {
    assert_eq!(VisibilityToken::default(), VisibilityToken::HIDDEN);
    assert!(!VisibilityToken::default().is_shown());
}

#[test]
fn visibility_token_shown_is_scale_100() {
    assert_eq!(VisibilityToken::SHOWN.as_str(), "scale-100");
    assert!(VisibilityToken::SHOWN.is_shown());
}

#[test]
fn visibility_token_hidden_is_scale_0() {
    assert_eq!(VisibilityToken::HIDDEN.as_str(), "scale-0");
    assert_eq!(VisibilityToken::HIDDEN.to_string(), "scale-0");
}

#[test]
fn visibility_token_variants_are_distinct() {
    assert_ne!(VisibilityToken::SHOWN, VisibilityToken::HIDDEN);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_create_modal_hidden() {
    let state = UiState::default();
    assert_eq!(state.create_modal, VisibilityToken::HIDDEN);
}

#[test]
fn apply_set_create_modal_shows_dialog() {
    let mut state = UiState::default();
    state.apply(UiIntent::SetCreateModal(VisibilityToken::SHOWN));
    assert!(state.create_modal.is_shown());
}

#[test]
fn apply_set_create_modal_is_idempotent() {
    let mut state = UiState::default();
    state.apply(UiIntent::SetCreateModal(VisibilityToken::SHOWN));
    state.apply(UiIntent::SetCreateModal(VisibilityToken::SHOWN));
    assert_eq!(state.create_modal, VisibilityToken::SHOWN);
}

#[test]
fn apply_set_create_modal_can_hide_again() {
    let mut state = UiState { create_modal: VisibilityToken::SHOWN };
    state.apply(UiIntent::SetCreateModal(VisibilityToken::HIDDEN));
    assert_eq!(state, UiState::default());
}

use std::sync::Mutex;

use leptos::reactive::owner::Owner;

use super::*;

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<UiIntent>>,
}

impl UiDispatch for Arc<Recorder> {
    fn dispatch(&self, intent: UiIntent) {
        self.seen.lock().unwrap().push(intent);
    }
}

#[test]
fn set_create_modal_emits_set_create_modal_intent() {
    let recorder = Arc::new(Recorder::default());
    recorder.set_create_modal(VisibilityToken::SHOWN);
    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![UiIntent::SetCreateModal(VisibilityToken::SHOWN)]
    );
}

#[test]
fn dispatch_handle_forwards_to_inner_sink() {
    let recorder = Arc::new(Recorder::default());
    let handle = DispatchHandle::new(Arc::clone(&recorder));
    handle.set_create_modal(VisibilityToken::HIDDEN);
    handle.set_create_modal(VisibilityToken::SHOWN);
    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![
            UiIntent::SetCreateModal(VisibilityToken::HIDDEN),
            UiIntent::SetCreateModal(VisibilityToken::SHOWN),
        ]
    );
}

#[test]
fn signal_dispatch_writes_through_to_state() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let handle = DispatchHandle::new(ui);
        handle.set_create_modal(VisibilityToken::SHOWN);
        assert_eq!(ui.get_untracked().create_modal, VisibilityToken::SHOWN);
    });
}

#![cfg(feature = "ssr")]

use chrono::NaiveDate;
use leptos::reactive::owner::Owner;

use super::*;
use crate::state::dispatch::{DispatchHandle, UiDispatch};
use crate::state::ui::VisibilityToken;
use crate::util::clock::{ClockHandle, FixedClock};

fn render(prepare: impl FnOnce(RwSignal<UiState>)) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        provide_context(ui);
        provide_context(DispatchHandle::new(ui));
        provide_context(ClockHandle::new(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())));
        prepare(ui);
        view! { <HomePage/> }.to_html()
    })
}

#[test]
fn home_page_renders_banner_then_footer() {
    let html = render(|_| {});
    let banner = html.find("Vote Without Rigging").unwrap();
    let footer = html.find("©️2024").unwrap();
    assert!(banner < footer);
    assert!(html.contains("Create poll"));
}

#[test]
fn home_page_reflects_hidden_dialog_by_default() {
    let html = render(|_| {});
    assert!(html.contains(r#"data-create-modal="scale-0""#));
}

#[test]
fn home_page_reflects_dispatched_visibility() {
    let html = render(|ui| DispatchHandle::new(ui).set_create_modal(VisibilityToken::SHOWN));
    assert!(html.contains(r#"data-create-modal="scale-100""#));
}

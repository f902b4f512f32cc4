//! Landing hero with the create-poll call to action.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;

use crate::state::dispatch::{UiDispatch, use_dispatch};
use crate::state::ui::VisibilityToken;

pub const HEADLINE: &str = "Vote Without Rigging";
pub const CTA_LABEL: &str = "Create poll";

/// Ask the store to show the create-poll dialog.
pub fn request_create_poll(dispatch: &dyn UiDispatch) {
    dispatch.set_create_modal(VisibilityToken::SHOWN);
}

/// Hero section: headline, pitch, and the "Create poll" button.
#[component]
pub fn Banner() -> impl IntoView {
    let dispatch = use_dispatch();
    let on_create = move |_| request_create_poll(&dispatch);

    view! {
        <main class="banner">
            <h1 class="banner__headline">{HEADLINE}</h1>
            <p class="banner__pitch">
                "This online voting system offers the highest level of transparency, control, security "
                <br/>
                "and efficiency of election processes using "
                <strong>"Blockchain Technology"</strong>
            </p>
            <button class="btn btn--pill banner__cta" on:click=on_create>
                {CTA_LABEL}
            </button>
        </main>
    }
}

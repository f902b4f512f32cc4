//! Landing page: hero banner above the footer.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::{banner::Banner, footer::Footer};
use crate::state::ui::UiState;

/// Landing page.
///
/// Mirrors the create-poll dialog token onto `data-create-modal` so the
/// dialog surface can key its transition off the page wrapper.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let create_modal = move || ui.get().create_modal.as_str();

    view! {
        <div class="home-page" data-create-modal=create_modal>
            <Banner/>
            <Footer/>
        </div>
    }
}

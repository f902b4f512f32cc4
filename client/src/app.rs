//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::dispatch::DispatchHandle;
use crate::state::ui::UiState;
use crate::util::clock::ClockHandle;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `HydrationScripts` loads the `hydrate` entry from `/pkg`, which takes
/// over the Banner's click handler in the browser.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI store, the dispatcher bound to it, and the system clock.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(DispatchHandle::new(ui));
    provide_context(ClockHandle::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/dappvotes.css"/>
        <Title text="DappVotes"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

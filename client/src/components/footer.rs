//! Page footer: social glyphs, divider, copyright and attribution.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::icon::{FOOTER_ICON_SIZE, FOOTER_ICONS, Icon};
use crate::util::clock::{Clock, use_clock};

pub const ATTRIBUTION: &str = "By Cyrus Mexon_金多 🔥";

/// Copyright text for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("©️{year}")
}

/// Footer. The year is read from the context clock once, at render time.
#[component]
pub fn Footer() -> impl IntoView {
    let year = use_clock().current_year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__icons">
                {FOOTER_ICONS
                    .into_iter()
                    .map(|kind| view! { <Icon kind=kind size=FOOTER_ICON_SIZE/> })
                    .collect_view()}
            </div>

            <hr class="site-footer__divider"/>

            <p class="site-footer__copyright">{copyright_line(year)}</p>
            <p class="site-footer__attribution">{ATTRIBUTION}</p>
        </footer>
    }
}

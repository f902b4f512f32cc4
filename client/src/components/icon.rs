//! Social network glyphs drawn as inline SVG.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

/// Pixel size of the footer glyphs.
pub const FOOTER_ICON_SIZE: u32 = 27;

/// Footer glyphs in display order.
pub const FOOTER_ICONS: [SocialIcon; 4] =
    [SocialIcon::LinkedIn, SocialIcon::YouTube, SocialIcon::GitHub, SocialIcon::Twitter];

/// Networks we carry a glyph for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    LinkedIn,
    YouTube,
    GitHub,
    Twitter,
}

impl SocialIcon {
    /// All glyph paths are drawn on this grid.
    pub const VIEW_BOX: &'static str = "0 0 24 24";

    /// Accessible name.
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::YouTube => "YouTube",
            Self::GitHub => "GitHub",
            Self::Twitter => "Twitter",
        }
    }

    /// Modifier used in the `icon--*` class.
    pub fn slug(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::YouTube => "youtube",
            Self::GitHub => "github",
            Self::Twitter => "twitter",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::LinkedIn => {
                "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.062 2.062 0 0 1-2.063-2.065 2.064 2.064 0 1 1 2.063 2.065zm1.782 13.019H3.555V9h3.564v11.452z"
            }
            Self::YouTube => {
                "M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z"
            }
            Self::GitHub => {
                "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12"
            }
            Self::Twitter => {
                "M23.953 4.57a10 10 0 0 1-2.825.775 4.958 4.958 0 0 0 2.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 0 0-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 0 0-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 0 1-2.228-.616v.06a4.923 4.923 0 0 0 3.946 4.827 4.996 4.996 0 0 1-2.212.085 4.936 4.936 0 0 0 4.604 3.417 9.867 9.867 0 0 1-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 0 0 7.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0 0 24 4.59z"
            }
        }
    }
}

/// One glyph at `size` pixels square, filled with the current text color.
#[component]
pub fn Icon(kind: SocialIcon, #[prop(default = FOOTER_ICON_SIZE)] size: u32) -> impl IntoView {
    let px = size.to_string();

    view! {
        <svg
            class=format!("icon icon--{}", kind.slug())
            width=px.clone()
            height=px
            viewBox=SocialIcon::VIEW_BOX
            fill="currentColor"
            role="img"
            aria-label=kind.label()
        >
            <path d=kind.path()></path>
        </svg>
    }
}

//! Outline icons drawn on a 24x24 grid (heroicons, v1 outline set).
//!
//! All icons use `stroke="currentColor"` so they take the surrounding text color.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    DocumentDuplicate,
    CheckCircle,
    CubeTransparent,
    Pencil,
    BookmarkAlt,
    Photograph,
    Puzzle,
    QuestionMarkCircle,
}

impl Icon {
    /// Path data, one entry per `<path>`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::DocumentDuplicate => &[
                "M8 7v8a2 2 0 002 2h6M8 7V5a2 2 0 012-2h4.586a1 1 0 01.707.293l4.414 4.414a1 1 0 01.293.707V15a2 2 0 01-2 2h-2M8 7H6a2 2 0 00-2 2v10a2 2 0 002 2h8a2 2 0 002-2v-2",
            ],
            Icon::CheckCircle => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
            Icon::CubeTransparent => &[
                "M14 10l-2 1m0 0l-2-1m2 1v2.5M20 7l-2 1m2-1l-2-1m2 1v2.5M14 4l-2-1-2 1M4 7l2-1M4 7l2 1M4 7v2.5M12 21l-2-1m2 1l2-1m-2 1v-2.5M6 18l-2-1v-2.5M18 18l2-1v-2.5",
            ],
            Icon::Pencil => &[
                "M15.232 5.232l3.536 3.536m-2.036-5.036a2.5 2.5 0 113.536 3.536L6.5 21.036H3v-3.572L16.732 3.732z",
            ],
            Icon::BookmarkAlt => &[
                "M16 4v12l-4-2-4 2V4M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
            ],
            Icon::Photograph => &[
                "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
            ],
            Icon::Puzzle => &[
                "M11 4a2 2 0 114 0v1a1 1 0 001 1h3a1 1 0 011 1v3a1 1 0 01-1 1h-1a2 2 0 100 4h1a1 1 0 011 1v3a1 1 0 01-1 1h-3a1 1 0 01-1-1v-1a2 2 0 10-4 0v1a1 1 0 01-1 1H7a1 1 0 01-1-1v-3a1 1 0 00-1-1H4a2 2 0 110-4h1a1 1 0 001-1V7a1 1 0 011-1h3a1 1 0 001-1V4z",
            ],
            Icon::QuestionMarkCircle => &[
                "M8.228 9c.549-1.165 2.03-2 3.772-2 2.21 0 4 1.343 4 3 0 1.4-1.278 2.575-3.006 2.907-.542.104-.994.54-.994 1.093m0 3h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            ],
        }
    }

    /// Stable name, rendered as `data-icon` so the current glyph is inspectable.
    pub fn name(self) -> &'static str {
        match self {
            Icon::DocumentDuplicate => "document-duplicate",
            Icon::CheckCircle => "check-circle",
            Icon::CubeTransparent => "cube-transparent",
            Icon::Pencil => "pencil",
            Icon::BookmarkAlt => "bookmark-alt",
            Icon::Photograph => "photograph",
            Icon::Puzzle => "puzzle",
            Icon::QuestionMarkCircle => "question-mark-circle",
        }
    }
}

/// Render an [`Icon`] as inline SVG. Decorative: hidden from assistive tech.
#[component]
pub fn IconSvg(icon: Icon, #[prop(default = "h-6 w-6")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.name()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            {icon
                .paths()
                .iter()
                .map(|d| view! { <path stroke-linecap="round" stroke-linejoin="round" d=*d /> })
                .collect_view()}
        </svg>
    }
}

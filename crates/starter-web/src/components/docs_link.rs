use leptos::prelude::*;

/// "Visit documentation" link that opens in a new tab
#[component]
pub fn DocsLink(#[prop(into)] href: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noreferrer"
            class="text-white transition hover:text-blue-400"
        >
            "Visit documentation \u{2192}"
        </a>
    }
}

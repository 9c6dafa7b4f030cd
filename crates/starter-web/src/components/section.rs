use leptos::prelude::*;

/// Page section with an anchored heading
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-12">
            <h2 class="mb-6 text-xl font-bold uppercase tracking-wide text-gray-400">
                {title}
                <a href=anchor_href class="ml-2 opacity-0 hover:opacity-100" aria-hidden="true">"#"</a>
            </h2>
            {children()}
        </section>
    }
}

use leptos::prelude::*;

/// Primary button with the template's styling. Children are the label.
#[component]
pub fn Button(
    /// Invoked once per click
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] disabled: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            disabled=disabled
            on:click=forward_click(on_click)
            class="inline-flex items-center rounded-md bg-blue-500 px-4 py-2 font-bold text-white tracking-wide transition hover:bg-blue-400 disabled:opacity-50"
        >
            {children()}
        </button>
    }
}

/// Event handler that drops the event and runs `on_click`, if any.
fn forward_click<E>(on_click: Option<Callback<()>>) -> impl Fn(E) + Clone {
    move |_| {
        if let Some(cb) = on_click {
            cb.run(());
        }
    }
}

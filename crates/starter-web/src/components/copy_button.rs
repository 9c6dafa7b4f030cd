use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::{CopyModel, PlatformClipboard, run_activation};
use crate::components::IconSvg;

/// Shell command display that copies itself to the clipboard when activated.
///
/// The icon and tooltip switch to the "copied" pair only after the write
/// resolves successfully. Failed or unsupported writes leave it untouched.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked, rendered verbatim after a `$` prompt
    #[prop(into)]
    text: String,
    /// Return to the idle affordance this many milliseconds after a copy.
    /// Without it the control stays "copied" until remounted.
    #[prop(optional)]
    reset_after_ms: Option<u32>,
) -> impl IntoView {
    let model = RwSignal::new(CopyModel::default());
    let payload = text.clone();

    let on_activate = Callback::new(move |_| {
        let payload = payload.clone();
        spawn_local(async move {
            run_activation(&PlatformClipboard, &payload, model, reset_after_ms).await;
        });
    });

    view! { <CopyControlView text model on_activate /> }
}

/// Markup of a copy control, rendered from `model`.
/// `on_activate` runs on click and on Enter/Space.
#[component]
pub fn CopyControlView(
    #[prop(into)] text: String,
    model: RwSignal<CopyModel>,
    on_activate: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            on_activate.run(());
        }
    };

    let affordance = move || model.get().affordance();

    view! {
        <div
            role="button"
            tabindex="0"
            title=move || affordance().title
            on:click=move |_| on_activate.run(())
            on:keydown=on_keydown
            class="flex items-center gap-4 rounded-md bg-white/5 px-4 py-3 font-mono text-sm text-gray-200 cursor-pointer select-none hover:bg-white/10 transition"
        >
            <span class="flex-1 break-all">
                <span class="text-gray-500" aria-hidden="true">"$ "</span>
                {text}
            </span>
            <span class="sr-only">"(click to copy to clipboard)"</span>
            <div class="text-gray-400">
                {move || view! { <IconSvg icon=affordance().icon class="h-5 w-5" /> }}
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::components::{Icon, IconSvg};

/// Feature card: title, description, a faint corner icon, and a
/// call-to-action slot passed as children.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    icon: Icon,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative h-full overflow-hidden rounded-md bg-white/5 p-4 shadow">
            <span class="absolute right-3 bottom-3 flex items-center justify-center opacity-10 text-white">
                <IconSvg icon=icon class="h-12 w-12" />
            </span>
            <div class="flex h-full flex-col">
                <h3 class="text-2xl font-bold text-blue-500">{title}</h3>
                <p class="mt-2 flex-1 text-base text-gray-300">{description}</p>
                {children()}
            </div>
        </div>
    }
}

/// Bottom-of-card container for a link or button.
#[component]
pub fn CardCallToAction(children: Children) -> impl IntoView {
    view! {
        <div class="pt-6 font-bold tracking-wide">
            {children()}
        </div>
    }
}

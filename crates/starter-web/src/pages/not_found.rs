use leptos::prelude::*;

use crate::components::Button;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="mx-auto max-w-xl px-4 py-20 text-center">
            <p class="mb-6 text-gray-300">"404 - Page not found"</p>
            // Plain GET form so the way back works before hydration
            <form action="/" method="get">
                <Button button_type="submit">"Back to home"</Button>
            </form>
        </main>
    }
}

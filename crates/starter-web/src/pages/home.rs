use leptos::prelude::*;

use crate::components::{Card, CardCallToAction, CopyButton, DocsLink, Section, ViteLogo};
use crate::config::{SITE, card_animation_delay};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="mx-auto max-w-5xl px-4 py-12 md:py-20">
            <header class="mb-12 flex flex-col items-center text-center">
                <ViteLogo width="96" height="96" class="mb-8 animate-pulse" />
                <h1 class="text-3xl font-extrabold text-white md:text-5xl">{SITE.title}</h1>
                <div class="mt-8 w-full max-w-xl">
                    <CopyButton text=SITE.scaffold_command />
                </div>
            </header>

            <Section id="features" title="Features">
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {SITE
                        .features
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <div class="card-fade-in" style=card_animation_delay(index)>
                                    <Card
                                        title=feature.name
                                        description=feature.description
                                        icon=feature.icon
                                    >
                                        <CardCallToAction>
                                            <DocsLink href=feature.docs />
                                        </CardCallToAction>
                                    </Card>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Section>
        </main>
    }
}

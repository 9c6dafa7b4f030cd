//! Server-side render checks for the landing page components.

#![cfg(feature = "ssr")]

use std::future::Future;

use futures::executor::block_on;
use leptos::prelude::*;
use starter_web::clipboard::{Clipboard, ClipboardError, CopyModel, run_activation};
use starter_web::components::{Button, Card, CardCallToAction, CopyButton, CopyControlView, DocsLink, Icon};
use starter_web::config::SITE;
use starter_web::pages::HomePage;

fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| f().to_html())
}

#[test]
fn copy_button_renders_idle_affordance_and_payload() {
    let html = render(|| view! { <CopyButton text="npx degit example/repo my-app" /> });

    assert!(html.contains("npx degit example/repo my-app"));
    assert!(html.contains("title=\"Click to copy to clipboard\""));
    assert!(html.contains("data-icon=\"document-duplicate\""));
    assert!(html.contains("role=\"button\""));
    assert!(html.contains("$ "));
    assert!(html.contains("(click to copy to clipboard)"));
    assert!(!html.contains("Copied"));
}

struct AcceptingClipboard;

impl Clipboard for AcceptingClipboard {
    fn write_text(&self, _text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        std::future::ready(Ok(()))
    }
}

struct RejectingClipboard;

impl Clipboard for RejectingClipboard {
    fn write_text(&self, _text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        std::future::ready(Err(ClipboardError::new("NotAllowedError")))
    }
}

/// Render a copy control after one activation against `clipboard`.
fn render_after_activation<C: Clipboard>(clipboard: &C, text: &'static str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let model = RwSignal::new(CopyModel::default());
        block_on(run_activation(clipboard, text, model, None));
        let on_activate = Callback::new(|_| ());
        view! { <CopyControlView text model on_activate /> }.to_html()
    })
}

#[test]
fn copied_control_renders_success_affordance_and_payload() {
    let html = render_after_activation(&AcceptingClipboard, "npx degit example/repo my-app");

    assert!(html.contains("npx degit example/repo my-app"));
    assert!(html.contains("title=\"Copied\""));
    assert!(html.contains("data-icon=\"check-circle\""));
    assert!(!html.contains("data-icon=\"document-duplicate\""));
    assert!(html.contains("$ "));
}

#[test]
fn rejected_copy_renders_idle_affordance() {
    let html = render_after_activation(&RejectingClipboard, "npx degit example/repo my-app");

    assert!(html.contains("npx degit example/repo my-app"));
    assert!(html.contains("title=\"Click to copy to clipboard\""));
    assert!(html.contains("data-icon=\"document-duplicate\""));
    assert!(!html.contains("check-circle"));
}

#[test]
fn copy_button_escapes_payload_markup() {
    let html = render(|| view! { <CopyButton text="echo <b>hi</b>" /> });

    assert!(html.contains("echo &lt;b&gt;hi&lt;/b&gt;"));
}

#[test]
fn card_renders_title_description_and_cta() {
    let html = render(|| {
        view! {
            <Card title="Vite" description="Fast builds" icon=Icon::CubeTransparent>
                <CardCallToAction>
                    <DocsLink href="https://vitejs.dev/" />
                </CardCallToAction>
            </Card>
        }
    });

    assert!(html.contains("Vite"));
    assert!(html.contains("Fast builds"));
    assert!(html.contains("href=\"https://vitejs.dev/\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("Visit documentation \u{2192}"));
    assert!(html.contains("data-icon=\"cube-transparent\""));
}

#[test]
fn button_renders_label() {
    let html = render(|| view! { <Button>"This is a button"</Button> });

    assert!(html.contains("<button"));
    assert!(html.contains("type=\"button\""));
    assert!(html.contains("This is a button"));
}

#[test]
fn home_page_lists_every_feature() {
    let html = render(|| view! { <HomePage /> });

    assert!(html.contains(SITE.title));
    assert!(html.contains(SITE.scaffold_command));
    for feature in SITE.features {
        assert!(html.contains(feature.name), "missing {}", feature.name);
        assert!(html.contains(feature.docs), "missing {}", feature.docs);
    }
    assert!(html.contains("animation-delay: 0.2s"));
    assert!(html.contains("animation-delay: 0.7s"));
}

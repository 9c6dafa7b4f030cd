use std::future::Future;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::{Clipboard, ClipboardError};

/// `navigator.clipboard.writeText`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        // Start the write synchronously so it runs inside the user gesture.
        let pending = navigator_clipboard().map(|clipboard| JsFuture::from(clipboard.write_text(text)));
        async move {
            pending?
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::new(format!("{:?}", e)))
        }
    }
}

/// The clipboard object, if the host exposes one.
/// Insecure contexts leave `navigator.clipboard` undefined.
fn navigator_clipboard() -> Result<web_sys::Clipboard, ClipboardError> {
    let window = web_sys::window().ok_or_else(|| ClipboardError::new("no window"))?;
    let navigator = window.navigator();
    let present = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    if !present {
        return Err(ClipboardError::new("navigator.clipboard is not available"));
    }
    Ok(navigator.clipboard())
}

pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

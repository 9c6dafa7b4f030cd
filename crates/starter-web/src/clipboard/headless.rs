use std::future::Future;

use super::{Clipboard, ClipboardError};

/// Clipboard for targets with no browser, such as server-side rendering.
/// Every write fails, which leaves copy controls idle.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessClipboard;

impl Clipboard for HeadlessClipboard {
    fn write_text(&self, _text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        std::future::ready(Err(ClipboardError::new("no clipboard on this target")))
    }
}

/// No timer source without a browser: completes immediately, so a pending
/// reset runs right away instead of holding its task.
pub async fn sleep_ms(_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{CopyModel, CopyState, run_activation};
    use futures::executor::block_on;
    use leptos::prelude::*;

    #[test]
    fn headless_write_leaves_control_idle() {
        let owner = Owner::new();
        owner.with(|| {
            let model = RwSignal::new(CopyModel::default());
            block_on(run_activation(&HeadlessClipboard, "npm run dev", model, None));
            assert_eq!(model.get_untracked().state(), CopyState::Idle);
        });
    }

    #[test]
    fn sleep_completes_without_a_timer() {
        block_on(sleep_ms(60_000));
    }
}

//! Copy-to-clipboard core.
//!
//! The reactive `CopyButton` component is a thin shell over the code here:
//! a two-state [`CopyModel`], a lookup table from state to [`Affordance`],
//! and the [`Clipboard`] capability the write goes through. A write attempt
//! resolves to a [`CopyOutcome`] message which the owner applies to its model.
//! That message is the only thing allowed to move the model into `Copied`.
//! [`run_activation`] is the whole activation path the component spawns.

use std::future::Future;

use leptos::prelude::*;

use crate::components::Icon;

#[cfg(not(feature = "hydrate"))]
mod headless;
#[cfg(feature = "hydrate")]
mod web;

#[cfg(not(feature = "hydrate"))]
pub use headless::{HeadlessClipboard as PlatformClipboard, sleep_ms};
#[cfg(feature = "hydrate")]
pub use web::{NavigatorClipboard as PlatformClipboard, sleep_ms};

/// Tooltip shown before a successful copy.
pub const IDLE_TITLE: &str = "Click to copy to clipboard";
/// Tooltip shown once the payload is on the clipboard.
pub const COPIED_TITLE: &str = "Copied";

/// Failure to place text on the clipboard: capability missing or write rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable or write failed: {0}")]
    UnavailableOrFailed(String),
}

impl ClipboardError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self::UnavailableOrFailed(reason.into())
    }
}

/// Host clipboard capability. Only plain-text writes are needed.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

/// Icon and tooltip pairing for one [`CopyState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub icon: Icon,
    pub title: &'static str,
}

// Indexed by `CopyState as usize`.
const AFFORDANCES: [Affordance; 2] = [
    Affordance {
        icon: Icon::DocumentDuplicate,
        title: IDLE_TITLE,
    },
    Affordance {
        icon: Icon::CheckCircle,
        title: COPIED_TITLE,
    },
];

impl CopyState {
    pub fn affordance(self) -> Affordance {
        AFFORDANCES[self as usize]
    }
}

/// Result of one write attempt, handed back to whoever owns the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Unchanged,
}

/// Proof of a particular successful copy, used to expire it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Transient display state of one mounted copy control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyModel {
    state: CopyState,
    generation: u64,
}

impl CopyModel {
    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn affordance(&self) -> Affordance {
        self.state.affordance()
    }

    /// Apply a write outcome. A successful write returns a ticket that can
    /// later be passed to [`CopyModel::expire`].
    pub fn apply(&mut self, outcome: CopyOutcome) -> Option<ResetTicket> {
        match outcome {
            CopyOutcome::Copied => {
                self.state = CopyState::Copied;
                self.generation += 1;
                Some(ResetTicket(self.generation))
            }
            CopyOutcome::Unchanged => None,
        }
    }

    /// Return to `Idle` if `ticket` belongs to the most recent successful copy.
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.state == CopyState::Copied && ticket.0 == self.generation {
            self.state = CopyState::Idle;
            true
        } else {
            false
        }
    }
}

/// Write `text` to `clipboard` exactly once. Errors are absorbed: the
/// control stays idle and nothing is reported.
pub async fn copy_text<C: Clipboard>(clipboard: &C, text: &str) -> CopyOutcome {
    match clipboard.write_text(text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(_) => CopyOutcome::Unchanged,
    }
}

/// One activation of a mounted copy control: write `text`, mark `model` as
/// copied on success and, with `reset_after_ms`, expire that copy later.
///
/// Failed writes leave `model` untouched, without notifying subscribers.
/// Returns early if the control was unmounted while the write was pending.
pub async fn run_activation<C: Clipboard>(
    clipboard: &C,
    text: &str,
    model: RwSignal<CopyModel>,
    reset_after_ms: Option<u32>,
) {
    if copy_text(clipboard, text).await != CopyOutcome::Copied {
        return;
    }
    let Some(ticket) = model.try_update(|m| m.apply(CopyOutcome::Copied)).flatten() else {
        return;
    };
    if let Some(ms) = reset_after_ms {
        sleep_ms(ms).await;
        model.try_update(|m| m.expire(ticket));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        fail: bool,
        writes: RefCell<Vec<String>>,
    }

    impl Clipboard for Recording {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push(text.to_string());
            if self.fail {
                Err(ClipboardError::new("NotAllowedError"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn affordance_table() {
        assert_eq!(
            CopyState::Idle.affordance(),
            Affordance {
                icon: Icon::DocumentDuplicate,
                title: "Click to copy to clipboard"
            }
        );
        assert_eq!(
            CopyState::Copied.affordance(),
            Affordance {
                icon: Icon::CheckCircle,
                title: "Copied"
            }
        );
    }

    #[test]
    fn model_starts_idle() {
        assert_eq!(CopyModel::default().state(), CopyState::Idle);
    }

    #[test]
    fn unchanged_outcome_keeps_idle() {
        let mut model = CopyModel::default();
        assert_eq!(model.apply(CopyOutcome::Unchanged), None);
        assert_eq!(model.state(), CopyState::Idle);
    }

    #[test]
    fn stale_ticket_does_not_reset() {
        let mut model = CopyModel::default();
        let first = model.apply(CopyOutcome::Copied).unwrap();
        let second = model.apply(CopyOutcome::Copied).unwrap();

        assert!(!model.expire(first));
        assert_eq!(model.state(), CopyState::Copied);

        assert!(model.expire(second));
        assert_eq!(model.state(), CopyState::Idle);

        // Already idle
        assert!(!model.expire(second));
    }

    #[test]
    fn copy_text_forwards_payload_once() {
        let clipboard = Recording::default();
        let outcome = block_on(copy_text(&clipboard, "cargo leptos watch"));
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(*clipboard.writes.borrow(), vec!["cargo leptos watch".to_string()]);
    }

    #[test]
    fn copy_text_absorbs_rejection() {
        let clipboard = Recording {
            fail: true,
            ..Default::default()
        };
        assert_eq!(block_on(copy_text(&clipboard, "x")), CopyOutcome::Unchanged);
        assert_eq!(clipboard.writes.borrow().len(), 1);
    }

    #[test]
    fn error_message_names_reason() {
        let err = ClipboardError::new("no window");
        assert_eq!(err.to_string(), "clipboard unavailable or write failed: no window");
    }
}

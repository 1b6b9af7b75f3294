//! Terminal View
//!
//! [`BoardView`] for the command line: the board is printed as text and
//! feedback messages as a single marked line. There is no form to reset and
//! nothing to auto-hide; the last message is kept for the caller.

use std::cell::RefCell;
use std::io::Write;
use tracing::warn;

use crate::board::BoardView;
use crate::catalog::ActivityCatalog;
use crate::feedback::{FeedbackKind, FeedbackMessage, FeedbackState};
use crate::render::{render_catalog_text, LOAD_FAILURE_TEXT};

pub struct TerminalView<W: Write> {
    out: RefCell<W>,
    feedback: RefCell<FeedbackState>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            feedback: RefCell::new(FeedbackState::new()),
        }
    }

    /// The most recent feedback message
    pub fn feedback(&self) -> Option<FeedbackMessage> {
        self.feedback.borrow().current().cloned()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_block(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> BoardView for TerminalView<W> {
    fn render_catalog(&self, catalog: &ActivityCatalog) {
        self.write_block(&render_catalog_text(catalog));
    }

    fn render_load_failure(&self) {
        self.write_block(LOAD_FAILURE_TEXT);
    }

    fn show_feedback(&self, message: &FeedbackMessage) {
        self.feedback.borrow_mut().show(message.clone());

        let icon = match message.kind {
            FeedbackKind::Success => "✓",
            FeedbackKind::Error => "✕",
        };
        self.write_block(&format!("{} {}", icon, message.text));
    }

    fn reset_signup_form(&self) {}
}

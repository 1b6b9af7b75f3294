//! Feedback Messages
//!
//! The single transient message shown after a signup or unregister attempt.
//!
//! [`FeedbackState`] is the message's state machine: hidden, visible as a
//! success, or visible as an error. Every [`FeedbackState::show`] hands out a
//! [`FeedbackTicket`]; an auto-hide timer armed for an older ticket can no
//! longer hide a newer message.

/// How long a message stays visible
pub const AUTO_HIDE_MS: u32 = 5000;

/// Shown when the server rejects a request without a `detail`
pub const REJECTION_FALLBACK: &str = "An error occurred";

/// Shown when a signup request never got a usable response
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Shown when an unregister request never got a usable response
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// Message style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// Class applied to the message element
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: FeedbackKind,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}

/// Identifies one `show`; only the latest ticket may hide the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

/// Visible state of the message element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackPhase {
    Hidden,
    VisibleSuccess,
    VisibleError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackState {
    current: Option<FeedbackMessage>,
    shown: u64,
}

impl FeedbackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever is visible
    pub fn show(&mut self, message: FeedbackMessage) -> FeedbackTicket {
        self.shown += 1;
        self.current = Some(message);
        FeedbackTicket(self.shown)
    }

    /// Hide the message if `ticket` belongs to it.
    ///
    /// Returns `true` if the message was hidden.
    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.shown || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&FeedbackMessage> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn phase(&self) -> FeedbackPhase {
        match self.current.as_ref().map(|message| message.kind) {
            None => FeedbackPhase::Hidden,
            Some(FeedbackKind::Success) => FeedbackPhase::VisibleSuccess,
            Some(FeedbackKind::Error) => FeedbackPhase::VisibleError,
        }
    }

    /// Class for the message element: `success`, `error` or `hidden`
    pub fn css_class(&self) -> &'static str {
        match self.phase() {
            FeedbackPhase::Hidden => "hidden",
            FeedbackPhase::VisibleSuccess => "success",
            FeedbackPhase::VisibleError => "error",
        }
    }
}

//! Activity Board Controller
//!
//! [`ActivityBoard`] owns the board's behavior and nothing else: it asks an
//! [`ActivityService`] for data and tells a [`BoardView`] what to show.
//!
//! ## Operations
//!
//! - [`refresh`](ActivityBoard::refresh): fetch the catalog and rebuild the
//!   list and the activity selector
//! - [`signup`](ActivityBoard::signup): register an email, then refresh
//! - [`unregister`](ActivityBoard::unregister): remove an email, then refresh
//!
//! None of these return errors. Failures end up on the view as the list
//! failure text or as an error feedback message, and in the log.
//!
//! ## Overlapping refreshes
//!
//! Operations may overlap; every refresh takes a generation number when it
//! is issued and its response is applied only if no newer refresh has been
//! issued in the meantime.

use std::cell::Cell;
use tracing::{debug, error, info, warn};

use crate::catalog::ActivityCatalog;
use crate::feedback::{FeedbackMessage, REJECTION_FALLBACK, SIGNUP_FAILED, UNREGISTER_FAILED};
use crate::service::{ActionReply, ActivityService, ServiceError, ServiceResult};

/// Rendering surface driven by the board
pub trait BoardView {
    /// Rebuild the activity list and the selector options from `catalog`
    fn render_catalog(&self, catalog: &ActivityCatalog);

    /// Replace the activity list with the load failure text. The selector
    /// must be left as it is.
    fn render_load_failure(&self);

    /// Show `message` and arm its auto-hide
    fn show_feedback(&self, message: &FeedbackMessage);

    /// Clear the signup form after a successful signup
    fn reset_signup_form(&self);

    /// Developer-facing diagnostics for a failed operation
    fn report_error(&self, _context: &str, _error: &ServiceError) {}
}

/// What happened to a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The catalog was rendered
    Rendered,
    /// The load failure text was rendered
    Failed,
    /// A newer refresh was issued first; nothing was rendered
    Superseded,
}

/// What happened to a signup or unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    /// The server answered with a non-2xx status
    Rejected,
    /// No usable response
    Failed,
    /// Required input was missing; nothing was sent
    Ignored,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Signup => "signup",
            Action::Unregister => "unregister",
        }
    }

    fn error_context(self) -> &'static str {
        match self {
            Action::Signup => "Error signing up",
            Action::Unregister => "Error unregistering",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            Action::Signup => SIGNUP_FAILED,
            Action::Unregister => UNREGISTER_FAILED,
        }
    }
}

/// The board controller
pub struct ActivityBoard<S, V> {
    service: S,
    view: V,
    refresh_generation: Cell<u64>,
}

impl<S: ActivityService, V: BoardView> ActivityBoard<S, V> {
    pub fn new(service: S, view: V) -> Self {
        Self {
            service,
            view,
            refresh_generation: Cell::new(0),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the catalog and render it, or render the load failure.
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.refresh_generation.get() + 1;
        self.refresh_generation.set(generation);
        debug!(generation, "Fetching activities");

        let result = self.service.fetch_activities().await;

        let latest = self.refresh_generation.get();
        if generation != latest {
            match &result {
                Ok(_) => debug!(generation, latest, "Discarding superseded activities response"),
                Err(e) => warn!(generation, latest, error = %e, "Superseded refresh failed"),
            }
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(catalog) => {
                debug!(generation, activities = catalog.len(), "Rendering activities");
                self.view.render_catalog(&catalog);
                RefreshOutcome::Rendered
            }
            Err(e) => {
                error!(generation, error = %e, "Error fetching activities");
                self.view.report_error("Error fetching activities", &e);
                self.view.render_load_failure();
                RefreshOutcome::Failed
            }
        }
    }

    /// Register `email` for `activity`.
    ///
    /// On success the form is reset and the board refreshed. An empty
    /// activity name sends nothing.
    pub async fn signup(&self, activity: &str, email: &str) -> ActionOutcome {
        if activity.is_empty() {
            warn!("Ignoring signup without an activity");
            return ActionOutcome::Ignored;
        }

        let result = self.service.signup(activity, email).await;
        self.settle(Action::Signup, activity, result).await
    }

    /// Remove `email` from `activity`.
    ///
    /// Arguments are the data attributes of the clicked unregister button;
    /// if either is missing or empty nothing is sent and nothing is shown.
    pub async fn unregister(&self, activity: Option<&str>, email: Option<&str>) -> ActionOutcome {
        let given = (
            activity.filter(|a| !a.is_empty()),
            email.filter(|e| !e.is_empty()),
        );

        let (activity, email) = match given {
            (Some(activity), Some(email)) => (activity, email),
            _ => {
                warn!(?activity, ?email, "Ignoring unregister without participant data");
                return ActionOutcome::Ignored;
            }
        };

        let result = self.service.unregister(activity, email).await;
        self.settle(Action::Unregister, activity, result).await
    }

    async fn settle(
        &self,
        action: Action,
        activity: &str,
        result: ServiceResult<ActionReply>,
    ) -> ActionOutcome {
        match result {
            Ok(reply) => {
                info!(action = action.name(), activity, "{}", reply.message);
                self.view.show_feedback(&FeedbackMessage::success(reply.message));
                if let Action::Signup = action {
                    self.view.reset_signup_form();
                }
                self.refresh().await;
                ActionOutcome::Succeeded
            }
            Err(ServiceError::Rejected { status, detail }) => {
                warn!(action = action.name(), activity, status, ?detail, "Request rejected");
                let text = detail.unwrap_or_else(|| REJECTION_FALLBACK.to_string());
                self.view.show_feedback(&FeedbackMessage::error(text));
                ActionOutcome::Rejected
            }
            Err(e) => {
                error!(action = action.name(), activity, error = %e, "Request failed");
                self.view.report_error(action.error_context(), &e);
                self.view.show_feedback(&FeedbackMessage::error(action.failure_text()));
                ActionOutcome::Failed
            }
        }
    }
}

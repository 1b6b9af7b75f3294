//! Board State
//!
//! Reactive state behind the page, written by the
//! [`ActivityBoard`](activity_board::ActivityBoard) controller through
//! [`BoardView`].

use activity_board::feedback::AUTO_HIDE_MS;
use activity_board::render::{render_activity_list, selector_options, SelectOption, LOAD_FAILURE_HTML};
use activity_board::{ActivityBoard, ActivityCatalog, BoardView, FeedbackMessage, FeedbackState, ServiceError};
use gloo_timers::callback::Timeout;
use leptos::*;
use std::rc::Rc;

use crate::api::{self, GlooActivityService};

/// Shown in the list container until the first refresh settles
pub const LOADING_HTML: &str = "<p>Loading activities...</p>";

/// The controller as provided to components
pub type Board = Rc<ActivityBoard<GlooActivityService, BoardState>>;

/// Page state shared by all components
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Markup of the activity list container
    pub list_html: RwSignal<String>,
    /// Selector entries after the placeholder
    pub options: RwSignal<Vec<SelectOption>>,
    /// Signup form email field
    pub email: RwSignal<String>,
    /// Signup form selected activity; empty is the placeholder
    pub activity: RwSignal<String>,
    pub feedback: RwSignal<FeedbackState>,
    /// Pending auto-hide; replacing it cancels the previous one
    hide_timer: StoredValue<Option<Timeout>>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            list_html: create_rw_signal(LOADING_HTML.to_string()),
            options: create_rw_signal(Vec::new()),
            email: create_rw_signal(String::new()),
            activity: create_rw_signal(String::new()),
            feedback: create_rw_signal(FeedbackState::new()),
            hide_timer: store_value(None),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for BoardState {
    fn render_catalog(&self, catalog: &ActivityCatalog) {
        self.list_html.set(render_activity_list(catalog));
        self.options.set(selector_options(catalog));
    }

    fn render_load_failure(&self) {
        self.list_html.set(LOAD_FAILURE_HTML.to_string());
    }

    fn show_feedback(&self, message: &FeedbackMessage) {
        let Some(ticket) = self
            .feedback
            .try_update(|feedback| feedback.show(message.clone()))
        else {
            return;
        };

        let feedback = self.feedback;
        let timer = Timeout::new(AUTO_HIDE_MS, move || {
            feedback.try_update(|feedback| feedback.expire(ticket));
        });
        self.hide_timer.set_value(Some(timer));
    }

    fn reset_signup_form(&self) {
        self.email.set(String::new());
        self.activity.set(String::new());
    }

    fn report_error(&self, context: &str, error: &ServiceError) {
        web_sys::console::error_1(&format!("{}: {}", context, error).into());
    }
}

/// Create the board and provide it to the component tree
pub fn provide_board() -> Board {
    let service = GlooActivityService::new(&api::get_api_base());
    let board = Rc::new(ActivityBoard::new(service, BoardState::new()));

    provide_context(board.clone());
    board
}

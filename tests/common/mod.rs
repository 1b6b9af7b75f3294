//! Shared test fixtures: an in-process Activity Directory Service and a
//! view that records what a browser page would show.

use activity_board::render::{render_activity_list, selector_options, SelectOption, LOAD_FAILURE_HTML};
use activity_board::{Activity, ActivityCatalog, BoardView, FeedbackMessage, ServiceConfig};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory directory with the server's observable rules
#[derive(Clone, Default)]
pub struct Directory {
    activities: Arc<Mutex<ActivityCatalog>>,
    fetches: Arc<AtomicUsize>,
    fail_fetches: Arc<AtomicBool>,
    saw_no_store: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl Directory {
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    pub fn saw_no_store(&self) -> bool {
        self.saw_no_store.load(Ordering::SeqCst)
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .lock()
            .unwrap()
            .get(activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }
}

/// The activities a fresh directory starts with
pub fn school_catalog() -> ActivityCatalog {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new("Learn strategies and compete in chess tournaments", "Fridays, 3:30 PM - 5:00 PM", 12)
                .participant("michael@mergington.edu")
                .participant("daniel@mergington.edu"),
        ),
        (
            "Programming Class".to_string(),
            Activity::new("Learn programming fundamentals and build software projects", "Tuesdays and Thursdays, 3:30 PM - 4:30 PM", 20)
                .participant("emma@mergington.edu"),
        ),
        (
            "Art & Design".to_string(),
            Activity::new("Drawing, painting and <mixed> media", "Wednesdays, 3:30 PM - 5:00 PM", 1),
        ),
    ]
    .into_iter()
    .collect()
}

/// Start a directory on a free local port; returns its client config
pub async fn spawn_directory(catalog: ActivityCatalog) -> (ServiceConfig, Directory) {
    let directory = Directory {
        activities: Arc::new(Mutex::new(catalog)),
        ..Directory::default()
    };

    let router = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/participants", delete(unregister))
        .with_state(directory.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ServiceConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: 5,
    };
    (config, directory)
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn detail(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}

async fn list_activities(State(directory): State<Directory>, headers: HeaderMap) -> Response {
    directory.fetches.fetch_add(1, Ordering::SeqCst);
    if headers.get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()) == Some("no-store") {
        directory.saw_no_store.store(true, Ordering::SeqCst);
    }

    if directory.fail_fetches.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }

    let body = serde_json::to_string(&*directory.activities.lock().unwrap()).unwrap();
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response()
}

async fn signup(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let mut activities = directory.activities.lock().unwrap();
    let Some(activity) = activities.get_mut(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    if activity.participants.contains(&query.email) {
        return detail(StatusCode::BAD_REQUEST, "Student is already signed up");
    }

    activity.participants.push(query.email.clone());
    Json(serde_json::json!({ "message": format!("Signed up {} for {}", query.email, name) }))
        .into_response()
}

async fn unregister(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let mut activities = directory.activities.lock().unwrap();
    let Some(activity) = activities.get_mut(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    let Some(index) = activity.participants.iter().position(|p| *p == query.email) else {
        return detail(StatusCode::NOT_FOUND, "Student is not signed up for this activity");
    };

    activity.participants.remove(index);
    Json(serde_json::json!({ "message": format!("Unregistered {} from {}", query.email, name) }))
        .into_response()
}

/// View keeping what a browser page would show
#[derive(Default)]
pub struct PageView {
    pub list_html: RefCell<String>,
    pub options: RefCell<Vec<SelectOption>>,
    pub email_field: RefCell<String>,
    pub feedback: RefCell<Vec<FeedbackMessage>>,
}

#[allow(dead_code)]
impl PageView {
    pub fn last_feedback(&self) -> Option<FeedbackMessage> {
        self.feedback.borrow().last().cloned()
    }

    pub fn option_labels(&self) -> Vec<String> {
        self.options.borrow().iter().map(|o| o.label.clone()).collect()
    }
}

impl BoardView for PageView {
    fn render_catalog(&self, catalog: &ActivityCatalog) {
        *self.list_html.borrow_mut() = render_activity_list(catalog);
        *self.options.borrow_mut() = selector_options(catalog);
    }

    fn render_load_failure(&self) {
        *self.list_html.borrow_mut() = LOAD_FAILURE_HTML.to_string();
    }

    fn show_feedback(&self, message: &FeedbackMessage) {
        self.feedback.borrow_mut().push(message.clone());
    }

    fn reset_signup_form(&self) {
        self.email_field.borrow_mut().clear();
    }
}

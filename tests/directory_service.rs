//! The board and the HTTP client against an in-process directory service.

mod common;

use activity_board::render::LOAD_FAILURE_HTML;
use activity_board::{
    ActionOutcome, ActivityBoard, ActivityService, FeedbackMessage, HttpActivityService,
    RefreshOutcome, ServiceError,
};
use common::{school_catalog, spawn_directory, PageView};

async fn spawn_board() -> (ActivityBoard<HttpActivityService, PageView>, common::Directory) {
    let (config, directory) = spawn_directory(school_catalog()).await;
    let service = HttpActivityService::new(&config).unwrap();
    (ActivityBoard::new(service, PageView::default()), directory)
}

#[tokio::test]
async fn test_fetch_keeps_server_order_and_bypasses_cache() {
    let (config, directory) = spawn_directory(school_catalog()).await;
    let service = HttpActivityService::new(&config).unwrap();

    let catalog = service.fetch_activities().await.unwrap();

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Chess Club", "Programming Class", "Art & Design"]);
    assert_eq!(catalog.get("Chess Club").unwrap().spots_left(), 10);
    assert!(directory.saw_no_store());
}

#[tokio::test]
async fn test_initial_refresh_renders_board() {
    let (board, _directory) = spawn_board().await;

    assert_eq!(board.refresh().await, RefreshOutcome::Rendered);

    let html = board.view().list_html.borrow().clone();
    assert!(html.contains("<h4>Chess Club</h4>"));
    assert!(html.contains("10 spots left"));
    assert!(html.contains("<h4>Art &amp; Design</h4>"));
    assert!(html.contains("Drawing, painting and &lt;mixed&gt; media"));
    assert!(html.contains("No participants yet"));
    assert_eq!(
        board.view().option_labels(),
        vec!["Chess Club", "Programming Class", "Art & Design"]
    );
}

#[tokio::test]
async fn test_signup_shows_new_participant() {
    let (board, directory) = spawn_board().await;
    *board.view().email_field.borrow_mut() = "newstudent@mergington.edu".to_string();

    let outcome = board.signup("Chess Club", "newstudent@mergington.edu").await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert_eq!(
        board.view().last_feedback(),
        Some(FeedbackMessage::success(
            "Signed up newstudent@mergington.edu for Chess Club"
        ))
    );
    assert!(board.view().email_field.borrow().is_empty());
    assert!(board.view().list_html.borrow().contains("newstudent@mergington.edu"));
    assert_eq!(directory.fetches(), 1);
}

#[tokio::test]
async fn test_duplicate_signup_is_rejected_with_detail() {
    let (board, directory) = spawn_board().await;

    assert_eq!(
        board.signup("Programming Class", "dupe@mergington.edu").await,
        ActionOutcome::Succeeded
    );
    *board.view().email_field.borrow_mut() = "dupe@mergington.edu".to_string();

    let outcome = board.signup("Programming Class", "dupe@mergington.edu").await;

    assert_eq!(outcome, ActionOutcome::Rejected);
    assert_eq!(
        board.view().last_feedback(),
        Some(FeedbackMessage::error("Student is already signed up"))
    );
    assert_eq!(*board.view().email_field.borrow(), "dupe@mergington.edu");
    // Only the successful signup refreshed
    assert_eq!(directory.fetches(), 1);
}

#[tokio::test]
async fn test_unknown_activity_is_rejected() {
    let (config, _directory) = spawn_directory(school_catalog()).await;
    let service = HttpActivityService::new(&config).unwrap();

    let err = service
        .signup("Does Not Exist", "x@mergington.edu")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string()),
        }
    );
}

#[tokio::test]
async fn test_names_and_emails_are_percent_encoded() {
    let (board, directory) = spawn_board().await;

    let outcome = board.signup("Art & Design", "a+b@mergington.edu").await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert_eq!(directory.participants("Art & Design"), vec!["a+b@mergington.edu"]);
    assert!(board.view().list_html.borrow().contains("0 spots left"));
}

#[tokio::test]
async fn test_unregister_removes_participant() {
    let (board, directory) = spawn_board().await;
    board.refresh().await;

    let outcome = board
        .unregister(Some("Chess Club"), Some("michael@mergington.edu"))
        .await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert_eq!(directory.participants("Chess Club"), vec!["daniel@mergington.edu"]);
    assert!(!board.view().list_html.borrow().contains("michael@mergington.edu"));
    assert!(board.view().list_html.borrow().contains("11 spots left"));
}

#[tokio::test]
async fn test_unregister_missing_participant_is_rejected() {
    let (board, _directory) = spawn_board().await;

    let outcome = board
        .unregister(Some("Art & Design"), Some("not-signed-up@mergington.edu"))
        .await;

    assert_eq!(outcome, ActionOutcome::Rejected);
    assert_eq!(
        board.view().last_feedback(),
        Some(FeedbackMessage::error(
            "Student is not signed up for this activity"
        ))
    );
}

#[tokio::test]
async fn test_unregister_without_data_sends_nothing() {
    let (board, directory) = spawn_board().await;

    assert_eq!(board.unregister(None, Some("x@y.com")).await, ActionOutcome::Ignored);
    assert_eq!(board.unregister(Some("Chess Club"), None).await, ActionOutcome::Ignored);

    assert_eq!(directory.fetches(), 0);
    assert_eq!(directory.participants("Chess Club").len(), 2);
    assert!(board.view().feedback.borrow().is_empty());
}

#[tokio::test]
async fn test_failed_refresh_keeps_selector() {
    let (board, directory) = spawn_board().await;
    board.refresh().await;
    let labels = board.view().option_labels();

    directory.fail_fetches(true);
    assert_eq!(board.refresh().await, RefreshOutcome::Failed);

    assert_eq!(*board.view().list_html.borrow(), LOAD_FAILURE_HTML);
    assert_eq!(board.view().option_labels(), labels);
}

#[tokio::test]
async fn test_rejection_without_json_detail_has_no_detail() {
    let (config, _directory) = spawn_directory(school_catalog()).await;

    // No email query parameter: the server's extractor answers with plain text
    let response = reqwest::Client::new()
        .post(format!("{}/activities/Chess%20Club/signup", config.base_url))
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.text().await.unwrap();

    let err = ServiceError::rejected(status, &body);
    assert!(err.is_rejection());
    assert_eq!(err.detail(), None);
}

//! # Activity Board
//!
//! Browse extracurricular activities and sign participants up or out against
//! an Activity Directory Service.
//!
//! ## Modules
//!
//! - [`catalog`]: Activities and the ordered catalog served by the directory
//! - [`render`]: Escaped card markup and terminal text
//! - [`feedback`]: The transient success/error message and its auto-hide
//! - [`service`]: Directory service trait, endpoints and errors
//! - [`board`]: The controller tying service and view together
//! - [`config`]: TOML configuration with environment overrides
//!
//! The browser front end (`activity-board-ui`) drives [`ActivityBoard`] with a
//! Leptos view; the `activity-board` binary drives it with [`TerminalView`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_board::{ActivityBoard, Config, HttpActivityService, TerminalView};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let service = HttpActivityService::new(&config.service)?;
//!     let board = ActivityBoard::new(service, TerminalView::new(std::io::stdout()));
//!
//!     board.refresh().await;
//!     board.signup("Chess Club", "student@mergington.edu").await;
//!
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod feedback;
pub mod render;
pub mod service;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

// Re-export top-level types for convenience
pub use board::{ActionOutcome, ActivityBoard, BoardView, RefreshOutcome};
pub use catalog::{Activity, ActivityCatalog};
pub use config::{Config, ConfigError, LoggingConfig, ServiceConfig};
pub use feedback::{FeedbackKind, FeedbackMessage, FeedbackPhase, FeedbackState, FeedbackTicket};
pub use service::{ActionReply, ActivityService, ServiceError, ServiceResult};

#[cfg(not(target_arch = "wasm32"))]
pub use service::HttpActivityService;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalView;

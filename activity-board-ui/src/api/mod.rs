//! Activity Directory Service access from the browser

pub mod client;

pub use client::{get_api_base, GlooActivityService};

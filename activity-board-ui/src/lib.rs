//! Activity Board
//!
//! Browser front end for the Activity Directory Service, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Activity cards with schedule, availability and participants
//! - Signup form with an activity selector
//! - One-click unregister per participant
//! - Auto-hiding success and error messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. Board behavior
//! lives in the `activity-board` crate; this crate supplies the browser
//! HTTP client and the reactive view it drives.

pub mod api;
pub mod app;
pub mod components;
pub mod state;

//! UI Components
//!
//! Leptos components for the board page.

pub mod activity_list;
pub mod signup_form;
pub mod toast;

pub use activity_list::ActivityList;
pub use signup_form::SignupForm;
pub use toast::Toast;

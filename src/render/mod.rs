//! Board Rendering
//!
//! Turns an [`ActivityCatalog`](crate::catalog::ActivityCatalog) into what the
//! front ends display:
//!
//! - [`html`]: activity card markup for the browser list container, rendered
//!   from an askama template that escapes every interpolated value
//! - [`text`]: plain text for the terminal front end

pub mod html;
pub mod text;

pub use html::{
    render_activity_card, render_activity_list, selector_options, SelectOption,
    DATA_ACTIVITY_NAME, DATA_PARTICIPANT_EMAIL, LOAD_FAILURE_HTML, LOAD_FAILURE_TEXT,
    NO_PARTICIPANTS_TEXT, UNREGISTER_BUTTON_SELECTOR,
};
pub use text::{render_activity_text, render_catalog_text};

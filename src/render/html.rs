//! Activity card markup
//!
//! The browser list container is rebuilt wholesale from this markup on every
//! successful refresh. Unregister buttons carry the activity name and the
//! participant email as data attributes; the list container reads them back
//! through click delegation.

use askama::Template;
use tracing::error;

use crate::catalog::{Activity, ActivityCatalog};

/// Shown in place of the list when the catalog cannot be loaded
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// [`LOAD_FAILURE_TEXT`] as list markup
pub const LOAD_FAILURE_HTML: &str = "<p>Failed to load activities. Please try again later.</p>";

/// Shown instead of a participant list for an empty activity
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet. Be the first to sign up!";

/// CSS selector for unregister buttons, resolved with `closest` from a click target
pub const UNREGISTER_BUTTON_SELECTOR: &str = ".delete-participant-button";

/// Attribute holding the activity name on an unregister button
pub const DATA_ACTIVITY_NAME: &str = "data-activity-name";

/// Attribute holding the participant email on an unregister button
pub const DATA_PARTICIPANT_EMAIL: &str = "data-participant-email";

/// An entry of the activity selector (the placeholder is not one of these)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options for the activity selector, in catalog order.
///
/// Values are raw names: option values and labels are set as DOM properties
/// and text nodes, never as markup.
pub fn selector_options(catalog: &ActivityCatalog) -> Vec<SelectOption> {
    catalog
        .names()
        .map(|name| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        })
        .collect()
}

/// One activity card. Every interpolated value goes through askama's HTML
/// escaper, attribute values included.
#[derive(Template)]
#[template(path = "activity_card.html")]
struct ActivityCardTemplate<'a> {
    name: &'a str,
    activity: &'a Activity,
    spots_left: i64,
    no_participants: &'static str,
}

impl<'a> ActivityCardTemplate<'a> {
    fn new(name: &'a str, activity: &'a Activity) -> Self {
        Self {
            name,
            activity,
            spots_left: activity.spots_left(),
            no_participants: NO_PARTICIPANTS_TEXT,
        }
    }
}

/// Markup for the whole list container.
///
/// A card that fails to render is left out and logged.
pub fn render_activity_list(catalog: &ActivityCatalog) -> String {
    let mut html = String::new();
    for (name, activity) in catalog.iter() {
        if let Err(e) = ActivityCardTemplate::new(name, activity).render_into(&mut html) {
            error!(activity = name, error = %e, "Failed to render activity card");
        }
    }
    html
}

/// Markup for one activity card
pub fn render_activity_card(name: &str, activity: &Activity) -> askama::Result<String> {
    ActivityCardTemplate::new(name, activity).render()
}

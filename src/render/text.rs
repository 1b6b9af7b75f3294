//! Plain text rendering for the terminal front end

use crate::catalog::{Activity, ActivityCatalog};

use super::html::NO_PARTICIPANTS_TEXT;

/// Render one activity as an indented text block
pub fn render_activity_text(name: &str, activity: &Activity) -> String {
    let mut lines = vec![
        name.to_string(),
        format!("  {}", activity.description),
        format!("  Schedule: {}", activity.schedule),
        format!("  Availability: {} spots left", activity.spots_left()),
    ];

    if activity.has_participants() {
        lines.push("  Current Participants:".to_string());
        lines.extend(activity.participants.iter().map(|email| format!("    - {}", email)));
    } else {
        lines.push(format!("  {}", NO_PARTICIPANTS_TEXT));
    }

    lines.join("\n")
}

/// Render the whole catalog, blocks separated by a blank line
pub fn render_catalog_text(catalog: &ActivityCatalog) -> String {
    if catalog.is_empty() {
        return "No activities available.".to_string();
    }

    catalog
        .iter()
        .map(|(name, activity)| render_activity_text(name, activity))
        .collect::<Vec<_>>()
        .join("\n\n")
}

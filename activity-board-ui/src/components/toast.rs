//! Message Component
//!
//! The single feedback message below the signup form.

use leptos::*;

use crate::state::Board;

#[component]
pub fn Toast() -> impl IntoView {
    let board = use_context::<Board>().expect("Board not found");
    let feedback = board.view().feedback;

    view! {
        <div id="message" class=move || feedback.with(|feedback| feedback.css_class())>
            {move || {
                feedback.with(|feedback| {
                    feedback.current().map(|message| message.text.clone()).unwrap_or_default()
                })
            }}
        </div>
    }
}

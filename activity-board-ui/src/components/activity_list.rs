//! Activity List Component
//!
//! Container for the rendered activity cards. Unregister clicks are
//! delegated from the container to the buttons inside the card markup.

use activity_board::render::{DATA_ACTIVITY_NAME, DATA_PARTICIPANT_EMAIL, UNREGISTER_BUTTON_SELECTOR};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::Board;

#[component]
pub fn ActivityList() -> impl IntoView {
    let board = use_context::<Board>().expect("Board not found");
    let list_html = board.view().list_html;

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(button) = unregister_button(&ev) else {
            return;
        };

        let activity = button.get_attribute(DATA_ACTIVITY_NAME);
        let email = button.get_attribute(DATA_PARTICIPANT_EMAIL);

        let board = board.clone();
        spawn_local(async move {
            board.unregister(activity.as_deref(), email.as_deref()).await;
        });
    };

    view! {
        <div id="activities-list" on:click=on_click inner_html=move || list_html.get() />
    }
}

/// The unregister button the click landed on, if any
fn unregister_button(ev: &web_sys::MouseEvent) -> Option<web_sys::Element> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target.closest(UNREGISTER_BUTTON_SELECTOR).ok().flatten()
}

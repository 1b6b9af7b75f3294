//! Signup Form Component
//!
//! Email input and activity selector. The placeholder option is fixed; the
//! rest come from the last rendered catalog.

use leptos::*;

use crate::state::Board;

/// Label of the selector's first, non-selectable option
const PLACEHOLDER: &str = "-- Select an activity --";

#[component]
pub fn SignupForm() -> impl IntoView {
    let board = use_context::<Board>().expect("Board not found");
    let state = *board.view();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = state.email.get_untracked();
        let activity = state.activity.get_untracked();

        let board = board.clone();
        spawn_local(async move {
            board.signup(&activity, &email).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                    prop:value=move || state.email.get()
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| state.activity.set(event_target_value(&ev))
                    prop:value=move || state.activity.get()
                >
                    <option value="">{PLACEHOLDER}</option>
                    <For
                        each=move || state.options.get()
                        key=|option| option.value.clone()
                        children=|option| view! {
                            <option value=option.value>{option.label}</option>
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}

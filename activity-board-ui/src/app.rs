//! App Root Component
//!
//! Main application component: provides the board and loads the activities.

use leptos::*;

use crate::components::{ActivityList, SignupForm, Toast};
use crate::state::provide_board;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let board = provide_board();

    // Initial load
    spawn_local(async move {
        board.refresh().await;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <Toast />
            </section>
        </main>
    }
}

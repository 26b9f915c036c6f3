//! Supertask App
//!
//! The single tracker card: total, calorie entry, todo list, submit.

use leptos::prelude::*;
use supertask_core::{load_persisted, AppState, StorageKeys};

use crate::browser::{cancel_revert, BrowserStore};
use crate::components::{CalorieForm, CalorieTotalBox, SubmitButton, TodoList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(signal(AppState::new()));
    provide_context(ctx);

    // Load saved data once on mount
    Effect::new(move |_| {
        let persisted = load_persisted(&BrowserStore, &StorageKeys::default());
        log::info!(
            "[APP] Loaded stored state: calories={:?}, {} todos",
            persisted.calories,
            persisted.todos.as_ref().map_or(0, Vec::len)
        );
        ctx.dispatch(|state| state.finish_load(persisted));
    });

    on_cleanup(cancel_revert);

    view! {
        <div class="app-layout">
            <div class="tracker-card">
                <div class="tracker-title">"Supertask"</div>
                <CalorieTotalBox />
                <CalorieForm />
                <TodoList />
                <SubmitButton />
            </div>
        </div>
    }
}

//! Application Context
//!
//! The tracker state plus the one way to change it, shared via Leptos context.

use leptos::prelude::*;
use supertask_core::{persist_all, AppState, StorageKeys, Transition};

use crate::browser::BrowserStore;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current tracker state - read
    pub state: ReadSignal<AppState>,
    /// Current tracker state - write
    set_state: WriteSignal<AppState>,
}

impl AppContext {
    pub fn new(state: (ReadSignal<AppState>, WriteSignal<AppState>)) -> Self {
        Self {
            state: state.0,
            set_state: state.1,
        }
    }

    /// Apply a reducer, then run the storage writes it asked for
    pub fn dispatch(&self, reducer: impl FnOnce(AppState) -> Transition) {
        let mut commands = Vec::new();
        self.set_state.update(|state| {
            let transition = reducer(std::mem::take(state));
            *state = transition.state;
            commands = transition.commands;
        });
        persist_all(&BrowserStore, &StorageKeys::default(), &commands);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

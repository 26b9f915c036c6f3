//! Submit Button Component
//!
//! Copies the day's snapshot to the clipboard and shows the outcome for a
//! couple of seconds.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use supertask_core::config::STATUS_REVERT_MS;

use crate::browser::{copy_text, schedule_revert};
use crate::context::use_app_context;

#[component]
pub fn SubmitButton() -> impl IntoView {
    let ctx = use_app_context();

    let submit_day = move |_| {
        let snapshot = ctx.state.with_untracked(|s| s.submit_day(Local::now().date_naive()));
        spawn_local(async move {
            let copied = match snapshot.to_json() {
                Ok(json) => match copy_text(&json).await {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("[CLIPBOARD] Error copying to clipboard: {}", e);
                        false
                    }
                },
                Err(e) => {
                    log::error!("[CLIPBOARD] Error serializing snapshot: {}", e);
                    false
                }
            };

            let now = js_sys::Date::now() as u64;
            ctx.dispatch(|s| s.record_submit(copied, now));

            let deadline = now + STATUS_REVERT_MS;
            schedule_revert(STATUS_REVERT_MS, move || {
                ctx.dispatch(|s| s.expire_status(deadline));
            });
        });
    };

    view! {
        <div class="submit-button" on:click=submit_day>
            {move || ctx.state.with(|s| s.status.message())}
        </div>
    }
}

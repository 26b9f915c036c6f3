//! New Todo Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Text input for a new todo. Blank text is ignored.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let add_todo = move || ctx.dispatch(|s| s.add_todo());

    view! {
        <div class="input-row" style="margin-top: 20px;">
            <input
                type="text"
                placeholder="input for new to do item"
                prop:value=move || ctx.state.with(|s| s.new_todo.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.dispatch(|s| s.set_new_todo(text));
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        add_todo();
                    }
                }
            />
            <button on:click=move |_| add_todo()>"Add"</button>
        </div>
    }
}

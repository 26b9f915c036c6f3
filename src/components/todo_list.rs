//! Todo List Component
//!
//! Rows are addressed by position; clicking a row toggles it.

use leptos::prelude::*;
use supertask_core::TodoItem;

use crate::components::NewTodoForm;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    // typing in the inputs must not rebuild the rows
    let todos = Memo::new(move |_| ctx.state.with(|s| s.todos.clone()));

    view! {
        <div class="box">
            <div class="todo-heading">"TO DO"</div>
            {move || todos.with(|todos| {
                todos
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <TodoRow index=index item=item.clone() /> })
                    .collect_view()
            })}
            <NewTodoForm />
        </div>
    }
}

/// A single todo row
#[component]
fn TodoRow(index: usize, item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();
    let completed = item.completed;

    view! {
        <div
            class=if completed { "todo-row completed" } else { "todo-row" }
            on:click=move |_| ctx.dispatch(|s| s.toggle_todo(index))
        >
            {item.text}
        </div>
    }
}

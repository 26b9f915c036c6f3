//! Calorie Entry Component
//!
//! Number input plus Add button. Enter in the input also adds.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CalorieForm() -> impl IntoView {
    let ctx = use_app_context();

    let add_calories = move || ctx.dispatch(|s| s.add_calories());

    view! {
        <div class="box">
            <div class="box-label">"calorie input with button that adds to the total calorie box"</div>
            <div class="input-row">
                <input
                    type="number"
                    placeholder="0"
                    prop:value=move || ctx.state.with(|s| s.calorie_input.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.dispatch(|s| s.set_calorie_input(text));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add_calories();
                        }
                    }
                />
                <button on:click=move |_| add_calories()>"Add"</button>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::context::use_app_context;

/// Big running total for the day. Shows `NaN` when the stored value was bad.
#[component]
pub fn CalorieTotalBox() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="box calorie-total">
            <div class="box-label">"total calories for the day (number)"</div>
            <div class=move || {
                if ctx.state.with(|s| s.total_calories.is_nan()) {
                    "calorie-total-value nan"
                } else {
                    "calorie-total-value"
                }
            }>
                {move || ctx.state.with(|s| s.total_calories.to_string())}
            </div>
        </div>
    }
}

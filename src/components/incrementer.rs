//! Incrementer Component
//!
//! Controlled counter button; the counter itself lives in the caller.

use leptos::prelude::*;

use crate::components::ActionButton;

#[component]
pub fn Incrementer(value: ReadSignal<i32>, set_value: WriteSignal<i32>) -> impl IntoView {
    view! {
        <ActionButton on_press=move |_: ()| set_value.set(value.get() + 1)>
            {move || format!("Add - {}", value.get())}
        </ActionButton>
    }
}

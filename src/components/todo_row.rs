//! Todo Row Component
//!
//! One rendered todo with its remove control.

use leptos::prelude::*;

use crate::components::ActionButton;
use crate::models::Todo;

#[component]
pub fn TodoRow(todo: Todo, #[prop(into)] on_remove: Callback<u32>) -> impl IntoView {
    let id = todo.id;

    view! {
        <div class="todo-row">
            <span class="todo-text">{todo.text.clone()}</span>
            <ActionButton on_press=move |_: ()| on_remove.run(id)>
                "Remove"
            </ActionButton>
        </div>
    }
}

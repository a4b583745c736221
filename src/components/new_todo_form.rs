//! New Todo Form Component
//!
//! Text input plus add button. Submits the draft as-is (empty text
//! included) and clears the input afterwards.

use leptos::prelude::*;

use crate::components::ActionButton;

#[component]
pub fn NewTodoForm(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let add = move |_: ()| {
        on_add.run(draft.get());
        set_draft.set(String::new());
    };

    view! {
        <div class="new-todo-row">
            <input
                type="text"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <ActionButton on_press=add>"Add"</ActionButton>
        </div>
    }
}

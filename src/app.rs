//! Playground Frontend App
//!
//! Root composition: owns the payload, the todo sequence, and the
//! counter, and wires UI events to state transitions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Heading, Incrementer, ItemList, NewTodoForm, Panel, TodoRow};
use crate::models::{Payload, Todo};
use crate::store::{reduce, TodoAction};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (payload, set_payload) = signal::<Option<Payload>>(None);
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (count, set_count) = signal(0i32);

    let dispatch = move |action: TodoAction| {
        set_todos.update(|todos| *todos = reduce(todos, action));
    };

    // Load payload on mount; failures leave it unset
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_payload().await {
                Ok(loaded) => set_payload.set(Some(loaded)),
                Err(e) => web_sys::console::log_1(&format!("[APP] payload fetch: {}", e).into()),
            }
        });
    });

    let on_list_select = move |item: String| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&item);
        }
    };

    view! {
        <div>
            <Heading title="Introduction" />
            <Panel>"Hello there"</Panel>
            <ItemList
                items=vec!["one".to_string(), "two".to_string(), "three".to_string()]
                on_select=Callback::new(on_list_select)
            />
            <Panel>
                {move || serde_json::to_string(&payload.get()).unwrap_or_default()}
            </Panel>

            <Incrementer value=count set_value=set_count />

            <Heading title="TODO section" />
            // Key rows by position: stored ids can collide after a
            // remove-then-add, and keyed reconciliation needs unique keys.
            <For
                each=move || todos.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, todo)| {
                    view! {
                        <TodoRow
                            todo=todo
                            on_remove=move |id: u32| dispatch(TodoAction::Remove(id))
                        />
                    }
                }
            />
            <NewTodoForm on_add=move |text: String| dispatch(TodoAction::Add(text)) />
        </div>
    }
}

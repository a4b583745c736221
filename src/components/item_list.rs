//! Item List Component
//!
//! Ordered display of string items with optional click selection.

use leptos::prelude::*;

/// List of strings; activating an entry invokes `on_select` with
/// that entry's value.
#[component]
pub fn ItemList(
    items: Vec<String>,
    #[prop(optional, into)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <ul>
            {items
                .into_iter()
                .map(|item| {
                    let label = item.clone();
                    view! {
                        <li on:click=move |_| {
                            if let Some(cb) = on_select {
                                cb.run(label.clone());
                            }
                        }>
                            {item}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
